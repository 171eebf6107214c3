// 🏷️ Outcome Classification - priority chain over a credit record
// First matching rule wins; the chain is total over valid records

use crate::credits::CreditRecord;
use std::fmt;

// ============================================================================
// OUTCOME
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Progress,
    ProgressWithTrailer,
    ModuleRetriever,
    Exclude,
}

impl Outcome {
    /// Chart order
    pub const ALL: [Outcome; 4] = [
        Outcome::Progress,
        Outcome::ProgressWithTrailer,
        Outcome::ModuleRetriever,
        Outcome::Exclude,
    ];

    /// Full display string, also used in the persisted file
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Progress => "Progress",
            Outcome::ProgressWithTrailer => "Progress (module trailer)",
            Outcome::ModuleRetriever => "Module retriever",
            Outcome::Exclude => "Exclude",
        }
    }

    /// Short bar label for the histogram
    pub fn chart_label(&self) -> &'static str {
        match self {
            Outcome::Progress => "Progress",
            Outcome::ProgressWithTrailer => "Trailer",
            Outcome::ModuleRetriever => "Retriever",
            Outcome::Exclude => "Excluded",
        }
    }

    fn index(&self) -> usize {
        match self {
            Outcome::Progress => 0,
            Outcome::ProgressWithTrailer => 1,
            Outcome::ModuleRetriever => 2,
            Outcome::Exclude => 3,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Classify a record. Rules are checked in order:
///
/// 1. 120 pass → `Progress`
/// 2. 100 pass → `ProgressWithTrailer`
/// 3. 80+ fail → `Exclude`
/// 4. anything else → `ModuleRetriever`
pub fn classify(record: &CreditRecord) -> Outcome {
    if record.pass_credits() == 120 {
        Outcome::Progress
    } else if record.pass_credits() == 100 {
        Outcome::ProgressWithTrailer
    } else if record.fail_credits() >= 80 {
        Outcome::Exclude
    } else {
        Outcome::ModuleRetriever
    }
}

// ============================================================================
// COUNTS
// ============================================================================

/// Per-category tally, indexed in `Outcome::ALL` order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeCounts {
    counts: [u64; 4],
}

impl OutcomeCounts {
    pub fn from_outcomes<'a, I>(outcomes: I) -> Self
    where
        I: IntoIterator<Item = &'a Outcome>,
    {
        let mut tally = OutcomeCounts::default();
        for outcome in outcomes {
            tally.add(*outcome);
        }
        tally
    }

    pub fn add(&mut self, outcome: Outcome) {
        self.counts[outcome.index()] += 1;
    }

    pub fn get(&self, outcome: Outcome) -> u64 {
        self.counts[outcome.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// (outcome, count) pairs in chart order
    pub fn iter(&self) -> impl Iterator<Item = (Outcome, u64)> + '_ {
        Outcome::ALL.iter().map(move |o| (*o, self.get(*o)))
    }

    /// Bar heights proportional to each count relative to the largest one.
    /// The largest bar gets `max_height`; an all-zero tally gets all zeros.
    pub fn scaled_heights(&self, max_height: u64) -> [u64; 4] {
        let max = self.max();
        if max == 0 {
            return [0; 4];
        }
        self.counts.map(|count| count * max_height / max)
    }
}

// ============================================================================
// TESTS
// ============================================================================
