// 📋 Session - records accumulated during one run, and the loop that fills it

use crate::collector::{Continuation, Entry, InputCollector};
use crate::credits::CreditRecord;
use crate::outcome::{classify, Outcome, OutcomeCounts};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{info, warn};

// ============================================================================
// SESSION
// ============================================================================

/// Ordered (record, outcome) pairs for this run. Owned by the orchestrator,
/// handed to the reporter by reference once the user quits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    entries: Vec<(CreditRecord, Outcome)>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify and append a record, returning its outcome
    pub fn record(&mut self, record: CreditRecord) -> Outcome {
        let outcome = classify(&record);
        self.entries.push((record, outcome));
        outcome
    }

    pub fn entries(&self) -> &[(CreditRecord, Outcome)] {
        &self.entries
    }

    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.entries.iter().map(|(_, outcome)| outcome)
    }

    pub fn counts(&self) -> OutcomeCounts {
        OutcomeCounts::from_outcomes(self.outcomes())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One line of the listing / persisted file: `<Outcome> - <pass>, <defer>, <fail>`
pub fn format_entry(record: &CreditRecord, outcome: Outcome) -> String {
    format!("{} - {}", outcome.label(), record)
}

// ============================================================================
// ORCHESTRATOR
// ============================================================================

/// Collect and classify records until the user quits.
///
/// A broken console stream ends the loop like a quit; everything recorded
/// up to that point is kept for reporting.
pub fn run_session<R: BufRead, W: Write>(collector: &mut InputCollector<R, W>) -> Session {
    let mut session = Session::new();

    if let Err(err) = collect_into(collector, &mut session) {
        let reason = format!("{:#}", err);
        warn!(error = %reason, entries = session.len(), "console I/O failed, ending session");
    }

    info!(entries = session.len(), "session finished");
    session
}

fn collect_into<R: BufRead, W: Write>(
    collector: &mut InputCollector<R, W>,
    session: &mut Session,
) -> Result<()> {
    loop {
        let record = match collector.read_student_record()? {
            Entry::Value(record) => record,
            Entry::Quit => return Ok(()),
        };

        let outcome = session.record(record);
        info!(%record, %outcome, "recorded student");
        collector.say(outcome.label())?;

        if collector.ask_continue()? == Continuation::Quit {
            return Ok(());
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor, Read};

    /// Reader whose every read fails, like a detached terminal
    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "terminal went away"))
        }
    }

    fn run(input: &str) -> (Session, String) {
        run_bytes(input.as_bytes())
    }

    fn run_bytes(input: &[u8]) -> (Session, String) {
        let mut collector = InputCollector::new(Cursor::new(input.to_vec()), Vec::new());
        let session = run_session(&mut collector);
        let out = String::from_utf8(collector.into_output()).unwrap();
        (session, out)
    }

    #[test]
    fn test_quit_at_first_prompt_gives_empty_session() {
        let (session, _) = run("q\n");
        assert!(session.is_empty());
        assert_eq!(session.counts().total(), 0);
    }

    #[test]
    fn test_four_scenarios() {
        let input = "120\n0\n0\ny\n100\n0\n20\ny\n0\n20\n100\ny\n40\n40\n40\nq\n";
        let (session, out) = run(input);

        let outcomes: Vec<Outcome> = session.outcomes().copied().collect();
        assert_eq!(
            outcomes,
            vec![
                Outcome::Progress,
                Outcome::ProgressWithTrailer,
                Outcome::Exclude,
                Outcome::ModuleRetriever,
            ]
        );
        assert!(out.contains("Progress (module trailer)"));
        assert!(out.contains("Module retriever"));

        let counts = session.counts();
        assert_eq!(counts.total(), 4);
        assert_eq!(counts.max(), 1);
    }

    #[test]
    fn test_bad_entries_never_reach_session() {
        let input = "abc\n200\n60\n60\n20\n60\n40\n20\nq\n";
        let (session, out) = run(input);

        assert_eq!(session.len(), 1);
        let (record, outcome) = session.entries()[0];
        assert_eq!(record, CreditRecord::new(60, 40, 20).unwrap());
        assert_eq!(outcome, Outcome::ModuleRetriever);
        assert!(out.contains("Integer required"));
        assert!(out.contains("Out of range."));
        assert!(out.contains("Total incorrect."));
    }

    #[test]
    fn test_quit_mid_record_keeps_earlier_entries() {
        let (session, _) = run("120\n0\n0\ny\n100\nq\n");
        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_non_utf8_entry_does_not_end_session() {
        let (session, out) = run_bytes(b"120\n0\n0\ny\n\xff\n40\n40\n40\nq\n");

        let outcomes: Vec<Outcome> = session.outcomes().copied().collect();
        assert_eq!(outcomes, vec![Outcome::Progress, Outcome::ModuleRetriever]);
        assert!(out.contains("Integer required"));
    }

    #[test]
    fn test_input_failure_keeps_recorded_entries() {
        let input = BufReader::new(Cursor::new(b"120\n0\n0\ny\n100\n".to_vec()).chain(BrokenInput));
        let mut collector = InputCollector::new(input, Vec::new());

        let session = run_session(&mut collector);

        assert_eq!(session.len(), 1);
        assert_eq!(session.entries()[0].1, Outcome::Progress);
    }

    #[test]
    fn test_format_entry() {
        let record = CreditRecord::new(120, 0, 0).unwrap();
        assert_eq!(format_entry(&record, Outcome::Progress), "Progress - 120, 0, 0");

        let record = CreditRecord::new(100, 0, 20).unwrap();
        assert_eq!(
            format_entry(&record, classify(&record)),
            "Progress (module trailer) - 100, 0, 20"
        );
    }
}
