// 🎓 Credit Records - validated PASS / DEFER / FAIL triples
// A record only exists once all three values are valid and total 120

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};
use thiserror::Error;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Every credit value a single field may take
pub const ALLOWED_CREDITS: [u32; 7] = [0, 20, 40, 60, 80, 100, 120];

/// Required sum of pass + defer + fail
pub const TOTAL_CREDITS: u32 = 120;

/// Check membership in the allowed credit set
pub fn is_allowed(value: i64) -> bool {
    ALLOWED_CREDITS.iter().any(|&c| i64::from(c) == value)
}

// ============================================================================
// ERRORS
// ============================================================================

/// Recoverable validation failures reported back to the user.
///
/// `Display` output is the exact console message for each case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreditError {
    /// Input did not parse as a base-10 integer
    #[error("Integer required")]
    InvalidFormat(String),

    /// A base-10 integer, but not one of 0, 20, ..., 120. Holds the
    /// integer as entered, since it may not fit any machine integer.
    #[error("Out of range.")]
    OutOfRange(String),

    /// Each field valid on its own, but the three do not add up to 120
    #[error("Total incorrect.")]
    TotalMismatch(u32),
}

// ============================================================================
// CREDIT KIND
// ============================================================================

/// Which of the three credit fields is being entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditKind {
    Pass,
    Defer,
    Fail,
}

impl CreditKind {
    /// Collection order for one record
    pub const ALL: [CreditKind; 3] = [CreditKind::Pass, CreditKind::Defer, CreditKind::Fail];

    /// Label shown in the prompt
    pub fn label(&self) -> &'static str {
        match self {
            CreditKind::Pass => "PASS",
            CreditKind::Defer => "DEFER",
            CreditKind::Fail => "FAIL",
        }
    }
}

/// Parse one raw (already trimmed) credit entry.
pub fn parse_credit(input: &str) -> Result<u32, CreditError> {
    let value: i64 = input.parse().map_err(|err: ParseIntError| match err.kind() {
        // Still an integer, just too large to be a credit value
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            CreditError::OutOfRange(input.to_string())
        }
        _ => CreditError::InvalidFormat(input.to_string()),
    })?;

    if !is_allowed(value) {
        return Err(CreditError::OutOfRange(input.to_string()));
    }

    // is_allowed guarantees 0..=120
    Ok(value as u32)
}

// ============================================================================
// CREDIT RECORD
// ============================================================================

/// One completed student entry. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreditRecord {
    pass_credits: u32,
    defer_credits: u32,
    fail_credits: u32,
}

impl CreditRecord {
    /// Build a record, rejecting values outside the allowed set and
    /// triples that do not total 120.
    pub fn new(pass_credits: u32, defer_credits: u32, fail_credits: u32) -> Result<Self, CreditError> {
        for value in [pass_credits, defer_credits, fail_credits] {
            if !is_allowed(i64::from(value)) {
                return Err(CreditError::OutOfRange(value.to_string()));
            }
        }

        let total = pass_credits + defer_credits + fail_credits;
        if total != TOTAL_CREDITS {
            return Err(CreditError::TotalMismatch(total));
        }

        Ok(CreditRecord {
            pass_credits,
            defer_credits,
            fail_credits,
        })
    }

    pub fn pass_credits(&self) -> u32 {
        self.pass_credits
    }

    pub fn defer_credits(&self) -> u32 {
        self.defer_credits
    }

    pub fn fail_credits(&self) -> u32 {
        self.fail_credits
    }
}

impl fmt::Display for CreditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            self.pass_credits, self.defer_credits, self.fail_credits
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
