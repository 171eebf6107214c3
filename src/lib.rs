// Progression Predictor - Core Library
// Exposes the collector, classifier and reporting collaborators for the CLI and tests

pub mod credits;   // Credit values, records and validation errors
pub mod outcome;   // Priority-chain classifier and per-category counts
pub mod collector; // Prompting and re-prompting over any reader/writer
pub mod session;   // Accumulated entries and the input loop
pub mod chart;     // Histogram interface + text renderer
pub mod store;     // progression_data.txt writer/reader
pub mod report;    // End-of-session reporting order
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use credits::{
    CreditError, CreditKind, CreditRecord,
    parse_credit, ALLOWED_CREDITS, TOTAL_CREDITS,
};
pub use outcome::{classify, Outcome, OutcomeCounts};
pub use collector::{Continuation, Entry, InputCollector, QUIT_TOKEN};
pub use session::{format_entry, run_session, Session};
pub use chart::{total_label, ChartRenderer, TextChart, CHART_TITLE};
pub use store::{load_lines, save_session, StoreError, DEFAULT_DATA_FILE};
pub use report::Reporter;
pub use config::Settings;
