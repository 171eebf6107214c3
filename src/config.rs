// ⚙️ Settings - fixed defaults, no flags or config file

use crate::store::DEFAULT_DATA_FILE;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Where the session is saved and read back from
    pub data_file: PathBuf,

    /// Widest bar of the plain-text histogram, in characters
    pub text_chart_width: u64,

    /// Width of each bar in the terminal histogram, in cells
    pub bar_width: u16,

    /// Gap between terminal histogram bars, in cells
    pub bar_gap: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            text_chart_width: 40,
            bar_width: 12,
            bar_gap: 4,
        }
    }
}
