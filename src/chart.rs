// 📊 Histogram - chart collaborator interface plus a plain-text renderer
// The terminal window lives in the binary's `ui` module behind the `tui` feature

use crate::outcome::OutcomeCounts;
use anyhow::{Context, Result};
use std::io::Write;

/// Title shown above the bars
pub const CHART_TITLE: &str = "Histogram Results";

/// `"<n> outcomes in total."`
pub fn total_label(counts: &OutcomeCounts) -> String {
    format!("{} outcomes in total.", counts.total())
}

/// Anything that can draw the per-category counts.
///
/// Renderers may block (the terminal chart waits for a key press); the
/// session only continues once `render` returns.
pub trait ChartRenderer {
    fn render(&mut self, counts: &OutcomeCounts) -> Result<()>;
}

// ============================================================================
// TEXT RENDERER
// ============================================================================

/// Horizontal ASCII bars written to a console stream
pub struct TextChart<W: Write> {
    output: W,
    width: u64,
}

impl<W: Write> TextChart<W> {
    pub fn new(output: W, width: u64) -> Self {
        TextChart { output, width }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<W: Write> ChartRenderer for TextChart<W> {
    fn render(&mut self, counts: &OutcomeCounts) -> Result<()> {
        let heights = counts.scaled_heights(self.width);

        writeln!(self.output, "\n{}", CHART_TITLE).context("Failed to write chart")?;
        for ((outcome, count), height) in counts.iter().zip(heights) {
            let bar = "#".repeat(height as usize);
            let count_text = if count > 0 { count.to_string() } else { String::new() };
            writeln!(
                self.output,
                "{:<10} | {} {}",
                outcome.chart_label(),
                bar,
                count_text
            )
            .context("Failed to write chart")?;
        }
        writeln!(self.output, "{}", total_label(counts)).context("Failed to write chart")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;

    #[test]
    fn test_text_chart_scales_to_largest_bar() {
        let counts = OutcomeCounts::from_outcomes(&[
            Outcome::Progress,
            Outcome::Progress,
            Outcome::Exclude,
        ]);

        let mut chart = TextChart::new(Vec::new(), 10);
        chart.render(&counts).unwrap();
        let out = String::from_utf8(chart.into_output()).unwrap();

        assert!(out.contains("Histogram Results"));
        assert!(out.contains("Progress   | ########## 2"));
        assert!(out.contains("Excluded   | ##### 1"));
        assert!(out.contains("Trailer    |  \n"));
        assert!(out.contains("3 outcomes in total."));
    }

    #[test]
    fn test_total_label() {
        let counts = OutcomeCounts::from_outcomes(&[Outcome::ModuleRetriever]);
        assert_eq!(total_label(&counts), "1 outcomes in total.");
    }
}
