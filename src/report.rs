// 🧾 Reporter - end-of-session output in a fixed order:
// chart, console listing, file write, file read-back

use crate::chart::ChartRenderer;
use crate::session::{format_entry, Session};
use crate::store::{load_lines, save_session};
use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

pub struct Reporter<'a, W: Write> {
    output: W,
    chart: &'a mut dyn ChartRenderer,
    data_file: PathBuf,
}

impl<'a, W: Write> Reporter<'a, W> {
    pub fn new(output: W, chart: &'a mut dyn ChartRenderer, data_file: PathBuf) -> Self {
        Reporter {
            output,
            chart,
            data_file,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run every report step. Chart and file failures are printed, never
    /// returned; only console write errors propagate.
    ///
    /// An empty session reports nothing: no chart, no listing, no file.
    pub fn report(&mut self, session: &Session) -> Result<()> {
        if session.is_empty() {
            debug!("empty session, skipping report");
            return Ok(());
        }
        info!(entries = session.len(), "reporting session");

        // 1. Histogram (may block until dismissed)
        if let Err(err) = self.chart.render(&session.counts()) {
            debug!(error = %err, "chart rendering failed");
            writeln!(self.output, "Error displaying histogram: {:#}", err)
                .context("Failed to write report")?;
        }

        // 2. In-memory listing
        writeln!(self.output, "\nPart 2: List Extension").context("Failed to write report")?;
        for (record, outcome) in session.entries() {
            writeln!(self.output, "{}", format_entry(record, *outcome))
                .context("Failed to write report")?;
        }

        // 3. Save
        if let Err(err) = save_session(session, &self.data_file) {
            writeln!(self.output, "Error saving to file: {}", err)
                .context("Failed to write report")?;
        }

        // 4. Read back
        writeln!(self.output, "\nPart 3: Text File Extension").context("Failed to write report")?;
        match load_lines(&self.data_file) {
            Ok(lines) => {
                for line in lines {
                    writeln!(self.output, "{}", line).context("Failed to write report")?;
                }
            }
            Err(err) => {
                debug!(error = %err, "could not read back saved data");
                writeln!(self.output, "{}", err).context("Failed to write report")?;
            }
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::TextChart;
    use crate::collector::InputCollector;
    use crate::credits::CreditRecord;
    use crate::outcome::OutcomeCounts;
    use crate::session::run_session;
    use crate::store::DEFAULT_DATA_FILE;
    use std::io::Cursor;
    use tempfile::TempDir;

    struct FailingChart;

    impl ChartRenderer for FailingChart {
        fn render(&mut self, _counts: &OutcomeCounts) -> Result<()> {
            anyhow::bail!("no display")
        }
    }

    /// Counts render calls
    #[derive(Default)]
    struct RecordingChart {
        calls: usize,
    }

    impl ChartRenderer for RecordingChart {
        fn render(&mut self, _counts: &OutcomeCounts) -> Result<()> {
            self.calls += 1;
            Ok(())
        }
    }

    fn session() -> Session {
        let mut session = Session::new();
        session.record(CreditRecord::new(120, 0, 0).unwrap());
        session.record(CreditRecord::new(20, 0, 100).unwrap());
        session
    }

    #[test]
    fn test_report_order_and_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DATA_FILE);
        let mut chart = TextChart::new(Vec::new(), 10);

        let mut reporter = Reporter::new(Vec::new(), &mut chart, path.clone());
        reporter.report(&session()).unwrap();
        let out = String::from_utf8(reporter.into_output()).unwrap();

        assert_eq!(
            out,
            "\nPart 2: List Extension\n\
             Progress - 120, 0, 0\n\
             Exclude - 20, 0, 100\n\
             \nPart 3: Text File Extension\n\
             Progress - 120, 0, 0\n\
             Exclude - 20, 0, 100\n"
        );

        let chart_out = String::from_utf8(chart.into_output()).unwrap();
        assert!(chart_out.contains("2 outcomes in total."));
        assert!(path.exists());
    }

    #[test]
    fn test_empty_session_skips_every_step() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DATA_FILE);
        let mut chart = RecordingChart::default();

        let mut reporter = Reporter::new(Vec::new(), &mut chart, path.clone());
        reporter.report(&Session::new()).unwrap();
        let out = reporter.into_output();

        assert!(out.is_empty());
        assert_eq!(chart.calls, 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_quit_at_first_prompt_reports_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_DATA_FILE);
        let mut chart = RecordingChart::default();

        let mut collector = InputCollector::new(Cursor::new(b"q\n".to_vec()), Vec::new());
        let session = run_session(&mut collector);

        let mut reporter = Reporter::new(Vec::new(), &mut chart, path.clone());
        reporter.report(&session).unwrap();

        assert!(reporter.into_output().is_empty());
        assert_eq!(chart.calls, 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_non_empty_session_renders_chart_once() {
        let dir = TempDir::new().unwrap();
        let mut chart = RecordingChart::default();

        let mut reporter = Reporter::new(Vec::new(), &mut chart, dir.path().join(DEFAULT_DATA_FILE));
        reporter.report(&session()).unwrap();
        drop(reporter);

        assert_eq!(chart.calls, 1);
    }

    #[test]
    fn test_failures_are_reported_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join(DEFAULT_DATA_FILE);
        let mut chart = FailingChart;

        let mut reporter = Reporter::new(Vec::new(), &mut chart, path);
        reporter.report(&session()).unwrap();
        let out = String::from_utf8(reporter.into_output()).unwrap();

        assert!(out.contains("Error displaying histogram: no display"));
        assert!(out.contains("Error saving to file:"));
        assert!(out.contains("Part 2: List Extension"));
        assert!(out.ends_with("No progression data found in file.\n"));
    }
}
