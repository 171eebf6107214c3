// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::Result;
use std::io;

use progression_predictor::{logging, run_session, ChartRenderer, InputCollector, Reporter, Settings};

fn main() -> Result<()> {
    logging::init();
    let settings = Settings::default();

    println!("University Progression Outcome Predictor");
    println!("Enter 'q' at any time to quit and view results\n");

    let stdin = io::stdin();
    let mut collector = InputCollector::new(stdin.lock(), io::stdout());
    let session = run_session(&mut collector);

    let mut chart = chart_renderer(&settings);
    let mut reporter = Reporter::new(io::stdout(), chart.as_mut(), settings.data_file.clone());
    reporter.report(&session)?;

    Ok(())
}

#[cfg(feature = "tui")]
fn chart_renderer(settings: &Settings) -> Box<dyn ChartRenderer> {
    Box::new(ui::TerminalChart::new(settings))
}

#[cfg(not(feature = "tui"))]
fn chart_renderer(settings: &Settings) -> Box<dyn ChartRenderer> {
    Box::new(progression_predictor::TextChart::new(io::stdout(), settings.text_chart_width))
}
