use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use progression_predictor::{total_label, ChartRenderer, Outcome, OutcomeCounts, Settings, CHART_TITLE};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;

/// Full-screen histogram. Blocks until any key is pressed.
pub struct TerminalChart {
    bar_width: u16,
    bar_gap: u16,
}

impl TerminalChart {
    pub fn new(settings: &Settings) -> Self {
        TerminalChart {
            bar_width: settings.bar_width,
            bar_gap: settings.bar_gap,
        }
    }
}

impl ChartRenderer for TerminalChart {
    fn render(&mut self, counts: &OutcomeCounts) -> Result<()> {
        // Restores the terminal on every exit path, including setup failures
        let _guard = TerminalGuard::enter()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

        run_chart(&mut terminal, counts, self).context("Histogram window failed")
    }
}

/// Raw mode + alternate screen for as long as it lives
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // Constructed before the next fallible step so Drop undoes raw mode
        let guard = TerminalGuard;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, cursor::Show);
    }
}

fn run_chart<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    counts: &OutcomeCounts,
    chart: &TerminalChart,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, counts, chart))?;

        // Any key press dismisses; resizes just redraw
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn bar_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Progress => Color::Green,
        Outcome::ProgressWithTrailer => Color::Blue,
        Outcome::ModuleRetriever => Color::Yellow,
        Outcome::Exclude => Color::Red,
    }
}

fn ui(f: &mut Frame, counts: &OutcomeCounts, chart: &TerminalChart) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Bars
            Constraint::Length(3), // Total + hint
        ])
        .split(f.size());

    render_bars(f, chunks[0], counts, chart);
    render_footer(f, chunks[1], counts);
}

fn render_bars(f: &mut Frame, area: Rect, counts: &OutcomeCounts, chart: &TerminalChart) {
    let bars: Vec<Bar> = counts
        .iter()
        .map(|(outcome, count)| {
            let color = bar_color(outcome);
            // Zero bars show no count
            let text = if count > 0 { count.to_string() } else { String::new() };

            Bar::default()
                .value(count)
                .text_value(text)
                .label(Line::from(outcome.chart_label()))
                .style(Style::default().fg(color))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let bar_chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", CHART_TITLE))
                .title_alignment(Alignment::Center),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(chart.bar_width)
        .bar_gap(chart.bar_gap)
        .max(counts.max().max(1));

    f.render_widget(bar_chart, area);
}

fn render_footer(f: &mut Frame, area: Rect, counts: &OutcomeCounts) {
    let footer = Paragraph::new(Line::from(vec![
        Span::styled(
            total_label(counts),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled("any key", Style::default().fg(Color::Yellow)),
        Span::raw(" Close"),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(footer, area);
}
