//! Progress and summary rendering
//!
//! Pure functions from an [`OrchestrationState`] snapshot to text, plus a
//! thin writer shell ([`LiveRenderer`]) that repaints the in-progress line
//! in place. The pure functions never touch the terminal, so every view is
//! testable as a string.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::cursor::MoveToColumn;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;

use crate::core::orchestrator::OrchestrationState;
use crate::core::unit::{BuildUnit, UnitOutcome};

/// Status glyphs used across progress and summary output
pub mod glyph {
    /// Success marker (green checkmark territory)
    pub const SUCCESS: &str = "✓";

    /// Failure marker
    pub const FAILURE: &str = "✗";
}

/// Spinner animation frames for the in-progress line
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const RULE_WIDTH: usize = 44;

/// Derived end-of-run totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateReport {
    /// Units that built successfully
    pub succeeded: usize,
    /// Units that failed
    pub failed: usize,
    /// Sum of successful build durations
    pub total_time: Duration,
}

impl AggregateReport {
    /// Compute the aggregate over recorded outcomes
    pub fn from_outcomes(outcomes: &[UnitOutcome]) -> Self {
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        let total_time = outcomes
            .iter()
            .filter(|o| o.success)
            .map(|o| o.duration)
            .sum();
        Self {
            succeeded,
            failed: outcomes.len() - succeeded,
            total_time,
        }
    }
}

/// Format a duration as a short human-readable time
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 60.0 {
        let minutes = (secs / 60.0).floor() as u64;
        let rest = secs - (minutes as f64) * 60.0;
        format!("{minutes}m {rest:02.0}s")
    } else {
        format!("{secs:.1}s")
    }
}

/// One completed-unit line
pub fn outcome_line(outcome: &UnitOutcome) -> String {
    if outcome.success {
        format!(
            "{} {} ({})",
            glyph::SUCCESS,
            outcome.unit.name(),
            format_duration(outcome.duration)
        )
    } else {
        let detail = outcome
            .error
            .as_ref()
            .map_or_else(|| "unknown error".to_string(), ToString::to_string);
        format!("{} {}: {}", glyph::FAILURE, outcome.unit.name(), detail)
    }
}

/// The animated in-progress line for the unit currently building
pub fn active_line(unit: &BuildUnit, frame: usize) -> String {
    let spinner = SPINNER_FRAMES[frame % SPINNER_FRAMES.len()];
    format!("{spinner} building {}", unit.name())
}

/// Full progress view for a running state
pub fn render_progress(state: &OrchestrationState, frame: usize) -> String {
    let mut out = String::new();
    for outcome in state.results() {
        out.push_str(&outcome_line(outcome));
        out.push('\n');
    }
    if !state.is_done() {
        out.push_str(&active_line(&state.queue()[state.cursor()], frame));
        out.push('\n');
    }
    out
}

/// Final aggregate view
///
/// Lists every recorded outcome, then a boxed summary. The box header is
/// the failure variant whenever at least one unit failed, so a glance at
/// the tail of the output tells success from partial failure.
pub fn render_summary(state: &OrchestrationState) -> String {
    let report = AggregateReport::from_outcomes(state.results());
    let rule = "─".repeat(RULE_WIDTH);

    let header = if report.failed > 0 {
        format!("{} Build finished with failures", glyph::FAILURE)
    } else {
        format!("{} Build complete", glyph::SUCCESS)
    };

    let mut out = String::new();
    for outcome in state.results() {
        out.push_str(&outcome_line(outcome));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format!(" {header}\n"));
    out.push_str(&format!(
        " {} succeeded, {} failed\n",
        report.succeeded, report.failed
    ));
    out.push_str(&format!(
        " total time: {}\n",
        format_duration(report.total_time)
    ));
    out.push_str(&format!(" output: {}\n", state.output_dir().display()));
    out.push_str(&rule);
    out.push('\n');
    out
}

/// Writes progress to a terminal, repainting the active line in place
///
/// Completed-unit lines are printed once each; the spinner line for the
/// in-flight unit is cleared and rewritten on every render. Generic over
/// the writer so tests can capture output in a buffer.
pub struct LiveRenderer<W: Write> {
    out: W,
    frame: usize,
    printed: usize,
    active_shown: bool,
}

impl<W: Write> LiveRenderer<W> {
    /// Create a renderer over a writer
    pub fn new(out: W) -> Self {
        Self {
            out,
            frame: 0,
            printed: 0,
            active_shown: false,
        }
    }

    /// Repaint the view for the given state snapshot
    pub fn render(&mut self, state: &OrchestrationState) -> io::Result<()> {
        self.clear_active_line()?;
        while self.printed < state.results().len() {
            writeln!(self.out, "{}", outcome_line(&state.results()[self.printed]))?;
            self.printed += 1;
        }
        if !state.is_done() && state.cursor() < state.queue().len() {
            write!(
                self.out,
                "{}",
                active_line(&state.queue()[state.cursor()], self.frame)
            )?;
            self.active_shown = true;
            self.frame += 1;
        }
        self.out.flush()
    }

    /// Print any remaining outcome lines and the final summary
    pub fn finish(&mut self, state: &OrchestrationState) -> io::Result<()> {
        self.clear_active_line()?;
        // Outcome lines already on screen are not repeated; only the
        // remainder of the full summary view is written.
        let summary = render_summary(state);
        for line in summary.lines().skip(self.printed) {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()
    }

    /// Consume the renderer and return the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn clear_active_line(&mut self) -> io::Result<()> {
        if self.active_shown {
            self.out.queue(MoveToColumn(0))?;
            self.out.queue(Clear(ClearType::CurrentLine))?;
            self.active_shown = false;
        }
        Ok(())
    }
}
