//! Human-readable execution log for a solution.
//!
//! Wording matches the visualizer's log panel: an intro, a "checking"
//! and a "took" line per step, and a closing total.

use std::fmt;

use fracsack_solver::{AllocationStep, Solution, Take};

/// Style class of a log line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LogKind {
    /// Start and finish banners.
    Info,
    /// Neutral narration.
    Plain,
    /// An item was taken whole.
    Full,
    /// An item was split.
    Partial,
}

impl LogKind {
    /// CSS class name used by the log panel.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Plain => "default",
            Self::Full => "full",
            Self::Partial => "partial",
        }
    }
}

/// One line of the execution log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Style class.
    pub kind: LogKind,
    /// Rendered text.
    pub message: String,
}

impl LogEntry {
    fn new(kind: LogKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Renders log lines for solutions and their steps.
#[derive(Clone, Copy, Debug, Default)]
pub struct Narrator;

impl Narrator {
    /// Banner lines shown before the first step.
    pub fn intro(&self, capacity: f64, item_count: usize) -> [LogEntry; 2] {
        [
            LogEntry::new(
                LogKind::Info,
                "Starting Fractional Knapsack Greedy Algorithm...".to_string(),
            ),
            LogEntry::new(
                LogKind::Plain,
                format!("Capacity: {capacity}, Total Items: {item_count}"),
            ),
        ]
    }

    /// Line shown as the presenter picks up a step's item.
    pub fn checking(&self, step: &AllocationStep) -> LogEntry {
        let head = format!(
            "Checking Item {} (Ratio: {:.2})...",
            step.id(),
            step.item.ratio
        );
        let message = match step.take() {
            Take::Full => format!("{head} Fits completely."),
            Take::Partial => format!("{head} Fits only {:.1}%.", step.fraction * 100.0),
        };
        LogEntry::new(LogKind::Plain, message)
    }

    /// Line shown once the step's item has landed.
    pub fn took(&self, step: &AllocationStep) -> LogEntry {
        match step.take() {
            Take::Full => LogEntry::new(
                LogKind::Full,
                format!(
                    "-> Took Item {} (Full). +{} Weight, +{} Value.",
                    step.id(),
                    step.weight_taken,
                    step.value_gained
                ),
            ),
            Take::Partial => LogEntry::new(
                LogKind::Partial,
                format!(
                    "-> Took Item {} (Partial: {:.1}%). +{:.2} Weight, +{:.2} Value.",
                    step.id(),
                    step.fraction * 100.0,
                    step.weight_taken,
                    step.value_gained
                ),
            ),
        }
    }

    /// Closing banner.
    pub fn outro(&self, total_value: f64) -> LogEntry {
        LogEntry::new(
            LogKind::Info,
            format!("Algorithm Finished! Total Value: {total_value:.2}"),
        )
    }

    /// The complete log for `solution`, in display order.
    pub fn transcript(&self, solution: &Solution) -> Vec<LogEntry> {
        let mut log = Vec::with_capacity(solution.steps().len() * 2 + 3);
        log.extend(self.intro(solution.capacity(), solution.item_ids().len()));
        for step in solution.steps() {
            log.push(self.checking(step));
            log.push(self.took(step));
        }
        log.push(self.outro(solution.total_value()));
        log
    }
}
