//! State of one budget-tracking session
//!
//! Created empty when a session starts, mutated by each user action in
//! turn, dropped when the session ends. Nothing is shared between sessions.

use crate::util::{baseline::Baseline, entry::CostLine, ledger::Ledger, summary::Summary};

#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: Ledger,
    baseline: Baseline,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active baseline
    pub fn set_baseline(&mut self, baseline: Baseline) {
        self.baseline = baseline;
    }

    pub fn append_line(&mut self, line: CostLine) {
        self.ledger.append(line);
    }

    /// Remove the line at `index` (0-based), no-op when out of range
    pub fn remove_line(&mut self, index: usize) -> Option<CostLine> {
        self.ledger.remove(index)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn baseline(&self) -> Baseline {
        self.baseline
    }

    /// Fresh aggregates over the current ledger
    pub fn summary(&self) -> Summary {
        Summary::compute(&self.ledger, self.baseline)
    }
}
