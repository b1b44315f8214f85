use crate::util::{baseline::Baseline, ledger::Ledger};

/// Utilization at which the budget needs attention
pub const WARNING_THRESHOLD: f64 = 80.0;
/// Utilization at which the budget is overspent
pub const EXCEEDED_THRESHOLD: f64 = 100.0;

/// Health of the budget, lower bounds inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Healthy,
    Warning,
    Exceeded,
}

impl Status {
    pub fn from_utilization(utilization: f64) -> Self {
        if utilization >= EXCEEDED_THRESHOLD {
            Status::Exceeded
        } else if utilization >= WARNING_THRESHOLD {
            Status::Warning
        } else {
            Status::Healthy
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Status::Exceeded => "Budget exceeded. Immediate action required.",
            Status::Warning => "Budget utilization above 80%. Monitor closely.",
            Status::Healthy => "Budget utilization within safe range.",
        }
    }
}

/// Aggregates of a ledger against a baseline
///
/// A snapshot: build a new one after every change to the ledger,
/// nothing here is updated incrementally.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    baseline: Baseline,
    total: f64,
    count: usize,
}

impl Summary {
    pub fn compute(ledger: &Ledger, baseline: Baseline) -> Self {
        Self {
            baseline,
            total: ledger.total(),
            count: ledger.len(),
        }
    }

    pub fn baseline(&self) -> Baseline {
        self.baseline
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of lines that were aggregated
    pub fn count(&self) -> usize {
        self.count
    }

    /// Total internal cost as a percentage of the baseline
    ///
    /// Unclamped, and `0` when the baseline is zero.
    pub fn utilization(&self) -> f64 {
        let base = self.baseline.amount();
        if base != 0.0 {
            self.total / base * 100.0
        } else {
            0.0
        }
    }

    pub fn status(&self) -> Status {
        Status::from_utilization(self.utilization())
    }

    /// Fraction of the progress bar to fill, at most `1.0`
    pub fn progress(&self) -> f64 {
        (self.utilization() / 100.0).min(1.0)
    }
}
