//! Budget health block: baseline, total, utilization and status

use std::fmt;

use crate::cli::color::Palette;
use crate::util::{
    baseline::Baseline,
    currency::round_places,
    summary::{Status, Summary},
};

/// Width of the progress bar, in characters
const BAR_WIDTH: usize = 40;

pub struct Report {
    summary: Summary,
    palette: Palette,
}

impl Report {
    pub fn new(summary: Summary, palette: Palette) -> Self {
        Self { summary, palette }
    }

    /// Label/value pairs of the metrics, depending on the baseline variant
    fn metrics(&self) -> Vec<(&'static str, String)> {
        let sum = &self.summary;
        let cur = sum.baseline().currency();
        let money = |v: f64| format!("{} {}", cur.format(v), cur);
        let mut rows = match sum.baseline() {
            Baseline::Approved { amount, .. } => vec![("Client Budget", money(amount))],
            Baseline::Charged { amount, percent, .. } => vec![
                ("Charged to Client", money(amount)),
                ("Internal Budget %", format!("{} %", percent)),
                ("Internal Budget Amount", money(sum.baseline().amount())),
            ],
        };
        rows.push(("Total Internal Cost", money(sum.total())));
        rows.push((
            "Utilization %",
            format!("{:.2} %", round_places(sum.utilization(), 2)),
        ));
        rows
    }

    fn bar(&self) -> String {
        let filled = (self.summary.progress() * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
    }

    fn color(&self) -> &'static str {
        match self.summary.status() {
            Status::Healthy => self.palette.green,
            Status::Warning => self.palette.yellow,
            Status::Exceeded => self.palette.red,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pal = &self.palette;
        let metrics = self.metrics();
        let width = metrics.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        writeln!(f, "{}Budget Health{}", pal.white, pal.none)?;
        for (label, value) in metrics {
            writeln!(f, "  {:<width$}  {}", label, value, width = width)?;
        }
        let color = self.color();
        writeln!(f, "  {}{}{}", color, self.bar(), pal.none)?;
        writeln!(f, "  {}{}{}", color, self.summary.status().message(), pal.none)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::{
        entry::{fields::*, CostLine},
        ledger::Ledger,
    };

    fn report(total: f64, baseline: Baseline) -> String {
        let mut ledger = Ledger::new();
        ledger.append(CostLine::new(CostType::FR, Vendor(None), Method::Flat, 0.0, total, Currency::USD));
        format!("{}", Report::new(Summary::compute(&ledger, baseline), Palette::PLAIN))
    }

    #[test]
    fn approved_layout() {
        let out = report(1000.0, Baseline::Approved { amount: 4000.0, currency: Currency::USD });
        assert!(out.contains("Client Budget"));
        assert!(out.contains("4000.00 USD"));
        assert!(out.contains("1000.00 USD"));
        assert!(out.contains("25.00 %"));
        assert!(out.contains(&format!("[{}{}]", "#".repeat(10), "-".repeat(30))));
        assert!(out.contains(Status::Healthy.message()));
        assert!(!out.contains("Charged to Client"));
    }

    #[test]
    fn charged_layout() {
        let out = report(
            3600.0,
            Baseline::Charged { amount: 10000.0, currency: Currency::JPY, percent: 40.0 },
        );
        assert!(out.contains("Charged to Client"));
        assert!(out.contains("10000 JPY"));
        assert!(out.contains("40 %"));
        assert!(out.contains("4000 JPY"));
        assert!(out.contains("90.00 %"));
        assert!(out.contains(Status::Warning.message()));
    }

    #[test]
    fn overspent_bar_is_full() {
        let out = report(9000.0, Baseline::Approved { amount: 4000.0, currency: Currency::EUR });
        assert!(out.contains("225.00 %"));
        assert!(out.contains(&format!("[{}]", "#".repeat(BAR_WIDTH))));
        assert!(out.contains(Status::Exceeded.message()));
    }
}
