use csv::Writer;

use crate::export::{ExportError, Exporter, Result};
use crate::util::{
    baseline::Baseline,
    choices::Choices,
    currency::round_places,
    session::Session,
};

/// One row per cost line, in ledger order
pub struct CostDetails;

/// A single row of aggregates, columns depending on the baseline variant
pub struct BudgetSummary;

impl Exporter for CostDetails {
    fn filename(&self) -> &'static str {
        "project_cost_details.csv"
    }

    fn export(&self, session: &Session) -> Result<String> {
        let mut wtr = Writer::from_writer(vec![]);
        wtr.write_record([
            "Cost Type",
            "Vendor",
            "Method",
            "Volume",
            "Rate",
            "Currency",
            "Internal Cost",
        ])?;
        for line in session.ledger().lines() {
            wtr.write_record([
                line.cost_type().label().to_string(),
                line.vendor().to_string(),
                line.method().label().to_string(),
                line.volume().to_string(),
                line.rate().to_string(),
                line.currency().to_string(),
                line.currency().format(line.internal_cost()),
            ])?;
        }
        finish(wtr)
    }
}

impl Exporter for BudgetSummary {
    fn filename(&self) -> &'static str {
        "project_budget_summary.csv"
    }

    fn export(&self, session: &Session) -> Result<String> {
        let summary = session.summary();
        let cur = summary.baseline().currency();
        let total = cur.format(summary.total());
        let utilization = format!("{:.2}", round_places(summary.utilization(), 2));
        let mut wtr = Writer::from_writer(vec![]);
        match summary.baseline() {
            Baseline::Approved { amount, .. } => {
                wtr.write_record([
                    "Client Budget",
                    "Budget Currency",
                    "Total Internal Cost",
                    "Budget Utilization %",
                ])?;
                wtr.write_record([cur.format(amount), cur.to_string(), total, utilization])?;
            }
            Baseline::Charged { amount, percent, .. } => {
                wtr.write_record([
                    "Charged to Client",
                    "Currency",
                    "Internal Budget %",
                    "Internal Budget Amount",
                    "Total Internal Cost",
                    "Budget Utilization %",
                ])?;
                wtr.write_record([
                    cur.format(amount),
                    cur.to_string(),
                    percent.to_string(),
                    cur.format(summary.baseline().amount()),
                    total,
                    utilization,
                ])?;
            }
        }
        finish(wtr)
    }
}

fn finish(wtr: Writer<Vec<u8>>) -> Result<String> {
    let data = wtr
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    Ok(String::from_utf8(data)?)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::entry::{fields::*, CostLine, NO_VENDOR};

    fn session(baseline: Baseline) -> Session {
        let mut session = Session::new();
        session.set_baseline(baseline);
        session.append_line(CostLine::new(CostType::Translator, Vendor::named("Acme, Inc."), Method::Word, 100.0, 10.0, Currency::USD));
        session.append_line(CostLine::new(CostType::Formatting, Vendor(None), Method::Page, 12.0, 1250.5, Currency::JPY));
        session.append_line(CostLine::new(CostType::LSO, Vendor::named(""), Method::Flat, 0.0, 80.0, Currency::EUR));
        session
    }

    #[test]
    fn empty_details() {
        let out = CostDetails.export(&Session::new()).unwrap();
        assert_eq!(
            out.lines().collect::<Vec<_>>(),
            ["Cost Type,Vendor,Method,Volume,Rate,Currency,Internal Cost"]
        );
    }

    #[test]
    fn details_rows() {
        let s = session(Baseline::default());
        let out = CostDetails.export(&s).unwrap();
        let mut reader = csv::Reader::from_reader(out.as_bytes());
        let rows = reader
            .records()
            .map(|r| r.unwrap().iter().map(String::from).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ["Translator fees", "Acme, Inc.", "Per word", "100", "10", "USD", "1000.00"]);
        assert_eq!(rows[1], ["Formatting fees", NO_VENDOR, "Per page", "12", "1250.5", "JPY", "15006"]);
        assert_eq!(rows[2], ["LSO fees", "", "Flat fee", "0", "80", "EUR", "80.00"]);
    }

    #[test]
    fn approved_summary() {
        let s = session(Baseline::Approved { amount: 20000.0, currency: Currency::USD });
        let out = BudgetSummary.export(&s).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "Client Budget,Budget Currency,Total Internal Cost,Budget Utilization %");
        assert_eq!(lines[1], "20000.00,USD,16086.00,80.43");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn charged_summary() {
        let s = session(Baseline::Charged { amount: 80000.0, currency: Currency::KRW, percent: 40.0 });
        let out = BudgetSummary.export(&s).unwrap();
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(
            lines[0],
            "Charged to Client,Currency,Internal Budget %,Internal Budget Amount,Total Internal Cost,Budget Utilization %"
        );
        assert_eq!(lines[1], "80000,KRW,40,32000,16086,50.27");
    }
}
