//! Ordered collection of cost lines
//!
//! Lines have no identity other than their position.

use crate::util::entry::CostLine;

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    lines: Vec<CostLine>,
}

impl Ledger {
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add a line after all existing ones
    pub fn append(&mut self, line: CostLine) {
        self.lines.push(line);
    }

    /// Remove the line at `index` (0-based)
    ///
    /// An index past the end leaves the ledger untouched and returns `None`:
    /// a caller holding a stale index must not be able to fault.
    pub fn remove(&mut self, index: usize) -> Option<CostLine> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    pub fn lines(&self) -> &[CostLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of internal costs, recomputed on every call
    ///
    /// Currencies are not converted: the sum adds raw amounts.
    pub fn total(&self) -> f64 {
        self.lines
            .iter()
            .fold(0.0, |acc, line| acc + line.internal_cost())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::entry::fields::*;

    fn line(rate: f64, volume: f64, method: Method) -> CostLine {
        CostLine::new(CostType::Checker, Vendor(None), method, volume, rate, Currency::USD)
    }

    #[test]
    fn empty_total() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.total(), 0.0);
        assert!(ledger.total().is_sign_positive());
    }

    #[test]
    fn append_keeps_order() {
        let mut ledger = Ledger::new();
        ledger.append(line(10.0, 100.0, Method::Word));
        ledger.append(line(250.0, 0.0, Method::Flat));
        ledger.append(line(40.0, 2.5, Method::Hour));
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.lines()[1].method(), Method::Flat);
        assert_eq!(ledger.total(), 1000.0 + 250.0 + 100.0);
    }

    #[test]
    fn remove_updates_total() {
        let mut ledger = Ledger::new();
        ledger.append(line(10.0, 100.0, Method::Word));
        ledger.append(line(250.0, 0.0, Method::Flat));
        let removed = ledger.remove(0).map(|l| l.internal_cost());
        assert_eq!(removed, Some(1000.0));
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), 250.0);
    }

    #[test]
    fn remove_out_of_range_is_noop() {
        let mut ledger = Ledger::new();
        assert!(ledger.remove(0).is_none());
        ledger.append(line(10.0, 100.0, Method::Word));
        assert!(ledger.remove(1).is_none());
        assert!(ledger.remove(usize::MAX).is_none());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), 1000.0);
    }
}
