use crate::util::currency::Currency;

/// Budget figure that utilization is measured against
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Baseline {
    /// The client approved a flat amount
    Approved { amount: f64, currency: Currency },
    /// A share `percent` of what the client is charged goes to internal costs
    Charged {
        amount: f64,
        currency: Currency,
        percent: f64,
    },
}

impl Baseline {
    pub fn amount(&self) -> f64 {
        match *self {
            Baseline::Approved { amount, .. } => amount,
            Baseline::Charged { amount, percent, .. } => amount * (percent / 100.0),
        }
    }

    pub fn currency(&self) -> Currency {
        match *self {
            Baseline::Approved { currency, .. } | Baseline::Charged { currency, .. } => currency,
        }
    }
}

impl Default for Baseline {
    fn default() -> Self {
        Baseline::Approved {
            amount: 0.0,
            currency: Currency::JPY,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn approved_is_flat() {
        let b = Baseline::Approved {
            amount: 4000.0,
            currency: Currency::USD,
        };
        assert_eq!(b.amount(), 4000.0);
        assert_eq!(b.currency(), Currency::USD);
    }

    #[test]
    fn charged_takes_percentage() {
        let b = Baseline::Charged {
            amount: 10000.0,
            currency: Currency::EUR,
            percent: 40.0,
        };
        assert_eq!(b.amount(), 4000.0);
        assert_eq!(b.currency(), Currency::EUR);
        let zero = Baseline::Charged {
            amount: 10000.0,
            currency: Currency::EUR,
            percent: 0.0,
        };
        assert_eq!(zero.amount(), 0.0);
    }

    #[test]
    fn default_is_empty_budget() {
        assert_eq!(Baseline::default().amount(), 0.0);
        assert_eq!(Baseline::default().currency(), Currency::JPY);
    }
}
