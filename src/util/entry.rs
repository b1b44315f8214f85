use num_derive::FromPrimitive;
use std::fmt;

use crate::util::{choices::Choices, cost, currency::Currency};

#[cfg(test)]
pub mod fields {
    pub use super::{CostType, Method, Vendor};
    pub use crate::util::currency::Currency;
}

/// Displayed in place of a vendor that was never given
pub const NO_VENDOR: &str = "—";

/// What the internal expense pays for
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum CostType {
    Translator = 0,
    Checker,
    MTPE,
    FR,
    Formatting,
    LSO,
    LQA,
}

impl Choices for CostType {
    const COUNT: usize = 7;

    fn keyword(self) -> &'static str {
        use CostType::*;
        match self {
            Translator => "Translator",
            Checker => "Checker",
            MTPE => "MTPE",
            FR => "FR",
            Formatting => "Formatting",
            LSO => "LSO",
            LQA => "LQA",
        }
    }

    fn label(self) -> &'static str {
        use CostType::*;
        match self {
            Translator => "Translator fees",
            Checker => "Checker fees",
            MTPE => "MTPE fees",
            FR => "FR fees",
            Formatting => "Formatting fees",
            LSO => "LSO fees",
            LQA => "LQA fees",
        }
    }
}

/// How `rate` and `volume` combine into a cost
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum Method {
    Word = 0,
    Minute,
    Hour,
    Page,
    Character,
    Flat,
}

impl Choices for Method {
    const COUNT: usize = 6;

    fn keyword(self) -> &'static str {
        use Method::*;
        match self {
            Word => "Word",
            Minute => "Minute",
            Hour => "Hour",
            Page => "Page",
            Character => "Character",
            Flat => "Flat",
        }
    }

    fn label(self) -> &'static str {
        use Method::*;
        match self {
            Word => "Per word",
            Minute => "Per minute",
            Hour => "Per hour",
            Page => "Per page",
            Character => "Per character",
            Flat => "Flat fee",
        }
    }
}

impl Method {
    /// Unit in which the volume is counted, `None` for a flat fee
    pub fn unit(self) -> Option<&'static str> {
        use Method::*;
        match self {
            Word => Some("words"),
            Minute => Some("min"),
            Hour => Some("h"),
            Page => Some("pages"),
            Character => Some("chars"),
            Flat => None,
        }
    }
}

/// Optional vendor name
///
/// `Vendor(None)` and `Vendor(Some(""))` are different and display differently.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vendor(pub Option<String>);

impl Vendor {
    pub fn named<S: ToString>(name: S) -> Self {
        Self(Some(name.to_string()))
    }
}

macro_rules! label_display {
    ( $($t:ty),* ) => {
        $(
            impl fmt::Display for $t {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.label())
                }
            }
        )*
    };
}

label_display!(CostType, Method);

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(name) => write!(f, "{}", name),
            None => write!(f, "{}", NO_VENDOR),
        }
    }
}

/// One itemized internal expense
///
/// The internal cost is computed once by `CostLine::new` and cannot be
/// changed afterwards: lines are only ever appended or removed.
#[derive(Debug, Clone, PartialEq)]
pub struct CostLine {
    cost_type: CostType,
    vendor: Vendor,
    method: Method,
    volume: f64,
    rate: f64,
    currency: Currency,
    internal_cost: f64,
}

impl CostLine {
    pub fn new(
        cost_type: CostType,
        vendor: Vendor,
        method: Method,
        volume: f64,
        rate: f64,
        currency: Currency,
    ) -> Self {
        Self {
            cost_type,
            vendor,
            method,
            volume,
            rate,
            currency,
            internal_cost: cost::compute_cost(rate, volume, method),
        }
    }

    pub fn cost_type(&self) -> CostType {
        self.cost_type
    }

    pub fn vendor(&self) -> &Vendor {
        &self.vendor
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Full-precision cost, in `self.currency()`
    pub fn internal_cost(&self) -> f64 {
        self.internal_cost
    }
}
