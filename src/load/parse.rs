//! Convert the contents of a session file into a stream of statements

#![allow(clippy::upper_case_acronyms)]

use pest::Parser;
use pest_derive::*;

/// Wrapper around Pest's `Pair`
type Pair<'i> = pest::iterators::Pair<'i, Rule>;
/// Wrapper around Pest's `Pairs`
type Pairs<'i> = pest::iterators::Pairs<'i, Rule>;

use crate::load::error;
use crate::util::{
    baseline::Baseline,
    choices::Choices,
    currency::Currency,
    entry::{CostLine, CostType, Method, Vendor},
};

/// Pest-generated parser
#[derive(Parser)]
#[grammar = "load/budget.pest"]
pub struct BudgetParser;

/// One user action, in the order it appears in the file
#[derive(Debug)]
pub enum Statement<'i> {
    /// set or replace the baseline
    Budget(Baseline),
    /// append a line to the ledger, with the location of the request
    Cost(CostLine, error::Loc<'i>),
    /// remove the line at a 1-based position, with the location of the request
    Drop(usize, error::Loc<'i>),
}

/// A field that may be given at most once in a `cost` statement
struct Once<'i, T> {
    name: &'i str,
    hint: &'i str,
    loc: &'i error::Loc<'i>,
    valid: bool,
    data: Option<T>,
}

impl<'i, T> Once<'i, T> {
    fn new(name: &'i str, hint: &'i str, loc: &'i error::Loc) -> Self {
        Self {
            name,
            hint,
            loc,
            valid: true,
            data: None,
        }
    }

    fn try_set(&mut self, val: T, errs: &mut error::Record) {
        if self.data.is_some() {
            errs.make("Duplicate field definition")
                .span(self.loc, format!("attempt to override {}", self.name))
                .text("Each field may only be defined once")
                .hint("remove one of the field definitions");
            self.valid = false;
        }
        self.data = Some(val);
    }

    /// Mandatory field
    fn try_get(self, errs: &mut error::Record) -> Option<T> {
        if !self.valid {
            return None;
        }
        if self.data.is_none() {
            errs.make("Missing field definition")
                .span(self.loc, format!("'{}' may not be omitted", self.name))
                .text("This field must be defined once")
                .hint(format!(
                    "add definition for the missing field: '{} {}'",
                    self.name, self.hint
                ));
        }
        self.data
    }

    /// Optional field, `None` only when it was defined twice
    fn try_get_optional(self) -> Option<Option<T>> {
        if self.valid {
            Some(self.data)
        } else {
            None
        }
    }
}

/// Get the statements of the file `path`
///
/// The return value may be non-empty even if some errors (including fatal ones) occured:
/// it holds every statement that was valid.
///
/// Caller should determine the success of this function not through its return value
/// but by querying `errs` (e.g. by checking `errs.is_fatal()`)
pub fn extract<'i>(path: &'i str, errs: &mut error::Record, contents: &'i str) -> Vec<Statement<'i>> {
    match BudgetParser::parse(Rule::program, contents) {
        Ok(pairs) => validate(path, errs, pairs),
        Err(e) => {
            errs.make("Parsing failure").from(e.with_path(path));
            Vec::new()
        }
    }
}

// extract contents of wrapper rule
macro_rules! subrule {
    ( $node:expr ) => {{
        let mut items = $node.into_inner();
        let fst = items.next().unwrap_or_else(|| panic!("No subrule"));
        if items.next().is_some() {
            panic!("Several subrules");
        }
        fst
    }};
}

/// Check all statements
///
/// Sequentially validates each statement, records errors, accumulates the
/// correct ones into the return value.
fn validate<'i>(path: &'i str, errs: &mut error::Record, pairs: Pairs<'i>) -> Vec<Statement<'i>> {
    let mut statements = Vec::new();
    for pair in pairs {
        let statement = match pair.as_rule() {
            Rule::budget => validate_budget(path, errs, pair).map(Statement::Budget),
            Rule::cost => {
                let loc = (path, pair.as_span());
                validate_cost(path, errs, pair).map(|line| Statement::Cost(line, loc))
            }
            Rule::drop_line => validate_drop(path, errs, pair),
            Rule::EOI => break,
            _ => unreachable!("{:?}", pair),
        };
        if let Some(statement) = statement {
            statements.push(statement);
        }
    }
    statements
}

/// Parse a non-negative amount
///
/// The grammar only lets digits and a decimal point through, so the only
/// failure left is a value too large to be represented
fn validate_number(path: &str, errs: &mut error::Record, pair: Pair) -> Option<f64> {
    let loc = (path, pair.as_span());
    match pair.as_str().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errs.make("Invalid number")
                .span(&loc, "provided here")
                .text(format!("'{}' cannot be represented", pair.as_str()))
                .hint("amounts, rates and volumes must be finite");
            None
        }
    }
}

/// Parse a keyword from one of the closed lists
fn validate_choice<T: Choices>(path: &str, errs: &mut error::Record, pair: Pair, what: &str) -> Option<T> {
    let loc = (path, pair.as_span());
    match T::from_keyword(pair.as_str()) {
        Some(choice) => Some(choice),
        None => {
            errs.make(format!("Invalid {}", what))
                .span(&loc, "provided here")
                .text(format!("'{}' is not a valid {}", pair.as_str(), what))
                .hint(format!("use one of {}", T::keywords()));
            None
        }
    }
}

/// Parse a baseline, either flat or as a percentage of the charged amount
fn validate_budget(path: &str, errs: &mut error::Record, pair: Pair) -> Option<Baseline> {
    let variant = subrule!(pair);
    match variant.as_rule() {
        Rule::approved => {
            let mut items = variant.into_inner();
            let (amount, currency) = (items.next()?, items.next()?);
            Some(Baseline::Approved {
                amount: validate_number(path, errs, amount)?,
                currency: validate_choice::<Currency>(path, errs, currency, "currency")?,
            })
        }
        Rule::charged => {
            let mut items = variant.into_inner();
            let (amount, currency, percent) = (items.next()?, items.next()?, items.next()?);
            Some(Baseline::Charged {
                amount: validate_number(path, errs, amount)?,
                currency: validate_choice::<Currency>(path, errs, currency, "currency")?,
                percent: validate_number(path, errs, percent)?,
            })
        }
        _ => unreachable!(),
    }
}

/// Parse a cost line
///
/// This can fail since the grammar can't ensure that there is no duplicate field
/// definition or that there is no missing field
fn validate_cost(path: &str, errs: &mut error::Record, pair: Pair) -> Option<CostLine> {
    let loc = (path, pair.as_span());
    let mut cost_type = Once::new("type", "Translator", &loc);
    let mut method = Once::new("method", "Word", &loc);
    let mut volume = Once::new("volume", "1200", &loc);
    let mut rate = Once::new("rate", "0.12", &loc);
    let mut currency = Once::new("cur", "USD", &loc);
    let mut vendor = Once::new("vendor", "\"Acme\"", &loc);
    for field in pair.into_inner() {
        match field.as_rule() {
            Rule::field_type => {
                let c = validate_choice::<CostType>(path, errs, subrule!(field), "cost type")?;
                cost_type.try_set(c, errs);
            }
            Rule::field_method => {
                let m = validate_choice::<Method>(path, errs, subrule!(field), "calculation method")?;
                method.try_set(m, errs);
            }
            Rule::field_volume => {
                volume.try_set(validate_number(path, errs, subrule!(field))?, errs);
            }
            Rule::field_rate => {
                rate.try_set(validate_number(path, errs, subrule!(field))?, errs);
            }
            Rule::field_currency => {
                let c = validate_choice::<Currency>(path, errs, subrule!(field), "currency")?;
                currency.try_set(c, errs);
            }
            Rule::field_vendor => {
                vendor.try_set(read_quoted(subrule!(field)), errs);
            }
            _ => unreachable!("{:?}", field),
        }
    }
    let cost_type = cost_type.try_get(errs);
    let method = method.try_get(errs);
    let rate = rate.try_get(errs);
    let currency = currency.try_get(errs);
    let volume = volume.try_get_optional();
    let vendor = vendor.try_get_optional();
    let (cost_type, method, rate, currency, volume, vendor) =
        (cost_type?, method?, rate?, currency?, volume?, vendor?);
    if method == Method::Flat && volume.map(|v| v != 0.0).unwrap_or(false) {
        errs.make("Volume has no effect")
            .nonfatal()
            .span(&loc, "flat fee with a volume")
            .text("A flat fee costs its rate whatever the volume")
            .hint("remove the 'volume' field or pick a per-unit method");
    }
    let line = CostLine::new(
        cost_type,
        Vendor(vendor.map(String::from)),
        method,
        volume.unwrap_or(0.0),
        rate,
        currency,
    );
    if !line.internal_cost().is_finite() {
        errs.make("Invalid number")
            .span(&loc, "provided here")
            .text("The cost of this line cannot be represented")
            .hint("check the rate and volume for extra digits");
        return None;
    }
    Some(line)
}

/// Contents of a string between its double quotes
///
/// Grammar ensures the delimiters are present
fn read_quoted(pair: Pair) -> &str {
    let s = pair.as_str();
    &s[1..s.len() - 1]
}

/// Parse a removal request
fn validate_drop<'i>(path: &'i str, errs: &mut error::Record, pair: Pair<'i>) -> Option<Statement<'i>> {
    let loc = (path, pair.as_span());
    let index = subrule!(pair);
    match index.as_str().parse::<usize>() {
        Ok(n) => Some(Statement::Drop(n, loc)),
        Err(_) => {
            errs.make("Invalid index")
                .span(&loc, "provided here")
                .text(format!("'{}' is not a possible line number", index.as_str()))
                .hint("lines are numbered from 1 in the order they were added");
            None
        }
    }
}
