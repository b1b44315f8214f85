//! Currencies and their display precision
//!
//! Amounts are stored at full precision; rounding only happens when a value
//! is rendered or exported. Rounding is half away from zero (`f64::round`
//! applied to the value scaled by `10^places`), so `0.125 USD` displays as
//! `0.13` and `1234.5 JPY` as `1235`.

use num_derive::FromPrimitive;
use std::fmt;

use crate::util::choices::Choices;

/// Number of decimal places for codes outside of `Currency`
pub const DEFAULT_PLACES: u8 = 2;

#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum Currency {
    JPY = 0,
    USD,
    KRW,
    EUR,
}

impl Choices for Currency {
    const COUNT: usize = 4;

    fn keyword(self) -> &'static str {
        use Currency::*;
        match self {
            JPY => "JPY",
            USD => "USD",
            KRW => "KRW",
            EUR => "EUR",
        }
    }

    fn label(self) -> &'static str {
        self.keyword()
    }
}

impl Currency {
    /// Decimal places shown for this currency (0 when it has no subunit)
    pub fn places(self) -> u8 {
        use Currency::*;
        match self {
            JPY | KRW => 0,
            USD | EUR => 2,
        }
    }

    pub fn round(self, value: f64) -> f64 {
        round_currency(value, self.keyword())
    }

    /// Rounded value with exactly `places()` decimals
    pub fn format(self, value: f64) -> String {
        format!("{:.*}", self.places() as usize, self.round(value))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Decimal places for an arbitrary currency code
///
/// Unknown codes degrade to `DEFAULT_PLACES` instead of failing.
pub fn places_for(code: &str) -> u8 {
    Currency::from_keyword(code)
        .map(Currency::places)
        .unwrap_or(DEFAULT_PLACES)
}

/// Round `value` to the precision of the currency named `code`
pub fn round_currency(value: f64, code: &str) -> f64 {
    round_places(value, places_for(code))
}

pub fn round_places(value: f64, places: u8) -> f64 {
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! rounds {
        ( $v:expr, $code:expr => $res:expr ) => {
            assert_eq!(round_currency($v, $code), $res);
        };
    }

    #[test]
    fn whole_unit_currencies() {
        rounds!(1234.4, "JPY" => 1234.0);
        rounds!(1234.5, "JPY" => 1235.0);
        rounds!(1234.6, "KRW" => 1235.0);
        rounds!(0.4, "KRW" => 0.0);
        for x in [0.0, 1.49, 2.5, 99.99, 12345.678] {
            assert_eq!(round_currency(x, "JPY"), round_currency(x, "KRW"));
        }
    }

    #[test]
    fn cent_currencies() {
        rounds!(10.0, "USD" => 10.0);
        rounds!(0.125, "USD" => 0.13);
        rounds!(3.14159, "EUR" => 3.14);
        rounds!(1999.999, "EUR" => 2000.0);
    }

    #[test]
    fn unknown_code_uses_two_places() {
        rounds!(3.14159, "GBP" => 3.14);
        rounds!(3.14159, "" => 3.14);
        assert_eq!(places_for("jpy"), DEFAULT_PLACES);
    }

    #[test]
    fn enum_rounds_like_its_code() {
        for cur in Currency::all() {
            for x in [0.125, 2.5, 1234.5, 99.999] {
                assert_eq!(cur.round(x), round_currency(x, cur.keyword()));
            }
        }
        assert_eq!(places_for(Currency::KRW.keyword()), 0);
    }

    #[test]
    fn formatting() {
        assert_eq!(Currency::JPY.format(1000.0), "1000");
        assert_eq!(Currency::KRW.format(999.5), "1000");
        assert_eq!(Currency::USD.format(1000.0), "1000.00");
        assert_eq!(Currency::EUR.format(0.125), "0.13");
    }

    #[test]
    fn closed_list() {
        assert_eq!(
            Currency::all(),
            vec![Currency::JPY, Currency::USD, Currency::KRW, Currency::EUR]
        );
        assert_eq!(Currency::from_keyword("EUR"), Some(Currency::EUR));
        assert_eq!(Currency::from_keyword("Euro"), None);
    }
}
