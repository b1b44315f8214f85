//! Cost of a single line

use crate::util::entry::Method;

/// Internal cost of `volume` units at `rate` per unit
///
/// A zero rate costs nothing whatever the method, a flat fee is the rate
/// itself, and any other method multiplies rate by volume.
/// Inputs are non-negative by construction of the session grammar.
pub fn compute_cost(rate: f64, volume: f64, method: Method) -> f64 {
    if rate == 0.0 {
        return 0.0;
    }
    match method {
        Method::Flat => rate,
        _ if volume == 0.0 => 0.0,
        _ => rate * volume,
    }
}
