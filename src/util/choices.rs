//! Closed sets of labels
//!
//! Currencies, cost types and calculation methods are fixed enumerations:
//! the session file may only name one of their keywords, and the reports
//! list them in declaration order. Adding a choice means adding a variant.

use num_traits::FromPrimitive;

/// An enumeration whose variants are numbered `0..COUNT`
pub trait Choices: FromPrimitive + Copy + PartialEq + Sized {
    /// Number of variants
    const COUNT: usize;

    /// Short name accepted in session files
    fn keyword(self) -> &'static str;

    /// Name displayed in tables and exports
    fn label(self) -> &'static str;

    /// Every variant, in declaration order
    fn all() -> Vec<Self> {
        (0..Self::COUNT).filter_map(Self::from_usize).collect()
    }

    /// Reverse of `keyword`
    fn from_keyword(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.keyword() == s)
    }

    /// Comma-separated list of accepted keywords, for hints
    fn keywords() -> String {
        Self::all()
            .into_iter()
            .map(Self::keyword)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
