//! Pretty-printing facility for error messages
//!
//! A thin layer over `pest::error::Error::new_from_span`: pest takes care
//! of locating and underlining the faulty statement, `Error` adds text and
//! hints around it, and `Record` aggregates everything found in a session file
//! so that all mistakes are reported in a single run.
//!
//! # Example
//!
//! ```rust
//! errs.make("Index out of range")
//!     .nonfatal()
//!     .span(&loc, "nothing to remove here")
//!     .text("The ledger holds 2 lines at this point")
//!     .hint("lines are numbered from 1 in the order they were added")
//! ```
//!
//! ```txt
//! --> Warning: Index out of range
//!  |     --> session.bgt:7:1
//!  |      |
//!  |    7 | drop 3;
//!  |      | ^-----^
//!  |      |
//!  |      = nothing to remove here
//!  |  The ledger holds 2 lines at this point
//!  |      ? hint: lines are numbered from 1 in the order they were added
//! ```

use std::fmt;

use crate::cli::color::Palette;
use crate::load::parse::Rule;

/// Location of an error
///
/// Name of the session file and the span of the statement within it
pub type Loc<'i> = (&'i str, pest::Span<'i>);

/// Report for a single error
///
/// All messages (the label passed to `make`, arguments of `text` and `hint`)
/// should fit on a single line: chain several calls rather than embed `\n`.
#[must_use]
#[derive(Debug)]
pub struct Error {
    /// warnings do not prevent the session from being reported on
    fatal: bool,
    label: String,
    items: Vec<Item>,
}

#[derive(Debug)]
enum Item {
    /// annotated excerpt of the session file
    Block(pest::error::Error<Rule>),
    /// important message
    Text(String),
    /// recommendation for a fix
    Hint(String),
}

/// All errors found while loading one session file
#[must_use]
#[derive(Debug)]
pub struct Record {
    contents: Vec<Error>,
    palette: Palette,
}

impl Error {
    pub fn new<S>(msg: S) -> Self
    where
        S: ToString,
    {
        Self {
            fatal: true,
            label: msg.to_string(),
            items: Vec::new(),
        }
    }

    /// Add a pre-existing error (e.g. a parsing failure)
    pub fn from(&mut self, err: pest::error::Error<Rule>) -> &mut Self {
        self.items.push(Item::Block(err.renamed_rules(rule_rename)));
        self
    }

    /// Mark as a warning rather that a fatal error
    pub fn nonfatal(&mut self) -> &mut Self {
        self.fatal = false;
        self
    }

    /// Add an excerpt of the file and its associated message
    pub fn span<S>(&mut self, loc: &Loc, msg: S) -> &mut Self
    where
        S: ToString,
    {
        self.items.push(Item::Block(
            pest::error::Error::new_from_span(
                pest::error::ErrorVariant::CustomError {
                    message: msg.to_string(),
                },
                loc.1.clone(),
            )
            .with_path(loc.0),
        ));
        self
    }

    pub fn text<S>(&mut self, msg: S) -> &mut Self
    where
        S: ToString,
    {
        self.items.push(Item::Text(msg.to_string()));
        self
    }

    pub fn hint<S>(&mut self, msg: S) -> &mut Self
    where
        S: ToString,
    {
        self.items.push(Item::Hint(msg.to_string()));
        self
    }

    pub fn is_fatal(&self) -> bool {
        self.fatal
    }

    #[cfg(test)]
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl Record {
    pub fn new() -> Self {
        Self {
            contents: Vec::new(),
            palette: Palette::default(),
        }
    }

    /// Render with the given colors
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Checks if any of the recorded errors are fatal
    pub fn is_fatal(&self) -> bool {
        self.iter().any(Error::is_fatal)
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Number of fatal errors
    pub fn count_errors(&self) -> usize {
        self.iter().filter(|e| e.fatal).count()
    }

    /// Number of nonfatal errors
    pub fn count_warnings(&self) -> usize {
        self.contents.len() - self.count_errors()
    }

    /// Recorded errors, in the order they were made
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.contents.iter()
    }

    /// Add a new error to the pool, fatal until `nonfatal` is called
    pub fn make<S>(&mut self, msg: S) -> &mut Error
    where
        S: ToString,
    {
        self.contents.push(Error::new(msg));
        let last = self.contents.len() - 1;
        &mut self.contents[last]
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Error {
    fn render(&self, f: &mut fmt::Formatter<'_>, pal: &Palette) -> fmt::Result {
        let (color, header) = if self.fatal {
            (pal.red, "--> Error")
        } else {
            (pal.yellow, "--> Warning")
        };
        writeln!(f, "{}{}:{} {}{}", color, header, pal.white, self.label, pal.none)?;
        for item in &self.items {
            match item {
                Item::Block(err) => {
                    for line in format!("{}", err).lines() {
                        write!(f, " {}|{}  ", color, pal.blue)?;
                        for c in line.chars() {
                            match c {
                                '|' => write!(f, "|{}", pal.none)?,
                                '=' => write!(f, "={}", pal.none)?,
                                '^' => write!(f, "{}^", color)?,
                                // pest draws line endings as a visible symbol
                                '␊' => (),
                                _ => write!(f, "{}", c)?,
                            }
                        }
                        writeln!(f, "{}", pal.none)?;
                    }
                }
                Item::Text(txt) => {
                    writeln!(f, " {}|  {}{}{}", color, pal.white, txt, pal.none)?;
                }
                Item::Hint(txt) => {
                    writeln!(f, " {}|      {}? hint: {}{}", color, pal.blue, pal.none, txt)?;
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, &Palette::PLAIN)
    }
}

/// Maximum number of errors printed
const TRUNCATE: usize = 10;

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        let pal = &self.palette;
        let fatal = self.is_fatal();
        let count = if fatal {
            self.count_errors()
        } else {
            self.count_warnings()
        };
        let color = if fatal { pal.red } else { pal.yellow };
        // only print errors with the maximum fatality
        for err in self
            .iter()
            .filter(|err| err.fatal == fatal)
            .take(TRUNCATE)
        {
            err.render(f, pal)?;
            writeln!(f)?;
        }
        if count > TRUNCATE {
            writeln!(f, "{} And {} more.{}", color, count - TRUNCATE, pal.none)?;
        }
        let plural = if count > 1 { "s" } else { "" };
        if fatal {
            writeln!(
                f,
                "{}Fatal: {}{} error{} emitted{}",
                color, pal.white, count, plural, pal.none
            )
        } else {
            writeln!(
                f,
                "{}Nonfatal: {}{} warning{} emitted{}",
                color, pal.white, count, plural, pal.none
            )
        }
    }
}

#[allow(unreachable_patterns)]
fn rule_rename(r: &Rule) -> String {
    String::from(match r {
        Rule::EOI => "EOF",
        Rule::number => "a non-negative number ('1200' or '0.12')",
        Rule::index => "a line number",
        Rule::quoted => "a quoted string ('\"Acme\"')",
        Rule::cost_type => "a cost type (Translator, Checker, MTPE, ...)",
        Rule::method => "a calculation method (Word, Minute, Hour, ..., Flat)",
        Rule::currency => "a currency (JPY, USD, KRW, EUR)",
        Rule::approved => "an approved budget 'approved AMOUNT CUR'",
        Rule::charged => "a charged budget 'charged AMOUNT CUR at PERCENT%'",
        Rule::budget => "a budget statement",
        Rule::field_type => "a 'type' field descriptor",
        Rule::field_method => "a 'method' field descriptor",
        Rule::field_volume => "a 'volume' field descriptor",
        Rule::field_rate => "a 'rate' field descriptor",
        Rule::field_currency => "a 'cur' field descriptor",
        Rule::field_vendor => "a 'vendor' field descriptor",
        Rule::cost => "a cost line statement",
        Rule::drop_line => "a drop statement",
        _ => "a statement (budget, cost or drop)",
    })
}
