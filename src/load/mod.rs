//! Read a session file and replay it into a `Session`

pub mod error;
pub mod parse;

use tracing::{debug, warn};

use crate::util::session::Session;
use parse::Statement;

/// Load and replay the session file `filename`
///
/// Returns `None` if the file is missing or holds any fatal error,
/// in which case `errs` explains why.
pub fn read_session(filename: &str, errs: &mut error::Record) -> Option<Session> {
    let contents = match std::fs::read_to_string(filename) {
        Ok(contents) => contents,
        Err(e) => {
            errs.make("File not found")
                .text(format!("Session file is '{}'", filename))
                .text(e)
                .hint("create the file or pass another one as argument");
            return None;
        }
    };
    load_session(filename, errs, &contents)
}

/// Same as `read_session` for contents already in memory
pub fn load_session(filename: &str, errs: &mut error::Record, contents: &str) -> Option<Session> {
    let statements = parse::extract(filename, errs, contents);
    if errs.is_fatal() {
        return None;
    }
    debug!(count = statements.len(), file = filename, "replaying session");
    Some(replay(errs, statements))
}

/// Apply statements in order to a fresh session
///
/// Removals refer to the ledger as it stands when they are reached.
/// Out-of-range removals are reported as warnings and otherwise ignored.
pub fn replay(errs: &mut error::Record, statements: Vec<Statement>) -> Session {
    let mut session = Session::new();
    for statement in statements {
        match statement {
            Statement::Budget(baseline) => {
                debug!(?baseline, "set baseline");
                session.set_baseline(baseline);
            }
            Statement::Cost(line, loc) => {
                if !(session.ledger().total() + line.internal_cost()).is_finite() {
                    warn!(cost = line.internal_cost(), "ignoring line that overflows the total");
                    errs.make("Total out of range")
                        .nonfatal()
                        .span(&loc, "not added")
                        .text("Adding this line would make the total cost unrepresentable")
                        .hint("check the rates and volumes of the ledger for extra digits");
                    continue;
                }
                debug!(
                    cost_type = %line.cost_type(),
                    cost = line.internal_cost(),
                    "append line"
                );
                session.append_line(line);
            }
            Statement::Drop(position, loc) => {
                let removed = position
                    .checked_sub(1)
                    .and_then(|index| session.remove_line(index));
                match removed {
                    Some(line) => debug!(position, cost_type = %line.cost_type(), "remove line"),
                    None => {
                        let len = session.ledger().len();
                        warn!(position, len, "ignoring removal of a missing line");
                        errs.make("Index out of range")
                            .nonfatal()
                            .span(&loc, "nothing to remove here")
                            .text(format!("The ledger holds {} lines at this point", len))
                            .hint("lines are numbered from 1 in the order they were added");
                    }
                }
            }
        }
    }
    session
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::util::{currency::Currency, entry::CostType, summary::Status};

    fn load(text: &str) -> (Option<Session>, error::Record) {
        let mut errs = error::Record::new();
        let session = load_session("test.bgt", &mut errs, text);
        (session, errs)
    }

    #[test]
    fn full_session() {
        let (session, errs) = load(
            "budget charged 10000 USD at 40%;\n\
             cost type Translator, method Word, volume 100, rate 10, cur USD;\n\
             cost type Checker, method Hour, volume 13, rate 200, cur USD, vendor \"Bob\";\n\
             cost type LQA, method Flat, rate 400, cur USD;\n",
        );
        assert!(errs.is_empty(), "{}", errs);
        let session = session.unwrap();
        let sum = session.summary();
        assert_eq!(sum.baseline().amount(), 4000.0);
        assert_eq!(sum.total(), 4000.0);
        assert_eq!(sum.utilization(), 100.0);
        assert_eq!(sum.status(), Status::Exceeded);
    }

    #[test]
    fn drops_apply_in_order() {
        let (session, errs) = load(
            "cost type Translator, method Word, volume 100, rate 10, cur USD;\n\
             cost type Checker, method Hour, volume 13, rate 200, cur USD;\n\
             drop 1;\n\
             cost type MTPE, method Character, volume 1000, rate 0.5, cur JPY;\n\
             drop 1;\n",
        );
        assert!(errs.is_empty(), "{}", errs);
        let session = session.unwrap();
        let lines = session.ledger().lines();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].cost_type(), CostType::MTPE);
        assert_eq!(lines[0].currency(), Currency::JPY);
        assert_eq!(session.summary().total(), 500.0);
    }

    #[test]
    fn stale_drop_is_a_warning() {
        let (session, errs) = load(
            "cost type FR, method Page, volume 10, rate 3, cur EUR;\n\
             drop 2;\n\
             drop 0;\n",
        );
        let session = session.unwrap();
        assert_eq!(session.ledger().len(), 1);
        assert!(!errs.is_fatal());
        assert_eq!(errs.count_warnings(), 2);
    }

    #[test]
    fn overflowing_total_is_a_warning() {
        let big = format!("1{}", "0".repeat(308));
        let (session, errs) = load(&format!(
            "cost type FR, method Flat, rate {0}, cur USD;\n\
             cost type LQA, method Flat, rate {0}, cur USD;\n\
             cost type LSO, method Flat, rate 1, cur USD;\n",
            big
        ));
        let session = session.unwrap();
        assert!(!errs.is_fatal());
        assert_eq!(errs.count_warnings(), 1);
        assert_eq!(session.ledger().len(), 2);
        assert!(session.summary().total().is_finite());
    }

    #[test]
    fn fatal_errors_prevent_replay() {
        let (session, errs) = load("budget approved 100 USD;\ncost type FR;\n");
        assert!(session.is_none());
        assert!(errs.is_fatal());
    }

    #[test]
    fn missing_file() {
        let mut errs = error::Record::new();
        assert!(read_session("no/such/session.bgt", &mut errs).is_none());
        assert!(errs.iter().any(|e| e.label() == "File not found"));
    }

    #[test]
    fn no_baseline_means_zero_utilization() {
        let (session, _) = load("cost type FR, method Page, volume 10, rate 3, cur EUR;");
        let sum = session.unwrap().summary();
        assert_eq!(sum.total(), 30.0);
        assert_eq!(sum.utilization(), 0.0);
    }
}
