//! Tabular exports of a session

pub mod csv;

pub use self::csv::{BudgetSummary, CostDetails};

use std::path::{Path, PathBuf};

use tracing::info;

use crate::util::session::Session;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV writer error: {0}")]
    Csv(#[from] ::csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

/// A flat projection of a session into one file
pub trait Exporter {
    /// Default name of the file produced
    fn filename(&self) -> &'static str;

    fn export(&self, session: &Session) -> Result<String>;

    /// Export into `dir`, returns the path written
    fn write_to(&self, session: &Session, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.filename());
        std::fs::write(&path, self.export(session)?)?;
        info!(path = %path.display(), "exported");
        Ok(path)
    }
}

/// Write both CSV exports into `dir`
pub fn write_all(session: &Session, dir: &Path) -> Result<Vec<PathBuf>> {
    let exporters: [&dyn Exporter; 2] = [&CostDetails, &BudgetSummary];
    exporters
        .iter()
        .map(|e| e.write_to(session, dir))
        .collect()
}
