mod constants;
mod notice;
mod table;
mod tabulator;
mod util;

pub use constants::*;
pub use notice::{NoticeSink, TracingSink};
pub use table::CodonTable;
pub use tabulator::{CodonTabulator, Report, ReportEntry, Tally};
pub use util::*;

use std::path::PathBuf;

/// Common `Result` type for all library operations, using `CodonError` for errors.
pub type Result<T, E = CodonError> = core::result::Result<T, E>;

/// Error variants for codon table loading and tabulation.
///
/// Non-matching codons are not errors: they are simply left out of the counts.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodonError {
    /// The codon table file does not exist.
    #[error("codon table not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    /// Any other I/O failure while opening or reading the codon table.
    #[error("error reading codon table {}: {reason}", path.display())]
    ResourceReadError { path: PathBuf, reason: String },

    /// The table is not a JSON object mapping category names to arrays of codes.
    #[error("malformed codon table: {reason}")]
    MalformedTable { reason: String },

    /// The table parsed but holds no categories.
    #[error("codon table has no categories")]
    EmptyTable,

    /// A code is listed under more than one category, so classification would be ambiguous.
    #[error("code {code} is listed under both {first} and {second}")]
    AmbiguousCodeTable {
        code: String,
        first: String,
        second: String,
    },

    /// Writing the report to its output failed.
    #[error("failed to write report: {0}")]
    ReportWrite(String),
}

impl From<serde_json::Error> for CodonError {
    fn from(err: serde_json::Error) -> Self {
        CodonError::MalformedTable {
            reason: err.to_string(),
        }
    }
}
