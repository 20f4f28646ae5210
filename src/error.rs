//! Error types for the taxon library.
//!
//! All fallible operations report failures through the [`TaxonError`] enum.
//! Corpus access problems (missing files, unreadable streams, malformed
//! sample data) surface as [`TaxonError::CorpusUnavailable`], while failures
//! inside a statistical learner cross the boundary as
//! [`TaxonError::Training`].
//!
//! # Examples
//!
//! ```
//! use taxon::error::{Result, TaxonError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(TaxonError::corpus("sample store is unreachable"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for taxon operations.
///
/// This enum represents all possible errors that can occur in the taxon
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum TaxonError {
    /// The training corpus cannot be opened, read, or parsed
    #[error("Corpus unavailable: {0}")]
    CorpusUnavailable(String),

    /// Training was requested over a corpus that produced no samples
    #[error("Empty training set: {0}")]
    EmptyTrainingSet(String),

    /// A statistical learner failed while fitting a model
    #[error("Training error: {0}")]
    Training(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TaxonError.
pub type Result<T> = std::result::Result<T, TaxonError>;

impl TaxonError {
    /// Create a new corpus error.
    pub fn corpus<S: Into<String>>(msg: S) -> Self {
        TaxonError::CorpusUnavailable(msg.into())
    }

    /// Create a new empty training set error.
    pub fn empty_training_set<S: Into<String>>(msg: S) -> Self {
        TaxonError::EmptyTrainingSet(msg.into())
    }
}

impl From<io::Error> for TaxonError {
    fn from(err: io::Error) -> Self {
        TaxonError::CorpusUnavailable(err.to_string())
    }
}

impl From<serde_json::Error> for TaxonError {
    fn from(err: serde_json::Error) -> Self {
        TaxonError::CorpusUnavailable(err.to_string())
    }
}
