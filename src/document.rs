//! Document types for categorization.
//!
//! This module defines [`Document`], the tokenized unit of text that flows
//! through feature generation, training, and categorization. A document is an
//! ordered sequence of tokens and is immutable once constructed, so the same
//! document always yields the same features.
//!
//! # Examples
//!
//! Building a document from raw text:
//!
//! ```
//! use taxon::document::Document;
//!
//! let doc = Document::from_text("medium roast of coffee");
//! assert_eq!(doc.tokens(), &["medium", "roast", "of", "coffee"]);
//! assert_eq!(doc.len(), 4);
//! ```
//!
//! Building a document from pre-split tokens:
//!
//! ```
//! use taxon::document::Document;
//!
//! let doc = Document::from_tokens(vec!["Yuengling", "Lager"]);
//! assert_eq!(doc.tokens(), &["Yuengling", "Lager"]);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A tokenized piece of text to be categorized.
///
/// Tokens keep their original order and spelling. Construction is the only
/// way to set the token sequence; there are no mutating accessors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// The ordered tokens of the document
    tokens: Vec<String>,
}

impl Document {
    /// Create a document by splitting `text` on Unicode whitespace.
    ///
    /// Runs of whitespace act as a single separator, so the result never
    /// contains empty tokens. Text with no non-whitespace characters yields
    /// an empty document.
    pub fn from_text<S: AsRef<str>>(text: S) -> Self {
        Document {
            tokens: text
                .as_ref()
                .split_whitespace()
                .map(|t| t.to_string())
                .collect(),
        }
    }

    /// Create a document from tokens that are already split.
    ///
    /// The tokens are taken as-is; no whitespace splitting or filtering is
    /// applied. A token may therefore contain whitespace itself, but
    /// space-joined pair features are then ambiguous: `["a b", "c"]` and
    /// `["a", "b c"]` form the same pair `a b c`. Pair features stay
    /// unambiguous only when every token is whitespace-free, which
    /// [`Document::from_text`] guarantees.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Document {
            tokens: tokens.into_iter().map(|t| t.into()).collect(),
        }
    }

    /// Get the tokens of this document in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Get the number of tokens in this document.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the document has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}
