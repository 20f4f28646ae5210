//! # Taxon
//!
//! A pluggable document categorization library for Rust, inspired by
//! OpenNLP's document categorizer.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Pluggable feature generators (bag-of-words, bigrams)
//! - Pluggable statistical learners with a maximum entropy default
//! - Streaming corpus readers for plain-text and JSON formats
//! - Deterministic scoring and winner selection

pub mod categorizer;
pub mod corpus;
pub mod document;
pub mod error;
pub mod feature;
pub mod learner;
pub mod selection;
pub mod trainer;

pub mod prelude {
    //! Convenient imports for common usage.

    pub use crate::categorizer::{CategoryScores, DocumentCategorizer};
    pub use crate::corpus::{LabeledSample, LineSampleReader, load_samples, samples_from_str};
    pub use crate::document::Document;
    pub use crate::error::{Result, TaxonError};
    pub use crate::feature::{
        BagOfWordsFeatureGenerator, BigramFeatureGenerator, FeatureGenerator, FeatureSet,
    };
    pub use crate::learner::{CategoryModel, Learner, MaxentLearner, TrainConfig};
    pub use crate::selection::{best_of, best_scored, summarize};
    pub use crate::trainer::Trainer;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
