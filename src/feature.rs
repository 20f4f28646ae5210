//! Feature generation for document categorization.
//!
//! Feature generators turn a [`Document`] into a set of namespaced string
//! features. Each generator prefixes its features with a short namespace so
//! features from different generators never collide, and a document's
//! features are the set union of what the configured generators produce.
//!
//! The same generator sequence must be used for training and categorization.
//! A model only recognizes the features it was trained with, so a mismatched
//! generator set silently degrades every score.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use taxon::document::Document;
//! use taxon::feature::{
//!     BagOfWordsFeatureGenerator, BigramFeatureGenerator, FeatureGenerator, extract_features,
//! };
//!
//! let generators: Vec<Arc<dyn FeatureGenerator>> = vec![
//!     Arc::new(BagOfWordsFeatureGenerator::new()),
//!     Arc::new(BigramFeatureGenerator::new()),
//! ];
//!
//! let doc = Document::from_text("medium roast");
//! let features = extract_features(&doc, &generators);
//!
//! assert!(features.contains("bow=medium"));
//! assert!(features.contains("bow=roast"));
//! assert!(features.contains("bg=medium roast"));
//! ```

use std::sync::Arc;

use ahash::AHashSet;

use crate::document::Document;

// Individual generator modules
pub mod bag_of_words;
pub mod bigram;

// Re-export all generators for convenient access
pub use bag_of_words::BagOfWordsFeatureGenerator;
pub use bigram::BigramFeatureGenerator;

/// The set of features observed in a single document.
///
/// Features are plain strings carrying their generator's namespace prefix.
/// Being a set, repeated observations within one document collapse to one
/// feature.
pub type FeatureSet = AHashSet<String>;

/// Trait for feature generators that convert documents into feature sets.
pub trait FeatureGenerator: Send + Sync {
    /// Generate the features of the given document.
    fn generate(&self, document: &Document) -> FeatureSet;

    /// Get the name of this generator (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Extract the union of the features all `generators` produce for `document`.
///
/// An empty generator slice yields an empty feature set; substituting the
/// default generators is the caller's decision.
pub fn extract_features(
    document: &Document,
    generators: &[Arc<dyn FeatureGenerator>],
) -> FeatureSet {
    let mut features = FeatureSet::default();
    for generator in generators {
        features.extend(generator.generate(document));
    }
    features
}

/// The generator set used when none is configured: bag-of-words alone.
pub fn default_feature_generators() -> Vec<Arc<dyn FeatureGenerator>> {
    vec![Arc::new(BagOfWordsFeatureGenerator::new())]
}
