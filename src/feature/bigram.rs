//! Adjacent token pair (bigram) feature generator.

use crate::document::Document;
use crate::feature::{FeatureGenerator, FeatureSet};

/// A feature generator that emits one feature per adjacent token pair.
///
/// Bigrams capture local word order that a bag of words discards, at the
/// cost of sparser statistics. Combining both generators is common. The two
/// tokens are joined with a single space, which whitespace-split tokens can
/// never contain, and features carry the `bg=` namespace prefix.
///
/// Documents with fewer than two tokens produce no bigram features.
///
/// # Examples
///
/// ```
/// use taxon::document::Document;
/// use taxon::feature::bigram::BigramFeatureGenerator;
/// use taxon::feature::FeatureGenerator;
///
/// let generator = BigramFeatureGenerator::new();
/// let features = generator.generate(&Document::from_text("medium roast of coffee"));
///
/// assert_eq!(features.len(), 3);
/// assert!(features.contains("bg=medium roast"));
/// assert!(features.contains("bg=roast of"));
/// assert!(features.contains("bg=of coffee"));
/// ```
#[derive(Clone, Debug)]
pub struct BigramFeatureGenerator {
    /// Whether tokens are lowercased before pairing
    lowercase: bool,
}

impl BigramFeatureGenerator {
    /// Create a new bigram generator that preserves token case.
    pub fn new() -> Self {
        BigramFeatureGenerator { lowercase: false }
    }

    /// Set whether tokens are lowercased before pairing.
    ///
    /// Training and categorization must agree on this setting.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

impl Default for BigramFeatureGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureGenerator for BigramFeatureGenerator {
    fn generate(&self, document: &Document) -> FeatureSet {
        let mut features = FeatureSet::default();
        for pair in document.tokens().windows(2) {
            if self.lowercase {
                features.insert(format!(
                    "bg={} {}",
                    pair[0].to_lowercase(),
                    pair[1].to_lowercase()
                ));
            } else {
                features.insert(format!("bg={} {}", pair[0], pair[1]));
            }
        }
        features
    }

    fn name(&self) -> &'static str {
        "bigram"
    }
}
