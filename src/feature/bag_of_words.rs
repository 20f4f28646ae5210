//! Bag-of-words feature generator.

use crate::document::Document;
use crate::feature::{FeatureGenerator, FeatureSet};

/// A feature generator that emits one feature per distinct token.
///
/// Token order and multiplicity are discarded; only token presence matters.
/// Features carry the `bow=` namespace prefix.
///
/// # Examples
///
/// ```
/// use taxon::document::Document;
/// use taxon::feature::bag_of_words::BagOfWordsFeatureGenerator;
/// use taxon::feature::FeatureGenerator;
///
/// let generator = BagOfWordsFeatureGenerator::new();
/// let features = generator.generate(&Document::from_text("coffee of coffee"));
///
/// assert_eq!(features.len(), 2);
/// assert!(features.contains("bow=coffee"));
/// assert!(features.contains("bow=of"));
/// ```
#[derive(Clone, Debug)]
pub struct BagOfWordsFeatureGenerator {
    /// Whether tokens are lowercased before becoming features
    lowercase: bool,
}

impl BagOfWordsFeatureGenerator {
    /// Create a new bag-of-words generator that preserves token case.
    pub fn new() -> Self {
        BagOfWordsFeatureGenerator { lowercase: false }
    }

    /// Set whether tokens are lowercased before becoming features.
    ///
    /// Training and categorization must agree on this setting.
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }
}

impl Default for BagOfWordsFeatureGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureGenerator for BagOfWordsFeatureGenerator {
    fn generate(&self, document: &Document) -> FeatureSet {
        let mut features = FeatureSet::default();
        for token in document.tokens() {
            if self.lowercase {
                features.insert(format!("bow={}", token.to_lowercase()));
            } else {
                features.insert(format!("bow={token}"));
            }
        }
        features
    }

    fn name(&self) -> &'static str {
        "bag_of_words"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_tokens() {
        let generator = BagOfWordsFeatureGenerator::new();
        let features = generator.generate(&Document::from_text("medium roast of coffee"));

        assert_eq!(features.len(), 4);
        assert!(features.contains("bow=medium"));
        assert!(features.contains("bow=roast"));
        assert!(features.contains("bow=of"));
        assert!(features.contains("bow=coffee"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let generator = BagOfWordsFeatureGenerator::new();
        let features = generator.generate(&Document::from_text("coffee coffee coffee"));

        assert_eq!(features.len(), 1);
        assert!(features.contains("bow=coffee"));
    }

    #[test]
    fn test_empty_document() {
        let generator = BagOfWordsFeatureGenerator::new();
        let features = generator.generate(&Document::from_text(""));
        assert!(features.is_empty());
    }

    #[test]
    fn test_case_preserved_by_default() {
        let generator = BagOfWordsFeatureGenerator::new();
        let features = generator.generate(&Document::from_text("Yuengling Lager"));

        assert!(features.contains("bow=Yuengling"));
        assert!(!features.contains("bow=yuengling"));
    }

    #[test]
    fn test_lowercase() {
        let generator = BagOfWordsFeatureGenerator::new().with_lowercase(true);
        let features = generator.generate(&Document::from_text("Yuengling Lager"));

        assert_eq!(features.len(), 2);
        assert!(features.contains("bow=yuengling"));
        assert!(features.contains("bow=lager"));
    }

    #[test]
    fn test_generator_name() {
        let generator = BagOfWordsFeatureGenerator::new();
        assert_eq!(generator.name(), "bag_of_words");
    }
}
