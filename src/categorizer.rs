//! Categorization glue: document in, scores out.
//!
//! A [`DocumentCategorizer`] borrows a trained model and applies a feature
//! generator sequence to incoming text. The generator sequence must be the
//! one the model was trained with; with a mismatched sequence every feature
//! is unknown to the model and the scores silently collapse toward the
//! no-evidence distribution. Nothing detects the mismatch at runtime.
//!
//! Scores come back as [`CategoryScores`], an ordered map with exactly one
//! entry per model category, in the model's category order, summing to 1.0.
//!
//! # Examples
//!
//! ```
//! use taxon::categorizer::DocumentCategorizer;
//! use taxon::learner::TrainConfig;
//! use taxon::trainer::Trainer;
//!
//! let corpus = "\
//! COFFEE medium roast of coffee
//! COFFEE dark roast blend
//! BEER pale ale with grapefruit
//! BEER crisp lager in cans";
//!
//! let trainer = Trainer::new().with_config(TrainConfig::new(0));
//! let model = trainer.train_str(corpus).unwrap();
//!
//! let categorizer = DocumentCategorizer::new(model.as_ref());
//! let scores = categorizer.categorize("dark roast");
//!
//! assert_eq!(scores.len(), 2);
//! assert_eq!(categorizer.best("dark roast"), Some("COFFEE".to_string()));
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::feature::{FeatureGenerator, default_feature_generators, extract_features};
use crate::learner::CategoryModel;
use crate::selection;

/// An ordered map of category to score.
///
/// Entries follow the model's category order, carry one entry per category,
/// and sum to 1.0 when produced by [`DocumentCategorizer`]. Hand-built
/// instances may hold any values; the selection functions treat them as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    entries: Vec<(String, f64)>,
}

impl CategoryScores {
    /// Create scores from (category, score) entries, keeping their order.
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        CategoryScores { entries }
    }

    /// Get the score for a category, or `None` if the category is unknown.
    pub fn get(&self, category: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|&(_, score)| score)
    }

    /// Iterate over (category, score) pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(c, score)| (c.as_str(), *score))
    }

    /// Get the entries as a slice, in order.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Get the number of categories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for CategoryScores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", selection::summarize(self))
    }
}

/// Categorizes documents against a borrowed trained model.
pub struct DocumentCategorizer<'m> {
    /// The trained model.
    model: &'m dyn CategoryModel,
    /// Feature generators applied to every document.
    generators: Vec<Arc<dyn FeatureGenerator>>,
}

impl<'m> DocumentCategorizer<'m> {
    /// Create a categorizer with the default generator sequence.
    pub fn new(model: &'m dyn CategoryModel) -> Self {
        DocumentCategorizer {
            model,
            generators: Vec::new(),
        }
    }

    /// Add a feature generator to the sequence.
    pub fn with_generator(mut self, generator: Arc<dyn FeatureGenerator>) -> Self {
        self.generators.push(generator);
        self
    }

    /// Replace the feature generator sequence.
    pub fn with_generators(mut self, generators: Vec<Arc<dyn FeatureGenerator>>) -> Self {
        self.generators = generators;
        self
    }

    /// Get the categories the model can assign, in model order.
    pub fn categories(&self) -> &[String] {
        self.model.categories()
    }

    /// Score a document against every category.
    pub fn categorize_document(&self, document: &Document) -> CategoryScores {
        let generators = if self.generators.is_empty() {
            default_feature_generators()
        } else {
            self.generators.clone()
        };

        let features = extract_features(document, &generators);
        let probs = self.model.eval(&features);

        let entries = self
            .model
            .categories()
            .iter()
            .cloned()
            .zip(probs)
            .collect();
        CategoryScores::new(entries)
    }

    /// Tokenize `text` on whitespace and score it against every category.
    pub fn categorize(&self, text: &str) -> CategoryScores {
        self.categorize_document(&Document::from_text(text))
    }

    /// Get the winning category for `text`, if one scores above zero.
    pub fn best(&self, text: &str) -> Option<String> {
        selection::best_of(&self.categorize(text)).map(|c| c.to_string())
    }

    /// Get the `CATEGORY[score]` summary line for `text`.
    pub fn summarize(&self, text: &str) -> String {
        selection::summarize(&self.categorize(text))
    }
}
