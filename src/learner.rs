//! Statistical learner boundary.
//!
//! A [`Learner`] fits a [`CategoryModel`] from training events, where each
//! event pairs a category label with the feature set extracted from one
//! document. The model is opaque to the rest of the crate: training glue
//! passes events in, categorization glue calls [`CategoryModel::eval`] and
//! interprets the returned probabilities. Swapping the statistical machinery
//! means implementing these two traits and nothing else.
//!
//! The default learner is [`maxent::MaxentLearner`], a maximum entropy
//! fitter trained with generalized iterative scaling.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::feature::FeatureSet;

// Individual learner modules
pub mod maxent;

// Re-export the default learner for convenient access
pub use maxent::{MaxentLearner, MaxentModel};

/// Default number of times a feature must be observed to be kept.
pub const DEFAULT_CUTOFF: usize = 5;

/// Default number of training iterations.
pub const DEFAULT_ITERATIONS: usize = 100;

/// One unit of training input: a category label and the features of a
/// single document.
#[derive(Debug, Clone)]
pub struct TrainingEvent {
    /// Category label.
    pub category: String,
    /// Features extracted from the document.
    pub features: FeatureSet,
}

impl TrainingEvent {
    /// Create a new training event.
    pub fn new<C: Into<String>>(category: C, features: FeatureSet) -> Self {
        TrainingEvent {
            category: category.into(),
            features,
        }
    }
}

/// Training hyperparameters shared by all learners.
///
/// # Examples
///
/// ```
/// use taxon::learner::TrainConfig;
///
/// let config = TrainConfig::default();
/// assert_eq!(config.cutoff, 5);
/// assert_eq!(config.iterations, 100);
///
/// let config = TrainConfig::default().with_cutoff(0).with_iterations(50);
/// assert_eq!(config.cutoff, 0);
/// assert_eq!(config.iterations, 50);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainConfig {
    /// Minimum number of training documents a feature must appear in to be
    /// kept. Features below the cutoff are discarded before fitting.
    pub cutoff: usize,
    /// Number of training iterations to run.
    pub iterations: usize,
}

impl TrainConfig {
    /// Create a config with the given cutoff and the default iteration count.
    pub fn new(cutoff: usize) -> Self {
        TrainConfig {
            cutoff,
            iterations: DEFAULT_ITERATIONS,
        }
    }

    /// Set the feature frequency cutoff.
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Set the number of training iterations.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            cutoff: DEFAULT_CUTOFF,
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// Statistics recorded while fitting a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Log-likelihood curve, one value per iteration.
    pub log_likelihoods: Vec<f64>,
    /// Number of training iterations completed.
    pub iterations: usize,
    /// Number of training events used.
    pub training_events: usize,
    /// Number of categories seen in the training data.
    pub categories: usize,
    /// Number of features kept after the cutoff.
    pub predicates: usize,
    /// Number of features the cutoff discarded.
    pub dropped_predicates: usize,
    /// Log-likelihood of the training data under the final model.
    pub final_log_likelihood: f64,
    /// Training time in milliseconds.
    pub training_time_ms: u64,
    /// Training timestamp.
    pub trained_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for trained category models.
///
/// A model knows a fixed category list in training order and scores feature
/// sets against it.
pub trait CategoryModel: Send + Sync {
    /// Get the categories this model can assign, in training order.
    fn categories(&self) -> &[String];

    /// Score a feature set against every category.
    ///
    /// Returns one probability per category, aligned with [`categories`],
    /// each non-negative and together summing to 1.0. Features the model was
    /// not trained with are ignored; a feature set with no known features
    /// yields the model's no-evidence distribution.
    ///
    /// [`categories`]: CategoryModel::categories
    fn eval(&self, features: &FeatureSet) -> Vec<f64>;

    /// Get the name of this model type (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Get this model as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Trait for statistical learners that fit category models.
pub trait Learner: Send + Sync {
    /// Fit a model from training events.
    ///
    /// The caller guarantees `events` is non-empty; learners reject an empty
    /// slice anyway since they cannot produce a meaningful model from it.
    fn fit(
        &self,
        events: &[TrainingEvent],
        config: &TrainConfig,
    ) -> anyhow::Result<Box<dyn CategoryModel>>;

    /// Get the name of this learner (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// The learner used when none is configured: maximum entropy.
pub fn default_learner() -> Box<dyn Learner> {
    Box::new(MaxentLearner::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_config_defaults() {
        let config = TrainConfig::default();
        assert_eq!(config.cutoff, DEFAULT_CUTOFF);
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
    }

    #[test]
    fn test_train_config_builders() {
        let config = TrainConfig::new(2).with_iterations(30);
        assert_eq!(config.cutoff, 2);
        assert_eq!(config.iterations, 30);

        let config = TrainConfig::default().with_cutoff(0);
        assert_eq!(config.cutoff, 0);
        assert_eq!(config.iterations, DEFAULT_ITERATIONS);
    }

    #[test]
    fn test_training_event() {
        let mut features = FeatureSet::default();
        features.insert("bow=coffee".to_string());

        let event = TrainingEvent::new("COFFEE", features);
        assert_eq!(event.category, "COFFEE");
        assert!(event.features.contains("bow=coffee"));
    }

    #[test]
    fn test_default_learner() {
        let learner = default_learner();
        assert_eq!(learner.name(), "maxent");
    }
}
