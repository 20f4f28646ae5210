//! Training glue: corpus in, model out.
//!
//! A [`Trainer`] owns a feature generator sequence, a learner, and a
//! [`TrainConfig`]. Training extracts each sample's features, forwards the
//! resulting events to the learner, and returns the fitted model. With no
//! generators configured the bag-of-words default is applied, and with no
//! learner configured the maximum entropy default is used.
//!
//! # Examples
//!
//! ```
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
//! assert_eq!(model.categories(), &["COFFEE", "BEER"]);
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::Arc;

use crate::corpus::{LabeledSample, LineSampleReader};
use crate::error::{Result, TaxonError};
use crate::feature::{FeatureGenerator, default_feature_generators, extract_features};
use crate::learner::{CategoryModel, Learner, TrainConfig, TrainingEvent, default_learner};

/// Trains category models from labeled samples.
pub struct Trainer {
    /// Feature generators applied to every sample.
    generators: Vec<Arc<dyn FeatureGenerator>>,
    /// The statistical learner that fits the model.
    learner: Box<dyn Learner>,
    /// Training hyperparameters.
    config: TrainConfig,
}

impl Trainer {
    /// Create a trainer with default generators, learner, and config.
    pub fn new() -> Self {
        Trainer {
            generators: Vec::new(),
            learner: default_learner(),
            config: TrainConfig::default(),
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

    /// Replace the learner.
    pub fn with_learner(mut self, learner: Box<dyn Learner>) -> Self {
        self.learner = learner;
        self
    }

    /// Replace the training config.
    pub fn with_config(mut self, config: TrainConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the feature frequency cutoff, keeping the rest of the config.
    pub fn with_cutoff(mut self, cutoff: usize) -> Self {
        self.config.cutoff = cutoff;
        self
    }

    /// Get the configured feature generators.
    ///
    /// Empty means the bag-of-words default is applied at training time.
    /// Categorization must use the same sequence.
    pub fn generators(&self) -> &[Arc<dyn FeatureGenerator>] {
        &self.generators
    }

    /// Get the training config.
    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    /// Train a model from a stream of samples.
    ///
    /// The first reader failure aborts training. A stream that yields no
    /// samples at all is an [`TaxonError::EmptyTrainingSet`] error.
    pub fn train<I>(&self, samples: I) -> Result<Box<dyn CategoryModel>>
    where
        I: IntoIterator<Item = Result<LabeledSample>>,
    {
        let generators = if self.generators.is_empty() {
            default_feature_generators()
        } else {
            self.generators.clone()
        };

        let mut events = Vec::new();
        for sample in samples {
            let sample = sample?;
            let features = extract_features(&sample.document, &generators);
            events.push(TrainingEvent::new(sample.category, features));
        }

        if events.is_empty() {
            return Err(TaxonError::empty_training_set(
                "the corpus produced no samples",
            ));
        }

        let model = self.learner.fit(&events, &self.config)?;
        Ok(model)
    }

    /// Train a model from samples already in memory.
    pub fn train_samples(&self, samples: &[LabeledSample]) -> Result<Box<dyn CategoryModel>> {
        self.train(samples.iter().cloned().map(Ok))
    }

    /// Train a model from an in-memory corpus string.
    pub fn train_str(&self, corpus: &str) -> Result<Box<dyn CategoryModel>> {
        self.train(LineSampleReader::new(corpus.as_bytes()))
    }

    /// Train a model from a plain-text corpus file.
    pub fn train_file<P: AsRef<Path>>(&self, path: P) -> Result<Box<dyn CategoryModel>> {
        let file = File::open(path)?;
        self.train(LineSampleReader::new(BufReader::new(file)))
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new()
    }
}
