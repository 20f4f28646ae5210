//! Maximum entropy learner trained with generalized iterative scaling.
//!
//! The model keeps one weight per (feature, category) pair observed in the
//! training data and scores a document as:
//!
//! ```text
//! p(category | doc) ∝ exp(Σ weight(feature, category))
//! ```
//!
//! summed over the document's known features. Features seen in fewer
//! training documents than the cutoff are discarded before fitting. A
//! document with no known features gets the uniform distribution.
//!
//! Each scaling iteration compares observed feature counts against the
//! counts the current model expects and nudges every weight by
//! `ln(observed / expected) / C`, where `C` is the largest number of active
//! features any training event carries.

use std::any::Any;
use std::time::Instant;

use ahash::AHashMap;
use anyhow::Result;

use crate::feature::FeatureSet;
use crate::learner::{CategoryModel, Learner, TrainConfig, TrainingEvent, TrainingStats};

/// A learner that fits [`MaxentModel`]s with generalized iterative scaling.
#[derive(Debug, Clone, Default)]
pub struct MaxentLearner;

impl MaxentLearner {
    /// Create a new maximum entropy learner.
    pub fn new() -> Self {
        MaxentLearner
    }
}

impl Learner for MaxentLearner {
    fn fit(
        &self,
        events: &[TrainingEvent],
        config: &TrainConfig,
    ) -> Result<Box<dyn CategoryModel>> {
        if events.is_empty() {
            anyhow::bail!("Training events cannot be empty");
        }

        let start_time = Instant::now();

        // Categories in first-seen order.
        let mut categories: Vec<String> = Vec::new();
        let mut category_index: AHashMap<&str, usize> = AHashMap::new();
        for event in events {
            if !category_index.contains_key(event.category.as_str()) {
                category_index.insert(event.category.as_str(), categories.len());
                categories.push(event.category.clone());
            }
        }

        // Document frequency per feature.
        let mut feature_counts: AHashMap<&str, usize> = AHashMap::new();
        for event in events {
            for feature in &event.features {
                *feature_counts.entry(feature.as_str()).or_insert(0) += 1;
            }
        }

        // Keep features at or above the cutoff, in lexicographic order so
        // predicate indices do not depend on hash iteration order.
        let mut predicates: Vec<String> = feature_counts
            .iter()
            .filter(|&(_, &count)| count >= config.cutoff)
            .map(|(&feature, _)| feature.to_string())
            .collect();
        predicates.sort_unstable();

        let predicate_index: AHashMap<String, usize> = predicates
            .iter()
            .enumerate()
            .map(|(i, p)| (p.clone(), i))
            .collect();

        // Events in indexed form: category index plus sorted active predicates.
        let indexed: Vec<(usize, Vec<usize>)> = events
            .iter()
            .map(|event| {
                let cat = category_index[event.category.as_str()];
                let mut active: Vec<usize> = event
                    .features
                    .iter()
                    .filter_map(|f| predicate_index.get(f.as_str()).copied())
                    .collect();
                active.sort_unstable();
                (cat, active)
            })
            .collect();

        // Correction constant: the most active features any event carries.
        let c = indexed
            .iter()
            .map(|(_, active)| active.len())
            .max()
            .unwrap_or(0);

        // Observed counts for (predicate, category) pairs. Weights exist only
        // for pairs actually seen in the data.
        let mut observed: Vec<Vec<(usize, f64)>> = vec![Vec::new(); predicates.len()];
        let mut pair_counts: AHashMap<(usize, usize), f64> = AHashMap::new();
        for (cat, active) in &indexed {
            for &p in active {
                *pair_counts.entry((p, *cat)).or_insert(0.0) += 1.0;
            }
        }
        for ((p, cat), count) in pair_counts {
            observed[p].push((cat, count));
        }
        for pairs in &mut observed {
            pairs.sort_unstable_by_key(|&(cat, _)| cat);
        }

        let mut params: Vec<Vec<(usize, f64)>> = observed
            .iter()
            .map(|pairs| pairs.iter().map(|&(cat, _)| (cat, 0.0)).collect())
            .collect();

        let mut log_likelihoods = Vec::with_capacity(config.iterations);

        // Scaling iterations. With no active features anywhere there is
        // nothing to fit and the model stays uniform.
        if c > 0 {
            let mut expected: Vec<Vec<f64>> = observed
                .iter()
                .map(|pairs| vec![0.0; pairs.len()])
                .collect();

            for _ in 0..config.iterations {
                for row in &mut expected {
                    for slot in row.iter_mut() {
                        *slot = 0.0;
                    }
                }

                let mut ll = 0.0;
                for (cat, active) in &indexed {
                    let probs = posterior(&params, categories.len(), active);
                    ll += probs[*cat].ln();

                    for &p in active {
                        let pairs = &observed[p];
                        let slots = &mut expected[p];
                        for (slot, &(pair_cat, _)) in slots.iter_mut().zip(pairs.iter()) {
                            *slot += probs[pair_cat];
                        }
                    }
                }
                log_likelihoods.push(ll);

                for (p, pairs) in observed.iter().enumerate() {
                    for (k, &(_, obs)) in pairs.iter().enumerate() {
                        let exp = expected[p][k];
                        if exp > 0.0 {
                            params[p][k].1 += (obs / exp).ln() / c as f64;
                        }
                    }
                }
            }
        }

        let final_log_likelihood = indexed
            .iter()
            .map(|(cat, active)| posterior(&params, categories.len(), active)[*cat].ln())
            .sum();

        let iterations_run = log_likelihoods.len();
        let stats = TrainingStats {
            log_likelihoods,
            iterations: iterations_run,
            training_events: events.len(),
            categories: categories.len(),
            predicates: predicates.len(),
            dropped_predicates: feature_counts.len() - predicates.len(),
            final_log_likelihood,
            training_time_ms: start_time.elapsed().as_millis() as u64,
            trained_at: chrono::Utc::now(),
        };

        Ok(Box::new(MaxentModel {
            categories,
            predicates,
            predicate_index,
            params,
            stats,
        }))
    }

    fn name(&self) -> &'static str {
        "maxent"
    }
}

/// A trained maximum entropy model.
///
/// Categories keep their training order and weights are stored sparsely per
/// kept feature. The introspection methods expose which features survived
/// the cutoff and which categories each feature is associated with.
pub struct MaxentModel {
    /// Categories in training order.
    categories: Vec<String>,
    /// Features kept after the cutoff, lexicographically ordered.
    predicates: Vec<String>,
    /// Feature name to predicate index.
    predicate_index: AHashMap<String, usize>,
    /// Per predicate: (category index, weight) for observed pairs.
    params: Vec<Vec<(usize, f64)>>,
    /// Statistics recorded while fitting.
    stats: TrainingStats,
}

impl MaxentModel {
    /// Get the statistics recorded while this model was fitted.
    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    /// Get the number of features the model kept after the cutoff.
    pub fn num_predicates(&self) -> usize {
        self.predicates.len()
    }

    /// Check whether the model kept the given feature.
    pub fn contains_predicate(&self, feature: &str) -> bool {
        self.predicate_index.contains_key(feature)
    }

    /// Get the categories the given feature was observed with, or `None`
    /// if the model does not know the feature.
    pub fn predicate_categories(&self, feature: &str) -> Option<Vec<&str>> {
        let &p = self.predicate_index.get(feature)?;
        Some(
            self.params[p]
                .iter()
                .map(|&(cat, _)| self.categories[cat].as_str())
                .collect(),
        )
    }

    /// Get the weight for a (feature, category) pair, or `None` if the pair
    /// was never observed in training.
    pub fn weight(&self, feature: &str, category: &str) -> Option<f64> {
        let &p = self.predicate_index.get(feature)?;
        let cat = self.categories.iter().position(|c| c == category)?;
        self.params[p]
            .iter()
            .find(|&&(pair_cat, _)| pair_cat == cat)
            .map(|&(_, weight)| weight)
    }
}

impl CategoryModel for MaxentModel {
    fn categories(&self) -> &[String] {
        &self.categories
    }

    fn eval(&self, features: &FeatureSet) -> Vec<f64> {
        let mut active: Vec<usize> = features
            .iter()
            .filter_map(|f| self.predicate_index.get(f.as_str()).copied())
            .collect();
        // Stable summation order keeps repeated evaluations bit-identical.
        active.sort_unstable();
        posterior(&self.params, self.categories.len(), &active)
    }

    fn name(&self) -> &'static str {
        "maxent"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Probability of each category given sorted active predicates, in category
/// order.
fn posterior(params: &[Vec<(usize, f64)>], num_categories: usize, active: &[usize]) -> Vec<f64> {
    let mut scores = vec![0.0; num_categories];
    for &p in active {
        for &(cat, weight) in &params[p] {
            scores[cat] += weight;
        }
    }
    softmax(&mut scores);
    scores
}

/// Normalize raw scores into a probability distribution in place.
fn softmax(scores: &mut [f64]) {
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mut sum = 0.0;
    for score in scores.iter_mut() {
        *score = (*score - max).exp();
        sum += *score;
    }
    for score in scores.iter_mut() {
        *score /= sum;
    }
}
