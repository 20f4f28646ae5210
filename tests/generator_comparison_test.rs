//! Integration tests comparing feature generator choices on the same corpus.

use std::sync::Arc;

use taxon::learner::{MaxentModel, TrainConfig};
use taxon::prelude::*;

/// Reviews where "caramel" is mostly a beer token, but the adjacent pair
/// "caramel chocolate" only ever describes a coffee.
fn corpus() -> &'static str {
    "\
COFFEE sweet caramel chocolate blend of coffee with cocoa
COFFEE smooth medium roast beans
COFFEE bright single origin espresso
COFFEE dark roast cocoa notes
COFFEE slow brewed pour over
BEER caramel malt brew
BEER smoky caramel porter
BEER caramel bock lager
BEER brown ale caramel finish
BEER imperial chocolate stout
BEER milk chocolate stout
BEER chocolate porter nitro
BEER crisp citrus pilsner"
}

fn unigram_generators() -> Vec<Arc<dyn FeatureGenerator>> {
    vec![Arc::new(BagOfWordsFeatureGenerator::new())]
}

fn bigram_generators() -> Vec<Arc<dyn FeatureGenerator>> {
    vec![Arc::new(BigramFeatureGenerator::new())]
}

fn combined_generators() -> Vec<Arc<dyn FeatureGenerator>> {
    vec![
        Arc::new(BagOfWordsFeatureGenerator::new()),
        Arc::new(BigramFeatureGenerator::new()),
    ]
}

fn train_with(generators: Vec<Arc<dyn FeatureGenerator>>) -> Result<Box<dyn CategoryModel>> {
    Trainer::new()
        .with_generators(generators)
        .with_config(TrainConfig::new(0))
        .train_str(corpus())
}

#[test]
fn test_unigrams_follow_token_statistics() -> Result<()> {
    let generators = unigram_generators();
    let model = train_with(generators.clone())?;
    let categorizer = DocumentCategorizer::new(model.as_ref()).with_generators(generators);

    // "caramel" appears in four beer reviews and one coffee review,
    // "chocolate" in three beer reviews and one coffee review. Without word
    // order the evidence favors beer.
    assert_eq!(
        categorizer.best("caramel chocolate"),
        Some("BEER".to_string())
    );

    Ok(())
}

#[test]
fn test_bigrams_capture_adjacent_context() -> Result<()> {
    let generators = bigram_generators();
    let model = train_with(generators.clone())?;
    let categorizer = DocumentCategorizer::new(model.as_ref()).with_generators(generators);

    // The pair "caramel chocolate" is only ever adjacent in a coffee review,
    // so the bigram model reverses the unigram verdict.
    assert_eq!(
        categorizer.best("caramel chocolate"),
        Some("COFFEE".to_string())
    );

    // A continuation that forms no known pair changes nothing.
    assert_eq!(
        categorizer.best("caramel chocolate malt"),
        Some("COFFEE".to_string())
    );

    Ok(())
}

#[test]
fn test_combined_generators_union_their_features() -> Result<()> {
    let generators = combined_generators();
    let model = train_with(generators.clone())?;

    // The trained model draws on both feature namespaces.
    let maxent = model.as_any().downcast_ref::<MaxentModel>().unwrap();
    assert!(maxent.contains_predicate("bow=caramel"));
    assert!(maxent.contains_predicate("bg=caramel chocolate"));

    let categorizer = DocumentCategorizer::new(model.as_ref()).with_generators(generators);
    assert_eq!(
        categorizer.best("sweet caramel chocolate blend of coffee with cocoa"),
        Some("COFFEE".to_string())
    );

    Ok(())
}

#[test]
fn test_mismatched_generators_degrade_to_uniform() -> Result<()> {
    // Train on unigram features but categorize with bigram features. Every
    // generated feature is unknown to the model, so scores collapse to the
    // uniform distribution. Matching generator sequences is the caller's
    // responsibility.
    let model = train_with(unigram_generators())?;
    let categorizer =
        DocumentCategorizer::new(model.as_ref()).with_generators(bigram_generators());

    let scores = categorizer.categorize("caramel chocolate");
    assert_eq!(scores.get("COFFEE"), Some(0.5));
    assert_eq!(scores.get("BEER"), Some(0.5));

    Ok(())
}
