//! Winning category selection.
//!
//! Selection scans a score map once, keeping the first category whose score
//! strictly beats the running best, which starts at zero. Ties therefore go
//! to the earlier entry, and when no category scores above zero there is no
//! winner at all. No winner is an ordinary outcome, not an error.
//!
//! # Examples
//!
//! ```
//! use taxon::categorizer::CategoryScores;
//! use taxon::selection::{best_of, summarize};
//!
//! let scores = CategoryScores::new(vec![
//!     ("COFFEE".to_string(), 0.75),
//!     ("BEER".to_string(), 0.25),
//! ]);
//!
//! assert_eq!(best_of(&scores), Some("COFFEE"));
//! assert_eq!(summarize(&scores), "COFFEE[0.7500] BEER[0.2500]");
//! ```

use crate::categorizer::CategoryScores;

/// Get the winning category, if any score is strictly above zero.
pub fn best_of(scores: &CategoryScores) -> Option<&str> {
    best_scored(scores).map(|(category, _)| category)
}

/// Get the winning category together with its score.
///
/// The scan keeps the first entry that strictly exceeds the running best,
/// starting from zero, so ties resolve to the earliest entry and an all-zero
/// (or negative, or NaN) map has no winner.
pub fn best_scored(scores: &CategoryScores) -> Option<(&str, f64)> {
    let mut best: Option<(&str, f64)> = None;
    let mut best_value = 0.0;
    for (category, score) in scores.iter() {
        if score > best_value {
            best_value = score;
            best = Some((category, score));
        }
    }
    best
}

/// Format every entry as `CATEGORY[score]`, space separated, in order.
pub fn summarize(scores: &CategoryScores) -> String {
    scores
        .iter()
        .map(|(category, score)| format!("{category}[{score:.4}]"))
        .collect::<Vec<_>>()
        .join(" ")
}
