// Labeled topic distributions and confident-label inference.
//
// A distribution always covers every topic the model knows. After sorting,
// the confident label set is picked with cumulative-probability rules checked
// in a fixed order:
//
//   top-1 >= 0.65            -> [l1]
//   top-1 + top-2 >= 0.80    -> [l1, l2]
//   top-1..top-3 >= 0.75     -> [l1, l2, l3]
//   otherwise                -> [l1]

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Returned as the only label when there is nothing to choose from.
pub const UNCERTAIN_LABEL: &str = "Uncertain";

/// One topic label with its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledTopic {
    pub label: String,
    pub probability: f64,
}

impl LabeledTopic {
    pub fn new(label: impl Into<String>, probability: f64) -> Self {
        Self {
            label: label.into(),
            probability,
        }
    }
}

/// Labeled topics, one entry per model topic.
pub type TopicDistribution = Vec<LabeledTopic>;

/// Cumulative-probability cutoffs for the confident label set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    /// Minimum top-1 probability to return a single label.
    pub top1: f64,
    /// Minimum top-2 cumulative probability to return two labels.
    pub top2: f64,
    /// Minimum top-3 cumulative probability to return three labels.
    pub top3: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            top1: 0.65,
            top2: 0.80,
            top3: 0.75,
        }
    }
}

/// Sort by probability, highest first.
///
/// The sort is stable, so equal probabilities keep their topic-id order.
/// NaN compares as equal to everything and stays where it was.
pub fn sort_descending(mut dist: TopicDistribution) -> TopicDistribution {
    dist.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    dist
}

/// Pick the labels the model is confident about from a sorted distribution.
pub fn infer_confident_labels(
    sorted: &[LabeledTopic],
    thresholds: &ConfidenceThresholds,
) -> Vec<String> {
    let Some(first) = sorted.first() else {
        return vec![UNCERTAIN_LABEL.to_string()];
    };

    let top = |n: usize| -> Vec<String> {
        sorted.iter().take(n).map(|t| t.label.clone()).collect()
    };
    let cumulative = |n: usize| -> f64 { sorted.iter().take(n).map(|t| t.probability).sum() };

    if first.probability >= thresholds.top1 {
        top(1)
    } else if sorted.len() >= 2 && cumulative(2) >= thresholds.top2 {
        top(2)
    } else if sorted.len() >= 3 && cumulative(3) >= thresholds.top3 {
        top(3)
    } else {
        top(1)
    }
}

/// Label of the most probable topic, or "Unknown" for an empty distribution.
pub fn top_label(sorted: &[LabeledTopic]) -> String {
    sorted
        .first()
        .map(|t| t.label.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}
