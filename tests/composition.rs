// Composition tests: the full pipeline from raw text to Classification.
//
//   raw text -> normalize -> tokenize -> bag-of-words -> LDA -> labels
//            -> sort -> confident labels
//
// Uses the fixture artifacts under tests/fixtures and, where the exact
// probabilities matter, a fixed-output topic model.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use batmi::classifier::Classifier;
use batmi::config::Config;
use batmi::text::StopwordSet;
use batmi::topics::dictionary::Dictionary;
use batmi::topics::distribution::ConfidenceThresholds;
use batmi::topics::traits::TopicModel;

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn fixture_config() -> Config {
    Config {
        model_path: fixture("lda_model.json"),
        dictionary_path: fixture("dictionary.json"),
        stopwords_path: fixture("marathi_stopwords.txt"),
        thresholds: ConfidenceThresholds::default(),
        port: 0,
        bind: "127.0.0.1".to_string(),
    }
}

fn classifier() -> Classifier {
    Classifier::load(&fixture_config()).unwrap()
}

/// Returns the same probabilities regardless of input, topic ids ascending.
struct FixedModel(Vec<f64>);

impl TopicModel for FixedModel {
    fn num_topics(&self) -> usize {
        self.0.len()
    }

    fn document_topics(&self, _bow: &[(usize, u32)]) -> Vec<(usize, f64)> {
        self.0.iter().copied().enumerate().collect()
    }
}

fn fixed_classifier(probabilities: Vec<f64>) -> Classifier {
    Classifier::new(
        StopwordSet::default(),
        Dictionary::default(),
        Arc::new(FixedModel(probabilities)),
        ConfidenceThresholds::default(),
    )
}

// ============================================================
// Full pipeline with the fixture LDA model
// ============================================================

#[test]
fn sports_news_is_classified_as_sports() {
    let result = classifier().classify(
        "पुण्यात झालेल्या क्रिकेट सामना मध्ये भारतीय खेळाडू चमकले। Match report: India won!",
    );
    assert_eq!(result.top_label, "Sports");
    assert_eq!(result.confident_labels, vec!["Sports"]);
    assert_eq!(result.distribution.len(), 5);
}

#[test]
fn mixed_article_reports_two_topics() {
    let result = classifier().classify("क्रिकेट सामना आणि निवडणूक सरकार");
    let mut labels = result.confident_labels.clone();
    labels.sort();
    assert_eq!(labels, vec!["Politics", "Sports"]);
}

#[test]
fn stopwords_do_not_count_as_tokens() {
    // Every word here is either too short or in the fixture stopword list
    let result = classifier().classify("आणि आहे व या होते आता");
    assert_eq!(result.token_count, 0);
}

#[test]
fn empty_input_yields_prior_and_best_guess() {
    let result = classifier().classify("");
    assert_eq!(result.token_count, 0);
    assert_eq!(result.distribution.len(), 5);
    // Symmetric prior: all tied, so topic-id order survives the stable sort
    let order: Vec<&str> = result.distribution.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(order, vec!["Auto", "Tech", "Sports", "Politics", "International"]);
    assert_eq!(result.confident_labels, vec!["Auto"]);
    assert_eq!(result.top_label, "Auto");
}

#[test]
fn distribution_is_sorted_and_sums_to_one() {
    let result = classifier().classify("अमेरिका युद्ध मोबाईल इंटरनेट संगणक गाडी");
    let probs: Vec<f64> = result.distribution.iter().map(|t| t.probability).collect();
    assert!(probs.windows(2).all(|w| w[0] >= w[1]), "{probs:?}");
    let sum: f64 = probs.iter().sum();
    assert!((sum - 1.0).abs() < 1e-9);
}

#[test]
fn dictionary_larger_than_model_is_rejected() {
    let dict = std::env::temp_dir().join(format!("batmi-{}-big-dict.json", std::process::id()));
    std::fs::write(&dict, r#"{ "token2id": { "गाडी": 0, "अवकाश": 99 } }"#).unwrap();

    let config = Config {
        dictionary_path: dict,
        ..fixture_config()
    };
    let err = Classifier::load(&config).err().expect("load should fail");
    assert!(format!("{err:#}").contains("word id 99"), "{err:#}");
}

#[test]
fn missing_stopwords_file_is_fatal() {
    let config = Config {
        stopwords_path: PathBuf::from("/nonexistent/marathi_stopwords.txt"),
        ..fixture_config()
    };
    assert!(Classifier::load(&config).is_err());
}

// ============================================================
// Post-processing through the classifier with fixed outputs
// ============================================================

#[test]
fn fixed_model_outputs_are_labeled_and_sorted() {
    let result = fixed_classifier(vec![0.10, 0.05, 0.45, 0.40]).classify("काहीही");
    let order: Vec<&str> = result.distribution.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(order, vec!["Sports", "Politics", "Auto", "Tech"]);
    assert_eq!(result.confident_labels, vec!["Sports", "Politics"]);
}

#[test]
fn unmapped_topic_ids_get_synthetic_labels() {
    let result =
        fixed_classifier(vec![0.05, 0.05, 0.05, 0.05, 0.05, 0.70, 0.05]).classify("काहीही");
    assert_eq!(result.distribution.len(), 7);
    assert_eq!(result.top_label, "Topic 5");
    assert!(result.distribution.iter().any(|t| t.label == "Topic 6"));
}

#[test]
fn classification_serializes_for_the_api() {
    let result = fixed_classifier(vec![0.7, 0.3]).classify("");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["top_label"], "Auto");
    assert_eq!(json["confident_labels"][0], "Auto");
    assert_eq!(json["distribution"][1]["label"], "Tech");
}
