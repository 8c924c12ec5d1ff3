// Classifier: the whole pipeline behind one read-only handle.
//
//   raw text -> normalize -> tokenize/stopwords -> bag-of-words
//            -> topic model -> labels -> sort -> confident labels
//
// Everything the classifier holds is loaded once at startup and never
// mutated, so a single Arc<Classifier> is shared by all request handlers
// without locking.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::Config;
use crate::text::{preprocess, StopwordSet};
use crate::topics::dictionary::Dictionary;
use crate::topics::distribution::{
    infer_confident_labels, sort_descending, top_label, ConfidenceThresholds, LabeledTopic,
    TopicDistribution,
};
use crate::topics::labels::label_for;
use crate::topics::lda::LdaModel;
use crate::topics::traits::TopicModel;

/// Result of classifying one piece of text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    /// Label of the most probable topic
    pub top_label: String,
    /// Every topic, highest probability first
    pub distribution: TopicDistribution,
    /// Labels chosen by the cumulative-probability rules
    pub confident_labels: Vec<String>,
    /// Tokens that survived preprocessing (before vocabulary lookup)
    pub token_count: usize,
}

pub struct Classifier {
    stopwords: StopwordSet,
    dictionary: Dictionary,
    model: Arc<dyn TopicModel>,
    thresholds: ConfidenceThresholds,
}

impl Classifier {
    pub fn new(
        stopwords: StopwordSet,
        dictionary: Dictionary,
        model: Arc<dyn TopicModel>,
        thresholds: ConfidenceThresholds,
    ) -> Self {
        Self {
            stopwords,
            dictionary,
            model,
            thresholds,
        }
    }

    /// Load stopwords, dictionary and model from the configured paths.
    ///
    /// Any missing or malformed resource is an error; callers treat it as
    /// fatal and never start serving.
    pub fn load(config: &Config) -> Result<Self> {
        let stopwords = StopwordSet::load(&config.stopwords_path)?;
        let dictionary = Dictionary::load(&config.dictionary_path)?;
        let model = LdaModel::load(&config.model_path)?;

        if let Some(max_id) = dictionary.max_id() {
            if max_id >= model.vocab_size() {
                anyhow::bail!(
                    "Dictionary {} references word id {max_id}, but the model only has {} words",
                    config.dictionary_path.display(),
                    model.vocab_size()
                );
            }
        }

        info!(
            topics = model.num_topics(),
            vocab_size = model.vocab_size(),
            stopwords = stopwords.len(),
            "Classifier ready"
        );

        Ok(Self::new(
            stopwords,
            dictionary,
            Arc::new(model),
            config.thresholds,
        ))
    }

    pub fn num_topics(&self) -> usize {
        self.model.num_topics()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.dictionary.len()
    }

    pub fn thresholds(&self) -> &ConfidenceThresholds {
        &self.thresholds
    }

    /// Normalize and tokenize raw input.
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        preprocess(text, &self.stopwords)
    }

    /// Labeled distribution over every topic, in topic-id order.
    pub fn infer<S: AsRef<str>>(&self, tokens: &[S]) -> TopicDistribution {
        let bow = self.dictionary.doc2bow(tokens);
        debug!(
            tokens = tokens.len(),
            known = bow.len(),
            "Built bag-of-words"
        );
        self.model
            .document_topics(&bow)
            .into_iter()
            .map(|(topic_id, probability)| LabeledTopic::new(label_for(topic_id), probability))
            .collect()
    }

    /// Run the full pipeline on raw text. Never fails.
    pub fn classify(&self, text: &str) -> Classification {
        let tokens = self.preprocess(text);
        let distribution = sort_descending(self.infer(&tokens));
        let confident_labels = infer_confident_labels(&distribution, &self.thresholds);

        Classification {
            top_label: top_label(&distribution),
            distribution,
            confident_labels,
            token_count: tokens.len(),
        }
    }
}

/// Load the classifier with context naming the failing step.
pub fn load_shared(config: &Config) -> Result<Arc<Classifier>> {
    let classifier = Classifier::load(config).context("Failed to load classifier resources")?;
    Ok(Arc::new(classifier))
}
