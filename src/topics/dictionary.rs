// Vocabulary: maps tokens to the word ids the topic model was trained on.
//
// Exported as JSON: { "token2id": { "शब्द": 0, ... } }
// From a gensim Dictionary `dictionary`: token2id = dictionary.token2id.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::traits::BagOfWords;

/// Fixed token → id mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dictionary {
    token2id: HashMap<String, usize>,
}

impl Dictionary {
    /// Load the dictionary artifact from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary {}", path.display()))?;
        let dictionary: Dictionary = serde_json::from_str(&json)
            .with_context(|| format!("Malformed dictionary JSON in {}", path.display()))?;

        if dictionary.token2id.is_empty() {
            anyhow::bail!("Dictionary {} contains no tokens", path.display());
        }

        info!(
            path = %path.display(),
            tokens = dictionary.len(),
            "Loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.token2id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token2id.is_empty()
    }

    /// Largest word id, if any. Used to check the dictionary fits the model.
    pub fn max_id(&self) -> Option<usize> {
        self.token2id.values().copied().max()
    }

    pub fn id(&self, token: &str) -> Option<usize> {
        self.token2id.get(token).copied()
    }

    /// Convert tokens to `(word_id, count)` pairs sorted by id.
    ///
    /// Tokens missing from the vocabulary are dropped silently.
    pub fn doc2bow<S: AsRef<str>>(&self, tokens: &[S]) -> BagOfWords {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for token in tokens {
            if let Some(id) = self.id(token.as_ref()) {
                *counts.entry(id).or_insert(0) += 1;
            }
        }
        counts.into_iter().collect()
    }
}

impl FromIterator<(String, usize)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self {
            token2id: iter.into_iter().collect(),
        }
    }
}
