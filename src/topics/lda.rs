// Latent Dirichlet Allocation inference over a pretrained, exported model.
//
// The model artifact holds the Dirichlet prior over topics (alpha) and the
// variational topic-word parameters (lambda, one row per topic). Training
// happens elsewhere; this module only runs the per-document variational
// E-step to get a topic distribution for new text.
//
// Artifact format (JSON):
//   {
//     "alpha": [f64; K],
//     "topic_word": [[f64; V]; K],
//     "iterations": 50,          // optional
//     "gamma_threshold": 0.001   // optional
//   }
//
// From a trained gensim LdaModel `lda`: alpha = lda.alpha, topic_word =
// lda.state.get_lambda(), iterations = lda.iterations, gamma_threshold =
// lda.gamma_threshold.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use statrs::function::gamma::digamma;
use tracing::{debug, info};

use super::traits::TopicModel;

/// Maximum E-step iterations per document.
pub const DEFAULT_ITERATIONS: usize = 50;
/// The E-step stops once the mean absolute change of gamma drops below this.
pub const DEFAULT_GAMMA_THRESHOLD: f64 = 0.001;

/// Added to the per-word normaliser so it never divides by zero.
const PHI_EPSILON: f64 = 1e-100;

/// On-disk form of the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LdaArtifact {
    pub alpha: Vec<f64>,
    pub topic_word: Vec<Vec<f64>>,
    #[serde(default)]
    pub iterations: Option<usize>,
    #[serde(default)]
    pub gamma_threshold: Option<f64>,
}

/// A loaded LDA model, ready for inference. Immutable once built.
#[derive(Debug, Clone)]
pub struct LdaModel {
    alpha: Vec<f64>,
    /// exp(E[log beta]) per topic, precomputed from lambda at load time.
    exp_elog_beta: Vec<Vec<f64>>,
    vocab_size: usize,
    iterations: usize,
    gamma_threshold: f64,
}

impl LdaModel {
    /// Load and validate a model artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read topic model {}", path.display()))?;
        let artifact: LdaArtifact = serde_json::from_str(&json)
            .with_context(|| format!("Malformed topic model JSON in {}", path.display()))?;

        let model = Self::from_artifact(artifact)
            .with_context(|| format!("Invalid topic model {}", path.display()))?;

        info!(
            path = %path.display(),
            topics = model.num_topics(),
            vocab_size = model.vocab_size(),
            "Loaded LDA model"
        );
        Ok(model)
    }

    /// Build a model from a deserialized artifact.
    pub fn from_artifact(artifact: LdaArtifact) -> Result<Self> {
        let iterations = artifact.iterations.unwrap_or(DEFAULT_ITERATIONS);
        let gamma_threshold = artifact.gamma_threshold.unwrap_or(DEFAULT_GAMMA_THRESHOLD);

        if iterations == 0 {
            anyhow::bail!("iterations must be at least 1");
        }
        if !gamma_threshold.is_finite() || gamma_threshold < 0.0 {
            anyhow::bail!("gamma_threshold must be a finite, non-negative number");
        }

        let mut model = Self::from_parts(artifact.alpha, artifact.topic_word)?;
        model.iterations = iterations;
        model.gamma_threshold = gamma_threshold;
        Ok(model)
    }

    /// Build a model from alpha and the topic-word (lambda) matrix.
    pub fn from_parts(alpha: Vec<f64>, topic_word: Vec<Vec<f64>>) -> Result<Self> {
        let num_topics = topic_word.len();
        if num_topics == 0 {
            anyhow::bail!("Topic model has no topics");
        }
        if alpha.len() != num_topics {
            anyhow::bail!(
                "alpha has {} entries but the model has {} topics",
                alpha.len(),
                num_topics
            );
        }
        if let Some(bad) = alpha.iter().find(|a| !a.is_finite() || **a <= 0.0) {
            anyhow::bail!("alpha entries must be finite and positive, found {bad}");
        }

        let vocab_size = topic_word[0].len();
        if vocab_size == 0 {
            anyhow::bail!("Topic model has an empty vocabulary");
        }

        let mut exp_elog_beta = Vec::with_capacity(num_topics);
        for (topic_id, row) in topic_word.iter().enumerate() {
            if row.len() != vocab_size {
                anyhow::bail!(
                    "Topic {topic_id} has {} word weights, expected {vocab_size}",
                    row.len()
                );
            }
            if row.iter().any(|w| !w.is_finite() || *w <= 0.0) {
                anyhow::bail!("Topic {topic_id} has a non-finite or non-positive word weight");
            }
            exp_elog_beta.push(exp_dirichlet_expectation(row));
        }

        Ok(Self {
            alpha,
            exp_elog_beta,
            vocab_size,
            iterations: DEFAULT_ITERATIONS,
            gamma_threshold: DEFAULT_GAMMA_THRESHOLD,
        })
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    /// Run the variational E-step and return the unnormalised gamma.
    fn infer_gamma(&self, bow: &[(usize, u32)]) -> Vec<f64> {
        // Word ids beyond the vocabulary cannot come from a matching
        // dictionary; skip them rather than index out of bounds.
        let bow: Vec<(usize, f64)> = bow
            .iter()
            .filter(|(word_id, _)| *word_id < self.vocab_size)
            .map(|&(word_id, count)| (word_id, count as f64))
            .collect();

        if bow.is_empty() {
            return self.alpha.clone();
        }

        let num_topics = self.num_topics();
        let total: f64 = bow.iter().map(|(_, count)| count).sum();
        let mut gamma: Vec<f64> = self
            .alpha
            .iter()
            .map(|a| a + total / num_topics as f64)
            .collect();
        let mut exp_elog_theta = exp_dirichlet_expectation(&gamma);
        let mut phinorm = self.phinorm(&exp_elog_theta, &bow);

        for iteration in 0..self.iterations {
            let last_gamma = gamma.clone();

            for (topic_id, g) in gamma.iter_mut().enumerate() {
                let beta = &self.exp_elog_beta[topic_id];
                let weighted: f64 = bow
                    .iter()
                    .zip(&phinorm)
                    .map(|(&(word_id, count), norm)| count / norm * beta[word_id])
                    .sum();
                *g = self.alpha[topic_id] + exp_elog_theta[topic_id] * weighted;
            }

            exp_elog_theta = exp_dirichlet_expectation(&gamma);
            phinorm = self.phinorm(&exp_elog_theta, &bow);

            let mean_change = gamma
                .iter()
                .zip(&last_gamma)
                .map(|(new, old)| (new - old).abs())
                .sum::<f64>()
                / num_topics as f64;

            if mean_change < self.gamma_threshold {
                debug!(iterations = iteration + 1, "E-step converged");
                break;
            }
        }

        gamma
    }

    /// Per-word normaliser: sum over topics of exp(E[log theta]) * exp(E[log beta]).
    fn phinorm(&self, exp_elog_theta: &[f64], bow: &[(usize, f64)]) -> Vec<f64> {
        bow.iter()
            .map(|&(word_id, _)| {
                exp_elog_theta
                    .iter()
                    .zip(&self.exp_elog_beta)
                    .map(|(theta, beta)| theta * beta[word_id])
                    .sum::<f64>()
                    + PHI_EPSILON
            })
            .collect()
    }
}

impl TopicModel for LdaModel {
    fn num_topics(&self) -> usize {
        self.alpha.len()
    }

    fn document_topics(&self, bow: &[(usize, u32)]) -> Vec<(usize, f64)> {
        let gamma = self.infer_gamma(bow);
        let total: f64 = gamma.iter().sum();
        gamma
            .into_iter()
            .enumerate()
            .map(|(topic_id, g)| (topic_id, g / total))
            .collect()
    }
}

/// exp(E[log x]) for x ~ Dirichlet(params): exp(ψ(p_i) − ψ(Σ p)).
fn exp_dirichlet_expectation(params: &[f64]) -> Vec<f64> {
    let psi_total = digamma(params.iter().sum());
    params
        .iter()
        .map(|p| (digamma(*p) - psi_total).exp())
        .collect()
}
