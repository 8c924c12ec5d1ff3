// Topic model trait: the seam between the pipeline and the inference backend.
//
// The pipeline only needs a full per-topic distribution for a bag-of-words.
// The default implementation is variational LDA inference over an exported
// model; tests plug in fixed distributions through the same trait.

/// A sparse document: `(word_id, count)` pairs, sorted by word id.
pub type BagOfWords = Vec<(usize, u32)>;

/// Trait for models that assign a document a distribution over topics.
pub trait TopicModel: Send + Sync {
    /// Number of topics the model knows. Fixed for the model's lifetime.
    fn num_topics(&self) -> usize;

    /// Probability of every topic for the given document.
    ///
    /// Must return exactly `num_topics()` entries, one per topic id in
    /// ascending id order, including near-zero ones. Empty or sparse input
    /// is valid and never an error.
    fn document_topics(&self, bow: &[(usize, u32)]) -> Vec<(usize, f64)>;
}
