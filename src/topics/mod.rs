// Topic inference: vocabulary lookup, LDA inference, labels and
// distribution post-processing.

pub mod dictionary;
pub mod distribution;
pub mod labels;
pub mod lda;
pub mod traits;
