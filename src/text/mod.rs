// Text preprocessing: normalization, stopword filtering, tokenization.
//
// Everything here is pure: the same input always produces the same tokens,
// and nothing touches shared state beyond the read-only stopword set.

pub mod normalize;
pub mod stopwords;
pub mod tokenize;

pub use normalize::normalize;
pub use stopwords::StopwordSet;
pub use tokenize::{preprocess, tokenize};
