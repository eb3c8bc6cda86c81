//! vendormatch-index
//!
//! Term-weighted vector index over the vendor catalog. See `index` for the
//! weighting scheme and `analyzer` for the pinned tokenization rules.
pub mod analyzer;
pub mod index;
pub mod vector;
pub mod vocabulary;

pub use analyzer::{Analyzer, STOPWORDS, STOPWORDS_VERSION};
pub use index::CorpusIndex;
pub use vector::SparseVector;
pub use vocabulary::Vocabulary;
