//! vendormatch-engine
//!
//! Ranks catalog records for a query and structured filters. `recommend` is
//! the stateless entry point; `RecommendationEngine` wraps a shared index
//! behind the `Recommender` trait.
pub mod analytics;
pub mod ordering;
pub mod recommend;

pub use analytics::{response_by_tier, summarize, CategorySummary, TierResponseSummary};
pub use recommend::{confidence_from_similarity, recommend, RecommendationEngine, DEFAULT_PAGE_SIZE};
