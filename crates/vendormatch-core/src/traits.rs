use crate::error::Result;
use crate::types::{FilterCriteria, RankedResult};

/// Anything that can turn a query plus filters into a ranked page.
///
/// Implementations must not mutate shared state while answering, so one
/// instance can serve concurrent callers.
pub trait Recommender: Send + Sync {
    fn recommend(
        &self,
        query: Option<&str>,
        filters: &FilterCriteria,
        page_size: i64,
    ) -> Result<RankedResult<'_>>;
}
