//! Query scoring, filtering and truncation over a [`CorpusIndex`].

use std::sync::Arc;

use vendormatch_core::error::{Error, Result};
use vendormatch_core::{FilterCriteria, RankedResult, Recommendation, Recommender};
use vendormatch_index::CorpusIndex;

use crate::ordering::rank_order;

pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maps cosine similarity to a percentage with one decimal, half away from zero.
pub fn confidence_from_similarity(similarity: f64) -> f64 {
    let rounded = (similarity * 100.0 * 10.0).round() / 10.0;
    // NaN and negative zero both land on 0.0
    if rounded.is_nan() || rounded <= 0.0 {
        return 0.0;
    }
    rounded.min(100.0)
}

/// Ranks every record that passes `filters` and keeps the best `page_size`.
///
/// A missing or blank query scores every record 0 and orders by rating.
/// Scores live only in the returned page; the index is never touched.
pub fn recommend<'a>(
    index: &'a CorpusIndex,
    query: Option<&str>,
    filters: &FilterCriteria,
    page_size: i64,
) -> Result<RankedResult<'a>> {
    if page_size <= 0 {
        return Err(Error::InvalidPageSize(page_size));
    }
    if index.is_empty() {
        return Err(Error::EmptyCorpus);
    }

    let query = query.map(str::trim).filter(|q| !q.is_empty());
    let projected = query.map(|q| index.project(q));
    if projected.as_ref().is_some_and(|v| v.is_zero()) {
        tracing::debug!("query has no terms in the corpus vocabulary");
    }

    let mut items: Vec<Recommendation<'a>> = index
        .records()
        .iter()
        .enumerate()
        .filter(|(_, record)| filters.matches(record))
        .map(|(i, record)| {
            let confidence = match (&projected, index.document_vector(i)) {
                (Some(q), Some(doc)) => confidence_from_similarity(q.dot(doc)),
                _ => 0.0,
            };
            Recommendation { record, confidence }
        })
        .collect();

    let has_query = query.is_some();
    items.sort_by(|a, b| rank_order(has_query, a, b));
    let matched = items.len();
    items.truncate(usize::try_from(page_size).unwrap_or(usize::MAX));

    tracing::debug!(
        matched,
        returned = items.len(),
        has_query,
        unrestricted = filters.is_unrestricted(),
        "recommendation page ranked"
    );
    Ok(RankedResult::new(items))
}

/// A shareable [`Recommender`] over one built index.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    index: Arc<CorpusIndex>,
}

impl RecommendationEngine {
    pub fn new(index: Arc<CorpusIndex>) -> Self {
        Self { index }
    }

    pub fn from_index(index: CorpusIndex) -> Self {
        Self::new(Arc::new(index))
    }

    pub fn index(&self) -> &CorpusIndex {
        &self.index
    }
}

impl Recommender for RecommendationEngine {
    fn recommend(
        &self,
        query: Option<&str>,
        filters: &FilterCriteria,
        page_size: i64,
    ) -> Result<RankedResult<'_>> {
        recommend(&self.index, query, filters, page_size)
    }
}
