//! Domain types shared by the index, the engine and the CLI.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

pub type VendorId = String;

pub const MIN_RATING: f64 = 3.0;
pub const MAX_RATING: f64 = 5.0;
pub const MAX_SUCCESS_RATE: u8 = 100;

/// Ordered price band of a vendor: `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CostTier {
    Low,
    Medium,
    High,
}

impl CostTier {
    pub const ALL: [CostTier; 3] = [CostTier::Low, CostTier::Medium, CostTier::High];

    pub fn as_str(self) -> &'static str {
        match self {
            CostTier::Low => "Low",
            CostTier::Medium => "Medium",
            CostTier::High => "High",
        }
    }
}

impl fmt::Display for CostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CostTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        CostTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::data(trimmed, "unknown cost tier (expected Low, Medium or High)"))
    }
}

/// A catalog entry. Built once at load time and never mutated after indexing.
///
/// - `rating` lies in `3.0..=5.0`
/// - `success_rate` is a percentage in `0..=100`
/// - `response_time` is the average first-response time in hours
/// - `description` may be empty; it then never matches a query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorRecord {
    pub id: VendorId,
    pub name: String,
    pub category: String,
    pub cost_tier: CostTier,
    pub rating: f64,
    pub response_time: u32,
    pub success_rate: u8,
    pub description: String,
}

impl VendorRecord {
    /// Checks required fields and numeric bounds.
    pub fn validate(&self) -> Result<()> {
        let label = if self.id.trim().is_empty() { self.name.as_str() } else { self.id.as_str() };
        if self.id.trim().is_empty() {
            return Err(Error::data(label, "missing identifier"));
        }
        if self.name.trim().is_empty() {
            return Err(Error::data(label, "missing name"));
        }
        if self.category.trim().is_empty() {
            return Err(Error::data(label, "missing category"));
        }
        if !self.rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(Error::data(
                label,
                format!("rating {} outside {MIN_RATING}..={MAX_RATING}", self.rating),
            ));
        }
        if self.success_rate > MAX_SUCCESS_RATE {
            return Err(Error::data(
                label,
                format!("success rate {} outside 0..={MAX_SUCCESS_RATE}", self.success_rate),
            ));
        }
        Ok(())
    }
}

/// Structured filters applied as independent conjunctive predicates.
///
/// An empty category or cost-tier set means "no restriction"; a minimum
/// rating of `0.0` means the same. Names that match nothing in the corpus
/// simply exclude everything for that predicate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    categories: BTreeSet<String>,
    cost_tiers: BTreeSet<CostTier>,
    cost_tier_restricted: bool,
    min_rating: f64,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories.extend(categories.into_iter().map(Into::into));
        self
    }

    pub fn with_cost_tiers<I>(mut self, tiers: I) -> Self
    where
        I: IntoIterator<Item = CostTier>,
    {
        for tier in tiers {
            self.cost_tiers.insert(tier);
            self.cost_tier_restricted = true;
        }
        self
    }

    /// Accepts tier names as typed by a user. Unknown names still count as a
    /// restriction, so `["Premium"]` alone matches no record.
    pub fn with_cost_tier_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self.cost_tier_restricted = true;
            match name.as_ref().parse::<CostTier>() {
                Ok(tier) => {
                    self.cost_tiers.insert(tier);
                }
                Err(e) => tracing::debug!("cost tier filter matches nothing: {}", e),
            }
        }
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = if min_rating.is_nan() { 0.0 } else { min_rating };
        self
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    pub fn cost_tiers(&self) -> &BTreeSet<CostTier> {
        &self.cost_tiers
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    pub fn is_unrestricted(&self) -> bool {
        self.categories.is_empty() && !self.cost_tier_restricted && self.min_rating <= 0.0
    }

    pub fn matches(&self, record: &VendorRecord) -> bool {
        let category_ok = self.categories.is_empty() || self.categories.contains(&record.category);
        let tier_ok = !self.cost_tier_restricted || self.cost_tiers.contains(&record.cost_tier);
        category_ok && tier_ok && record.rating >= self.min_rating
    }
}

/// One ranked entry. `confidence` is a percentage with one decimal place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub record: &'a VendorRecord,
    pub confidence: f64,
}

/// A page of recommendations, best first. Borrows records from the index that
/// produced it and owns nothing shared.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult<'a> {
    items: Vec<Recommendation<'a>>,
}

impl<'a> RankedResult<'a> {
    pub fn new(items: Vec<Recommendation<'a>>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Recommendation<'a>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Recommendation<'a>] {
        &self.items
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.items.iter().map(|r| r.record.id.as_str()).collect()
    }
}

impl<'r, 'a> IntoIterator for &'r RankedResult<'a> {
    type Item = &'r Recommendation<'a>;
    type IntoIter = std::slice::Iter<'r, Recommendation<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
