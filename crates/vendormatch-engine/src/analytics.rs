//! Market summaries over the catalog: per-category means and the
//! response-time spread of each cost tier.

use serde::Serialize;
use std::collections::BTreeMap;

use vendormatch_core::{CostTier, VendorRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: String,
    pub count: usize,
    pub mean_rating: f64,
    pub mean_success_rate: f64,
    pub mean_response_time: f64,
}

#[derive(Default)]
struct Totals {
    count: usize,
    rating: f64,
    success: f64,
    response: f64,
}

/// Groups by category, best mean success rate first, ties by name.
pub fn summarize(records: &[VendorRecord]) -> Vec<CategorySummary> {
    let mut totals: BTreeMap<&str, Totals> = BTreeMap::new();
    for r in records {
        let t = totals.entry(r.category.as_str()).or_default();
        t.count += 1;
        t.rating += r.rating;
        t.success += f64::from(r.success_rate);
        t.response += f64::from(r.response_time);
    }

    let mut summaries: Vec<CategorySummary> = totals
        .into_iter()
        .map(|(category, t)| {
            let n = t.count as f64;
            CategorySummary {
                category: category.to_string(),
                count: t.count,
                mean_rating: t.rating / n,
                mean_success_rate: t.success / n,
                mean_response_time: t.response / n,
            }
        })
        .collect();
    summaries.sort_by(|a, b| {
        b.mean_success_rate
            .total_cmp(&a.mean_success_rate)
            .then_with(|| a.category.cmp(&b.category))
    });
    summaries
}

/// Response-time distribution (hours) of one cost tier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierResponseSummary {
    pub cost_tier: CostTier,
    pub count: usize,
    pub min: u32,
    pub median: f64,
    pub mean: f64,
    pub max: u32,
}

fn median(sorted: &[u32]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    } else {
        f64::from(sorted[mid])
    }
}

/// One entry per tier present in `records`, ordered `Low`, `Medium`, `High`.
pub fn response_by_tier(records: &[VendorRecord]) -> Vec<TierResponseSummary> {
    let mut by_tier: BTreeMap<CostTier, Vec<u32>> = BTreeMap::new();
    for r in records {
        by_tier.entry(r.cost_tier).or_default().push(r.response_time);
    }
    by_tier
        .into_iter()
        .filter_map(|(cost_tier, mut times)| {
            times.sort_unstable();
            let (&min, &max) = (times.first()?, times.last()?);
            let total: f64 = times.iter().copied().map(f64::from).sum();
            Some(TierResponseSummary {
                cost_tier,
                count: times.len(),
                min,
                median: median(&times),
                mean: total / times.len() as f64,
                max,
            })
        })
        .collect()
}
