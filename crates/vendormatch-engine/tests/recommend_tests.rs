use std::sync::Arc;

use vendormatch_core::synth;
use vendormatch_core::{CostTier, Error, FilterCriteria, Recommender, VendorRecord};
use vendormatch_engine::{recommend, RecommendationEngine, DEFAULT_PAGE_SIZE};
use vendormatch_index::CorpusIndex;

fn vendor(id: &str, category: &str, tier: CostTier, rating: f64, description: &str) -> VendorRecord {
    VendorRecord {
        id: id.to_string(),
        name: format!("Vendor {id}"),
        category: category.to_string(),
        cost_tier: tier,
        rating,
        response_time: 6,
        success_rate: 88,
        description: description.to_string(),
    }
}

fn payroll_and_recruitment() -> CorpusIndex {
    CorpusIndex::build(vec![
        vendor("p1", "Payroll", CostTier::Low, 4.0, "automated payroll processing for small business"),
        vendor("r1", "Recruitment", CostTier::High, 4.5, "executive recruitment search"),
    ])
    .expect("build")
}

#[test]
fn payroll_query_ranks_payroll_vendor_first() {
    let index = payroll_and_recruitment();
    let page = recommend(&index, Some("payroll automation"), &FilterCriteria::new(), 10).unwrap();
    assert_eq!(page.ids(), vec!["p1", "r1"]);
    assert_eq!(page.as_slice()[0].confidence, 44.7);
    assert_eq!(page.as_slice()[1].confidence, 0.0);
}

#[test]
fn category_filter_keeps_only_matching_records() {
    let index = payroll_and_recruitment();
    let filters = FilterCriteria::new().with_category("Recruitment");
    let page = recommend(&index, Some("payroll automation"), &filters, 10).unwrap();
    assert_eq!(page.ids(), vec!["r1"]);
    assert_eq!(page.as_slice()[0].confidence, 0.0);
}

#[test]
fn non_positive_page_size_is_rejected() {
    let index = payroll_and_recruitment();
    for size in [0, -1] {
        match recommend(&index, Some("payroll"), &FilterCriteria::new(), size) {
            Err(Error::InvalidPageSize(n)) => assert_eq!(n, size),
            other => panic!("expected InvalidPageSize, got {other:?}"),
        }
    }
}

#[test]
fn empty_query_orders_by_rating_then_id() {
    let index = CorpusIndex::build(vec![
        vendor("c", "DEI", CostTier::Low, 4.5, "inclusive culture"),
        vendor("a", "DEI", CostTier::Low, 4.5, "bias training"),
        vendor("b", "Payroll", CostTier::High, 4.8, "payroll"),
        vendor("d", "Benefits", CostTier::Medium, 3.2, "wellness"),
    ])
    .unwrap();
    for query in [None, Some(""), Some("   ")] {
        let page = recommend(&index, query, &FilterCriteria::new(), 3).unwrap();
        assert_eq!(page.ids(), vec!["b", "a", "c"]);
        assert!(page.iter().all(|r| r.confidence == 0.0));
    }
}

#[test]
fn equal_confidence_breaks_ties_by_rating_then_id() {
    let index = CorpusIndex::build(vec![
        vendor("z", "Payroll", CostTier::Low, 4.0, "payroll"),
        vendor("y", "Payroll", CostTier::Low, 4.0, "payroll"),
        vendor("x", "Payroll", CostTier::Low, 4.6, "payroll"),
        vendor("w", "DEI", CostTier::Low, 5.0, "mentorship"),
    ])
    .unwrap();
    let page = recommend(&index, Some("payroll"), &FilterCriteria::new(), 10).unwrap();
    assert_eq!(page.ids(), vec!["x", "y", "z", "w"]);
    assert_eq!(page.as_slice()[0].confidence, 100.0);
}

#[test]
fn nothing_passing_filters_is_an_empty_page() {
    let index = payroll_and_recruitment();
    let filters = FilterCriteria::new().with_min_rating(5.0);
    assert!(recommend(&index, Some("payroll"), &filters, 5).unwrap().is_empty());

    let unknown_tier = FilterCriteria::new().with_cost_tier_names(["Premium"]);
    assert!(recommend(&index, None, &unknown_tier, 5).unwrap().is_empty());
}

#[test]
fn out_of_vocabulary_query_scores_zero() {
    let index = payroll_and_recruitment();
    let page = recommend(&index, Some("blockchain quantum"), &FilterCriteria::new(), 10).unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.iter().all(|r| r.confidence == 0.0));
    assert_eq!(page.ids(), vec!["r1", "p1"]);
}

#[test]
fn page_size_truncates_and_default_is_ten() {
    let index = CorpusIndex::build(synth::generate(40, 5)).unwrap();
    let page = recommend(&index, Some("payroll compliance"), &FilterCriteria::new(), DEFAULT_PAGE_SIZE).unwrap();
    assert_eq!(page.len(), 10);
    let big = recommend(&index, Some("payroll compliance"), &FilterCriteria::new(), i64::MAX).unwrap();
    assert_eq!(big.len(), 40);
}

#[test]
fn repeated_calls_are_identical() {
    let index = CorpusIndex::build(synth::generate(60, 9)).unwrap();
    let filters = FilterCriteria::new().with_cost_tiers([CostTier::Medium, CostTier::High]);
    let first = recommend(&index, Some("leadership training"), &filters, 15).unwrap();
    let second = recommend(&index, Some("leadership training"), &filters, 15).unwrap();
    assert_eq!(first, second);
}

#[test]
fn engine_serves_concurrent_queries() {
    let engine = RecommendationEngine::new(Arc::new(CorpusIndex::build(synth::generate(80, 3)).unwrap()));
    let expected = engine.recommend(Some("global payroll"), &FilterCriteria::new(), 5).unwrap().ids();
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..20 {
                    let page = engine.recommend(Some("global payroll"), &FilterCriteria::new(), 5).unwrap();
                    assert_eq!(page.ids(), expected);
                }
            });
        }
    });
}

#[test]
fn json_output_lists_records_with_confidence() {
    let index = payroll_and_recruitment();
    let page = recommend(&index, Some("payroll"), &FilterCriteria::new(), 1).unwrap();
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["record"]["id"], "p1");
}
