use proptest::prelude::*;
use vendormatch_core::{CostTier, Error, VendorRecord};
use vendormatch_index::CorpusIndex;

fn vendor(id: &str, category: &str, description: &str) -> VendorRecord {
    VendorRecord {
        id: id.to_string(),
        name: format!("Vendor {id}"),
        category: category.to_string(),
        cost_tier: CostTier::Medium,
        rating: 4.0,
        response_time: 8,
        success_rate: 85,
        description: description.to_string(),
    }
}

fn two_vendor_corpus() -> CorpusIndex {
    CorpusIndex::build(vec![
        vendor("p1", "Payroll", "automated payroll processing for small business"),
        vendor("r1", "Recruitment", "executive recruitment search"),
    ])
    .expect("build")
}

#[test]
fn vocabulary_follows_first_seen_order() {
    let index = two_vendor_corpus();
    let terms: Vec<&str> = index.vocabulary().terms().iter().map(String::as_str).collect();
    assert_eq!(
        terms,
        vec!["automated", "payroll", "processing", "small", "business", "executive", "recruitment", "search"]
    );
    assert_eq!(index.categories(), vec!["Payroll", "Recruitment"]);
}

#[test]
fn idf_is_smoothed() {
    let index = CorpusIndex::build(vec![
        vendor("a", "Payroll", "payroll"),
        vendor("b", "Payroll", "payroll benefits"),
    ])
    .expect("build");
    // N = 2: df 2 gives 1.0, df 1 gives ln(1.5) + 1
    assert!((index.idf("payroll").unwrap() - 1.0).abs() < 1e-12);
    assert!((index.idf("benefits").unwrap() - (1.5f64.ln() + 1.0)).abs() < 1e-12);
    assert_eq!(index.idf("unknown"), None);
}

#[test]
fn document_vectors_are_unit_length() {
    let index = two_vendor_corpus();
    for i in 0..index.len() {
        let v = index.document_vector(i).unwrap();
        assert!((v.norm() - 1.0).abs() < 1e-9);
    }
    let doc = index.document_vector(0).unwrap();
    let col = index.vocabulary().column("payroll").unwrap();
    assert!((doc.get(col) - 1.0 / 5f64.sqrt()).abs() < 1e-9);
}

#[test]
fn repeated_terms_weigh_more() {
    let index = CorpusIndex::build(vec![
        vendor("a", "Payroll", "payroll payroll audit"),
        vendor("b", "DEI", "inclusion"),
    ])
    .expect("build");
    let doc = index.document_vector(0).unwrap();
    let payroll = doc.get(index.vocabulary().column("payroll").unwrap());
    let audit = doc.get(index.vocabulary().column("audit").unwrap());
    assert!((payroll - 2.0 * audit).abs() < 1e-9);
}

#[test]
fn description_without_terms_keeps_zero_vector() {
    let index = CorpusIndex::build(vec![
        vendor("a", "Payroll", "payroll"),
        vendor("b", "DEI", ""),
        vendor("c", "DEI", "the and of"),
    ])
    .expect("build");
    assert!(index.document_vector(1).unwrap().is_zero());
    assert!(index.document_vector(2).unwrap().is_zero());
    assert_eq!(index.vocabulary().len(), 1);
}

#[test]
fn projection_drops_unknown_terms() {
    let index = two_vendor_corpus();
    let q = index.project("Payroll automation!");
    assert_eq!(q.entries().len(), 1);
    assert!((q.norm() - 1.0).abs() < 1e-12);
    assert!(index.project("blockchain synergy").is_zero());
    let sim = q.dot(index.document_vector(0).unwrap());
    assert!((sim - 1.0 / 5f64.sqrt()).abs() < 1e-9);
}

#[test]
fn empty_corpus_is_rejected() {
    assert!(matches!(CorpusIndex::build(Vec::new()), Err(Error::EmptyCorpus)));
}

#[test]
fn invalid_record_aborts_build() {
    let mut bad = vendor("bad1", "Payroll", "payroll");
    bad.rating = 6.0;
    match CorpusIndex::build(vec![vendor("ok", "Payroll", "payroll"), bad]) {
        Err(Error::Data { record, reason }) => {
            assert_eq!(record, "bad1");
            assert!(reason.contains("rating"));
        }
        other => panic!("expected data error, got {other:?}"),
    }

    let mut nameless = vendor("n1", "Payroll", "payroll");
    nameless.name.clear();
    assert!(matches!(CorpusIndex::build(vec![nameless]), Err(Error::Data { .. })));
}

#[test]
fn index_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CorpusIndex>();
}

proptest! {
    #[test]
    fn every_document_is_unit_or_zero(descriptions in prop::collection::vec("[a-z ]{0,40}", 1..12)) {
        let records: Vec<VendorRecord> = descriptions
            .iter()
            .enumerate()
            .map(|(i, d)| vendor(&format!("v{i}"), "Payroll", d))
            .collect();
        let index = CorpusIndex::build(records).unwrap();
        for i in 0..index.len() {
            let v = index.document_vector(i).unwrap();
            prop_assert!(v.is_zero() || (v.norm() - 1.0).abs() < 1e-9);
        }
    }
}
