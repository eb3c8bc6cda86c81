//! In-memory corpus index.
//!
//! Built once from the full catalog and read-only afterwards. Each record gets
//! an L2-normalized vector of `count * idf` weights with
//! `idf = ln((1 + N) / (1 + df)) + 1`.

use std::collections::BTreeMap;

use vendormatch_core::error::{Error, Result};
use vendormatch_core::types::VendorRecord;

use crate::analyzer::Analyzer;
use crate::vector::SparseVector;
use crate::vocabulary::Vocabulary;

#[derive(Debug)]
pub struct CorpusIndex {
    analyzer: Analyzer,
    records: Vec<VendorRecord>,
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    documents: Vec<SparseVector>,
}

fn term_counts(analyzer: &Analyzer, vocabulary: &mut Vocabulary, text: &str) -> BTreeMap<usize, u32> {
    let mut counts = BTreeMap::new();
    for term in analyzer.analyze(text) {
        *counts.entry(vocabulary.intern(&term)).or_insert(0) += 1;
    }
    counts
}

fn smoothed_idf(total: usize, df: usize) -> f64 {
    ((1.0 + total as f64) / (1.0 + df as f64)).ln() + 1.0
}

impl CorpusIndex {
    /// Indexes `records`. Stops at the first invalid record.
    pub fn build(records: Vec<VendorRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::EmptyCorpus);
        }
        for record in &records {
            record.validate()?;
        }

        let analyzer = Analyzer::new();
        let mut vocabulary = Vocabulary::default();
        let counts: Vec<BTreeMap<usize, u32>> = records
            .iter()
            .map(|r| term_counts(&analyzer, &mut vocabulary, &r.description))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for doc in &counts {
            for &col in doc.keys() {
                df[col] += 1;
            }
        }
        let idf: Vec<f64> = df.iter().map(|&d| smoothed_idf(records.len(), d)).collect();

        let documents: Vec<SparseVector> = counts
            .into_iter()
            .map(|doc| {
                let entries = doc.into_iter().map(|(col, n)| (col, f64::from(n) * idf[col])).collect();
                SparseVector::from_entries(entries).l2_normalize()
            })
            .collect();

        let empty = documents.iter().filter(|d| d.is_zero()).count();
        if empty > 0 {
            tracing::debug!(empty, "records without indexable description terms");
        }
        tracing::info!(
            records = records.len(),
            terms = vocabulary.len(),
            "corpus index built"
        );

        Ok(Self { analyzer, records, vocabulary, idf, documents })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[VendorRecord] {
        &self.records
    }

    pub fn record(&self, i: usize) -> Option<&VendorRecord> {
        self.records.get(i)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Corpus idf of `term`, `None` when it is out of vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.column(term).map(|col| self.idf[col])
    }

    pub fn document_vector(&self, i: usize) -> Option<&SparseVector> {
        self.documents.get(i)
    }

    /// Projects free text into the corpus space. Unknown terms are dropped.
    pub fn project(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, u32> = BTreeMap::new();
        for term in self.analyzer.analyze(text) {
            if let Some(col) = self.vocabulary.column(&term) {
                *counts.entry(col).or_insert(0) += 1;
            }
        }
        let entries = counts.into_iter().map(|(col, n)| (col, f64::from(n) * self.idf[col])).collect();
        SparseVector::from_entries(entries).l2_normalize()
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for r in &self.records {
            if !seen.contains(&r.category.as_str()) {
                seen.push(&r.category);
            }
        }
        seen
    }
}
