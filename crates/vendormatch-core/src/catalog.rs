//! Catalog ingestion and export.
//!
//! The on-disk catalog is a CSV file with the header
//! `Vendor_ID,Name,Category,Cost_Tier,Rating,Response_Time,Success_Rate,Description`.
//! Range checks are left to index building; this module only rejects rows it
//! cannot turn into a [`VendorRecord`].

use serde::Deserialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{CostTier, RankedResult, VendorRecord};

pub const HEADER: [&str; 8] = [
    "Vendor_ID",
    "Name",
    "Category",
    "Cost_Tier",
    "Rating",
    "Response_Time",
    "Success_Rate",
    "Description",
];

pub const CONFIDENCE_COLUMN: &str = "Match_Confidence";

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(rename = "Vendor_ID")]
    id: Option<String>,
    #[serde(rename = "Name")]
    name: Option<String>,
    #[serde(rename = "Category")]
    category: Option<String>,
    #[serde(rename = "Cost_Tier")]
    cost_tier: Option<String>,
    #[serde(rename = "Rating")]
    rating: Option<String>,
    #[serde(rename = "Response_Time")]
    response_time: Option<String>,
    #[serde(rename = "Success_Rate")]
    success_rate: Option<String>,
    #[serde(rename = "Description")]
    description: Option<String>,
}

impl CatalogRow {
    fn into_record(self, line: usize) -> Result<VendorRecord> {
        let label = format!("line {line}");
        let required = |value: Option<String>, column: &str| -> Result<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| Error::data(&label, format!("missing {column}")))
        };
        let id = required(self.id, "Vendor_ID")?;
        let name = required(self.name, "Name")?;
        let category = required(self.category, "Category")?;
        let cost_tier = required(self.cost_tier, "Cost_Tier")?
            .parse::<CostTier>()
            .map_err(|e| Error::data(&label, e.to_string()))?;
        let rating = parse_number::<f64>(required(self.rating, "Rating")?, "Rating", &label)?;
        let response_time =
            parse_number::<u32>(required(self.response_time, "Response_Time")?, "Response_Time", &label)?;
        let success_rate =
            parse_number::<u8>(required(self.success_rate, "Success_Rate")?, "Success_Rate", &label)?;
        Ok(VendorRecord {
            id,
            name,
            category,
            cost_tier,
            rating,
            response_time,
            success_rate,
            description: self.description.unwrap_or_default(),
        })
    }
}

fn parse_number<T: std::str::FromStr>(raw: String, column: &str, label: &str) -> Result<T> {
    raw.parse::<T>()
        .map_err(|_| Error::data(label, format!("{column} '{raw}' is not a valid number")))
}

pub fn load_csv(path: &Path) -> Result<Vec<VendorRecord>> {
    let file = File::open(path)
        .map_err(|e| Error::Catalog(format!("Failed to open {}: {e}", path.display())))?;
    let records = read_csv(file)?;
    tracing::info!(path = %path.display(), count = records.len(), "catalog loaded");
    Ok(records)
}

pub fn read_csv<R: Read>(reader: R) -> Result<Vec<VendorRecord>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut records = Vec::new();
    for (index, row) in reader.deserialize::<CatalogRow>().enumerate() {
        let line = index + 2;
        let row = row.map_err(|e| Error::Catalog(format!("line {line}: {e}")))?;
        records.push(row.into_record(line)?);
    }
    Ok(records)
}

pub fn save_csv(path: &Path, records: &[VendorRecord]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| Error::Catalog(format!("Failed to create {}: {e}", path.display())))?;
    write_csv(file, records)?;
    tracing::info!(path = %path.display(), count = records.len(), "catalog written");
    Ok(())
}

pub fn write_csv<W: Write>(writer: W, records: &[VendorRecord]) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER).map_err(csv_error)?;
    for record in records {
        out.write_record(row_fields(record)).map_err(csv_error)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes a result page with a trailing `Match_Confidence` column.
pub fn write_ranked_csv<W: Write>(writer: W, ranked: &RankedResult<'_>) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER.iter().copied().chain([CONFIDENCE_COLUMN]))
        .map_err(csv_error)?;
    for item in ranked {
        let mut fields = row_fields(item.record).to_vec();
        fields.push(format!("{:.1}", item.confidence));
        out.write_record(&fields).map_err(csv_error)?;
    }
    out.flush()?;
    Ok(())
}

fn row_fields(record: &VendorRecord) -> [String; 8] {
    [
        record.id.clone(),
        record.name.clone(),
        record.category.clone(),
        record.cost_tier.to_string(),
        record.rating.to_string(),
        record.response_time.to_string(),
        record.success_rate.to_string(),
        record.description.clone(),
    ]
}

fn csv_error(e: csv::Error) -> Error {
    Error::Catalog(e.to_string())
}
