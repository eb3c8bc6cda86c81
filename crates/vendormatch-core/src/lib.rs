//! vendormatch-core
//!
//! Domain types, errors and configuration shared by the index, the engine and
//! the CLI, plus the catalog collaborators (CSV ingestion/export and the
//! synthetic demo catalog).

pub mod catalog;
pub mod config;
pub mod error;
pub mod synth;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::Recommender;
pub use types::{CostTier, FilterCriteria, RankedResult, Recommendation, VendorId, VendorRecord};
