//! Loading of the company and filing datasets from JSON files
//!
//! The client only cares about already-parsed maps; where they come from is
//! a concern of the binary, handled here.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{RawCompany, RawFiling};

pub type CompanyMap = HashMap<String, RawCompany>;
pub type FilingMap = HashMap<String, Vec<RawFiling>>;

/// Load the ticker->company map.
pub fn load_companies(path: &Path) -> Result<CompanyMap> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read companies file: {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Invalid companies file: {}", path.display()))
}

/// Load the CIK->filings map.
pub fn load_filings(path: &Path) -> Result<FilingMap> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read filings file: {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("Invalid filings file: {}", path.display()))
}
