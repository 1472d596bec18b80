//! Company lookup, filing catalog, and filing download against SEC EDGAR

use std::collections::HashMap;

use chrono::NaiveDate;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::SecError;
use crate::models::{Company, Filing, FilingFilter, RawCompany, RawFiling};

/// Client over the in-memory company and filing datasets, plus the EDGAR
/// archive endpoint for document downloads. The maps are loaded once and
/// read-only afterwards.
pub struct SecClient {
    companies: HashMap<String, RawCompany>,
    filings: HashMap<String, Vec<RawFiling>>,
    http: Client,
    config: ClientConfig,
}

/// Pad a numeric CIK to the canonical 10-digit form. Values already 10 or
/// more digits long pass through unchanged.
pub fn pad_cik(raw: &str) -> String {
    format!("{:0>10}", raw)
}

/// Build the archive URL for one filing document:
/// `{base}/{cik_no_leading_zeros}/{accession_no_dashes}/{accession}.txt`.
pub fn filing_url(base_url: &str, accession_number: &str, cik: &str) -> String {
    let cik = cik.trim_start_matches('0');
    let accession_clean = accession_number.replace('-', "");
    format!("{base_url}/{cik}/{accession_clean}/{accession_number}.txt")
}

impl SecClient {
    /// Create a client over a ticker->company map. The HTTP client is built
    /// once with the configured user agent and timeout.
    pub fn new(
        companies: HashMap<String, RawCompany>,
        config: ClientConfig,
    ) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            companies,
            filings: HashMap::new(),
            http,
            config,
        })
    }

    /// Attach the CIK->filings map. A client without filings data still
    /// serves lookups and returns empty filing lists.
    pub fn add_filings_data(&mut self, filings: HashMap<String, Vec<RawFiling>>) {
        self.filings = filings;
    }

    /// Find a company by ticker symbol (case-insensitive).
    pub fn lookup_company(&self, ticker: &str) -> Result<Company, SecError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(SecError::InvalidInput("ticker cannot be empty".to_string()));
        }
        let ticker = ticker.to_uppercase();

        let record = self
            .companies
            .get(&ticker)
            .ok_or_else(|| SecError::NotFound(ticker.clone()))?;

        let cik_raw = record.cik_digits().ok_or_else(|| {
            SecError::InvalidInput(format!("no CIK found for ticker '{ticker}'"))
        })?;
        let cik = pad_cik(&cik_raw);

        let name = record
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                SecError::InvalidInput(format!("no company name found for ticker '{ticker}'"))
            })?;

        debug!("Resolved ticker {} to CIK {}", ticker, cik);
        Company::new(&ticker, &cik, name)
    }

    /// List filings for a CIK, applying form-type and date filters, sorting
    /// by filing date descending, and truncating to the filter's limit.
    ///
    /// A CIK with no catalog entry yields an empty list, not an error.
    pub fn list_filings(
        &self,
        cik: &str,
        filter: &FilingFilter,
    ) -> Result<Vec<Filing>, SecError> {
        let cik = cik.trim();
        if cik.is_empty() {
            return Err(SecError::InvalidInput("CIK cannot be empty".to_string()));
        }
        // Accept raw or padded CIKs, mirroring lookup_company's padding.
        let cik = if cik.chars().all(|c| c.is_ascii_digit()) {
            pad_cik(cik)
        } else {
            cik.to_string()
        };

        let Some(raw_filings) = self.filings.get(&cik) else {
            debug!("No filings on record for CIK {}", cik);
            return Ok(Vec::new());
        };

        let mut filings: Vec<Filing> = Vec::new();
        for raw in raw_filings {
            match convert_filing(&cik, raw) {
                Some(filing) => filings.push(filing),
                // Malformed records are dropped, not surfaced as errors.
                None => debug!("Skipping malformed filing record for CIK {}", cik),
            }
        }

        if let Some(form_types) = filter.form_types.as_deref() {
            if !form_types.is_empty() {
                let wanted: Vec<String> = form_types.iter().map(|ft| ft.to_uppercase()).collect();
                filings.retain(|f| wanted.contains(&f.form_type.to_uppercase()));
            }
        }
        if let Some(date_from) = filter.date_from {
            filings.retain(|f| f.filing_date >= date_from);
        }
        if let Some(date_to) = filter.date_to {
            filings.retain(|f| f.filing_date <= date_to);
        }

        // Newest first; sort_by is stable, so equal dates keep insertion order.
        filings.sort_by(|a, b| b.filing_date.cmp(&a.filing_date));
        filings.truncate(filter.limit);

        info!("Found {} filings for CIK {}", filings.len(), cik);
        Ok(filings)
    }

    /// Download one filing document from the archive. Single attempt, no
    /// retries; non-2xx statuses and transport errors both map to
    /// [`SecError::DownloadFailed`].
    pub async fn download_filing(
        &self,
        accession_number: &str,
        cik: &str,
    ) -> Result<String, SecError> {
        let accession_number = accession_number.trim();
        if accession_number.is_empty() {
            return Err(SecError::InvalidInput(
                "accession number cannot be empty".to_string(),
            ));
        }
        let cik = cik.trim();
        if cik.is_empty() {
            return Err(SecError::InvalidInput("CIK cannot be empty".to_string()));
        }

        let url = filing_url(&self.config.base_url, accession_number, cik);
        debug!("Downloading filing from: {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| SecError::DownloadFailed {
                status: None,
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {} for URL: {}", status, url);
            return Err(SecError::DownloadFailed {
                status: Some(status.as_u16()),
                message: format!("HTTP {status}"),
            });
        }

        response.text().await.map_err(|e| SecError::DownloadFailed {
            status: None,
            message: e.to_string(),
        })
    }
}

/// Convert one raw record into a validated filing. Returns `None` when the
/// date is malformed or a required field fails validation.
fn convert_filing(cik: &str, raw: &RawFiling) -> Option<Filing> {
    let filing_date = match raw.filing_date.as_ref()? {
        Value::String(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?,
        _ => return None,
    };
    Filing::new(
        cik,
        raw.company_name.as_deref().unwrap_or(""),
        raw.form_type.as_deref().unwrap_or(""),
        filing_date,
        raw.accession_number.as_deref().unwrap_or(""),
    )
    .ok()
}
