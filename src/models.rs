use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SecError;

/// A company resolved from the ticker directory.
#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub ticker: String,
    pub cik: String,
    pub name: String,
}

impl Company {
    /// Build a validated company record. The ticker is trimmed and
    /// uppercased; empty ticker, CIK, or name is rejected.
    pub fn new(ticker: &str, cik: &str, name: &str) -> Result<Self, SecError> {
        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(SecError::InvalidInput("ticker cannot be empty".to_string()));
        }
        let cik = cik.trim();
        if cik.is_empty() {
            return Err(SecError::InvalidInput("CIK cannot be empty".to_string()));
        }
        let name = name.trim();
        if name.is_empty() {
            return Err(SecError::InvalidInput(
                "company name cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            ticker: ticker.to_uppercase(),
            cik: cik.to_string(),
            name: name.to_string(),
        })
    }
}

/// A single SEC filing.
#[derive(Debug, Clone, Serialize)]
pub struct Filing {
    pub cik: String,
    pub company_name: String,
    pub form_type: String,
    pub filing_date: NaiveDate,
    pub accession_number: String,
}

impl Filing {
    pub fn new(
        cik: &str,
        company_name: &str,
        form_type: &str,
        filing_date: NaiveDate,
        accession_number: &str,
    ) -> Result<Self, SecError> {
        let cik = cik.trim();
        if cik.is_empty() {
            return Err(SecError::InvalidInput("CIK cannot be empty".to_string()));
        }
        let form_type = form_type.trim();
        if form_type.is_empty() {
            return Err(SecError::InvalidInput(
                "form type cannot be empty".to_string(),
            ));
        }
        let accession_number = accession_number.trim();
        if accession_number.is_empty() {
            return Err(SecError::InvalidInput(
                "accession number cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            cik: cik.to_string(),
            company_name: company_name.trim().to_string(),
            form_type: form_type.to_string(),
            filing_date,
            accession_number: accession_number.to_string(),
        })
    }
}

/// Filter criteria for filing searches.
#[derive(Debug, Clone)]
pub struct FilingFilter {
    pub form_types: Option<Vec<String>>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub limit: usize,
}

impl Default for FilingFilter {
    fn default() -> Self {
        Self {
            form_types: None,
            date_from: None,
            date_to: None,
            limit: 10,
        }
    }
}

impl FilingFilter {
    /// Build validated filter criteria: limit must be positive and date
    /// bounds must not be in the future.
    pub fn new(
        form_types: Option<Vec<String>>,
        date_from: Option<NaiveDate>,
        date_to: Option<NaiveDate>,
        limit: usize,
    ) -> Result<Self, SecError> {
        if limit == 0 {
            return Err(SecError::InvalidInput(
                "limit must be greater than 0".to_string(),
            ));
        }
        let today = chrono::Local::now().date_naive();
        for date in [date_from, date_to].into_iter().flatten() {
            if date > today {
                return Err(SecError::InvalidInput(format!(
                    "date {} cannot be in the future",
                    date
                )));
            }
        }
        Ok(Self {
            form_types,
            date_from,
            date_to,
            limit,
        })
    }
}

/// Raw company record as it arrives from the ticker dataset. The source
/// data has partial records, so every field is optional here and checked
/// at lookup time.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCompany {
    #[serde(default)]
    pub cik_str: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
}

impl RawCompany {
    /// Render the raw CIK as a decimal string. The dataset carries it as
    /// either a JSON number or a string.
    pub fn cik_digits(&self) -> Option<String> {
        match self.cik_str.as_ref()? {
            Value::Number(n) => n.as_u64().map(|v| v.to_string()),
            Value::String(s) => {
                let s = s.trim();
                (!s.is_empty()).then(|| s.to_string())
            }
            _ => None,
        }
    }
}

/// Raw filing record as it arrives from the filings dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct RawFiling {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub form_type: Option<String>,
    #[serde(default)]
    pub filing_date: Option<Value>,
    #[serde(default)]
    pub accession_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_valid() {
        let company = Company::new("AAPL", "0000320193", "Apple Inc.").unwrap();
        assert_eq!(company.ticker, "AAPL");
        assert_eq!(company.cik, "0000320193");
        assert_eq!(company.name, "Apple Inc.");
    }

    #[test]
    fn test_company_ticker_normalized() {
        let company = Company::new("  aapl ", "0000320193", "Apple Inc.").unwrap();
        assert_eq!(company.ticker, "AAPL");
    }

    #[test]
    fn test_company_rejects_empty_fields() {
        assert!(matches!(
            Company::new("", "0000320193", "Apple Inc."),
            Err(SecError::InvalidInput(_))
        ));
        assert!(matches!(
            Company::new("AAPL", "  ", "Apple Inc."),
            Err(SecError::InvalidInput(_))
        ));
        assert!(matches!(
            Company::new("AAPL", "0000320193", ""),
            Err(SecError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_filing_valid() {
        let filing = Filing::new(
            "0000320193",
            "Apple Inc.",
            "10-K",
            NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            "0000320193-24-000123",
        )
        .unwrap();
        assert_eq!(filing.form_type, "10-K");
        assert_eq!(
            filing.filing_date,
            NaiveDate::from_ymd_opt(2024, 11, 1).unwrap()
        );
    }

    #[test]
    fn test_filing_rejects_empty_form_type() {
        let result = Filing::new(
            "0000320193",
            "Apple Inc.",
            "",
            NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            "0000320193-24-000123",
        );
        assert!(matches!(result, Err(SecError::InvalidInput(_))));
    }

    #[test]
    fn test_filing_rejects_empty_accession_number() {
        let result = Filing::new(
            "0000320193",
            "Apple Inc.",
            "10-K",
            NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            "  ",
        );
        assert!(matches!(result, Err(SecError::InvalidInput(_))));
    }

    #[test]
    fn test_filter_defaults() {
        let filter = FilingFilter::default();
        assert!(filter.form_types.is_none());
        assert!(filter.date_from.is_none());
        assert!(filter.date_to.is_none());
        assert_eq!(filter.limit, 10);
    }

    #[test]
    fn test_filter_rejects_zero_limit() {
        let result = FilingFilter::new(None, None, None, 0);
        assert!(matches!(result, Err(SecError::InvalidInput(_))));
    }

    #[test]
    fn test_filter_rejects_future_dates() {
        let tomorrow = chrono::Local::now().date_naive() + chrono::Days::new(1);
        let result = FilingFilter::new(None, Some(tomorrow), None, 10);
        assert!(matches!(result, Err(SecError::InvalidInput(_))));

        let result = FilingFilter::new(None, None, Some(tomorrow), 10);
        assert!(matches!(result, Err(SecError::InvalidInput(_))));
    }

    #[test]
    fn test_filter_accepts_past_dates() {
        let filter = FilingFilter::new(
            Some(vec!["10-K".to_string()]),
            NaiveDate::from_ymd_opt(2023, 1, 1),
            NaiveDate::from_ymd_opt(2024, 1, 1),
            5,
        )
        .unwrap();
        assert_eq!(filter.limit, 5);
    }

    #[test]
    fn test_raw_company_cik_from_number_and_string() {
        let raw: RawCompany =
            serde_json::from_value(serde_json::json!({ "cik_str": 320193, "title": "Apple Inc." }))
                .unwrap();
        assert_eq!(raw.cik_digits().as_deref(), Some("320193"));

        let raw: RawCompany = serde_json::from_value(
            serde_json::json!({ "cik_str": "789019", "title": "Microsoft Corp" }),
        )
        .unwrap();
        assert_eq!(raw.cik_digits().as_deref(), Some("789019"));
    }

    #[test]
    fn test_raw_company_cik_missing() {
        let raw: RawCompany =
            serde_json::from_value(serde_json::json!({ "title": "No Identifier Inc" })).unwrap();
        assert!(raw.cik_digits().is_none());

        let raw: RawCompany =
            serde_json::from_value(serde_json::json!({ "cik_str": "  ", "title": "Blank" }))
                .unwrap();
        assert!(raw.cik_digits().is_none());
    }
}
