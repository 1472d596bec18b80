//! Table and JSON rendering of lookup results

use anyhow::Result;
use serde::Serialize;

use crate::models::{Company, Filing};

#[derive(Serialize)]
struct ResultPayload<'a> {
    company: &'a Company,
    filings: &'a [Filing],
    count: usize,
}

/// Render filings as a fixed-width text table.
pub fn format_table(filings: &[Filing]) -> String {
    if filings.is_empty() {
        return "No filings found.".to_string();
    }

    let mut lines = Vec::new();
    lines.push("-".repeat(100));
    lines.push(format!(
        "{:<12} {:<15} {:<40} {:<25}",
        "Form Type", "Filing Date", "Company", "Accession #"
    ));
    lines.push("-".repeat(100));

    for filing in filings {
        let company: String = filing.company_name.chars().take(38).collect();
        lines.push(format!(
            "{:<12} {:<15} {:<40} {:<25}",
            filing.form_type, filing.filing_date, company, filing.accession_number
        ));
    }

    lines.push("-".repeat(100));
    lines.push(format!("Total: {} filing(s)", filings.len()));

    lines.join("\n")
}

/// Render the company and its filings as a pretty-printed JSON payload.
pub fn format_json(company: &Company, filings: &[Filing]) -> Result<String> {
    let payload = ResultPayload {
        company,
        filings,
        count: filings.len(),
    };
    Ok(serde_json::to_string_pretty(&payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_filing() -> Filing {
        Filing::new(
            "0000320193",
            "Apple Inc.",
            "10-K",
            NaiveDate::from_ymd_opt(2024, 11, 1).unwrap(),
            "0000320193-24-000123",
        )
        .unwrap()
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_table(&[]), "No filings found.");
    }

    #[test]
    fn test_table_contains_fields_and_total() {
        let table = format_table(&[sample_filing()]);
        assert!(table.contains("10-K"));
        assert!(table.contains("2024-11-01"));
        assert!(table.contains("Apple Inc."));
        assert!(table.contains("0000320193-24-000123"));
        assert!(table.contains("Total: 1 filing(s)"));
    }

    #[test]
    fn test_json_payload_shape() {
        let company = Company::new("AAPL", "0000320193", "Apple Inc.").unwrap();
        let filings = vec![sample_filing()];
        let json = format_json(&company, &filings).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["company"]["ticker"], "AAPL");
        assert_eq!(value["count"], 1);
        assert_eq!(value["filings"][0]["filing_date"], "2024-11-01");
        assert_eq!(value["filings"][0]["form_type"], "10-K");
    }
}
