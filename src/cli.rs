use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "secfetch")]
#[command(about = "Search, filter, and download SEC EDGAR filings by company ticker")]
#[command(version)]
pub struct Cli {
    /// Company ticker symbol (e.g., AAPL, MSFT, TSLA)
    pub ticker: String,

    /// Filter by form type (can be repeated: --form 10-K --form 10-Q)
    #[arg(long = "form", value_name = "FORM_TYPE")]
    pub form_types: Vec<String>,

    /// Filter filings from this date (YYYY-MM-DD)
    #[arg(long)]
    pub date_from: Option<NaiveDate>,

    /// Filter filings until this date (YYYY-MM-DD)
    #[arg(long)]
    pub date_to: Option<NaiveDate>,

    /// Maximum number of results to return
    #[arg(long, default_value = "10")]
    pub limit: usize,

    /// Output results as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Download the first matching filing to the given file
    #[arg(long, value_name = "FILENAME")]
    pub download: Option<PathBuf>,

    /// Path to the ticker->company JSON dataset
    #[arg(long, default_value = "fixtures/company_tickers.json")]
    pub companies: PathBuf,

    /// Path to the CIK->filings JSON dataset
    #[arg(long, default_value = "fixtures/filings_sample.json")]
    pub filings: PathBuf,
}
