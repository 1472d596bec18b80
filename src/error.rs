//! Error types for company lookup and filing retrieval

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecError {
    /// Malformed or empty caller-supplied argument (ticker, CIK, accession
    /// number, or out-of-range filter criteria). Never retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Ticker is not present in the company directory. Absence of filings
    /// for a valid CIK is an empty result, not this error.
    #[error("company with ticker '{0}' not found")]
    NotFound(String),

    /// The archive request failed. `status` carries the HTTP status code for
    /// non-2xx responses and is `None` for transport-level failures.
    #[error("failed to download filing: {message}")]
    DownloadFailed {
        status: Option<u16>,
        message: String,
    },
}
