use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

mod cli;
mod client;
mod config;
mod error;
mod fixtures;
mod models;
mod output;

use cli::Cli;
use client::SecClient;
use config::ClientConfig;
use models::FilingFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "secfetch=info");
    }

    // Initialize logging to both console and file
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let file_appender = tracing_appender::rolling::never(".", "secfetch.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();

    let companies = fixtures::load_companies(&cli.companies)?;
    let filings_data = fixtures::load_filings(&cli.filings)?;

    let config = ClientConfig::from_env()?;
    let mut client = SecClient::new(companies, config)?;
    client.add_filings_data(filings_data);

    let company = client.lookup_company(&cli.ticker)?;
    if !cli.json {
        println!("Company: {} ({})", company.name, company.ticker);
        println!("CIK: {}", company.cik);
        println!();
    }

    let form_types = if cli.form_types.is_empty() {
        None
    } else {
        Some(cli.form_types.clone())
    };
    let filter = FilingFilter::new(form_types, cli.date_from, cli.date_to, cli.limit)?;

    let filings = client.list_filings(&company.cik, &filter)?;

    if let Some(path) = &cli.download {
        let Some(first) = filings.first() else {
            bail!("No filings found to download");
        };

        println!(
            "Downloading filing: {} from {}",
            first.form_type, first.filing_date
        );
        println!("Accession: {}", first.accession_number);

        let content = client
            .download_filing(&first.accession_number, &company.cik)
            .await?;
        std::fs::write(path, &content)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(
            "Downloaded {} characters to {}",
            content.len(),
            path.display()
        );
        println!("Successfully downloaded to: {}", path.display());
        println!("Size: {} characters", content.len());
        return Ok(());
    }

    if cli.json {
        println!("{}", output::format_json(&company, &filings)?);
    } else {
        println!("{}", output::format_table(&filings));
    }

    Ok(())
}
