//! # News Trend Report
//!
//! A single-pass batch tool that scrapes news articles from one page,
//! summarizes them through an OpenAI-compatible LLM API in token-bounded
//! chunks, and writes a text report with a combined summary, a trend
//! prediction, and per-article detail.
//!
//! ## Usage
//!
//! ```sh
//! OPENAI_API_KEY=sk-... news_trend_report https://example.com/politics
//! ```
//!
//! ## Architecture
//!
//! One invocation runs a straight pipeline:
//! 1. **Scrape**: fetch the page and extract title/content records
//! 2. **Clean**: drop incomplete records, strip embedded newlines
//! 3. **Analyze**: chunk each article under the size budget and summarize
//!    every chunk sequentially, then derive a trend prediction from the
//!    combined summary
//! 4. **Render**: write the report file and exit
//!
//! Nothing is cached between runs, and summarization calls are sequential;
//! any summarizer failure aborts the run before the report is written.

use clap::Parser;
use std::error::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt as tfmt, EnvFilter};
use url::Url;

mod chunker;
mod cleaner;
mod cli;
mod models;
mod report;
mod scraper;
mod summarizer;

use cli::Cli;
use summarizer::ChatClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_trend_report starting up");

    let args = Cli::parse();
    debug!(?args.url, ?args.output, ?args.model, args.max_chunk_size, "Parsed CLI arguments");

    // Reject malformed URLs before any network traffic.
    let url = Url::parse(&args.url)?;

    // ---- Scrape and clean ----
    let records = scraper::scrape(url.as_str()).await?;
    let articles = cleaner::clean(records);
    info!(count = articles.len(), "Articles ready for analysis");
    if articles.is_empty() {
        warn!(%url, "No usable articles on the page; the report will carry only the prediction");
    }

    // ---- Summarize and predict ----
    let client = ChatClient::new(args.api_key, args.api_base, args.model);
    let report = report::analyze(&articles, &client, args.max_chunk_size).await?;

    // ---- Render and write ----
    let text = report::render(&report, &articles);
    tokio::fs::write(&args.output, text).await?;
    info!(path = %args.output, "Report generated and saved");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
