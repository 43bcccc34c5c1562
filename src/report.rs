//! Report pipeline: chunk each article, summarize every chunk, fold the
//! summaries into one, derive a trend prediction, and render the report text.
//!
//! Summarization calls run sequentially in table order. Any failure from the
//! summarizer propagates immediately — the run aborts and no partial report
//! is rendered or written.

use crate::chunker::split_into_chunks;
use crate::models::{Article, Report};
use crate::summarizer::Summarize;
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, info, instrument};

/// Header line of the rendered report.
pub const REPORT_TITLE: &str = "Summary of Recent News and Future Trends";

/// Instruction appended to the combined summary for the prediction call.
pub const PREDICT_INSTRUCTION: &str = "Predict future trends based on the summary above.";

const RULE_WIDTH: usize = 60;

/// Run the summarization pipeline over a cleaned article table.
///
/// Every article's content is chunked under `max_chunk_size` and each chunk
/// summarized in order; the per-chunk summaries form one flat sequence
/// spanning all articles, joined with single spaces into the combined
/// summary. One further call over the combined summary, with
/// [`PREDICT_INSTRUCTION`] appended, yields the trend prediction.
#[instrument(level = "info", skip_all, fields(article_count = articles.len()))]
pub async fn analyze<S: Summarize>(
    articles: &[Article],
    summarizer: &S,
    max_chunk_size: usize,
) -> Result<Report, Box<dyn Error>> {
    let mut summaries = Vec::new();
    for (index, article) in articles.iter().enumerate() {
        let chunks = split_into_chunks(&article.content, max_chunk_size);
        debug!(index, title = %article.title, chunk_count = chunks.len(), "Chunked article");

        for chunk in chunks {
            debug!(chunk_len = chunk.len(), "Summarizing chunk");
            let summary = summarizer.summarize(&chunk).await?;
            summaries.push(summary);
        }
    }

    let summary = summaries.join(" ");
    info!(
        chunk_summaries = summaries.len(),
        summary_len = summary.len(),
        "Combined per-chunk summaries"
    );

    let prediction = summarizer
        .summarize(&format!("{summary}\n{PREDICT_INSTRUCTION}"))
        .await?;
    info!(prediction_len = prediction.len(), "Obtained trend prediction");

    Ok(Report {
        summary,
        prediction,
    })
}

/// Render the report text: combined summary, trend prediction, then a
/// detail block per article in table order.
pub fn render(report: &Report, articles: &[Article]) -> String {
    let rule = "=".repeat(RULE_WIDTH);

    let mut out = String::new();
    out.push_str(REPORT_TITLE);
    out.push('\n');
    out.push_str(&rule);
    out.push_str("\n\n");
    out.push_str(&report.summary);
    out.push_str("\n\nFuture Trend Prediction\n");
    out.push_str(&rule);
    out.push_str("\n\n");
    out.push_str(&report.prediction);
    out.push_str("\n\nDetailed Article Analysis\n");
    out.push_str(&rule);
    out.push_str("\n\n");

    let detail = articles
        .iter()
        .map(|article| {
            format!(
                "Title: {}\nContent: {}\n\n{}\n\n",
                article.title,
                article.content,
                "-".repeat(RULE_WIDTH)
            )
        })
        .join("");
    out.push_str(&detail);

    out
}
