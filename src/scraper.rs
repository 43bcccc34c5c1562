//! Article scraper for a single news page.
//!
//! Fetches one page and extracts a record per `<article>` element. The HTML
//! traversal tolerates messy markup by falling back to defaults — a missing
//! heading becomes the `"No title"` sentinel, and a missing body leaves the
//! content field absent — while fetch failures propagate to the caller.

use crate::models::ScrapedArticle;
use scraper::{Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};

/// Title used when an article element carries no `h1` or `h2` heading.
pub const NO_TITLE: &str = "No title";

/// Content-bearing tag categories, tried in preference order.
const CONTENT_TAGS: [&str; 3] = ["div", "p", "span"];

/// Fetch `url` and extract one record per article element.
///
/// Network and HTTP-status failures propagate; structural oddities in the
/// page do not (see [`extract_articles`]).
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn scrape(url: &str) -> Result<Vec<ScrapedArticle>, Box<dyn Error>> {
    let body = reqwest::get(url).await?.error_for_status()?.text().await?;
    let records = extract_articles(&body)?;
    info!(count = records.len(), "Scraped article records");
    Ok(records)
}

/// Extract article records from a page body.
///
/// For each `<article>` element:
/// - title: text of the first `h1`, else the first `h2`, else [`NO_TITLE`]
/// - content: the joined text of every element matching the first category
///   in `div`, `p`, `span` that matches at all; absent when none match
pub fn extract_articles(html: &str) -> Result<Vec<ScrapedArticle>, Box<dyn Error>> {
    let document = Html::parse_document(html);
    let article_selector = Selector::parse("article")?;
    let h1_selector = Selector::parse("h1")?;
    let h2_selector = Selector::parse("h2")?;

    let mut records = Vec::new();
    for article in document.select(&article_selector) {
        let title = article
            .select(&h1_selector)
            .next()
            .or_else(|| article.select(&h2_selector).next())
            .map(|heading| heading.text().collect::<String>().trim().to_string())
            .unwrap_or_else(|| NO_TITLE.to_string());

        let mut content = None;
        for tag in CONTENT_TAGS {
            let tag_selector = Selector::parse(tag)?;
            let elements: Vec<_> = article.select(&tag_selector).collect();
            if !elements.is_empty() {
                let joined = elements
                    .iter()
                    .map(|element| element.text().collect::<String>())
                    .collect::<Vec<_>>()
                    .join(" ");
                debug!(%title, tag, element_count = elements.len(), "Matched content category");
                content = Some(joined);
                break;
            }
        }

        records.push(ScrapedArticle {
            title: Some(title),
            content,
        });
    }

    Ok(records)
}
