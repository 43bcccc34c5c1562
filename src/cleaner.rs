//! Normalization of scraped records into a clean article table.

use crate::models::{Article, ScrapedArticle};
use tracing::{debug, info};

/// Normalize scraped records into [`Article`]s fit for the pipeline.
///
/// Drops any record with an absent field. A content field that is missing or
/// whitespace-only means no content-bearing tag matched on the page, so the
/// record carries nothing worth summarizing and is dropped too. Surviving
/// content has every newline replaced with a single space; relative order is
/// preserved.
pub fn clean(records: Vec<ScrapedArticle>) -> Vec<Article> {
    let scraped_count = records.len();
    let articles: Vec<Article> = records
        .into_iter()
        .filter_map(|record| {
            let title = record.title?;
            let content = record.content?;
            if content.trim().is_empty() {
                debug!(%title, "Dropping article with empty content");
                return None;
            }
            Some(Article {
                title,
                content: content.replace('\n', " "),
            })
        })
        .collect();

    info!(
        scraped = scraped_count,
        cleaned = articles.len(),
        dropped = scraped_count - articles.len(),
        "Cleaned article table"
    );
    articles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: Option<&str>, content: Option<&str>) -> ScrapedArticle {
        ScrapedArticle {
            title: title.map(String::from),
            content: content.map(String::from),
        }
    }

    #[test]
    fn test_drops_records_with_missing_fields() {
        let cleaned = clean(vec![
            record(Some("A"), Some("line1\nline2")),
            record(None, Some("x")),
        ]);

        assert_eq!(
            cleaned,
            vec![Article {
                title: "A".to_string(),
                content: "line1 line2".to_string(),
            }]
        );
    }

    #[test]
    fn test_drops_missing_content() {
        let cleaned = clean(vec![record(Some("A"), None)]);
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_drops_empty_content() {
        let cleaned = clean(vec![
            record(Some("A"), Some("")),
            record(Some("B"), Some("  \n ")),
        ]);
        assert!(cleaned.is_empty());
    }

    #[test]
    fn test_strips_all_newlines() {
        let cleaned = clean(vec![record(Some("A"), Some("a\nb\nc"))]);
        assert_eq!(cleaned[0].content, "a b c");
        assert!(!cleaned[0].content.contains('\n'));
    }

    #[test]
    fn test_preserves_order_of_survivors() {
        let cleaned = clean(vec![
            record(Some("first"), Some("one")),
            record(None, Some("dropped")),
            record(Some("second"), Some("two")),
            record(Some("third"), Some("three")),
        ]);

        let titles: Vec<&str> = cleaned.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }
}
