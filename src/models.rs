//! Data models for scraped and cleaned news articles.
//!
//! Two record shapes flow through the pipeline:
//! - [`ScrapedArticle`]: what the scraper found, with fields absent when the
//!   page yielded nothing for them
//! - [`Article`]: a cleaned record with both fields guaranteed present and
//!   content free of newlines
//!
//! [`Report`] holds the two LLM-produced texts until they are rendered.

/// A raw article record as extracted from the page.
///
/// Fields are `None` when the corresponding extraction found nothing: a
/// missing `content` means no content-bearing tag category matched inside
/// the `<article>` element. Records with absent fields are dropped by
/// [`crate::cleaner::clean`].
#[derive(Debug, Clone)]
pub struct ScrapedArticle {
    /// Heading text, or `None` when the record arrived without one.
    pub title: Option<String>,
    /// Joined text of the first matching tag category, or `None` when none matched.
    pub content: Option<String>,
}

/// A cleaned article ready for summarization and reporting.
///
/// Invariants (established by [`crate::cleaner::clean`]): both fields are
/// present and `content` contains no newline characters.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// The article title, or the sentinel `"No title"`.
    pub title: String,
    /// The article body text, newlines replaced with spaces.
    pub content: String,
}

/// The two LLM-produced sections of the final report.
///
/// Built once per run by [`crate::report::analyze`] and consumed immediately
/// by [`crate::report::render`]; nothing is persisted between runs.
#[derive(Debug, Clone)]
pub struct Report {
    /// All per-chunk summaries across all articles, joined with single spaces.
    pub summary: String,
    /// One additional summarization of the combined summary with a
    /// forward-looking instruction appended.
    pub prediction: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraped_article_fields_optional() {
        let record = ScrapedArticle {
            title: Some("Headline".to_string()),
            content: None,
        };
        assert_eq!(record.title.as_deref(), Some("Headline"));
        assert!(record.content.is_none());
    }

    #[test]
    fn test_article_creation() {
        let article = Article {
            title: "No title".to_string(),
            content: "Body text".to_string(),
        };
        assert_eq!(article.title, "No title");
        assert_eq!(article.content, "Body text");
    }
}
