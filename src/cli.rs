//! Command-line interface definitions.
//!
//! All options beyond the page URL have defaults; the API key can come from
//! the environment so it never appears in shell history.

use clap::Parser;

/// Command-line arguments for the news trend report tool.
///
/// # Examples
///
/// ```sh
/// # Basic usage
/// news_trend_report https://example.com/politics
///
/// # Against a self-hosted OpenAI-compatible endpoint
/// news_trend_report https://example.com/politics \
///     --api-base http://localhost:8080/v1 --model local-model
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// URL of the news page to scrape
    pub url: String,

    /// Path of the report file to write
    #[arg(short, long, default_value = "news_analysis_report.txt")]
    pub output: String,

    /// API key for the summarization endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the OpenAI-compatible API
    #[arg(long, default_value = "https://api.openai.com/v1")]
    pub api_base: String,

    /// Model name sent with each summarization request
    #[arg(long, default_value = "gpt-4")]
    pub model: String,

    /// Soft chunk size budget, in word-length units (a proxy for tokens)
    #[arg(long, default_value_t = crate::chunker::DEFAULT_MAX_CHUNK_SIZE)]
    pub max_chunk_size: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::parse_from(&[
            "news_trend_report",
            "https://example.com/news",
            "--api-key",
            "sk-test",
        ]);

        assert_eq!(cli.url, "https://example.com/news");
        assert_eq!(cli.output, "news_analysis_report.txt");
        assert_eq!(cli.api_base, "https://api.openai.com/v1");
        assert_eq!(cli.model, "gpt-4");
        assert_eq!(cli.max_chunk_size, 2048);
    }

    #[test]
    fn test_api_key_from_environment() {
        // SAFETY: single-threaded mutation of a var only this test reads.
        unsafe { std::env::set_var("OPENAI_API_KEY", "sk-from-env") };
        let cli = Cli::parse_from(&["news_trend_report", "https://example.com/news"]);
        unsafe { std::env::remove_var("OPENAI_API_KEY") };

        assert_eq!(cli.api_key, "sk-from-env");
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(&[
            "news_trend_report",
            "https://example.com/news",
            "--api-key",
            "sk-test",
            "-o",
            "/tmp/report.txt",
            "--model",
            "gpt-4o-mini",
            "--max-chunk-size",
            "512",
        ]);

        assert_eq!(cli.output, "/tmp/report.txt");
        assert_eq!(cli.model, "gpt-4o-mini");
        assert_eq!(cli.max_chunk_size, 512);
    }
}
