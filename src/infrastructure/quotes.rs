//! Inspirational quote retrieval

use crate::error::{MoodlogError, Result};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const REQUEST_TIMEOUT_SECS: u64 = 10;

pub const FALLBACK_TEXT: &str = "Believe you can and you're halfway there.";
pub const FALLBACK_AUTHOR: &str = "Theodore Roosevelt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    /// Quote shown whenever the remote one cannot be fetched
    pub fn fallback() -> Self {
        Quote {
            text: FALLBACK_TEXT.to_string(),
            author: FALLBACK_AUTHOR.to_string(),
        }
    }
}

/// Source of quotes. Never fails: implementations fall back to a fixed quote.
pub trait QuoteProvider {
    fn fetch_quote(&self) -> Quote;
}

/// Response body of the random-quote endpoint
#[derive(Debug, Deserialize)]
struct QuoteResponse {
    content: String,
    author: String,
}

/// Fetches quotes over HTTP
pub struct HttpQuoteProvider {
    url: String,
    client: Client,
}

impl HttpQuoteProvider {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| MoodlogError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// Fetch without the fallback
    pub fn try_fetch(&self) -> std::result::Result<Quote, reqwest::Error> {
        debug!(url = %self.url, "Fetching quote");

        let response = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?;
        let body: QuoteResponse = response.json()?;

        Ok(Quote {
            text: body.content,
            author: body.author,
        })
    }
}

impl QuoteProvider for HttpQuoteProvider {
    fn fetch_quote(&self) -> Quote {
        match self.try_fetch() {
            Ok(quote) => quote,
            Err(e) => {
                warn!(error = %e, "Error fetching quote, using fallback");
                Quote::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_quote() {
        let quote = Quote::fallback();
        assert_eq!(quote.text, "Believe you can and you're halfway there.");
        assert_eq!(quote.author, "Theodore Roosevelt");
    }

    #[test]
    fn test_unreachable_host_falls_back() {
        // port 9 (discard) on localhost is not expected to serve HTTP
        let provider = HttpQuoteProvider::new("http://127.0.0.1:9/random").unwrap();
        assert_eq!(provider.fetch_quote(), Quote::fallback());
    }
}
