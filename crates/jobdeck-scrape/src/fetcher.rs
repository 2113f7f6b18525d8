//! HTTP access behind a trait.
//!
//! Strategies never touch `reqwest` directly; they take a [`Fetcher`] so
//! unit tests can feed canned payloads through [`MockFetcher`].

use std::collections::HashMap;
use std::time::Duration;

use jobdeck_core::{Error, Result};

/// Deadline for ordinary API and page fetches.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Deadline for the Jina Reader proxy, which renders pages server-side.
pub const RENDER_TIMEOUT: Duration = Duration::from_secs(45);

/// Blocking GET returning the response body as text.
pub trait Fetcher {
    /// Fetch `url`. Errors cover transport failures and non-success
    /// status codes; strategies treat both as "this source unavailable".
    fn get(&self, url: &str, headers: &[(&str, &str)], timeout: Duration) -> Result<String>;
}

/// Production fetcher backed by a blocking `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("jobdeck/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::http(format!("client init: {e}")))?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str, headers: &[(&str, &str)], timeout: Duration) -> Result<String> {
        let mut request = self.client.get(url).timeout(timeout);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .map_err(|e| Error::http(format!("GET {url}: {e}")))?;
        let response = response
            .error_for_status()
            .map_err(|e| Error::http(format!("GET {url}: {e}")))?;

        response
            .text()
            .map_err(|e| Error::http(format!("GET {url}: {e}")))
    }
}

/// In-memory fetcher for tests: canned URL → body responses.
#[derive(Default)]
pub struct MockFetcher {
    responses: HashMap<String, String>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canned response body for `url`.
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.responses.insert(url.to_string(), body.to_string());
        self
    }
}

impl Fetcher for MockFetcher {
    fn get(&self, url: &str, _headers: &[(&str, &str)], _timeout: Duration) -> Result<String> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| Error::http(format!("no canned response for {url}")))
    }
}
