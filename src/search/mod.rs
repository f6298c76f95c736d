// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Show search service client.
//!
//! Issues `GET {base}/search/shows?q={query}` and parses the JSON array of
//! hits. The HTTP layer sits behind [`HttpTransport`] so the client can be
//! driven without a network.

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client;
use thiserror::Error;

use crate::model::SearchHit;

pub(crate) const DEFAULT_API_BASE_URL: &str = "https://api.tvmaze.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub(crate) enum SearchError {
    #[error("HTTP error, status {status}")]
    Http { status: u16 },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Status and body of a completed request.
#[derive(Debug, Clone)]
pub(crate) struct HttpResponse {
    pub(crate) status: u16,
    pub(crate) body: String,
}

impl HttpResponse {
    pub(crate) fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub(crate) trait HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, SearchError>;

    /// Downloads `url` without decoding the body as text, returning the
    /// status and the number of bytes received.
    fn download(&self, url: &str) -> Result<(u16, usize), SearchError> {
        self.get(url).map(|response| (response.status, response.body.len()))
    }
}

pub(crate) struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub(crate) fn new() -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("flixview/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Ok(Self { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, SearchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }

    fn download(&self, url: &str) -> Result<(u16, usize), SearchError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .map_err(|e| SearchError::Transport(e.to_string()))?;

        Ok((status, bytes.len()))
    }
}

pub(crate) struct SearchClient<T: HttpTransport> {
    base_url: String,
    transport: T,
}

impl<T: HttpTransport> SearchClient<T> {
    pub(crate) fn new(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub(crate) fn search_url(&self, query: &str) -> String {
        format!("{}/search/shows?q={}", self.base_url, urlencoding::encode(query))
    }

    /// Searches shows matching `query`.
    ///
    /// The body only has to be a well-formed array; missing fields inside
    /// the records are left for the renderer to deal with.
    pub(crate) fn search_shows(&self, query: &str) -> Result<Vec<SearchHit>, SearchError> {
        let url = self.search_url(query);
        debug!("Searching shows: {}", url);

        let response = self.transport.get(&url)?;
        if !response.is_success() {
            return Err(SearchError::Http {
                status: response.status,
            });
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Loads a poster image, succeeding only for a 2xx response.
    pub(crate) fn fetch_poster(&self, url: &str) -> Result<(), SearchError> {
        let (status, len) = self.transport.download(url)?;
        if !(200..300).contains(&status) {
            return Err(SearchError::Http { status });
        }

        debug!("Poster {} loaded ({} bytes)", url, len);
        Ok(())
    }
}
