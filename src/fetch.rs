use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};

use crate::error::GenomeldError;

pub trait TimelineClient: Send + Sync {
    fn fetch_timeline(&self, url: &str) -> Result<String, GenomeldError>;
}

#[derive(Clone)]
pub struct TimelineHttpClient {
    client: Client,
}

impl TimelineHttpClient {
    pub fn new() -> Result<Self, GenomeldError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&format!("genomeld/{}", env!("CARGO_PKG_VERSION")))
                .map_err(|err| GenomeldError::TimelineHttp(err.to_string()))?,
        );
        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|err| GenomeldError::TimelineHttp(err.to_string()))?;
        Ok(Self { client })
    }
}

impl TimelineClient for TimelineHttpClient {
    fn fetch_timeline(&self, url: &str) -> Result<String, GenomeldError> {
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|err| GenomeldError::TimelineHttp(err.to_string()))?;
        // The feed endpoint never redirects or returns partial
        // content, so anything other than a plain 200 is a failure.
        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let message = response
                .text()
                .unwrap_or_else(|_| "timeline request failed".to_string());
            return Err(GenomeldError::TimelineStatus { status, message });
        }
        response
            .text()
            .map_err(|err| GenomeldError::TimelineHttp(err.to_string()))
    }
}
