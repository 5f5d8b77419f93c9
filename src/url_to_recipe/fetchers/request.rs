use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::Fetcher;
use crate::config::default_user_agent;
use crate::error::FetchError;

/// Upper bound for a single page fetch
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

pub struct RequestFetcher {
    client: Client,
    timeout: Duration,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        Self::with_user_agent(timeout, &default_user_agent())
    }

    pub fn with_user_agent(timeout: Option<Duration>, user_agent: &str) -> Result<Self, FetchError> {
        let timeout = timeout.unwrap_or(FETCH_TIMEOUT);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, timeout })
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            FetchError::Request(err)
        }
    }
}

#[async_trait]
impl Fetcher for RequestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        debug!("RequestFetcher: GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let html = response.text().await.map_err(|e| self.classify(url, e))?;
        debug!("RequestFetcher: received {} bytes from {}", html.len(), url);
        Ok(html)
    }
}
