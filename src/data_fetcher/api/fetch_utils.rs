//! Generic HTTP fetching with retry logic and error mapping

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::error::Error as StdError;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::retry;
use crate::error::AppError;

/// How the gateway reacts to transient failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after a retryable status; the request is sent at most
    /// `max_retries + 1` times.
    pub max_retries: u32,
    /// The nth retry waits `backoff_factor * 2^(n-1)`.
    pub backoff_factor: Duration,
    pub max_backoff: Duration,
    pub retry_status_first: u16,
    pub retry_status_last: u16,
    pub dns_retry_delay: Duration,
    pub connect_retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_retries: retry::MAX_RETRIES,
            backoff_factor: Duration::from_millis(retry::BACKOFF_FACTOR_MS),
            max_backoff: Duration::from_secs(retry::MAX_BACKOFF_SECONDS),
            retry_status_first: retry::RETRY_STATUS_FIRST,
            retry_status_last: retry::RETRY_STATUS_LAST,
            dns_retry_delay: Duration::from_secs(retry::DNS_RETRY_DELAY_SECONDS),
            connect_retry_delay: Duration::from_secs(retry::CONNECT_RETRY_DELAY_SECONDS),
        }
    }
}

impl RetryPolicy {
    /// Same retry counts as the default policy without any waiting.
    pub fn immediate() -> Self {
        RetryPolicy {
            backoff_factor: Duration::ZERO,
            max_backoff: Duration::ZERO,
            dns_retry_delay: Duration::ZERO,
            connect_retry_delay: Duration::ZERO,
            ..RetryPolicy::default()
        }
    }

    pub fn is_retryable_status(&self, status: u16) -> bool {
        (self.retry_status_first..=self.retry_status_last).contains(&status)
    }

    /// Wait before retry number `retry` (1-based).
    pub fn backoff(&self, retry: u32) -> Duration {
        let exponent = retry.saturating_sub(1).min(16);
        self.backoff_factor
            .saturating_mul(1u32 << exponent)
            .min(self.max_backoff)
    }
}

/// True when the error chain reports a failed DNS lookup.
fn is_dns_error(err: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(cause) = source {
        let message = cause.to_string().to_lowercase();
        if message.contains("dns error") || message.contains("failed to lookup address") {
            return true;
        }
        source = cause.source();
    }
    false
}

/// Delay before the single extra attempt after a DNS or connect failure,
/// or `None` when the failure is final.
fn transport_retry_delay(
    policy: &RetryPolicy,
    err: &reqwest::Error,
    already_retried: bool,
) -> Option<Duration> {
    if already_retried {
        None
    } else if is_dns_error(err) {
        Some(policy.dns_retry_delay)
    } else if err.is_connect() {
        Some(policy.connect_retry_delay)
    } else {
        None
    }
}

fn map_transport_error(err: reqwest::Error, url: &Url) -> AppError {
    if err.is_timeout() {
        AppError::network_timeout(url.as_str())
    } else if err.is_connect() {
        AppError::network_connection(url.as_str(), err.to_string())
    } else {
        AppError::ApiFetch(err)
    }
}

/// Sends a GET request and parses a 200 response as JSON.
///
/// Statuses in the policy's retry range are retried with exponential backoff.
/// A DNS or connection failure is retried once after a fixed delay. Any
/// other non-200 status fails with [`AppError::RequestFailed`] carrying the
/// status, URL and body.
#[instrument(skip(client, policy), fields(url = %url))]
pub async fn fetch_json(client: &Client, url: &Url, policy: &RetryPolicy) -> Result<Value, AppError> {
    info!("Fetching data from URL: {url}");

    let mut retries = 0u32;
    let mut transport_retried = false;
    let response = loop {
        match client.get(url.clone()).send().await {
            Ok(resp) => {
                let status = resp.status().as_u16();
                if policy.is_retryable_status(status) && retries < policy.max_retries {
                    retries += 1;
                    let wait = policy.backoff(retries);
                    warn!(
                        "Transient {} from {}. Retrying in {:?} (attempt {}/{})",
                        status, url, wait, retries, policy.max_retries
                    );
                    tokio::time::sleep(wait).await;
                    continue;
                }
                break resp;
            }
            Err(e) => match transport_retry_delay(policy, &e, transport_retried) {
                Some(wait) => {
                    transport_retried = true;
                    warn!("Request error {} for {}. Retrying once in {:?}", e, url, wait);
                    tokio::time::sleep(wait).await;
                }
                None => {
                    error!("Request failed for URL {}: {}", url, e);
                    return Err(map_transport_error(e, url));
                }
            },
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        error!(
            "Error with NHL API request | status: {} | url: {} | body: {}",
            status.as_u16(),
            url,
            body
        );
        return Err(AppError::request_failed(status.as_u16(), url.as_str(), body));
    }

    let response_text = response.text().await.map_err(|e| {
        error!("Failed to read response text from URL {}: {}", url, e);
        AppError::ApiFetch(e)
    })?;
    debug!("Response length: {} bytes", response_text.len());

    if response_text.trim().is_empty() {
        return Err(AppError::api_no_data("Response body is empty", url.as_str()));
    }

    serde_json::from_str::<Value>(&response_text).map_err(|e| {
        error!("Failed to parse API response: {} (URL: {})", e, url);
        AppError::api_malformed_json(e.to_string(), url.as_str())
    })
}

/// [`fetch_json`] followed by deserialization into `T`.
pub async fn fetch<T: DeserializeOwned>(
    client: &Client,
    url: &Url,
    policy: &RetryPolicy,
) -> Result<T, AppError> {
    let value = fetch_json(client, url, policy).await?;
    serde_json::from_value(value).map_err(|e| {
        error!("Unexpected response structure from {}: {}", url, e);
        AppError::api_unexpected_structure(e.to_string(), url.as_str())
    })
}
