//! HTTP client creation and configuration utilities

use reqwest::Client;
use std::time::Duration;

/// Creates an HTTP client with connection pooling and the given request timeout.
///
/// # Arguments
/// * `timeout_seconds` - Per-request timeout
/// * `verify_tls` - When `false` the client accepts any certificate. The stats
///   hosts are contacted this way.
pub fn create_http_client_with_timeout(
    timeout_seconds: u64,
    verify_tls: bool,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .danger_accept_invalid_certs(!verify_tls)
        .build()
}

/// The pair of clients a gateway needs: one verifying certificates, one not.
#[derive(Debug, Clone)]
pub struct HttpClients {
    verified: Client,
    unverified: Client,
}

impl HttpClients {
    pub fn new(timeout_seconds: u64) -> Result<Self, reqwest::Error> {
        Ok(HttpClients {
            verified: create_http_client_with_timeout(timeout_seconds, true)?,
            unverified: create_http_client_with_timeout(timeout_seconds, false)?,
        })
    }

    pub fn for_tls(&self, verify_tls: bool) -> &Client {
        if verify_tls {
            &self.verified
        } else {
            &self.unverified
        }
    }
}

/// Creates an HTTP client for testing with default timeout
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client_with_timeout(crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS, true)
        .expect("Failed to create test HTTP client")
}
