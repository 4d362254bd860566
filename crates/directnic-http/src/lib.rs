// # HTTP implementations
//
// This crate provides the reqwest-backed implementations of the
// directnic-core seams:
//
// - `HttpAddressSource`: resolves the external address via a public
//   IP-echo service (api.ipify.org by default)
// - `DirectnicTarget`: pushes the resolved address to the provider's
//   update endpoint with a single GET
//
// ## Behavior notes
//
// Both calls require an exact 200 status; everything else is reported as
// a status failure carrying the code. The lookup body is returned
// verbatim (no trimming, no IP validation) and the update URL is formed
// by direct concatenation of the configured endpoint and the address.

use std::time::Duration;

use async_trait::async_trait;
use directnic_core::error::{Error, Result};
use directnic_core::traits::{AddressSource, UpdateTarget};

/// Default public IP-echo endpoint
pub const DEFAULT_LOOKUP_URL: &str = "https://api.ipify.org/";

/// Request timeout applied to every outbound call
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .unwrap_or_default()
}

/// Address source backed by an HTTP IP-echo service
pub struct HttpAddressSource {
    /// URL to fetch the address from
    url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl HttpAddressSource {
    /// Create a source pointed at the default lookup service
    pub fn new() -> Self {
        Self::with_url(DEFAULT_LOOKUP_URL)
    }

    /// Create a source pointed at a custom lookup URL
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: build_client(),
        }
    }
}

impl Default for HttpAddressSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AddressSource for HttpAddressSource {
    async fn resolve(&self) -> Result<String> {
        tracing::debug!(url = %self.url, "resolving external address");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::network(format!("GET failed: {e}")))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::status("address lookup", response.status().as_u16()));
        }

        // Returned exactly as the service sent it, trailing whitespace
        // included; downstream concatenation relies on the verbatim text.
        response
            .text()
            .await
            .map_err(|e| Error::network(format!("body read failed: {e}")))
    }

    fn source_name(&self) -> &'static str {
        "http-ip-echo"
    }
}

/// Update target for Directnic-style GET endpoints
///
/// The endpoint URL is used as a prefix: the address is appended with no
/// separator, so configured URLs are expected to end with something like
/// `?ip=`. The provider signals acceptance by including the literal
/// substring `success` anywhere in the response body.
pub struct DirectnicTarget {
    /// Configured update endpoint prefix
    update_url: String,

    /// HTTP client
    client: reqwest::Client,
}

impl DirectnicTarget {
    /// Create a target for the given update endpoint
    pub fn new(update_url: impl Into<String>) -> Self {
        Self {
            update_url: update_url.into(),
            client: build_client(),
        }
    }
}

#[async_trait]
impl UpdateTarget for DirectnicTarget {
    async fn submit(&self, address: &str) -> Result<()> {
        let url = format!("{}{}", self.update_url, address);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::network(format!("update failed: {e}")))?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(Error::status("update", response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("body read failed: {e}")))?;

        if body.contains("success") {
            Ok(())
        } else {
            Err(Error::rejected(body))
        }
    }

    fn target_name(&self) -> &'static str {
        "directnic"
    }
}
