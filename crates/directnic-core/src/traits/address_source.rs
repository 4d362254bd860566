// # Address Source Trait
//
// Defines the interface for discovering the caller's externally visible
// address.
//
// ## Implementations
//
// - HTTP IP-echo lookup: `directnic-http` crate
// - Test doubles: `tests/common/mod.rs`

use async_trait::async_trait;

use crate::error::Result;

/// Trait for external-address lookups
///
/// Implementations perform a single lookup per call. The returned string
/// is the lookup service's answer verbatim; no IP-syntax validation or
/// whitespace trimming is applied, so downstream consumers see exactly
/// what the service sent.
#[async_trait]
pub trait AddressSource: Send + Sync {
    /// Resolve the current externally visible address as text.
    ///
    /// # Returns
    ///
    /// - `Ok(String)`: the address text, exactly as returned upstream
    /// - `Err(Error)`: transport failure or a non-OK upstream status
    async fn resolve(&self) -> Result<String>;

    /// Name of the lookup service, used in logs.
    fn source_name(&self) -> &'static str;
}
