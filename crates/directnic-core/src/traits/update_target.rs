// # Update Target Trait
//
// Defines the interface for pushing a resolved address to a DNS provider.
//
// ## Implementations
//
// - Directnic-style GET endpoint: `directnic-http` crate
// - Test doubles: `tests/common/mod.rs`

use async_trait::async_trait;

use crate::error::Result;

/// Trait for provider update submissions
///
/// Implementations make exactly one attempt per call; there is no retry
/// or backoff anywhere in the system.
#[async_trait]
pub trait UpdateTarget: Send + Sync {
    /// Push the resolved address to the provider.
    ///
    /// # Parameters
    ///
    /// - `address`: the address text exactly as resolved
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the provider acknowledged the update
    /// - `Err(Error)`: transport failure, non-OK status, or an OK response
    ///   whose body lacked the provider's success marker
    async fn submit(&self, address: &str) -> Result<()>;

    /// Name of the provider endpoint, used in logs.
    fn target_name(&self) -> &'static str;
}
