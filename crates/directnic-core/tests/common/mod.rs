//! Test doubles and common utilities for pipeline contract tests
//!
//! These doubles track calls with atomic counters so tests can assert not
//! just on outcomes but on which seams were exercised.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use directnic_core::error::{Error, Result};
use directnic_core::traits::{AddressSource, UpdateTarget};

/// An address source that always returns a fixed string
pub struct FixedAddressSource {
    /// Address text to return, verbatim
    address: String,
    /// Call counter for resolve()
    resolve_call_count: Arc<AtomicUsize>,
}

impl FixedAddressSource {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            resolve_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times resolve() was called
    pub fn resolve_call_count(&self) -> usize {
        self.resolve_call_count.load(Ordering::SeqCst)
    }

    /// Create a new FixedAddressSource that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            address: other.address.clone(),
            resolve_call_count: Arc::clone(&other.resolve_call_count),
        }
    }
}

#[async_trait::async_trait]
impl AddressSource for FixedAddressSource {
    async fn resolve(&self) -> Result<String> {
        self.resolve_call_count.fetch_add(1, Ordering::SeqCst);
        Ok(self.address.clone())
    }

    fn source_name(&self) -> &'static str {
        "fixed"
    }
}

/// An address source whose lookup always fails with a status error
pub struct FailingAddressSource;

#[async_trait::async_trait]
impl AddressSource for FailingAddressSource {
    async fn resolve(&self) -> Result<String> {
        Err(Error::status("address lookup", 503))
    }

    fn source_name(&self) -> &'static str {
        "failing"
    }
}

/// What a RecordingUpdateTarget answers when submitted to
#[derive(Clone)]
pub enum TargetResponse {
    /// Provider acknowledges the update
    Accept,
    /// Provider returns 200 but the body lacks the success marker
    Reject(String),
}

/// A mock update target that records every submission
pub struct RecordingUpdateTarget {
    /// Call counter for submit()
    submit_call_count: Arc<AtomicUsize>,
    /// Address strings received, in order
    submitted: Arc<Mutex<Vec<String>>>,
    /// Canned response
    response: TargetResponse,
}

impl RecordingUpdateTarget {
    pub fn accepting() -> Self {
        Self::with_response(TargetResponse::Accept)
    }

    pub fn rejecting(body: impl Into<String>) -> Self {
        Self::with_response(TargetResponse::Reject(body.into()))
    }

    fn with_response(response: TargetResponse) -> Self {
        Self {
            submit_call_count: Arc::new(AtomicUsize::new(0)),
            submitted: Arc::new(Mutex::new(Vec::new())),
            response,
        }
    }

    /// Get the number of times submit() was called
    pub fn submit_call_count(&self) -> usize {
        self.submit_call_count.load(Ordering::SeqCst)
    }

    /// Get the addresses that were submitted
    pub fn submitted(&self) -> Vec<String> {
        self.submitted.lock().unwrap().clone()
    }

    /// Create a new RecordingUpdateTarget that shares counters with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            submit_call_count: Arc::clone(&other.submit_call_count),
            submitted: Arc::clone(&other.submitted),
            response: other.response.clone(),
        }
    }
}

#[async_trait::async_trait]
impl UpdateTarget for RecordingUpdateTarget {
    async fn submit(&self, address: &str) -> Result<()> {
        self.submit_call_count.fetch_add(1, Ordering::SeqCst);
        self.submitted.lock().unwrap().push(address.to_string());

        match &self.response {
            TargetResponse::Accept => Ok(()),
            TargetResponse::Reject(body) => Err(Error::rejected(body.clone())),
        }
    }

    fn target_name(&self) -> &'static str {
        "recording"
    }
}
