//! Sequential update pipeline
//!
//! The UpdatePipeline is responsible for:
//! - Resolving the external address via AddressSource
//! - Pushing the resolved address via UpdateTarget
//! - Logging outcomes and emitting events for observers
//!
//! ## Flow
//!
//! ```text
//! ┌───────────────┐     ┌────────────────┐     ┌──────────────┐
//! │ AddressSource │ ──▶ │ UpdatePipeline │ ──▶ │ UpdateTarget │
//! └───────────────┘     └────────────────┘     └──────────────┘
//!                               │
//!                               ▼
//!                       PipelineEvent stream
//! ```
//!
//! One pass, no retries. A resolution failure short-circuits the run; an
//! update failure is logged and reported but does not suppress the final
//! completion line (see [`UpdatePipeline::run`]).

use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::error::Result;
use crate::traits::{AddressSource, UpdateTarget};

/// Capacity of the pipeline event channel
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Events emitted by the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// Address resolution failed; the run stops here
    ResolveFailed {
        error: String,
    },

    /// External address resolved
    AddressResolved {
        address: String,
    },

    /// Update submission failed (the run still completes)
    UpdateFailed {
        error: String,
    },

    /// Pipeline reached its completion line
    Completed,
}

/// Sequential update pipeline
///
/// Orchestrates one resolve-then-submit pass over boxed trait objects.
/// Observers (tests, embedders) receive [`PipelineEvent`]s on the channel
/// returned by [`UpdatePipeline::new`].
pub struct UpdatePipeline {
    /// Address lookup implementation
    source: Box<dyn AddressSource>,

    /// Provider update implementation
    target: Box<dyn UpdateTarget>,

    /// Event sender for external observation
    event_tx: mpsc::Sender<PipelineEvent>,
}

impl UpdatePipeline {
    /// Create a new pipeline
    ///
    /// # Returns
    ///
    /// A tuple of (pipeline, event_receiver) where event_receiver yields
    /// pipeline events as the run progresses.
    pub fn new(
        source: Box<dyn AddressSource>,
        target: Box<dyn UpdateTarget>,
    ) -> (Self, mpsc::Receiver<PipelineEvent>) {
        let (tx, rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        let pipeline = Self {
            source,
            target,
            event_tx: tx,
        };

        (pipeline, rx)
    }

    /// Run one resolve-then-submit pass.
    ///
    /// # Behavior
    ///
    /// 1. Resolve the external address. On failure, emit
    ///    [`PipelineEvent::ResolveFailed`] and return the error; the
    ///    target is never invoked.
    /// 2. Log the resolved address and emit
    ///    [`PipelineEvent::AddressResolved`].
    /// 3. Submit the update. On failure, emit
    ///    [`PipelineEvent::UpdateFailed`] but keep going.
    /// 4. Log the fixed completion line and emit
    ///    [`PipelineEvent::Completed`].
    ///
    /// Step 4 runs whether or not step 3 succeeded. A rejected update is
    /// reported through the `UpdateFailed` event and the error log, not by
    /// suppressing the completion line.
    pub async fn run(&self) -> Result<()> {
        let address = match self.source.resolve().await {
            Ok(address) => address,
            Err(e) => {
                error!(source = self.source.source_name(), "failed to retrieve external ip: {e}");
                self.emit_event(PipelineEvent::ResolveFailed {
                    error: e.to_string(),
                });
                return Err(e);
            }
        };

        info!("external address: {address}");
        self.emit_event(PipelineEvent::AddressResolved {
            address: address.clone(),
        });

        if let Err(e) = self.target.submit(&address).await {
            error!(target = self.target.target_name(), "failed to update external ip: {e}");
            self.emit_event(PipelineEvent::UpdateFailed {
                error: e.to_string(),
            });
        }

        info!("external ip updated");
        self.emit_event(PipelineEvent::Completed);

        Ok(())
    }

    /// Emit a pipeline event
    ///
    /// Events are best-effort: if the observer is not draining the channel
    /// the event is dropped with a warning rather than blocking the run.
    fn emit_event(&self, event: PipelineEvent) {
        if self.event_tx.try_send(event).is_err() {
            warn!("event channel full, dropping pipeline event");
        }
    }
}
