// # directnic-core
//
// Core library for the Directnic dynamic-DNS updater.
//
// ## Architecture Overview
//
// This library provides the core workflow for one-shot dynamic-DNS updates:
// - **AddressSource**: Trait for resolving the caller's external address
// - **UpdateTarget**: Trait for pushing that address to a DNS provider
// - **UpdatePipeline**: Sequential orchestrator for the resolve → submit flow
// - **config**: Settings-file discovery across an ordered directory list
//
// ## Design Principles
//
// 1. **Separation of Concerns**: the pipeline never touches HTTP directly;
//    implementations live behind the trait seams
// 2. **Explicit failure propagation**: every step returns `Result`, no
//    process-aborting paths inside the library
// 3. **Library-First**: the binary crate is a thin wiring layer

pub mod config;
pub mod error;
pub mod pipeline;
pub mod traits;

// Re-export core types for convenience
pub use config::Settings;
pub use error::{Error, Result};
pub use pipeline::{PipelineEvent, UpdatePipeline};
pub use traits::{AddressSource, UpdateTarget};
