//! Trait seams between the pipeline and its I/O implementations
//!
//! The pipeline only ever sees these traits; the HTTP implementations live
//! in the `directnic-http` crate and tests substitute their own doubles.

pub mod address_source;
pub mod update_target;

pub use address_source::AddressSource;
pub use update_target::UpdateTarget;
