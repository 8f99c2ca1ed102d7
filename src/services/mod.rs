//! Services module
//!
//! Contains external service integrations.

pub mod shortboxed;

pub use shortboxed::{ShortboxedConfig, ShortboxedError, ShortboxedService};
