//! Schema module
//!
//! Contains request/response models for the voice platform envelope
//! and the Shortboxed comics API.

pub mod shortboxed;
pub mod skill;
