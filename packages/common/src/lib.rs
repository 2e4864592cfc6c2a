//! Common infrastructure shared by the keyforge crates
//!
//! This crate provides:
//! - Error handling with context propagation
//! - Logging bootstrap that never prints generated secrets

pub mod error;

pub use error::*;
