//! Host boundary
//!
//! This module consolidates:
//! - Screenshot bitmap decoding and same-encoding export (image.rs)
//! - The adapter that runs the editor over the current screenshot (host.rs)

pub mod host;
pub mod image;
