//! Tool state machine
//!
//! This module provides:
//! - Gesture state (`Idle` / `Gesturing`) snapshotting the active tool and color
//! - Pointer handlers deciding what goes to the preview and committed layers

pub mod gesture;
pub mod handlers;
