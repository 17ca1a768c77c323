//! Mark rendering module
//!
//! This module contains:
//! - Fixed stroke constants and shape geometry
//! - tiny-skia drawing of marks onto surfaces (shared by preview and commit)

pub mod geometry;
pub mod pixmap;
