//! Annotation session management module
//!
//! This module contains:
//! - Session state (surfaces, active tool and color, committed marks)
//! - The editor shell that opens, clears and closes sessions
//! - Message types and keyboard shortcuts

pub mod editor;
pub mod messages;
pub mod shortcuts;
pub mod state;

pub use editor::{Closed, Editor};
pub use messages::{EditorMsg, PointerMsg};
pub use state::Session;
