//! Layered screenshot annotation engine
//!
//! The host hands in a decoded screenshot, the user draws pen ink,
//! rectangles, arrows and highlighter paths over it, and Done returns the
//! screenshot with the marks baked in.

pub mod annotations;
pub mod capture;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod session;
pub mod surface;

pub use capture::host::{EditorOutcome, HostAdapter};
pub use capture::image::SourceImage;
pub use config::{StrokeColor, Tool};
pub use error::DecodeError;
pub use session::{Closed, Editor, EditorMsg, PointerMsg, Session};
pub use surface::Surfaces;
