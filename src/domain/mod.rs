//! Pure domain types with minimal dependencies
//!
//! Nothing here knows about pixmaps or sessions; rendering and the tool
//! state machine build on these types.

pub mod geometry;
pub mod mark;

pub use geometry::*;
pub use mark::*;
