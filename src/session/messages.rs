//! Message types for the annotation editor
//!
//! This module contains:
//! - PointerMsg for canvas pointer events (surface coordinates)
//! - EditorMsg for everything the editor toolbar and canvas can send

use crate::config::{StrokeColor, Tool};
use crate::domain::Point;

/// Pointer events over the editing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    /// Button pressed at position
    Down(Point),
    /// Pointer moved to position
    Move(Point),
    /// Button released at position
    Up(Point),
    /// Pointer left the surface at position (ends a gesture like Up)
    Leave(Point),
}

/// All editor messages
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMsg {
    Pointer(PointerMsg),
    /// Select the tool for the next gesture
    SelectTool(Tool),
    /// Select the color for the next gesture
    SelectColor(StrokeColor),
    /// Erase all committed marks
    Clear,
    /// Close and discard edits
    Cancel,
    /// Close and export the merged bitmap
    Done,
}

impl EditorMsg {
    pub fn down(x: f32, y: f32) -> Self {
        Self::Pointer(PointerMsg::Down(Point::new(x, y)))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::Pointer(PointerMsg::Move(Point::new(x, y)))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::Pointer(PointerMsg::Up(Point::new(x, y)))
    }

    pub fn leave(x: f32, y: f32) -> Self {
        Self::Pointer(PointerMsg::Leave(Point::new(x, y)))
    }
}
