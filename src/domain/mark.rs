//! Committed mark records
//!
//! Every finalized drawing operation on the committed surface is also kept
//! as one of these, in commit order. All coordinates are surface pixels.

use crate::config::{StrokeColor, Tool};
use crate::domain::Point;

/// One incremental freehand pen segment
#[derive(Clone, Debug, PartialEq)]
pub struct PenSegment {
    pub from: Point,
    pub to: Point,
    pub color: StrokeColor,
}

/// Unfilled rectangle between two opposite corners
#[derive(Clone, Debug, PartialEq)]
pub struct RectMark {
    /// Gesture origin
    pub start: Point,
    /// Release point
    pub end: Point,
    pub color: StrokeColor,
}

/// Arrow from the gesture origin to the release point
#[derive(Clone, Debug, PartialEq)]
pub struct ArrowMark {
    pub start: Point,
    /// Tip of the arrowhead
    pub end: Point,
    pub color: StrokeColor,
}

/// Translucent highlighter path (at least two samples)
#[derive(Clone, Debug, PartialEq)]
pub struct HighlighterMark {
    pub points: Vec<Point>,
    pub color: StrokeColor,
}

/// Unified mark type, stored in commit order
#[derive(Clone, Debug, PartialEq)]
pub enum Mark {
    Pen(PenSegment),
    Rectangle(RectMark),
    Arrow(ArrowMark),
    Highlighter(HighlighterMark),
}

impl Mark {
    /// Tool that produced this mark
    pub fn tool(&self) -> Tool {
        match self {
            Mark::Pen(_) => Tool::Pen,
            Mark::Rectangle(_) => Tool::Rectangle,
            Mark::Arrow(_) => Tool::Arrow,
            Mark::Highlighter(_) => Tool::Highlighter,
        }
    }

    pub fn color(&self) -> StrokeColor {
        match self {
            Mark::Pen(m) => m.color,
            Mark::Rectangle(m) => m.color,
            Mark::Arrow(m) => m.color,
            Mark::Highlighter(m) => m.color,
        }
    }
}
