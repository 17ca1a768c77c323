//! Gesture state for the tool state machine

use crate::config::{StrokeColor, Tool};
use crate::domain::Point;

/// One pointer interaction from press to release
///
/// Tool and color are snapshotted at press time and stay fixed until the
/// gesture ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Gesture {
    pub tool: Tool,
    pub color: StrokeColor,
    /// Press position
    pub origin: Point,
    /// Most recently processed sample
    pub last: Point,
    /// Sampled path, highlighter only (duplicates allowed)
    pub points: Vec<Point>,
}

impl Gesture {
    pub fn start(tool: Tool, color: StrokeColor, origin: Point) -> Self {
        let points = if tool == Tool::Highlighter {
            vec![origin]
        } else {
            Vec::new()
        };
        Self {
            tool,
            color,
            origin,
            last: origin,
            points,
        }
    }
}

/// Per-session tool state machine
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ToolState {
    #[default]
    Idle,
    Gesturing(Gesture),
}

impl ToolState {
    pub fn is_gesturing(&self) -> bool {
        matches!(self, ToolState::Gesturing(_))
    }

    /// Leave the `Gesturing` state, returning the finished gesture
    pub fn take(&mut self) -> Option<Gesture> {
        match std::mem::take(self) {
            ToolState::Gesturing(g) => Some(g),
            ToolState::Idle => None,
        }
    }
}
