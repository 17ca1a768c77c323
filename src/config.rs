//! Tool and palette selection types, and the replay script format

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::session::messages::EditorMsg;

/// Annotation tool (closed set; exactly one is active at a time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    /// Freehand ink, committed segment by segment while dragging
    #[default]
    Pen,
    /// Unfilled axis-aligned rectangle
    #[serde(alias = "rect")]
    Rectangle,
    /// Line with a filled triangular head at the release point
    Arrow,
    /// Wide translucent freehand path
    Highlighter,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Pen, Tool::Rectangle, Tool::Arrow, Tool::Highlighter];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Pen => "pen",
            Tool::Rectangle => "rectangle",
            Tool::Arrow => "arrow",
            Tool::Highlighter => "highlighter",
        }
    }
}

/// Stroke color from the fixed six-entry palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeColor {
    #[default]
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Black,
}

impl StrokeColor {
    /// Palette in toolbar order
    pub const ALL: [StrokeColor; 6] = [
        StrokeColor::Red,
        StrokeColor::Orange,
        StrokeColor::Yellow,
        StrokeColor::Green,
        StrokeColor::Blue,
        StrokeColor::Black,
    ];

    /// Convert to image crate RGBA format (0-255), always opaque
    pub fn to_rgba_u8(self) -> [u8; 4] {
        match self {
            StrokeColor::Red => [0xff, 0x00, 0x00, 0xff],
            StrokeColor::Orange => [0xff, 0x95, 0x00, 0xff],
            StrokeColor::Yellow => [0xff, 0xcc, 0x00, 0xff],
            StrokeColor::Green => [0x34, 0xc7, 0x59, 0xff],
            StrokeColor::Blue => [0x00, 0x7a, 0xff, 0xff],
            StrokeColor::Black => [0x00, 0x00, 0x00, 0xff],
        }
    }

    /// CSS-style hex string, e.g. `#007aff`
    pub fn hex(self) -> String {
        let [r, g, b, _] = self.to_rgba_u8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Palette entry by 1-based toolbar position
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

/// One scripted editor input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    SelectTool { tool: Tool },
    SelectColor { color: StrokeColor },
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up { x: f32, y: f32 },
    Leave { x: f32, y: f32 },
    Clear,
}

impl From<ScriptStep> for EditorMsg {
    fn from(step: ScriptStep) -> Self {
        match step {
            ScriptStep::SelectTool { tool } => EditorMsg::SelectTool(tool),
            ScriptStep::SelectColor { color } => EditorMsg::SelectColor(color),
            ScriptStep::Down { x, y } => EditorMsg::down(x, y),
            ScriptStep::Move { x, y } => EditorMsg::moved(x, y),
            ScriptStep::Up { x, y } => EditorMsg::up(x, y),
            ScriptStep::Leave { x, y } => EditorMsg::leave(x, y),
            ScriptStep::Clear => EditorMsg::Clear,
        }
    }
}

/// A recorded editing session replayed by the command-line tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Tool active when the editor opens (defaults to pen)
    #[serde(default)]
    pub tool: Option<Tool>,
    /// Color active when the editor opens (defaults to red)
    #[serde(default)]
    pub color: Option<StrokeColor>,
    /// Inputs in receipt order
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
    /// Done (true) or Cancel (false) at the end
    #[serde(default = "default_save")]
    pub save: bool,
}

fn default_save() -> bool {
    true
}

impl ReplayScript {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse replay script")
    }

    /// Load a script from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read script file: {}", path.display()))?;
        Self::from_json(&json)
    }

    /// All editor messages in order, including the initial selection and final close
    pub fn messages(&self) -> Vec<EditorMsg> {
        let mut msgs = Vec::with_capacity(self.steps.len() + 3);
        if let Some(tool) = self.tool {
            msgs.push(EditorMsg::SelectTool(tool));
        }
        if let Some(color) = self.color {
            msgs.push(EditorMsg::SelectColor(color));
        }
        msgs.extend(self.steps.iter().cloned().map(EditorMsg::from));
        msgs.push(if self.save {
            EditorMsg::Done
        } else {
            EditorMsg::Cancel
        });
        msgs
    }
}
