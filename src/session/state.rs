//! Editing session state
//!
//! A `Session` owns one set of surfaces plus the active tool and color. It
//! lives from the moment the editor opens on a bitmap until Cancel or Done.

use image::RgbaImage;

use crate::annotations::gesture::ToolState;
use crate::annotations::handlers;
use crate::config::{StrokeColor, Tool};
use crate::domain::Mark;
use crate::session::messages::PointerMsg;
use crate::surface::Surfaces;

/// Tool/color picked while a gesture was in flight
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PendingSelection {
    pub tool: Option<Tool>,
    pub color: Option<StrokeColor>,
}

#[derive(Debug)]
pub struct Session {
    pub(crate) surfaces: Surfaces,
    pub(crate) tool: Tool,
    pub(crate) color: StrokeColor,
    pub(crate) state: ToolState,
    /// Committed marks in commit order
    pub(crate) marks: Vec<Mark>,
    pub(crate) pending: PendingSelection,
}

impl Session {
    pub fn new(mut surfaces: Surfaces, tool: Tool, color: StrokeColor) -> Self {
        surfaces.render();
        Self {
            surfaces,
            tool,
            color,
            state: ToolState::Idle,
            marks: Vec::new(),
            pending: PendingSelection::default(),
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> StrokeColor {
        self.color
    }

    pub fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn is_gesturing(&self) -> bool {
        self.state.is_gesturing()
    }

    /// Select the tool for the next gesture (queued while gesturing)
    pub fn select_tool(&mut self, tool: Tool) {
        if self.is_gesturing() {
            log::debug!("Queueing tool {} until the gesture ends", tool.name());
            self.pending.tool = Some(tool);
        } else {
            self.tool = tool;
        }
    }

    /// Select the color for the next gesture (queued while gesturing)
    pub fn select_color(&mut self, color: StrokeColor) {
        if self.is_gesturing() {
            log::debug!("Queueing color {} until the gesture ends", color.hex());
            self.pending.color = Some(color);
        } else {
            self.color = color;
        }
    }

    pub(crate) fn apply_pending_selection(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if let Some(tool) = pending.tool {
            self.tool = tool;
        }
        if let Some(color) = pending.color {
            self.color = color;
        }
    }

    pub fn handle_pointer(&mut self, msg: PointerMsg) {
        handlers::handle_pointer_msg(self, msg);
    }

    /// Erase all committed marks and re-render
    pub fn clear(&mut self) {
        self.surfaces.clear_committed();
        self.marks.clear();
        self.surfaces.render();
    }

    /// Drop an in-flight gesture without committing anything further
    pub fn abandon_gesture(&mut self) {
        if self.state.take().is_some() {
            self.surfaces.clear_preview();
            self.surfaces.render();
            self.apply_pending_selection();
        }
    }

    /// Current composite for display
    pub fn visible_image(&self) -> RgbaImage {
        self.surfaces.visible_image()
    }

    /// Background composited with committed marks
    pub fn merge_final(&self) -> RgbaImage {
        self.surfaces.merge_final()
    }
}
