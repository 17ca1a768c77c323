//! Host adapter
//!
//! Holds the screenshot the feedback form currently shows and runs the
//! annotation editor over it. Done swaps the annotated bitmap in; Cancel
//! leaves the previous screenshot untouched.

use super::image::SourceImage;
use crate::domain::{CanvasBounds, Point};
use crate::error::DecodeError;
use crate::session::{Closed, Editor, EditorMsg, PointerMsg};

/// How an editing round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorOutcome {
    /// The annotated bitmap replaced the screenshot
    Saved,
    /// The screenshot was left as it was
    Discarded,
}

#[derive(Debug, Default)]
pub struct HostAdapter {
    screenshot: Option<SourceImage>,
    editor: Editor,
    canvas: Option<CanvasBounds>,
}

impl HostAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly captured screenshot (replaces any previous one)
    pub fn set_screenshot(&mut self, screenshot: SourceImage) {
        self.screenshot = Some(screenshot);
    }

    pub fn screenshot(&self) -> Option<&SourceImage> {
        self.screenshot.as_ref()
    }

    /// Forget the screenshot, closing the editor without saving
    pub fn clear_screenshot(&mut self) {
        self.editor.close(false);
        self.canvas = None;
        self.screenshot = None;
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Open the editor on the current screenshot
    ///
    /// Returns false when there is nothing to annotate.
    pub fn open_editor(&mut self) -> Result<bool, DecodeError> {
        let Some(screenshot) = &self.screenshot else {
            return Ok(false);
        };
        self.editor.open_image(screenshot.rgba.clone())?;
        let (logical_width, logical_height) = screenshot.logical_size;
        log::debug!(
            "Editing {}x{} px screenshot captured at {}x{}",
            screenshot.width(),
            screenshot.height(),
            logical_width,
            logical_height
        );
        self.canvas = Some(CanvasBounds::unscaled(
            0.0,
            0.0,
            screenshot.width(),
            screenshot.height(),
        ));
        Ok(true)
    }

    /// Tell the adapter where the canvas is drawn on screen
    pub fn set_canvas_bounds(&mut self, bounds: CanvasBounds) {
        self.canvas = Some(bounds);
    }

    /// Forward a pointer event given in client coordinates
    pub fn client_pointer(&mut self, make: fn(Point) -> PointerMsg, x: f32, y: f32) {
        let Some(canvas) = self.canvas else {
            return;
        };
        self.editor.pointer(make(canvas.to_surface(x, y)));
    }

    /// Feed messages in order until the editor closes
    pub fn replay(&mut self, msgs: impl IntoIterator<Item = EditorMsg>) -> Option<EditorOutcome> {
        msgs.into_iter().find_map(|msg| self.dispatch(msg))
    }

    /// Route an editor message; returns the outcome once the editor closes
    pub fn dispatch(&mut self, msg: EditorMsg) -> Option<EditorOutcome> {
        let outcome = match self.editor.update(msg)? {
            Closed::Saved(merged) => {
                if let Some(current) = self.screenshot.as_mut() {
                    current.rgba = merged;
                }
                EditorOutcome::Saved
            }
            Closed::Discarded => EditorOutcome::Discarded,
        };
        self.canvas = None;
        Some(outcome)
    }
}
