//! Session controller
//!
//! `Editor` is the shell around at most one `Session`. It remembers the
//! toolbar selection between sessions and turns Cancel/Done into a result
//! for the host.

use image::RgbaImage;

use crate::config::{StrokeColor, Tool};
use crate::error::DecodeError;
use crate::session::messages::{EditorMsg, PointerMsg};
use crate::session::state::Session;
use crate::surface::Surfaces;

/// How the editor was closed
#[derive(Debug, Clone, PartialEq)]
pub enum Closed {
    /// Done: background merged with committed marks
    Saved(RgbaImage),
    /// Cancel: edits thrown away
    Discarded,
}

#[derive(Debug, Default)]
pub struct Editor {
    session: Option<Session>,
    tool: Tool,
    color: StrokeColor,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on an encoded bitmap, replacing any existing session
    pub fn open(&mut self, bytes: &[u8]) -> Result<(), DecodeError> {
        self.install(Surfaces::decode(bytes))
    }

    /// Open on an already decoded bitmap, replacing any existing session
    pub fn open_image(&mut self, image: RgbaImage) -> Result<(), DecodeError> {
        self.install(Surfaces::create(image))
    }

    fn install(&mut self, surfaces: Result<Surfaces, DecodeError>) -> Result<(), DecodeError> {
        if self.session.take().is_some() {
            log::debug!("Discarding previous annotation session");
        }
        let surfaces = surfaces?;
        log::info!(
            "Annotation editor opened on {}x{} bitmap",
            surfaces.width(),
            surfaces.height()
        );
        self.session = Some(Session::new(surfaces, self.tool, self.color));
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Tool the toolbar shows as active
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Color the toolbar shows as active
    pub fn color(&self) -> StrokeColor {
        self.color
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        if let Some(session) = &mut self.session {
            session.select_tool(tool);
        }
    }

    pub fn select_color(&mut self, color: StrokeColor) {
        self.color = color;
        if let Some(session) = &mut self.session {
            session.select_color(color);
        }
    }

    pub fn pointer(&mut self, msg: PointerMsg) {
        match &mut self.session {
            Some(session) => session.handle_pointer(msg),
            None => log::debug!("Ignoring pointer event with no open session"),
        }
    }

    pub fn clear(&mut self) {
        if let Some(session) = &mut self.session {
            session.clear();
        }
    }

    /// Close the editor; returns the merged bitmap when `save` is set
    ///
    /// The session is destroyed either way. Returns None with no open session.
    pub fn close(&mut self, save: bool) -> Option<RgbaImage> {
        let mut session = self.session.take()?;
        if session.is_gesturing() {
            log::warn!("Closing annotation editor mid-gesture; dropping the gesture");
            session.abandon_gesture();
        }
        if save {
            log::info!("Annotation editor closed with {} marks", session.marks().len());
            Some(session.merge_final())
        } else {
            log::info!("Annotation editor cancelled");
            None
        }
    }

    /// Handle an editor message; returns how the editor closed, if it did
    pub fn update(&mut self, msg: EditorMsg) -> Option<Closed> {
        match msg {
            EditorMsg::Pointer(p) => self.pointer(p),
            EditorMsg::SelectTool(tool) => self.select_tool(tool),
            EditorMsg::SelectColor(color) => self.select_color(color),
            EditorMsg::Clear => self.clear(),
            EditorMsg::Cancel => {
                if self.is_open() {
                    self.close(false);
                    return Some(Closed::Discarded);
                }
            }
            EditorMsg::Done => return self.close(true).map(Closed::Saved),
        }
        None
    }
}
