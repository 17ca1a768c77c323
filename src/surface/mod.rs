//! Surface manager
//!
//! Owns the three raster layers of one editing session and the visible
//! composite built from them:
//! - `background`: the decoded source bitmap, written once
//! - `committed`: every finalized mark, transparent at creation
//! - `preview`: scratch layer redrawn during a gesture
//!
//! All four buffers always share the source bitmap's pixel size.

pub mod composite;

use image::RgbaImage;
use tiny_skia::{Color, Pixmap, PixmapPaint, Transform};

use crate::error::DecodeError;
use crate::render::pixmap::{pixmap_from_rgba, rgba_from_pixmap};

#[derive(Debug)]
pub struct Surfaces {
    /// Exact source pixels (straight alpha), used for export
    source: RgbaImage,
    background: Pixmap,
    committed: Pixmap,
    preview: Pixmap,
    visible: Pixmap,
}

impl Surfaces {
    /// Allocate surfaces for an already decoded bitmap
    pub fn create(source: RgbaImage) -> Result<Self, DecodeError> {
        let (width, height) = source.dimensions();
        let committed = allocate_layer(width, height)?;
        let preview = committed.clone();
        let background =
            pixmap_from_rgba(&source).ok_or(DecodeError::TooLarge { width, height })?;
        let visible = background.clone();

        log::debug!("Allocated {}x{} annotation surfaces", width, height);
        Ok(Self {
            source,
            background,
            committed,
            preview,
            visible,
        })
    }

    /// Decode an encoded bitmap (PNG, JPEG, ...) and allocate surfaces for it
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let source = image::load_from_memory(bytes)?.to_rgba8();
        Self::create(source)
    }

    pub fn width(&self) -> u32 {
        self.source.width()
    }

    pub fn height(&self) -> u32 {
        self.source.height()
    }

    /// The source bitmap as loaded
    pub fn background(&self) -> &RgbaImage {
        &self.source
    }

    pub fn committed(&self) -> &Pixmap {
        &self.committed
    }

    pub fn committed_mut(&mut self) -> &mut Pixmap {
        &mut self.committed
    }

    pub fn preview(&self) -> &Pixmap {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut Pixmap {
        &mut self.preview
    }

    /// Last rendered composite
    pub fn visible(&self) -> &Pixmap {
        &self.visible
    }

    /// Last rendered composite as a straight-alpha image
    pub fn visible_image(&self) -> RgbaImage {
        rgba_from_pixmap(&self.visible)
    }

    /// Recompute the visible output: background, then committed, then preview
    pub fn render(&mut self) {
        self.visible
            .data_mut()
            .copy_from_slice(self.background.data());
        let paint = PixmapPaint::default();
        self.visible.draw_pixmap(
            0,
            0,
            self.committed.as_ref(),
            &paint,
            Transform::identity(),
            None,
        );
        self.visible.draw_pixmap(
            0,
            0,
            self.preview.as_ref(),
            &paint,
            Transform::identity(),
            None,
        );
    }

    /// Reset the committed layer to fully transparent (caller renders)
    pub fn clear_committed(&mut self) {
        self.committed.fill(Color::TRANSPARENT);
    }

    /// Reset the preview layer to fully transparent (caller renders)
    pub fn clear_preview(&mut self) {
        self.preview.fill(Color::TRANSPARENT);
    }

    /// Export: background composited with committed only; preview never included
    pub fn merge_final(&self) -> RgbaImage {
        composite::composite_over(&self.source, &self.committed)
    }
}

/// Allocate one transparent layer, telling an empty bitmap apart from one
/// whose buffer cannot be sized
fn allocate_layer(width: u32, height: u32) -> Result<Pixmap, DecodeError> {
    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyImage { width, height });
    }
    Pixmap::new(width, height).ok_or(DecodeError::TooLarge { width, height })
}
