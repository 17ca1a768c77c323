//! Screenshot bitmap type handed across the host boundary

use std::io::{self, Cursor};

use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::DecodeError;

/// How the host encoded a screenshot; the merged result is encoded the same way
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Encoding {
    pub format: ImageFormat,
    /// Came in as a `data:` URL rather than raw bytes
    pub data_url: bool,
}

/// A captured screenshot: decoded RGBA pixels plus the encoding it came in
#[derive(Clone, Debug, PartialEq)]
pub struct SourceImage {
    pub rgba: RgbaImage,
    pub encoding: Encoding,
    /// Size of the captured area in page units; differs from the pixel size
    /// on high-density displays and is kept unchanged through annotation
    pub logical_size: (u32, u32),
}

impl SourceImage {
    /// Decode raw encoded bytes, detecting the format from the content
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let format = image::guess_format(bytes)?;
        Self::decode(bytes, format, false)
    }

    /// Decode host input that is either raw image bytes or data URL text
    pub fn from_input(bytes: &[u8]) -> Result<Self, DecodeError> {
        match std::str::from_utf8(bytes) {
            Ok(text) if text.trim_start().starts_with("data:") => Self::from_data_url(text),
            _ => Self::from_bytes(bytes),
        }
    }

    /// Decode a `data:image/<fmt>;base64,<payload>` URL
    pub fn from_data_url(url: &str) -> Result<Self, DecodeError> {
        let rest = url
            .trim()
            .strip_prefix("data:")
            .ok_or_else(|| DecodeError::InvalidDataUrl("missing data: prefix".into()))?;
        let (meta, payload) = rest
            .split_once(',')
            .ok_or_else(|| DecodeError::InvalidDataUrl("missing payload separator".into()))?;
        let mime = meta
            .strip_suffix(";base64")
            .ok_or_else(|| DecodeError::InvalidDataUrl("payload is not base64".into()))?;
        let mime = mime.split(';').next().unwrap_or_default();
        let format = ImageFormat::from_mime_type(mime)
            .ok_or_else(|| DecodeError::UnsupportedFormat(mime.to_string()))?;

        let bytes = STANDARD.decode(payload.trim())?;
        Self::decode(&bytes, format, true)
    }

    fn decode(bytes: &[u8], format: ImageFormat, data_url: bool) -> Result<Self, DecodeError> {
        let rgba = image::load_from_memory_with_format(bytes, format)?.to_rgba8();
        log::debug!(
            "Decoded {:?} screenshot: {}x{} pixels",
            format,
            rgba.width(),
            rgba.height()
        );
        Ok(Self {
            logical_size: rgba.dimensions(),
            rgba,
            encoding: Encoding { format, data_url },
        })
    }

    /// Record the logical size the host captured at
    pub fn with_logical_size(self, width: u32, height: u32) -> Self {
        Self {
            logical_size: (width, height),
            ..self
        }
    }

    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    pub fn mime_type(&self) -> &'static str {
        self.encoding.format.to_mime_type()
    }

    /// Encode the pixels in this image's format
    pub fn encode(&self) -> anyhow::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        match self.encoding.format {
            ImageFormat::Png => write_png(&mut buffer, &self.rgba)?,
            ImageFormat::Jpeg => {
                // JPEG has no alpha channel
                DynamicImage::ImageRgba8(self.rgba.clone())
                    .to_rgb8()
                    .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Jpeg)
                    .context("Failed to encode JPEG")?;
            }
            format => DynamicImage::ImageRgba8(self.rgba.clone())
                .write_to(&mut Cursor::new(&mut buffer), format)
                .with_context(|| format!("Failed to encode {:?}", format))?,
        }
        Ok(buffer)
    }

    /// Encode for handing back to the host: data URL text or raw bytes,
    /// whichever the screenshot came in as
    pub fn to_output(&self) -> anyhow::Result<Vec<u8>> {
        if self.encoding.data_url {
            Ok(self.to_data_url()?.into_bytes())
        } else {
            self.encode()
        }
    }

    /// Encode as a base64 `data:` URL with this image's MIME type
    pub fn to_data_url(&self) -> anyhow::Result<String> {
        let bytes = self.encode()?;
        Ok(format!(
            "data:{};base64,{}",
            self.mime_type(),
            STANDARD.encode(bytes)
        ))
    }
}

fn write_png<W: io::Write>(w: W, image: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = png::Encoder::new(w, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sample() -> RgbaImage {
        RgbaImage::from_fn(7, 5, |x, y| Rgba([x as u8 * 30, y as u8 * 50, 77, 200]))
    }

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        write_png(&mut buf, img).unwrap();
        buf
    }

    #[test]
    fn png_bytes_decode_with_detected_format() {
        let img = SourceImage::from_bytes(&png_bytes(&sample())).unwrap();
        assert_eq!(img.rgba, sample());
        assert_eq!(img.encoding.format, ImageFormat::Png);
        assert!(!img.encoding.data_url);
        assert_eq!(img.logical_size, (7, 5));
        assert_eq!(img.with_logical_size(4, 3).logical_size, (4, 3));
    }

    #[test]
    fn data_url_keeps_mime_and_pixels() {
        let url = format!("data:image/png;base64,{}", STANDARD.encode(png_bytes(&sample())));
        let img = SourceImage::from_data_url(&url).unwrap();
        assert_eq!(img.rgba, sample());
        assert!(img.encoding.data_url);
        assert_eq!(img.mime_type(), "image/png");

        let reencoded = img.to_data_url().unwrap();
        assert!(reencoded.starts_with("data:image/png;base64,"));
        assert_eq!(SourceImage::from_data_url(&reencoded).unwrap().rgba, sample());
    }

    #[test]
    fn input_sniffs_data_url_text() {
        let png = png_bytes(&sample());
        let url = format!("  data:image/png;base64,{}\n", STANDARD.encode(&png));
        assert!(SourceImage::from_input(url.as_bytes()).unwrap().encoding.data_url);
        assert!(!SourceImage::from_input(&png).unwrap().encoding.data_url);

        let from_url = SourceImage::from_input(url.as_bytes()).unwrap();
        assert!(from_url.to_output().unwrap().starts_with(b"data:image/png;base64,"));
        let from_raw = SourceImage::from_input(&png).unwrap();
        assert_eq!(from_raw.to_output().unwrap(), png);
    }

    #[test]
    fn malformed_data_urls() {
        assert!(matches!(
            SourceImage::from_data_url("image/png;base64,AAAA"),
            Err(DecodeError::InvalidDataUrl(_))
        ));
        assert!(matches!(
            SourceImage::from_data_url("data:image/png,AAAA"),
            Err(DecodeError::InvalidDataUrl(_))
        ));
        assert!(matches!(
            SourceImage::from_data_url("data:text/plain;base64,AAAA"),
            Err(DecodeError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            SourceImage::from_data_url("data:image/png;base64,@@@"),
            Err(DecodeError::Base64(_))
        ));
    }

    #[test]
    fn jpeg_output_stays_jpeg() {
        let opaque = RgbaImage::from_pixel(16, 16, Rgba([10, 120, 240, 255]));
        let mut jpeg = Vec::new();
        DynamicImage::ImageRgba8(opaque.clone())
            .to_rgb8()
            .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
            .unwrap();
        let img = SourceImage::from_bytes(&jpeg).unwrap();
        assert_eq!(img.encoding.format, ImageFormat::Jpeg);
        let out = SourceImage { rgba: opaque, ..img }.encode().unwrap();
        assert_eq!(image::guess_format(&out).unwrap(), ImageFormat::Jpeg);
    }
}
