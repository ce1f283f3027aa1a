//! Canvas encoding to PNG or JPEG bytes.
//!
//! The whole image is encoded into memory. Nothing is streamed, so a
//! caller can still choose its response status after encoding fails.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, RgbaImage};

use crate::types::FlashError;

/// JPEG quality used for lossy output.
pub const JPEG_QUALITY: u8 = 75;

/// Output image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Lossless RGBA.
    Png,
    /// Lossy RGB at [`JPEG_QUALITY`]; alpha is dropped.
    Jpeg,
}

impl Encoding {
    /// The matching `image` format.
    #[must_use]
    pub const fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }

    /// MIME type for the `Content-Type` header.
    #[must_use]
    pub fn mime_type(self) -> &'static str {
        self.image_format().to_mime_type()
    }
}

/// Encoded image bytes and the format they are in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub encoding: Encoding,
    pub bytes: Vec<u8>,
}

impl EncodedImage {
    /// MIME type of [`Self::bytes`].
    #[must_use]
    pub fn mime_type(&self) -> &'static str {
        self.encoding.mime_type()
    }
}

/// Encode `canvas` in the requested format.
///
/// # Errors
///
/// Returns [`FlashError::Encode`] if the encoder rejects the canvas
/// or fails to write.
pub fn encode(canvas: &RgbaImage, encoding: Encoding) -> Result<EncodedImage, FlashError> {
    let (width, height) = canvas.dimensions();
    let mut bytes = Vec::new();

    match encoding {
        Encoding::Png => {
            let encoder = PngEncoder::new(&mut bytes);
            encoder.write_image(canvas.as_raw(), width, height, ExtendedColorType::Rgba8)?;
        }
        Encoding::Jpeg => {
            let rgb: Vec<u8> = canvas
                .as_raw()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
            encoder.write_image(&rgb, width, height, ExtendedColorType::Rgb8)?;
        }
    }

    Ok(EncodedImage { encoding, bytes })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Color;

    const GRAY: Color = Color::opaque(128, 128, 128);

    fn two_tone(width: u32, height: u32, left: Color, right: Color) -> RgbaImage {
        RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                left.to_rgba()
            } else {
                right.to_rgba()
            }
        })
    }

    #[test]
    fn png_round_trip_is_exact() {
        let left = Color::opaque(200, 10, 90);
        let img = two_tone(32, 16, left, Color::BLACK);
        let encoded = encode(&img, Encoding::Png).unwrap();
        assert_eq!(encoded.mime_type(), "image/png");

        let decoded = image::load_from_memory_with_format(&encoded.bytes, ImageFormat::Png)
            .unwrap()
            .to_rgba8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn jpeg_round_trip_is_close() {
        let color = Color::opaque(30, 140, 220);
        let img = RgbaImage::from_pixel(64, 48, color.to_rgba());
        let encoded = encode(&img, Encoding::Jpeg).unwrap();
        assert_eq!(encoded.mime_type(), "image/jpeg");
        assert_eq!(&encoded.bytes[..2], &[0xFF, 0xD8]);

        let decoded = image::load_from_memory_with_format(&encoded.bytes, ImageFormat::Jpeg)
            .unwrap()
            .to_rgb8();
        assert_eq!(decoded.dimensions(), (64, 48));
        for p in decoded.pixels() {
            for (got, want) in p.0.iter().zip([color.r, color.g, color.b]) {
                assert!(got.abs_diff(want) <= 4, "channel {got} vs {want}");
            }
        }
    }

    #[test]
    fn png_signature_is_written() {
        let img = RgbaImage::from_pixel(2, 2, GRAY.to_rgba());
        let encoded = encode(&img, Encoding::Png).unwrap();
        assert_eq!(&encoded.bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn jpeg_drops_alpha() {
        let img = RgbaImage::from_pixel(16, 16, image::Rgba([250, 250, 250, 0]));
        let encoded = encode(&img, Encoding::Jpeg).unwrap();
        let decoded = image::load_from_memory(&encoded.bytes).unwrap();
        assert!(!decoded.color().has_alpha());
    }
}
