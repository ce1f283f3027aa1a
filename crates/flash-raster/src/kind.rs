//! The three flash programs and their fixed per-kind policies.
//!
//! Each server binary picks one [`FlashKind`]. The kind decides which
//! shape gets generated, what sits behind it, and how the finished canvas
//! is encoded.

use std::fmt;

use crate::encode::Encoding;
use crate::types::Color;

/// Selects the shape a server draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlashKind {
    /// Random-radius disc at the canvas center on a black background, PNG.
    Circle,
    /// The whole canvas in one random color, JPEG.
    Rectangle,
    /// Random triangle on a black background, PNG.
    Triangle,
}

impl FlashKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 3] = [Self::Circle, Self::Rectangle, Self::Triangle];

    /// Lowercase name used in logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
        }
    }

    /// Color painted over the whole canvas before the shape.
    ///
    /// `None` means the shape covers every pixel, so no background is
    /// painted.
    #[must_use]
    pub const fn background(self) -> Option<Color> {
        match self {
            Self::Circle | Self::Triangle => Some(Color::BLACK),
            Self::Rectangle => None,
        }
    }

    /// Output encoding for this kind.
    #[must_use]
    pub const fn encoding(self) -> Encoding {
        match self {
            Self::Circle | Self::Triangle => Encoding::Png,
            Self::Rectangle => Encoding::Jpeg,
        }
    }
}

impl fmt::Display for FlashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodings_match_content_types() {
        assert_eq!(FlashKind::Circle.encoding().mime_type(), "image/png");
        assert_eq!(FlashKind::Rectangle.encoding().mime_type(), "image/jpeg");
        assert_eq!(FlashKind::Triangle.encoding().mime_type(), "image/png");
    }

    #[test]
    fn backgrounds_per_kind() {
        assert_eq!(FlashKind::Circle.background(), Some(Color::BLACK));
        assert_eq!(FlashKind::Rectangle.background(), None);
        assert_eq!(FlashKind::Triangle.background(), Some(Color::BLACK));
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(FlashKind::Triangle.to_string(), "triangle");
    }
}
