//! Shared types used across favgen.
//! Includes `FaviconSize`, the `ContentRule` used for bounding-box detection,
//! and the derived `BoundingBox`.
use serde::{Deserialize, Serialize};

/// Edge lengths of the favicons produced by a run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum FaviconSize {
    Px16,
    Px128,
}

impl FaviconSize {
    /// Every size, in output order.
    pub const ALL: [FaviconSize; 2] = [FaviconSize::Px16, FaviconSize::Px128];

    pub fn edge(self) -> u32 {
        match self {
            FaviconSize::Px16 => 16,
            FaviconSize::Px128 => 128,
        }
    }

    /// Output file name, e.g. `favicon-16x16.png`.
    pub fn file_name(self) -> String {
        let edge = self.edge();
        format!("favicon-{}x{}.png", edge, edge)
    }
}

impl std::fmt::Display for FaviconSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let edge = self.edge();
        write!(f, "{}x{}", edge, edge)
    }
}

/// Which pixels count as content when computing the crop box.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ContentRule {
    /// `Alpha` when the raster has any transparency, `NonBlack` when it is fully opaque.
    #[default]
    Auto,
    /// Non-zero alpha and at least one non-zero color channel.
    NonBlack,
    /// Non-zero alpha only; opaque black is content.
    Alpha,
}

impl ContentRule {
    /// Picks the concrete rule for `rgba` (interleaved RGBA8). Only `Auto` inspects the data.
    pub fn resolve(self, rgba: &[u8]) -> ContentRule {
        match self {
            ContentRule::Auto => {
                if rgba.chunks_exact(4).any(|p| p[3] != u8::MAX) {
                    ContentRule::Alpha
                } else {
                    ContentRule::NonBlack
                }
            }
            rule => rule,
        }
    }

    /// Classifies one pixel. An unresolved `Auto` behaves like `Alpha`.
    #[inline]
    pub fn is_content(self, px: [u8; 4]) -> bool {
        let [r, g, b, a] = px;
        match self {
            ContentRule::NonBlack => a != 0 && (r | g | b) != 0,
            ContentRule::Alpha | ContentRule::Auto => a != 0,
        }
    }
}

impl std::fmt::Display for ContentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentRule::Auto => write!(f, "Auto"),
            ContentRule::NonBlack => write!(f, "NonBlack"),
            ContentRule::Alpha => write!(f, "Alpha"),
        }
    }
}

/// Smallest rectangle holding all content pixels. `right` and `bottom` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
