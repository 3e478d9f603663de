use image::RgbaImage;
use tracing::debug;

use crate::types::{BoundingBox, ContentRule};

/// Bounding box of every pixel `rule` classifies as content, or `None` when
/// the raster is entirely background.
///
/// `ContentRule::Auto` is resolved against the whole raster first.
pub fn content_bounds(img: &RgbaImage, rule: ContentRule) -> Option<BoundingBox> {
    let (cols, rows) = img.dimensions();
    if cols == 0 || rows == 0 {
        return None;
    }
    let rule = rule.resolve(img.as_raw());

    let mut left = u32::MAX;
    let mut top = u32::MAX;
    let mut right = 0u32;
    let mut bottom = 0u32;

    // Scan row slices; a row contributes only its first and last content pixel
    for (y, row) in img.as_raw().chunks_exact(cols as usize * 4).enumerate() {
        let mut pixels = row.chunks_exact(4).map(|p| [p[0], p[1], p[2], p[3]]);
        let Some(first) = pixels.position(|p| rule.is_content(p)) else {
            continue;
        };
        let last = row
            .chunks_exact(4)
            .rposition(|p| rule.is_content([p[0], p[1], p[2], p[3]]))
            .unwrap_or(first);

        let y = y as u32;
        left = left.min(first as u32);
        right = right.max(last as u32 + 1);
        top = top.min(y);
        bottom = y + 1;
    }

    if left == u32::MAX {
        debug!("content_bounds: no {} content in {}x{}", rule, cols, rows);
        return None;
    }

    let bbox = BoundingBox {
        left,
        top,
        right,
        bottom,
    };
    debug!("content_bounds: {} ({} rule)", bbox, rule);
    Some(bbox)
}
