use image::RgbaImage;
use tracing::info;

use crate::types::BoundingBox;

const CHANNELS: usize = 4;

/// Copies the `bbox` region of `img` onto a transparent square canvas whose side
/// is the larger bbox dimension, centered with integer-divided offsets.
///
/// Returns the canvas side and its RGBA bytes.
pub fn crop_to_square(
    img: &RgbaImage,
    bbox: BoundingBox,
) -> Result<(usize, Vec<u8>), Box<dyn std::error::Error>> {
    let (src_cols, src_rows) = img.dimensions();
    if bbox.right > src_cols
        || bbox.bottom > src_rows
        || bbox.left >= bbox.right
        || bbox.top >= bbox.bottom
    {
        return Err(format!(
            "bounding box {} outside {}x{} raster",
            bbox, src_cols, src_rows
        )
        .into());
    }

    let cols = bbox.width() as usize;
    let rows = bbox.height() as usize;
    let max_dim = cols.max(rows);
    let pad_cols = (max_dim - cols) / 2;
    let pad_rows = (max_dim - rows) / 2;

    info!(
        "Adding padding: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );
    info!("Canvas dimensions: {}x{}", max_dim, max_dim);

    let src = img.as_raw();
    let src_stride = src_cols as usize * CHANNELS;
    let dst_stride = max_dim * CHANNELS;
    let row_bytes = cols * CHANNELS;
    let mut padded = vec![0u8; max_dim * dst_stride];

    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset =
            (bbox.top as usize + row) * src_stride + bbox.left as usize * CHANNELS;
        let dst_offset = (row + pad_rows) * dst_stride + pad_cols * CHANNELS;
        let src_slice = &src[src_offset..src_offset + row_bytes];
        let dst_slice = &mut padded[dst_offset..dst_offset + row_bytes];
        dst_slice.copy_from_slice(src_slice);
    }

    Ok((max_dim, padded))
}
