use image::RgbaImage;
use tracing::info;

use crate::core::params::FaviconParams;
use crate::core::processing::bounds::content_bounds;
use crate::core::processing::padding::crop_to_square;
use crate::core::processing::resize::resize_square;
use crate::types::FaviconSize;

/// Bounds, crop, square and resize `img` for every size in `params`.
///
/// `Ok(None)` means no content was found; nothing was rendered.
pub fn process_favicon_pipeline(
    img: &RgbaImage,
    params: &FaviconParams,
) -> Result<Option<Vec<(FaviconSize, Vec<u8>)>>, Box<dyn std::error::Error>> {
    let Some(bbox) = content_bounds(img, params.content_rule) else {
        return Ok(None);
    };

    let (cols, rows) = img.dimensions();
    info!(
        "Cropping {}x{} to {} ({}x{})",
        cols,
        rows,
        bbox,
        bbox.width(),
        bbox.height()
    );
    let (side, canvas) = crop_to_square(img, bbox)?;

    let mut rendered = Vec::with_capacity(params.sizes.len());
    for &size in &params.sizes {
        let data = resize_square(&canvas, side, size.edge())?;
        rendered.push((size, data));
    }

    Ok(Some(rendered))
}
