use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use tracing::{debug, warn};

/// Resizes a square RGBA8 raster of side `side` to `target x target` with Lanczos3.
///
/// The resizer premultiplies alpha for `U8x4` while resampling, so transparent
/// padding does not bleed dark fringes into the content edges.
pub fn resize_square(
    data: &[u8],
    side: usize,
    target: u32,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    if target as usize > side {
        warn!(
            "Target size {} is larger than canvas side {}; upscaling",
            target, side
        );
    }
    debug!("Resizing {}x{} -> {}x{}", side, side, target, target);

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(side as u32, side as u32, data.to_vec(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target, target, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    Ok(dst_image.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_has_requested_square_size() {
        let data = vec![255u8; 40 * 40 * 4];
        for target in [16u32, 128] {
            let out = resize_square(&data, 40, target).unwrap();
            assert_eq!(out.len(), (target * target * 4) as usize);
        }
    }

    #[test]
    fn solid_opaque_color_stays_solid() {
        let mut data = Vec::with_capacity(64 * 64 * 4);
        for _ in 0..64 * 64 {
            data.extend_from_slice(&[30, 120, 200, 255]);
        }

        let out = resize_square(&data, 64, 16).unwrap();
        for px in out.chunks_exact(4) {
            assert!(px[3] >= 250, "alpha dropped to {}", px[3]);
            assert!((px[0] as i32 - 30).abs() <= 2);
            assert!((px[1] as i32 - 120).abs() <= 2);
            assert!((px[2] as i32 - 200).abs() <= 2);
        }
    }

    #[test]
    fn same_input_gives_identical_output() {
        let data: Vec<u8> = (0..50 * 50 * 4).map(|i| (i * 7 % 256) as u8).collect();
        let a = resize_square(&data, 50, 16).unwrap();
        let b = resize_square(&data, 50, 16).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_short_buffer() {
        assert!(resize_square(&[0u8; 12], 4, 16).is_err());
    }
}
