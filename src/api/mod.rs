//! High-level, ergonomic library API: turn a logo file into favicon PNGs written
//! beside it, render favicons into memory, or write individual favicons. Prefer
//! these entrypoints over the low-level processing modules when integrating favgen.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::core::params::FaviconParams;
use crate::core::processing::pipeline::process_favicon_pipeline;
use crate::error::{Error, Result};
use crate::io::reader::load_rgba;
use crate::io::writers::png::write_rgba_png;
use crate::types::FaviconSize;

/// A favicon rendered in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Favicon {
    pub size: FaviconSize,
    /// Interleaved RGBA8, `edge * edge * 4` bytes
    pub rgba: Vec<u8>,
}

impl Favicon {
    pub fn edge(&self) -> u32 {
        self.size.edge()
    }

    pub fn to_image(&self) -> Option<RgbaImage> {
        RgbaImage::from_raw(self.edge(), self.edge(), self.rgba.clone())
    }
}

/// A favicon file written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFavicon {
    pub size: FaviconSize,
    pub path: PathBuf,
}

/// Outcome of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// Files written, in size order
    Created(Vec<WrittenFavicon>),
    /// The source had no content pixels; nothing was written
    NoContent,
}

/// Directory the favicons for `source` are written to: the source's parent.
/// A bare file name yields an empty path, so outputs resolve against the
/// current directory and print without a `./` prefix.
pub fn output_dir_for(source: &Path) -> PathBuf {
    source.parent().map(Path::to_path_buf).unwrap_or_default()
}

/// Render favicons from an RGBA raster already in memory (no disk I/O).
/// Returns `None` when the raster holds no content.
pub fn render_favicons(img: &RgbaImage, params: &FaviconParams) -> Result<Option<Vec<Favicon>>> {
    let (cols, rows) = img.dimensions();
    if cols == 0 || rows == 0 {
        return Err(Error::InvalidArgument {
            arg: "image",
            value: format!("{}x{}", cols, rows),
        });
    }

    let rendered = process_favicon_pipeline(img, params).map_err(Error::external)?;
    Ok(rendered.map(|list| {
        list.into_iter()
            .map(|(size, rgba)| Favicon { size, rgba })
            .collect()
    }))
}

/// Load `source` and render its favicons without writing anything.
pub fn render_file(source: &Path, params: &FaviconParams) -> Result<Option<Vec<Favicon>>> {
    let img = load_rgba(source)?;
    render_favicons(&img, params)
}

/// Encode one favicon as PNG into `out_dir`, named after its size.
pub fn write_favicon(favicon: &Favicon, out_dir: &Path) -> Result<WrittenFavicon> {
    let path = out_dir.join(favicon.size.file_name());
    let edge = favicon.edge();
    write_rgba_png(&path, edge, edge, &favicon.rgba)?;
    info!("Wrote {} favicon to {:?}", favicon.size, path);
    Ok(WrittenFavicon {
        size: favicon.size,
        path,
    })
}

/// Generate the default favicon set beside `source`.
pub fn generate_favicons(source: &Path) -> Result<Generation> {
    generate_favicons_with_params(source, &FaviconParams::default())
}

/// Generate favicons for `source` using `params`, writing them beside it.
/// Files written before a failure are left in place.
pub fn generate_favicons_with_params(
    source: &Path,
    params: &FaviconParams,
) -> Result<Generation> {
    generate_favicons_with_progress(source, params, |_| Ok(()))
}

/// Like [`generate_favicons_with_params`], calling `on_written` right after each
/// file is written. An error from the callback aborts the run.
pub fn generate_favicons_with_progress<F>(
    source: &Path,
    params: &FaviconParams,
    mut on_written: F,
) -> Result<Generation>
where
    F: FnMut(&WrittenFavicon) -> Result<()>,
{
    let Some(favicons) = render_file(source, params)? else {
        info!("No content found in {:?}", source);
        return Ok(Generation::NoContent);
    };

    let out_dir = output_dir_for(source);
    let mut written = Vec::with_capacity(favicons.len());
    for favicon in &favicons {
        let file = write_favicon(favicon, &out_dir)?;
        on_written(&file)?;
        written.push(file);
    }
    Ok(Generation::Created(written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn bare_file_name_writes_to_current_dir() {
        let dir = output_dir_for(Path::new("logo.png"));
        assert_eq!(dir, PathBuf::new());
        assert_eq!(
            dir.join(FaviconSize::Px16.file_name()),
            PathBuf::from("favicon-16x16.png")
        );
        assert_eq!(
            output_dir_for(Path::new("assets/logo.png")),
            PathBuf::from("assets")
        );
    }

    #[test]
    fn crop_failures_surface_as_processing_errors() {
        use crate::core::processing::padding::crop_to_square;
        use crate::types::BoundingBox;

        let img = RgbaImage::new(3, 3);
        let bbox = BoundingBox {
            left: 0,
            top: 0,
            right: 5,
            bottom: 3,
        };
        let err = crop_to_square(&img, bbox)
            .map_err(Error::external)
            .unwrap_err();
        assert!(matches!(err, Error::Processing(ref msg) if msg.contains("bounding box")));
        assert!(err.to_string().starts_with("Processing error: "));
    }

    #[test]
    fn progress_callback_sees_each_file_before_return() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("logo.png");
        RgbaImage::from_pixel(12, 6, Rgba([50, 60, 70, 255]))
            .save(&source)
            .unwrap();

        let mut seen = Vec::new();
        let generation =
            generate_favicons_with_progress(&source, &FaviconParams::default(), |file| {
                assert!(file.path.is_file());
                seen.push(file.clone());
                Ok(())
            })
            .unwrap();
        assert_eq!(generation, Generation::Created(seen));
    }

    #[test]
    fn progress_callback_error_stops_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("logo.png");
        RgbaImage::from_pixel(12, 6, Rgba([50, 60, 70, 255]))
            .save(&source)
            .unwrap();

        let res = generate_favicons_with_progress(&source, &FaviconParams::default(), |_| {
            Err(Error::Processing("stop".to_string()))
        });
        assert!(matches!(res, Err(Error::Processing(_))));
        assert!(dir.path().join("favicon-16x16.png").is_file());
        assert!(!dir.path().join("favicon-128x128.png").exists());
    }

    #[test]
    fn empty_raster_is_rejected() {
        let img = RgbaImage::new(0, 0);
        let err = render_favicons(&img, &FaviconParams::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "image", .. }));
    }

    #[test]
    fn empty_size_list_renders_nothing() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
        let params = FaviconParams {
            sizes: vec![],
            ..FaviconParams::default()
        };
        assert_eq!(render_favicons(&img, &params).unwrap(), Some(vec![]));
    }

    #[test]
    fn renders_each_requested_size() {
        let img = RgbaImage::from_pixel(20, 10, Rgba([200, 10, 10, 255]));
        let favicons = render_favicons(&img, &FaviconParams::default())
            .unwrap()
            .unwrap();

        let sizes: Vec<_> = favicons.iter().map(|f| f.size).collect();
        assert_eq!(sizes, FaviconSize::ALL.to_vec());
        for f in &favicons {
            let img = f.to_image().unwrap();
            assert_eq!(img.dimensions(), (f.edge(), f.edge()));
        }
    }
}
