use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

pub fn write_rgba_png(output: &Path, cols: u32, rows: u32, rgba_data: &[u8]) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new(&mut writer);
    encoder.write_image(rgba_data, cols, rows, ExtendedColorType::Rgba8)?;
    writer.flush()?;
    Ok(())
}
