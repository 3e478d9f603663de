//! I/O layer: the `reader` that loads and RGBA-normalizes source rasters,
//! and `writers` for PNG output.
pub mod reader;
pub use reader::load_rgba;

pub mod writers;
