//! Core processing building blocks: content bounds, crop and square padding,
//! resizing, and the favicon pipeline. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
