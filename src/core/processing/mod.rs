pub mod bounds;
pub mod padding;
pub mod pipeline;
pub mod resize;
