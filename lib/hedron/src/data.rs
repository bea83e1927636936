mod bounds;
mod buffer;
mod geometry;

pub use bounds::*;
pub use buffer::*;
pub use geometry::*;
