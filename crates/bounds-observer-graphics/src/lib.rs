//! Geometry primitives for the bounds observer
//!
//! Points, sizes and rectangles in the host's logical coordinate space.
//! Rectangles describe an element's on-screen position and size as reported
//! by the host.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
