//! CPU rasterization of geometric primitives.
//!
//! Every function here is pure: it turns real-valued geometry into integer
//! [`Pixel`](crate::geometry::Pixel) lists and keeps no state.
//!
//! # Algorithms
//!
//! - **DDA line**: constant-increment stepping along the major axis
//! - **Midpoint circle**: integer error term with 8-way symmetry
//! - **Barycentric triangle fill**: bounding-box scan with a zero tolerance
//! - **Convex fan**: convexity test, then triangles sharing vertex 0

mod batch;
mod circle;
mod line;
mod polygon;
mod triangle;

pub use batch::PixelBatch;
pub use circle::rasterize_circle;
pub use line::rasterize_line;
pub use polygon::{fan_triangulate, fill_polygon, is_convex, is_convex_turn};
pub use triangle::{fill_triangle, in_triangle};
