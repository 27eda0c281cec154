//! Barycentric software rasterizer
//!
//! Features:
//! - Integer bounding box per triangle, sampled at cell centers
//! - Closed-form barycentric solve with a pivot axis (no 3x3 inversion)
//! - Affine attribute interpolation (no perspective correction)
//! - Inclusive edges: shared edges are covered by both triangles
//! - UV-debug, vertex-color and textured shading

mod barycentric;
mod bounds;
mod fragment;
mod math;
mod render;
mod types;

pub use barycentric::*;
pub use bounds::*;
pub use fragment::*;
pub use math::*;
pub use render::*;
pub use types::*;

/// Default output dimensions
pub const WIDTH: usize = 800;
pub const HEIGHT: usize = 800;
