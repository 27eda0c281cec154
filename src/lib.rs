//! trirast: barycentric software triangle rasterizer
//!
//! Triangles in screen space are tiled by their integer bounding box; each
//! cell is tested against the triangle with a closed-form barycentric solve
//! and, when covered, shaded from the affinely interpolated vertex
//! attributes. The resulting fragments go to a [`FragmentSink`], such as the
//! RGBA [`Framebuffer`].
//!
//! ```
//! use trirast::{draw_triangles, create_test_quad, Framebuffer, RasterSettings};
//!
//! let mut fb = Framebuffer::new(32, 32);
//! let stats = draw_triangles(&create_test_quad(32.0), &RasterSettings::default(), None, &mut fb);
//! assert_eq!(stats.triangles, 2);
//! ```

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod logging;
pub mod rasterizer;
pub mod scene;

pub use rasterizer::*;
pub use scene::{load_scene, load_scene_from_str, save_scene, Scene, SceneError};
