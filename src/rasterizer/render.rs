//! Core rendering functions
//! Fragment generation over a triangle's bounding box, and the framebuffer
//! that turns fragments into pixels

use log::{debug, trace};

use super::barycentric::{interpolate, solve_barycentric, Barycentric};
use super::bounds::BoundingBox;
use super::fragment::{CellIndex, Fragment};
use super::math::{Vec2, Vec3};
use super::types::{Color, RasterSettings, ShadingMode, Texture, Triangle, Vertex};

/// Consumer of a triangle's fragments.
///
/// Covered fragments are written, discarded ones skipped. Sinks do no
/// coverage testing of their own.
pub trait FragmentSink {
    fn draw_fragments(&mut self, fragments: Vec<Fragment>, bounds: &BoundingBox);
}

/// Framebuffer for software rendering
pub struct Framebuffer {
    pub pixels: Vec<u8>, // RGBA, 4 bytes per pixel
    pub width: usize,
    pub height: usize,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![0; width * height * 4],
            width,
            height,
        }
    }

    pub fn clear(&mut self, color: Color) {
        let bytes = color.to_bytes();
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&bytes);
        }
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_bytes());
        }
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            let idx = (y * self.width + x) * 4;
            let p = &self.pixels[idx..idx + 4];
            Some(Color::with_alpha(p[0], p[1], p[2], p[3]))
        } else {
            None
        }
    }

    /// Buffer (x, y) of a bounding-box cell. Box rows count up from the
    /// bottom edge, buffer rows down from the top.
    fn cell_to_pixel(&self, bounds: &BoundingBox, local: CellIndex) -> Option<(usize, usize)> {
        let cell = bounds.global_cell(local);
        let x = cell.col;
        let y = (self.height as i64 - 1).saturating_sub(cell.row);

        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some((x as usize, y as usize))
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width as u32, self.height as u32, |x, y| {
            let idx = (y as usize * self.width + x as usize) * 4;
            image::Rgba([
                self.pixels[idx],
                self.pixels[idx + 1],
                self.pixels[idx + 2],
                self.pixels[idx + 3],
            ])
        })
    }

    pub fn save_png<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image().save_with_format(path, image::ImageFormat::Png)
    }
}

impl FragmentSink for Framebuffer {
    fn draw_fragments(&mut self, fragments: Vec<Fragment>, bounds: &BoundingBox) {
        for frag in fragments {
            if frag.discarded {
                continue;
            }
            let Some(color) = frag.color else { continue };
            if let Some((x, y)) = self.cell_to_pixel(bounds, frag.local_index) {
                self.set_pixel(x, y, Color::from_unit(color));
            }
        }
    }
}

/// Fragments of one triangle together with the box they tile
#[derive(Debug, Clone)]
pub struct RasterizedTriangle {
    pub bounds: BoundingBox,
    pub fragments: Vec<Fragment>,
}

impl RasterizedTriangle {
    pub fn covered(&self) -> usize {
        self.fragments.iter().filter(|f| f.is_covered()).count()
    }
}

/// Color of a covered sample
fn shade_fragment(
    triangle: &Triangle,
    weights: Barycentric,
    settings: &RasterSettings,
    texture: Option<&Texture>,
) -> Vec3 {
    let Triangle { v1, v2, v3 } = triangle;

    match settings.shading {
        ShadingMode::UvDebug => {
            let uv = interpolate(v1.uv, v2.uv, v3.uv, weights);
            Vec3::new(uv.x, uv.y, 0.0)
        }
        ShadingMode::VertexColor => interpolate(v1.color, v2.color, v3.color, weights),
        ShadingMode::Textured => match texture {
            Some(tex) => tex.sample_uv(interpolate(v1.uv, v2.uv, v3.uv, weights)),
            None => Vec3::ONE,
        },
    }
}

/// One fragment per cell of `bounds`, in row-major order, sampled at cell centers
pub fn generate_fragments(
    triangle: &Triangle,
    bounds: &BoundingBox,
    settings: &RasterSettings,
    texture: Option<&Texture>,
) -> Vec<Fragment> {
    let [p1, p2, p3] = triangle.screen_points();
    let mut fragments = Vec::with_capacity(bounds.area());

    for i in 0..bounds.height {
        for j in 0..bounds.width {
            let local = CellIndex::new(i as i64, j as i64);
            let sample = Vec2::new(
                bounds.origin.x + j as f32 + 0.5,
                bounds.origin.y + i as f32 + 0.5,
            );
            let weights = solve_barycentric(p1, p2, p3, sample);

            let mut fragment = Fragment::new(
                Vec3::new(sample.x, sample.y, 0.0),
                local,
                bounds.global_cell(local),
            );

            if weights.contains() {
                fragment.shade(shade_fragment(triangle, weights, settings, texture));
            }

            fragments.push(fragment);
        }
    }

    fragments
}

/// Rasterize a single triangle
pub fn rasterize_triangle(
    triangle: &Triangle,
    settings: &RasterSettings,
    texture: Option<&Texture>,
) -> RasterizedTriangle {
    let [p1, p2, p3] = triangle.screen_points();
    let bounds = BoundingBox::from_points(p1, p2, p3);
    let fragments = generate_fragments(triangle, &bounds, settings, texture);

    RasterizedTriangle { bounds, fragments }
}

/// Totals for a batch of triangles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RasterStats {
    pub triangles: usize,
    pub fragments: usize,
    pub covered: usize,
}

/// Rasterize triangles in order and hand each fragment set to `sink`.
/// Later triangles overwrite earlier ones.
pub fn draw_triangles<S: FragmentSink + ?Sized>(
    triangles: &[Triangle],
    settings: &RasterSettings,
    texture: Option<&Texture>,
    sink: &mut S,
) -> RasterStats {
    draw_triangles_with_progress(triangles, settings, texture, sink, |_, _| {})
}

/// [`draw_triangles`], calling `on_triangle(index, stats)` after each
/// triangle reaches the sink
pub fn draw_triangles_with_progress<S, F>(
    triangles: &[Triangle],
    settings: &RasterSettings,
    texture: Option<&Texture>,
    sink: &mut S,
    mut on_triangle: F,
) -> RasterStats
where
    S: FragmentSink + ?Sized,
    F: FnMut(usize, &RasterStats),
{
    let mut stats = RasterStats::default();

    for (idx, tri) in triangles.iter().enumerate() {
        let tri_stats = draw_triangle(tri, settings, texture, sink);
        trace!("triangle {}: {} of {} fragments covered", idx, tri_stats.covered, tri_stats.fragments);
        on_triangle(idx, &tri_stats);
        stats += tri_stats;
    }

    debug!(
        "rasterized {} triangles: {} fragments, {} covered",
        stats.triangles, stats.fragments, stats.covered
    );
    stats
}

/// Rasterize one triangle into `sink`
pub fn draw_triangle<S: FragmentSink + ?Sized>(
    triangle: &Triangle,
    settings: &RasterSettings,
    texture: Option<&Texture>,
    sink: &mut S,
) -> RasterStats {
    let raster = rasterize_triangle(triangle, settings, texture);
    let covered = raster.covered();

    if covered == 0 && !raster.bounds.is_empty() {
        let [p1, p2, p3] = triangle.screen_points();
        if !solve_barycentric(p1, p2, p3, p1).is_defined() {
            debug!("degenerate triangle {:?} {:?} {:?}", p1, p2, p3);
        }
    }

    let stats = RasterStats {
        triangles: 1,
        fragments: raster.fragments.len(),
        covered,
    };
    sink.draw_fragments(raster.fragments, &raster.bounds);
    stats
}

impl std::ops::AddAssign for RasterStats {
    fn add_assign(&mut self, other: RasterStats) {
        self.triangles += other.triangles;
        self.fragments += other.fragments;
        self.covered += other.covered;
    }
}

/// Two right triangles tiling a `size` x `size` square at the origin,
/// colored red/green/blue at the corners with uv spanning the unit square
pub fn create_test_quad(size: f32) -> Vec<Triangle> {
    let corner = |x: f32, y: f32, color: Vec3| {
        Vertex::new(Vec3::new(x * size, y * size, 0.0), color, Vec2::new(x, y))
    };
    let red = Vec3::new(1.0, 0.0, 0.0);
    let green = Vec3::new(0.0, 1.0, 0.0);
    let blue = Vec3::new(0.0, 0.0, 1.0);

    vec![
        Triangle::new(corner(0.0, 0.0, red), corner(1.0, 0.0, green), corner(0.0, 1.0, blue)),
        Triangle::new(corner(1.0, 1.0, red), corner(0.0, 1.0, blue), corner(1.0, 0.0, green)),
    ]
}
