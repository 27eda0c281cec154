//! Core types for the rasterizer

use serde::{Serialize, Deserialize};

use super::math::{Mat3, Vec2, Vec3};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from unit-range channels; out-of-range values are clamped
    pub fn from_unit(c: Vec3) -> Self {
        fn channel(v: f32) -> u8 {
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        Self::new(channel(c.x), channel(c.y), channel(c.z))
    }

    /// Back to unit-range RGB
    pub fn to_unit(self) -> Vec3 {
        Vec3::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A vertex with screen position, color and texture coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub pos: Vec3,
    pub color: Vec3,
    pub uv: Vec2,
}

impl Vertex {
    pub fn new(pos: Vec3, color: Vec3, uv: Vec2) -> Self {
        Self { pos, color, uv }
    }

    pub fn from_pos(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
            color: Vec3::ONE,
            uv: Vec2::default(),
        }
    }
}

/// Three independent vertices. Winding is not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub v1: Vertex,
    pub v2: Vertex,
    pub v3: Vertex,
}

impl Triangle {
    pub fn new(v1: Vertex, v2: Vertex, v3: Vertex) -> Self {
        Self { v1, v2, v3 }
    }

    /// Vertex positions projected onto the screen plane
    pub fn screen_points(&self) -> [Vec2; 3] {
        [self.v1.pos.xy(), self.v2.pos.xy(), self.v3.pos.xy()]
    }

    /// Tangent and bitangent aligned with the uv mapping.
    ///
    /// None when the uv edges are parallel (no unique frame).
    pub fn tangent_frame(&self) -> Option<(Vec3, Vec3)> {
        let dp1 = self.v2.pos - self.v1.pos;
        let dp2 = self.v3.pos - self.v1.pos;
        let du1 = self.v2.uv - self.v1.uv;
        let du2 = self.v3.uv - self.v1.uv;

        let n = du1.y * du2.x - du1.x * du2.y;
        if n == 0.0 {
            return None;
        }
        let inv = 1.0 / n;

        let tangent = (dp2 * du1.y - dp1 * du2.y) * inv;
        let bitangent = (dp1 * du2.x - dp2 * du1.x) * inv;
        Some((tangent, bitangent))
    }

    /// Tangent-space basis with `normal` as the third column
    pub fn tbn(&self, normal: Vec3) -> Option<Mat3> {
        self.tangent_frame()
            .map(|(t, b)| Mat3::from_columns(t, b, normal))
    }
}

/// Simple texture (array of colors)
#[derive(Debug, Clone)]
pub struct Texture {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
    pub name: String,
}

impl Texture {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::WHITE; width * height],
            name: String::new(),
        }
    }

    /// Load texture from an image file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, image::ImageError> {
        let path = path.as_ref();
        let img = image::open(path)?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        Ok(Self::from_image(img, name))
    }

    fn from_image(img: image::DynamicImage, name: String) -> Self {
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        let pixels: Vec<Color> = rgba
            .pixels()
            .map(|p| Color::with_alpha(p[0], p[1], p[2], p[3]))
            .collect();

        Self {
            width: width as usize,
            height: height as usize,
            pixels,
            name,
        }
    }

    /// Create a checkerboard test texture
    pub fn checkerboard(width: usize, height: usize, color1: Color, color2: Color) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let checker = ((x / 4) + (y / 4)) % 2 == 0;
                pixels.push(if checker { color1 } else { color2 });
            }
        }
        Self { width, height, pixels, name: "checkerboard".to_string() }
    }

    /// Nearest-texel lookup with wrap-around. Row 0 is the top of the image.
    pub fn sample(&self, u: f32, v: f32) -> Color {
        if self.width == 0 || self.height == 0 {
            return Color::BLACK;
        }
        let tx = ((u * self.width as f32).floor() as i64).rem_euclid(self.width as i64) as usize;
        let ty = ((v * self.height as f32).floor() as i64).rem_euclid(self.height as i64) as usize;
        self.pixels[ty * self.width + tx]
    }

    /// Sample with uv (0, 0) at the bottom-left, as unit-range RGB
    pub fn sample_uv(&self, uv: Vec2) -> Vec3 {
        self.sample(uv.x, 1.0 - uv.y).to_unit()
    }

    /// Get pixel at x,y coordinates
    pub fn get_pixel(&self, x: usize, y: usize) -> Color {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            Color::BLACK
        }
    }
}

/// How covered fragments get their color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShadingMode {
    /// Interpolated uv written as (u, v, 0)
    #[default]
    UvDebug,
    /// Interpolated per-vertex colors
    VertexColor,
    /// Texture sampled at the interpolated uv (white without a texture)
    Textured,
}

/// Rasterizer settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterSettings {
    /// Fragment coloring
    pub shading: ShadingMode,
    /// Background the framebuffer is cleared to (unit-range RGB)
    pub clear_color: Vec3,
}

impl Default for RasterSettings {
    fn default() -> Self {
        Self {
            shading: ShadingMode::UvDebug,
            clear_color: Vec3::ZERO,
        }
    }
}
