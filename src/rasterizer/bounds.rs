//! Integer pixel bounds of a projected triangle

use super::fragment::CellIndex;
use super::math::Vec2;

/// Axis-aligned pixel rectangle: origin is the floored minimum corner,
/// size reaches the ceiled maximum corner.
///
/// The origin stays in float space so boxes far from zero still contain
/// their triangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub origin: Vec2,
    pub width: usize,
    pub height: usize,
}

impl BoundingBox {
    pub fn new(origin: Vec2, width: usize, height: usize) -> Self {
        Self { origin, width, height }
    }

    /// Smallest box covering three screen points
    pub fn from_points(p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        let min_x = p1.x.min(p2.x).min(p3.x).floor();
        let min_y = p1.y.min(p2.y).min(p3.y).floor();
        let max_x = p1.x.max(p2.x).max(p3.x).ceil();
        let max_y = p1.y.max(p2.y).max(p3.y).ceil();

        Self {
            origin: Vec2::new(min_x, min_y),
            width: (max_x - min_x).max(0.0) as usize,
            height: (max_y - min_y).max(0.0) as usize,
        }
    }

    /// Buffer cell of the origin; saturates outside the i64 range
    pub fn origin_cell(&self) -> CellIndex {
        CellIndex::new(self.origin.y as i64, self.origin.x as i64)
    }

    /// Buffer cell of a box-local cell
    pub fn global_cell(&self, local: CellIndex) -> CellIndex {
        let origin = self.origin_cell();
        CellIndex::new(
            origin.row.saturating_add(local.row),
            origin.col.saturating_add(local.col),
        )
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Number of pixel cells (and therefore fragments) in the box
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Closed containment: points on the far edges count as inside
    pub fn contains(&self, p: Vec2) -> bool {
        let min = self.origin();
        let max = min + self.size();
        p.x >= min.x && p.y >= min.y && p.x <= max.x && p.y <= max.y
    }
}
