//! Fragments: candidate pixel writes produced per bounding-box cell

use super::math::Vec3;

/// (row, col) address of a pixel cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellIndex {
    pub row: i64,
    pub col: i64,
}

impl CellIndex {
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    /// Sample point at the cell center (z is always 0)
    pub position: Vec3,
    /// Set only once the sample passes the coverage test
    pub color: Option<Vec3>,
    /// Cell within the triangle's bounding box
    pub local_index: CellIndex,
    /// Cell within the whole buffer
    pub global_index: CellIndex,
    pub discarded: bool,
}

impl Fragment {
    /// Uncovered fragment; starts discarded with no color
    pub fn new(position: Vec3, local_index: CellIndex, global_index: CellIndex) -> Self {
        Self {
            position,
            color: None,
            local_index,
            global_index,
            discarded: true,
        }
    }

    /// Mark as covered with its shaded color
    pub fn shade(&mut self, color: Vec3) {
        self.color = Some(color);
        self.discarded = false;
    }

    pub fn is_covered(&self) -> bool {
        !self.discarded
    }
}
