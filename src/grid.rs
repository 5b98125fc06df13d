//! 3D occupancy grid shared by boards and pieces.
//!
//! A grid is a fixed-size boolean array indexed `(z, y, x)`. Boards use it
//! for "cells that still need filling", pieces for "cells the shape occupies".
//! Out-of-range reads answer `false`, which lets callers probe placements
//! without bounds bookkeeping.

/// A 3D coordinate in `(z, y, x)` order.
pub type Coord = (i32, i32, i32);

/// Fixed-size 3D boolean occupancy grid.
///
/// Dimensions are set at construction and never change; only cell values are
/// mutable (the board flips them while placing and removing pieces).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    len_z: usize,
    len_y: usize,
    len_x: usize,
    cells: Vec<bool>,
}

impl VoxelGrid {
    /// Creates an all-empty grid with the given dimensions.
    pub fn new(len_z: usize, len_y: usize, len_x: usize) -> Self {
        Self {
            len_z,
            len_y,
            len_x,
            cells: vec![false; len_z * len_y * len_x],
        }
    }

    /// Parses a shape from text layers.
    ///
    /// Layers run along the y axis, rows within a layer along z, characters
    /// along x. An `'x'` marks an occupied cell; any other character is
    /// absent. Rows and layers may be ragged: the grid spans the maximum
    /// observed extent and everything beyond a short row or layer stays
    /// absent. Downstream logic depends on this padding, so it is part of
    /// the format rather than a defect to reject.
    pub fn parse(layers: &[&[&str]]) -> Self {
        let len_y = layers.len();
        let len_z = layers.iter().map(|layer| layer.len()).max().unwrap_or(0);
        let len_x = layers
            .iter()
            .flat_map(|layer| layer.iter())
            .map(|row| row.len())
            .max()
            .unwrap_or(0);

        let mut grid = Self::new(len_z, len_y, len_x);
        for (y, layer) in layers.iter().enumerate() {
            for (z, row) in layer.iter().enumerate() {
                for (x, ch) in row.chars().enumerate() {
                    if ch == 'x' {
                        grid.set(z as i32, y as i32, x as i32, true);
                    }
                }
            }
        }
        grid
    }

    pub fn len_z(&self) -> usize {
        self.len_z
    }

    pub fn len_y(&self) -> usize {
        self.len_y
    }

    pub fn len_x(&self) -> usize {
        self.len_x
    }

    /// Linear index of an in-bounds coordinate, scan order `(z, y, x)`.
    #[inline]
    pub fn offset(&self, z: i32, y: i32, x: i32) -> usize {
        ((z as usize) * self.len_y + y as usize) * self.len_x + x as usize
    }

    /// Reads a cell; coordinates outside the grid answer `false`.
    #[inline]
    pub fn get(&self, z: i32, y: i32, x: i32) -> bool {
        if z >= 0
            && y >= 0
            && x >= 0
            && (z as usize) < self.len_z
            && (y as usize) < self.len_y
            && (x as usize) < self.len_x
        {
            self.cells[self.offset(z, y, x)]
        } else {
            false
        }
    }

    /// Writes an in-bounds cell.
    #[inline]
    pub fn set(&mut self, z: i32, y: i32, x: i32, value: bool) {
        let offset = self.offset(z, y, x);
        self.cells[offset] = value;
    }

    /// Occupied coordinates in scan order (z, then y, then x).
    pub fn positions(&self) -> Vec<Coord> {
        let mut positions = Vec::new();
        for z in 0..self.len_z as i32 {
            for y in 0..self.len_y as i32 {
                for x in 0..self.len_x as i32 {
                    if self.get(z, y, x) {
                        positions.push((z, y, x));
                    }
                }
            }
        }
        positions
    }

    /// Number of occupied cells.
    pub fn volume(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ragged_rows_pad_to_max_extent() {
        // second row is shorter and the second layer has fewer rows;
        // both pad with absent cells
        let grid = VoxelGrid::parse(&[&["xxx", "x"], &["xx"]]);

        assert_eq!(grid.len_z(), 2);
        assert_eq!(grid.len_y(), 2);
        assert_eq!(grid.len_x(), 3);
        assert!(grid.get(0, 0, 2));
        assert!(!grid.get(1, 0, 1), "short row pads as absent");
        assert!(!grid.get(1, 1, 0), "short layer pads as absent");
        assert_eq!(grid.volume(), 6);
    }

    #[test]
    fn test_non_x_characters_are_absent() {
        let grid = VoxelGrid::parse(&[&[" x", "x."]]);
        assert!(!grid.get(0, 0, 0));
        assert!(grid.get(0, 0, 1));
        assert!(grid.get(1, 0, 0));
        assert!(!grid.get(1, 0, 1));
    }

    #[test]
    fn test_out_of_bounds_reads_are_absent() {
        let grid = VoxelGrid::parse(&[&["x"]]);
        assert!(grid.get(0, 0, 0));
        assert!(!grid.get(-1, 0, 0));
        assert!(!grid.get(0, -1, 0));
        assert!(!grid.get(0, 0, 1));
        assert!(!grid.get(5, 5, 5));
    }

    #[test]
    fn test_positions_follow_scan_order() {
        let grid = VoxelGrid::parse(&[&["xx", "x"]]);
        assert_eq!(grid.positions(), vec![(0, 0, 0), (0, 0, 1), (1, 0, 0)]);
        assert_eq!(grid.volume(), 3);
    }
}
