//! Single-axis 90° grid rotations.
//!
//! Each rotation is a pure grid-to-grid transform: the output grid has the
//! two perpendicular dimensions swapped and every occupied cell mapped to
//! its turned position. Applying the three axis rotations four times each
//! overgenerates up to 64 orientation candidates; structural deduplication
//! in [`crate::pieces`] collapses them to the true orientation set.

use crate::grid::VoxelGrid;

/// The rotation axis. Z points through the screen, y down the layers,
/// x along a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Z,
    Y,
    X,
}

impl Axis {
    /// All three axes, in closure-generation order.
    pub const ALL: [Axis; 3] = [Axis::Z, Axis::Y, Axis::X];
}

/// Returns the grid turned 90° about the given axis.
///
/// The transform keeps occupied cells inside the (swapped) bounding box, so
/// orientations that coincide after rotation compare equal by their occupied
/// positions alone, with no separate re-normalization step.
pub fn rotated(grid: &VoxelGrid, axis: Axis) -> VoxelGrid {
    let (len_z, len_y, len_x) = (grid.len_z(), grid.len_y(), grid.len_x());

    let mut output = match axis {
        Axis::Z => VoxelGrid::new(len_z, len_x, len_y),
        Axis::Y => VoxelGrid::new(len_x, len_y, len_z),
        Axis::X => VoxelGrid::new(len_y, len_z, len_x),
    };

    for (z, y, x) in grid.positions() {
        match axis {
            Axis::Z => output.set(z, len_x as i32 - 1 - x, y, true),
            Axis::Y => output.set(x, y, len_z as i32 - 1 - z, true),
            Axis::X => output.set(len_y as i32 - 1 - y, z, x, true),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_turns_restore_the_grid() {
        let grid = VoxelGrid::parse(&[&["xx", "x"], &["x"]]);

        for axis in Axis::ALL {
            let mut turned = grid.clone();
            for _ in 0..4 {
                turned = rotated(&turned, axis);
            }
            assert_eq!(turned, grid, "four {axis:?} turns should be identity");
        }
    }

    #[test]
    fn test_rotation_preserves_volume() {
        let grid = VoxelGrid::parse(&[&["xx", " x", " x"], &["x"]]);
        for axis in Axis::ALL {
            assert_eq!(rotated(&grid, axis).volume(), grid.volume());
        }
    }

    #[test]
    fn test_z_rotation_swaps_row_and_column_extents() {
        let grid = VoxelGrid::parse(&[&["xxx"]]);
        let turned = rotated(&grid, Axis::Z);

        assert_eq!(turned.len_z(), 1);
        assert_eq!(turned.len_y(), 3);
        assert_eq!(turned.len_x(), 1);
        assert_eq!(turned.volume(), 3);
    }

    #[test]
    fn test_single_voxel_is_invariant() {
        let grid = VoxelGrid::parse(&[&["x"]]);
        for axis in Axis::ALL {
            assert_eq!(rotated(&grid, axis), grid);
        }
    }
}
