//! Piece shapes, their rotation closure, and the built-in catalog.
//!
//! A `Piece` is one rigid orientation of a polycube shape. All orientations
//! of one base shape share a label (the display and inventory identity) and
//! a kind id; the per-orientation ordering key only breaks ties during the
//! search and is never used as identity, because rotationally symmetric
//! shapes legitimately collide on it.

use crate::geometry::{self, Axis};
use crate::grid::{Coord, VoxelGrid};
use crate::snapshot::Snapshot;

/// One rigid orientation of a polycube shape.
#[derive(Debug, Clone)]
pub struct Piece {
    label: String,
    kind: u8,
    rot_z: u8,
    rot_y: u8,
    rot_x: u8,
    index: u16,
    volume: usize,
    positions: Vec<Coord>,
    grid: VoxelGrid,
    compounds: Vec<Snapshot>,
}

impl Piece {
    /// Parses a base piece from text layers (see [`VoxelGrid::parse`]),
    /// with all rotation counters at zero.
    pub fn parse(label: &str, kind: u8, layers: &[&[&str]]) -> Self {
        Self::from_grid(label.to_owned(), kind, 0, 0, 0, VoxelGrid::parse(layers))
    }

    fn from_grid(label: String, kind: u8, rot_z: u8, rot_y: u8, rot_x: u8, grid: VoxelGrid) -> Self {
        let rot_z = rot_z % 4;
        let rot_y = rot_y % 4;
        let rot_x = rot_x % 4;
        let positions = grid.positions();
        Self {
            label,
            kind,
            rot_z,
            rot_y,
            rot_x,
            index: (kind as u16) << 8 | (rot_z as u16) << 4 | (rot_y as u16) << 2 | rot_x as u16,
            volume: positions.len(),
            positions,
            grid,
            compounds: Vec::new(),
        }
    }

    /// Shared display and inventory identity across all orientations.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Ordering key `kind << 8 | rot_z << 4 | rot_y << 2 | rot_x`.
    ///
    /// Tie-break only: two distinct counter combinations can describe the
    /// same shape, so this must never stand in for structural equality.
    pub fn index(&self) -> u16 {
        self.index
    }

    /// Number of occupied cells.
    pub fn volume(&self) -> usize {
        self.volume
    }

    /// Occupied cells relative to the piece origin, in grid scan order.
    pub fn positions(&self) -> &[Coord] {
        &self.positions
    }

    /// The occupancy grid this orientation was built from.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Alternate fillings of this piece's own footprint by other pieces.
    pub fn compounds(&self) -> &[Snapshot] {
        &self.compounds
    }

    pub(crate) fn set_compounds(&mut self, compounds: Vec<Snapshot>) {
        self.compounds = compounds;
    }

    pub(crate) fn clear_compounds(&mut self) {
        self.compounds.clear();
    }

    /// This piece turned 90° about one axis, with the matching rotation
    /// counter advanced. Compounds are not carried over; they are assigned
    /// per closure member after the closure is built.
    pub fn rotated(&self, axis: Axis) -> Self {
        let (rot_z, rot_y, rot_x) = match axis {
            Axis::Z => (self.rot_z + 1, self.rot_y, self.rot_x),
            Axis::Y => (self.rot_z, self.rot_y + 1, self.rot_x),
            Axis::X => (self.rot_z, self.rot_y, self.rot_x + 1),
        };
        Self::from_grid(
            self.label.clone(),
            self.kind,
            rot_z,
            rot_y,
            rot_x,
            geometry::rotated(&self.grid, axis),
        )
    }

    /// All distinct orientations of this piece.
    ///
    /// Deliberately overgenerates: four z turns, then four y turns of each
    /// result, then four x turns of each of those (64 candidates), followed
    /// by deduplication on exact equality of the relative occupied-cell
    /// sequences. No correctness depends on the generation order; only the
    /// deduplicated set matters.
    pub fn rotations(&self) -> Vec<Piece> {
        let turns = |piece: &Piece, axis: Axis| {
            let mut output = Vec::with_capacity(4);
            let mut turned = piece.clone();
            for _ in 0..4 {
                turned = turned.rotated(axis);
                output.push(turned.clone());
            }
            output
        };

        let mut candidates = Vec::with_capacity(64);
        for around_z in turns(self, Axis::Z) {
            for around_y in turns(&around_z, Axis::Y) {
                candidates.extend(turns(&around_y, Axis::X));
            }
        }

        let mut orientations: Vec<Piece> = Vec::new();
        for candidate in candidates {
            if !orientations
                .iter()
                .any(|kept| kept.positions == candidate.positions)
            {
                orientations.push(candidate);
            }
        }
        orientations
    }
}

/// Uniform per-label piece count in a standard game.
pub const PIECES_PER_GAME: u32 = 2;

/// Standard board height (layers along y).
pub const BOARD_HEIGHT: usize = 3;

/// The eight base pieces of the standard game.
///
/// Labels encode color and silhouette (e.g. `gS` = green S, `rS` = small
/// red bar). Shapes are given as y layers of z rows, as on the physical
/// pieces.
pub fn base_pieces() -> Vec<Piece> {
    vec![
        Piece::parse("gS", 0, &[&["xx", "x"]]),
        Piece::parse("gB", 1, &[&["xx", " x", " x"], &["x"]]),
        Piece::parse("bL", 2, &[&["xx", "x", "x"]]),
        Piece::parse("bZ", 3, &[&["x", "xx", " x"], &["x"]]),
        Piece::parse("rS", 4, &[&["xx"]]),
        Piece::parse("rT", 5, &[&["xx", " x"], &["x"]]),
        Piece::parse("yT", 6, &[&["x", "xx"], &["x"]]),
        Piece::parse("yF", 7, &[&["xx", "x", "x"], &[" ", "x"]]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_cell_bar_has_three_orientations() {
        let bar = Piece::parse("rS", 0, &[&["xx"]]);
        let orientations = bar.rotations();

        assert_eq!(orientations.len(), 3);

        let mut position_sets: Vec<Vec<Coord>> = orientations
            .iter()
            .map(|piece| piece.positions().to_vec())
            .collect();
        position_sets.sort();
        assert_eq!(
            position_sets,
            vec![
                vec![(0, 0, 0), (0, 0, 1)],
                vec![(0, 0, 0), (0, 1, 0)],
                vec![(0, 0, 0), (1, 0, 0)],
            ]
        );
    }

    #[test]
    fn test_closure_is_closed_under_further_rotation() {
        for base in base_pieces() {
            let closure = base.rotations();
            for member in &closure {
                for axis in Axis::ALL {
                    let turned = member.rotated(axis);
                    assert!(
                        closure
                            .iter()
                            .any(|kept| kept.positions() == turned.positions()),
                        "rotating {} about {axis:?} left the closure",
                        base.label()
                    );
                }
            }
        }
    }

    #[test]
    fn test_closure_preserves_label_and_volume() {
        for base in base_pieces() {
            for member in base.rotations() {
                assert_eq!(member.label(), base.label());
                assert_eq!(member.volume(), base.volume());
            }
        }
    }

    #[test]
    fn test_ordering_key_packs_kind_above_rotation_counters() {
        let piece = Piece::parse("gS", 3, &[&["xx", "x"]]);
        assert_eq!(piece.index(), 3 << 8);

        let turned = piece.rotated(Axis::Z).rotated(Axis::X);
        assert_eq!(turned.index(), 3 << 8 | 1 << 4 | 1);
    }

    #[test]
    fn test_catalog_volumes() {
        let volumes: Vec<(String, usize)> = base_pieces()
            .iter()
            .map(|piece| (piece.label().to_owned(), piece.volume()))
            .collect();
        let expected = [
            ("gS", 3),
            ("gB", 5),
            ("bL", 4),
            ("bZ", 5),
            ("rS", 2),
            ("rT", 4),
            ("yT", 4),
            ("yF", 5),
        ];
        for ((label, volume), (want_label, want_volume)) in volumes.iter().zip(expected) {
            assert_eq!(label, want_label);
            assert_eq!(*volume, want_volume, "volume of {label}");
        }
    }
}
