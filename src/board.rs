//! Board state and the exact-cover backtracking search.
//!
//! The board keeps three pieces of state: the grid of cells still to fill,
//! the running empty-cell volume, and the configuration grid tagging each
//! filled cell with the placement that owns it. The anchored-candidate
//! table (`fitters`) is computed once against the static shape; the search
//! re-checks fit against live occupancy before every placement.

use std::cmp::Ordering;

use rustc_hash::FxHashMap;

use crate::grid::{Coord, VoxelGrid};
use crate::pieces::Piece;
use crate::repository::{Placement, Repository};
use crate::snapshot::Snapshot;

/// A board of cells to fill, bound to the piece set of one repository.
///
/// `fitters` holds piece indices into that repository, so a board must be
/// solved against the repository it was built from.
#[derive(Debug)]
pub struct Board {
    /// `true` = still to fill; placements flip cells off and backtracking
    /// flips them back on.
    grid: VoxelGrid,
    volume: usize,
    fitters: Vec<(Coord, Vec<usize>)>,
    configuration: Vec<Option<Placement>>,
}

impl Board {
    /// Parses a board from row text, repeated `height` times along y.
    pub fn parse(repository: &Repository, height: usize, rows: &[&str]) -> Self {
        let layers: Vec<&[&str]> = (0..height).map(|_| rows).collect();
        Self::new(repository, VoxelGrid::parse(&layers))
    }

    /// Builds a board around a required-fill grid and precomputes, per
    /// anchor coordinate, which repository pieces are structurally
    /// compatible with the static shape there.
    ///
    /// Anchors range over `[-(L - 1), 2L - 2]` on each axis: a piece's
    /// origin need not be one of its occupied cells, and rotation changes
    /// which relative cell sits closest to the origin, so in-bounds anchors
    /// alone would miss legal placements.
    pub fn new(repository: &Repository, grid: VoxelGrid) -> Self {
        let volume = grid.volume();
        let (len_z, len_y, len_x) = (
            grid.len_z() as i32,
            grid.len_y() as i32,
            grid.len_x() as i32,
        );
        let configuration = vec![None; (len_z * len_y * len_x) as usize];

        let mut board = Self {
            grid,
            volume,
            fitters: Vec::new(),
            configuration,
        };

        for z in -len_z + 1..len_z * 2 - 1 {
            for y in -len_y + 1..len_y * 2 - 1 {
                for x in -len_x + 1..len_x * 2 - 1 {
                    let anchor = (z, y, x);
                    let compatible: Vec<usize> = (0..repository.pieces().len())
                        .filter(|&index| board.fits_at(repository.piece(index), anchor))
                        .collect();
                    if !compatible.is_empty() {
                        board.fitters.push((anchor, compatible));
                    }
                }
            }
        }

        board
    }

    /// Count of still-empty required cells.
    pub fn volume(&self) -> usize {
        self.volume
    }

    /// Whether every cell of the piece, offset by the anchor, lands on a
    /// cell that is currently marked to fill. Against the pristine grid
    /// this is the static shape test; mid-search it doubles as the live
    /// occupancy check.
    fn fits_at(&self, piece: &Piece, anchor: Coord) -> bool {
        let (az, ay, ax) = anchor;
        piece
            .positions()
            .iter()
            .all(|&(pz, py, px)| self.grid.get(az + pz, ay + py, ax + px))
    }

    /// Candidate moves following the last placed move.
    ///
    /// Placement order carries no meaning, so each following move must hit
    /// an anchor lexicographically greater than or equal to the previous
    /// one; at the exact same anchor the piece ordering key must strictly
    /// increase (two orientations can legally share an anchor). The list
    /// is fully materialized before the caller mutates any shared state.
    fn moves(&self, repository: &Repository, last: Option<(Coord, u16)>) -> Vec<(usize, Coord)> {
        let mut candidates = Vec::new();
        for (anchor, compatible) in &self.fitters {
            let position = match last {
                None => Ordering::Greater,
                Some((used_anchor, _)) => anchor.cmp(&used_anchor),
            };
            if position == Ordering::Less {
                continue;
            }

            for &index in compatible {
                let piece = repository.piece(index);
                let key_qualifies = match last {
                    Some((_, used_key)) if position == Ordering::Equal => piece.index() > used_key,
                    _ => true,
                };
                if piece.volume() <= self.volume
                    && key_qualifies
                    && repository.is_available(index)
                    // the static table assumed an empty board; earlier
                    // placements in this branch may have taken these cells
                    && self.fits_at(piece, *anchor)
                {
                    candidates.push((index, *anchor));
                }
            }
        }
        candidates
    }

    fn place(&mut self, piece: &Piece, placement: Placement, anchor: Coord) {
        let (az, ay, ax) = anchor;
        for &(pz, py, px) in piece.positions() {
            let offset = self.grid.offset(az + pz, ay + py, ax + px);
            self.grid.set(az + pz, ay + py, ax + px, false);
            self.configuration[offset] = Some(placement);
        }
        self.volume -= piece.volume();
    }

    fn unplace(&mut self, piece: &Piece, anchor: Coord) {
        let (az, ay, ax) = anchor;
        for &(pz, py, px) in piece.positions() {
            let offset = self.grid.offset(az + pz, ay + py, ax + px);
            self.grid.set(az + pz, ay + py, ax + px, true);
            self.configuration[offset] = None;
        }
        self.volume += piece.volume();
    }

    /// Captures the current full configuration as an immutable snapshot.
    fn snapshot(&self, repository: &Repository) -> Snapshot {
        let mut slots: FxHashMap<u32, u16> = FxHashMap::default();
        let mut pieces: Vec<Piece> = Vec::new();
        let cells: Vec<Option<u16>> = self
            .configuration
            .iter()
            .copied()
            .map(|cell| {
                cell.map(|placement| {
                    *slots.entry(placement.instance).or_insert_with(|| {
                        pieces.push(repository.piece(placement.piece).clone());
                        (pieces.len() - 1) as u16
                    })
                })
            })
            .collect();

        Snapshot::new(
            self.grid.len_z(),
            self.grid.len_y(),
            self.grid.len_x(),
            cells,
            pieces,
        )
    }

    /// Recursive depth-first placement. Every mutation performed on entry
    /// to a branch is undone before returning to the caller, on every path.
    fn search(
        &mut self,
        repository: &mut Repository,
        last: Option<(Coord, u16)>,
        solutions: &mut Vec<Snapshot>,
    ) {
        for (index, anchor) in self.moves(repository, last) {
            let placement = repository.rent(index);
            let key = repository.piece(index).index();
            self.place(repository.piece(index), placement, anchor);

            if self.volume == 0 {
                solutions.push(self.snapshot(repository));
            } else {
                self.search(repository, Some((anchor, key)), solutions);
            }

            self.unplace(repository.piece(index), anchor);
            repository.release(placement);
        }
    }

    /// Finds all accepted tilings of the board.
    ///
    /// Runs the raw search, then the post-filter pipeline: group by label
    /// multiset, drop groups whose members are all separable (unless
    /// separable solutions are allowed), drop solutions reducible to a
    /// retained one by a compound substitution, and sort the survivors by
    /// their sorted label sequence.
    pub fn solve(&mut self, repository: &mut Repository, allow_separable: bool) -> Vec<Snapshot> {
        let mut raw = Vec::new();
        self.search(repository, None, &mut raw);

        // one representative group per distinct label multiset, first seen
        // first; all members are kept around for the separability vote
        let mut groups: Vec<Vec<Snapshot>> = Vec::new();
        for snapshot in raw {
            match groups
                .iter_mut()
                .find(|group| group[0].has_same_labels(snapshot.labels()))
            {
                Some(group) => group.push(snapshot),
                None => groups.push(vec![snapshot]),
            }
        }

        // a group is dropped only when every member is separable; a single
        // non-separable member keeps the whole group
        let retained: Vec<Snapshot> = groups
            .into_iter()
            .filter(|group| allow_separable || group.iter().any(|member| !member.is_separable()))
            .map(|mut group| group.swap_remove(0))
            .collect();

        // compound pass: a solution that only differs from another by
        // splitting one piece into an equivalent combination is the less
        // interesting of the two. All marks are computed against the
        // original retained set before any removal, so a solution that
        // causes a removal is never lost to a downstream mark in the same
        // pass.
        let mut keep = vec![true; retained.len()];
        for solution in &retained {
            for piece in solution
                .pieces()
                .iter()
                .filter(|piece| !piece.compounds().is_empty())
            {
                for compound in piece.compounds() {
                    let exchanged = solution.exchanged_labels(piece.label(), compound);
                    for (at, other) in retained.iter().enumerate() {
                        if other.has_same_labels(&exchanged) {
                            keep[at] = false;
                        }
                    }
                }
            }
        }

        let mut accepted: Vec<Snapshot> = retained
            .into_iter()
            .zip(keep)
            .filter_map(|(solution, kept)| kept.then_some(solution))
            .collect();
        accepted.sort_by(|a, b| a.labels().cmp(b.labels()));
        accepted
    }
}

/// Computes compound decompositions for every piece in the repository.
///
/// For each closure piece: a throwaway board shaped as the piece's own
/// cells, a probe inventory holding every other label twice, and a full
/// solve with separable solutions allowed. Every resulting snapshot is an
/// alternate way to exactly fill that piece's footprint and is recorded on
/// the piece for the compound filter.
pub fn compute_compounds(repository: &mut Repository) {
    for index in 0..repository.pieces().len() {
        let piece = repository.piece(index);
        let label = piece.label().to_owned();
        let shape = piece.grid().clone();

        let mut probe = repository.excluding(&label);
        let mut board = Board::new(&probe, shape);
        let compounds = board.solve(&mut probe, true);
        repository.set_compounds(index, compounds);
    }
}
