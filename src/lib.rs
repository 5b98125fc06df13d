//! Polycube Board Tiling Solver Library
//!
//! Exhaustively enumerates all distinct exact tilings of a 3D board by
//! pieces drawn from a bounded inventory of polycube shapes, in any
//! rotational orientation. The result list is deduplicated by label
//! multiset, filtered for axis-separable and compound-reducible
//! configurations, and canonically ordered.

pub mod board;
pub mod decks;
pub mod geometry;
pub mod grid;
pub mod pieces;
pub mod repository;
pub mod snapshot;

pub use board::{compute_compounds, Board};
pub use grid::VoxelGrid;
pub use pieces::Piece;
pub use repository::Repository;
pub use snapshot::Snapshot;
