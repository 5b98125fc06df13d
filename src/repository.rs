//! Bounded piece inventory.
//!
//! The repository owns the rotation closure of every base piece and tracks
//! how many copies of each label are still available. Renting a piece mints
//! a placement with its own instance identity, because two copies of the
//! same label can sit on the board at the same time and the configuration
//! grid must tell them apart.

use rustc_hash::FxHashMap;

use crate::pieces::Piece;
use crate::snapshot::Snapshot;

/// One rented piece on the board: which closure piece it is, plus an opaque
/// instance identity distinguishing simultaneously placed copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub piece: usize,
    pub instance: u32,
}

/// Bounded multiset of piece orientations.
#[derive(Debug, Clone)]
pub struct Repository {
    pieces: Vec<Piece>,
    remaining: FxHashMap<String, u32>,
    next_instance: u32,
}

impl Repository {
    /// Builds the inventory from base pieces: the full rotation closure of
    /// each, with `pieces_per_game` copies available per label.
    pub fn new(pieces_per_game: u32, base: &[Piece]) -> Self {
        let closure = base.iter().flat_map(Piece::rotations).collect();
        Self::from_closure(pieces_per_game, closure)
    }

    /// A probe inventory holding every closure piece except one excluded
    /// label, two copies each. Used only to test whether the excluded
    /// piece's own footprint is tileable by the others; compound data is
    /// stripped from the copies so the probe result does not depend on how
    /// far compound precomputation has progressed.
    pub fn excluding(&self, label: &str) -> Self {
        let kept = self
            .pieces
            .iter()
            .filter(|piece| piece.label() != label)
            .map(|piece| {
                let mut copy = piece.clone();
                copy.clear_compounds();
                copy
            })
            .collect();
        Self::from_closure(2, kept)
    }

    fn from_closure(pieces_per_game: u32, pieces: Vec<Piece>) -> Self {
        let mut remaining = FxHashMap::default();
        for piece in &pieces {
            remaining
                .entry(piece.label().to_owned())
                .or_insert(pieces_per_game);
        }
        Self {
            pieces,
            remaining,
            next_instance: 0,
        }
    }

    /// All piece orientations, in closure order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, index: usize) -> &Piece {
        &self.pieces[index]
    }

    /// Copies of this label still available.
    pub fn remaining(&self, label: &str) -> u32 {
        self.remaining.get(label).copied().unwrap_or(0)
    }

    pub fn is_available(&self, index: usize) -> bool {
        self.remaining[self.pieces[index].label()] > 0
    }

    /// Takes one copy of the piece out of the inventory and mints a fresh
    /// placement identity for it. Callers only rent pieces that already
    /// passed `is_available`, so the count never goes below zero.
    pub fn rent(&mut self, index: usize) -> Placement {
        let label = self.pieces[index].label();
        *self
            .remaining
            .get_mut(label)
            .expect("every closure label is counted") -= 1;
        let instance = self.next_instance;
        self.next_instance += 1;
        Placement {
            piece: index,
            instance,
        }
    }

    /// Puts a rented copy back. Every rent is matched by exactly one
    /// release when its search branch unwinds.
    pub fn release(&mut self, placement: Placement) {
        let label = self.pieces[placement.piece].label();
        *self
            .remaining
            .get_mut(label)
            .expect("every closure label is counted") += 1;
    }

    pub(crate) fn set_compounds(&mut self, index: usize, compounds: Vec<Snapshot>) {
        self.pieces[index].set_compounds(compounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::base_pieces;

    #[test]
    fn test_closure_holds_every_label_once_per_orientation() {
        let repository = Repository::new(2, &base_pieces());

        for base in base_pieces() {
            let orientation_count = repository
                .pieces()
                .iter()
                .filter(|piece| piece.label() == base.label())
                .count();
            assert_eq!(
                orientation_count,
                base.rotations().len(),
                "closure share of {}",
                base.label()
            );
            assert_eq!(repository.remaining(base.label()), 2);
        }
    }

    #[test]
    fn test_rent_and_release_restore_counts() {
        let mut repository = Repository::new(2, &base_pieces());

        let first = repository.rent(0);
        let second = repository.rent(0);
        let label = repository.piece(0).label().to_owned();
        assert_eq!(repository.remaining(&label), 0);
        assert!(!repository.is_available(0));
        assert_ne!(first.instance, second.instance);

        repository.release(second);
        assert!(repository.is_available(0));
        repository.release(first);
        assert_eq!(repository.remaining(&label), 2);
    }

    #[test]
    fn test_excluding_drops_label_and_sets_quantity_two() {
        let repository = Repository::new(1, &base_pieces());
        let probe = repository.excluding("gS");

        assert!(probe.pieces().iter().all(|piece| piece.label() != "gS"));
        assert_eq!(probe.remaining("gS"), 0);
        assert_eq!(probe.remaining("rS"), 2);
        assert!(!probe.pieces().is_empty());
    }
}
