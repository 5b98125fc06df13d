//! Built-in board catalog: four decks of 36 card layouts.
//!
//! Each card is a single 2D layout (rows along z, characters along x) that
//! the driver extrudes to the playing height. Rows are intentionally ragged
//! where the printed cards are; parsing pads them (see
//! [`crate::grid::VoxelGrid::parse`]).

/// One card layout: rows of a single layer.
pub type Card = &'static [&'static str];

/// Looks up a card by 0-based deck and card number.
pub fn card(deck: usize, card: usize) -> Option<Card> {
    DECKS.get(deck)?.get(card).copied()
}

/// Number of decks in the catalog.
pub const DECK_COUNT: usize = DECKS.len();

/// Cards per deck.
pub const CARDS_PER_DECK: usize = 36;

const DECKS: [&[Card]; 4] = [DECK_1, DECK_2, DECK_3, DECK_4];

const DECK_1: &[Card] = &[
    &[" x", "xxxxx"],
    &[" x", "xx", "xx", "x"],
    &[" xx", "xxxx"],
    &["xxxx", "x", "x"],
    &[" xx", " x ", "xxx"],
    &["  x", "  x", "xxx", " x"],
    &["  xx", "xxxx"],
    &["xx", " xxx", "   x"],
    &["x", "x x", "xxx"],
    &["xx", "xx", "xx"],
    &["x", "xx", "x", "xx"],
    &[" x", "xxx", "x x"],
    &[" xxx", "xx x"],
    &[" xx", "xx", " x", " x"],
    &["  x", "xxxx", "x"],
    &[" x", "xx", " xx", " x"],
    &[" x", " x", "xxx", "x"],
    &["xxxx", " x x"],
    &["x", "xxx", "x", "x"],
    &[" x", "xxxx", " x"],
    &["xx", "xx", "x", "x"],
    &[" xxx", " x", "xx"],
    &[" x", "xx", "xxx"],
    &[" x", "xxx", "  xx"],
    &[" xx", "xxx", "x"],
    &["xx", "xxx", " x"],
    &[" x", " xxx", "xx"],
    &["xx", "xx", " x"],
    &["  x", "  x", "xxx", "x"],
    &["x", "xx", " xx", " x"],
    &["xxx", "xx", "x"],
    &["x", "xxx", "xx"],
    &["x", "xx", " x", " xx"],
    &[" xx", "xx", "xx"],
    &["xx", " x", "xx", "x"],
    &[" xx", " x", "xx", " x"],
];

const DECK_2: &[Card] = &[
    &["x", "xxxxx", "   x "],
    &["  xx", "  x", "  x", "xxx"],
    &["  x", "x xx", "xxx"],
    &["xxxx", "x  xx"],
    &["x  x", "xxxx", " x"],
    &["   x", "xxxx", "x x"],
    &[" xx", "xx", " xx", " x"],
    &[" x", " x x", "xxxx"],
    &["  x x", "xxxxx"],
    &["  xx", "xxx", "x", "x"],
    &["x", "xxx", "  xxx"],
    &["   x", "xxxx", "  x", "  x"],
    &[" x", "xxxxx", "  x"],
    &[" xx", "xx", "x", "xx"],
    &["    x", "xxxxx", "  x"],
    &[" x x", "xxxx", " x"],
    &["  x", " xxx", "xx x"],
    &[" xxx", "xx x", "   x"],
    &["xxxx", "x  x", "   x"],
    &["xxx", " x", "xx", " x"],
    &["  x", "x x", "xxx", "  x"],
    &["xx", " xx", "  xx", "  x"],
    &["  xx", "xxx", "x x"],
    &[" x", " x", "xxx", "  xx"],
    &[" x", " xxx", "xx", " x"],
    &["xx", " xxxx", "   x"],
    &["x  x", "xxxxx"],
    &[" xxxx", "xx x"],
    &["   x", "xxxx", " x", " x"],
    &["  x", " xxxx", "xx"],
    &["x", "xx", "x", "xxx"],
    &["xxx", "  xx", "  x", "  x"],
    &["   x", "  xxx", "xxx"],
    &["  x", "xxxx", "x", "x"],
    &["xxx", "x xxx"],
    &["    x", " xxxx", "xx"],
];

const DECK_3: &[Card] = &[
    &["    x", "x xxx", "xxx"],
    &["   x", " xxxx", "xx", " x"],
    &["    x", " xxxx", "xx  x"],
    &["xx", " x", " xxxx", "   x"],
    &["x x", "xxx", "x xx"],
    &[" xxx", " x x", "xx", " x"],
    &["  x", "xxx", "x xx", "   x"],
    &["xxx", "x xxx", "   x"],
    &["   xx", " xxx", "xx", " x"],
    &["xxxx", "x  x", "  xx"],
    &["xxx", "x x", " xxx"],
    &["  x", "  xxx", "  x", "xxx"],
    &["  x x", "xxxxx", "    x"],
    &[" xxxx", "xx x", "   x"],
    &["   x", "xxxxx", "x", "x"],
    &[" x", "xxx", "x xx", "  x"],
    &["x  xx", "xxxx", "  x"],
    &["   x", " xxx", "xx", " xx"],
    &["  x", "x x", "xxxx", " x"],
    &["xx", " x", " xxx", "   xx"],
    &["  xx", "x x", "xxx", "x"],
    &["x", "xxx", "x xx", "  x"],
    &[" xxx", "xx x", "   xx"],
    &[" xx", " x", "xxxx", "  x"],
    &[" x", "xx xx", " xxx"],
    &[" x", "xxxxx", "   x", "   x"],
    &["xx", "x", "xxx", "  xx"],
    &["xx  x", " xxxx", "   x"],
    &["  xxx", "  x", "xxx", " x"],
    &[" x x", "xxxx", "x  x"],
    &["x x", "xxx", "  xx", "   x"],
    &[" x", "xxxx", "  x", "  xx"],
    &["xx x", " xxxx", " x"],
    &["  x", "xxx", "  xxx", "   x"],
    &["x", "xx", " xxxx", " x"],
    &["    x", "  xxx", "  x", "xxx"],
];

const DECK_4: &[Card] = &[
    &["x", "x", "xxx", " xxx"],
    &["  xxx", "xxxx", " x"],
    &["xxxx", "x xx", "   x"],
    &["  x", "xxxx", "  xx", "   x"],
    &["xxxx", "x xx", "  x"],
    &[" xx", "xx", "xxx", "x"],
    &["  x", " xx", "xxxx", " x"],
    &["  x", "  x", "xxxx", " xx"],
    &["   x", "xxxxx", "  xx"],
    &[" xx", "xxxx", " x x"],
    &["  xx", "xxxxx", "  x"],
    &[" x", " xx", "xxxx", " x"],
    &["  xx", "xxxx", "x  x"],
    &["  xx", "xxxx", " x x"],
    &["   x", "  xx", "xxxx", "   x"],
    &["  x", " xx", "xxx", "x x"],
    &["  x", " xx", "xx", "xxx"],
    &["xxx", " xxxx", "    x"],
    &["  xxx", "xxxx", "  x"],
    &["   x", "xxxx", "  xxx"],
    &["   x", "xxxx", "x xx"],
    &[" xxxx", "xxx x"],
    &[" xx", "xxx", " x", " xx"],
    &[" xx x", "xxxxx"],
    &["x", "xxxx", "  xx", "  x"],
    &["xx", " x", " xx", " xxx"],
    &["x", "xxxxx", "  xx"],
    &["x x", "xxxx", "  xx"],
    &[" x", "xx", " xxx", " xx"],
    &["x", "xxxx", "xx", " x"],
    &["  xx", "xxx", " xx", " x"],
    &["xxxx", "  xxx", "   x"],
    &["x", "xxx", " xx", "xx"],
    &["xx", "xxxx", "   xx"],
    &[" xx", "  x", "xxx", "xx"],
    &["xx xx", " xxxx"],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::VoxelGrid;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(DECK_COUNT, 4);
        for deck in &DECKS {
            assert_eq!(deck.len(), CARDS_PER_DECK);
        }
    }

    #[test]
    fn test_lookup_bounds() {
        assert!(card(0, 0).is_some());
        assert!(card(3, 35).is_some());
        assert!(card(4, 0).is_none());
        assert!(card(0, 36).is_none());
    }

    #[test]
    fn test_every_card_parses_to_a_nonempty_layout() {
        for deck in 0..DECK_COUNT {
            for number in 0..CARDS_PER_DECK {
                let rows = card(deck, number).expect("catalog is dense");
                let grid = VoxelGrid::parse(&[rows]);
                assert!(
                    grid.volume() >= 4,
                    "deck {deck} card {number} is implausibly small"
                );
            }
        }
    }
}
