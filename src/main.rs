//! Polycube Board Tiling Solver
//!
//! Solves board cards from the built-in catalog: a card's 2D layout is
//! extruded to the playing height and filled exactly with pieces from the
//! standard inventory. Prints every accepted solution as a label-multiset
//! summary, optionally with the full per-layer configuration.

use std::time::Instant;

use clap::{Parser, Subcommand};

use polypack::pieces::{base_pieces, BOARD_HEIGHT, PIECES_PER_GAME};
use polypack::{compute_compounds, decks, Board, Repository};

/// Solves polycube board tiling puzzles from the built-in card catalog.
#[derive(Parser)]
#[command(name = "polypack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve one card and print the accepted solutions.
    Solve {
        /// Deck number (1-4).
        deck: usize,
        /// Card number within the deck (1-36).
        card: usize,
        /// Board height in layers.
        #[arg(long, default_value_t = BOARD_HEIGHT)]
        height: usize,
        /// Copies of each piece label in the inventory.
        #[arg(long, default_value_t = PIECES_PER_GAME)]
        pieces_per_game: u32,
        /// Keep solutions that split into two independent sub-regions.
        #[arg(long)]
        allow_separable: bool,
        /// Print the full per-layer configuration of each solution.
        #[arg(long)]
        grid: bool,
    },
    /// List the built-in pieces with their orientation counts.
    Pieces,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            deck,
            card,
            height,
            pieces_per_game,
            allow_separable,
            grid,
        } => run_solve(deck, card, height, pieces_per_game, allow_separable, grid),
        Command::Pieces => run_pieces(),
    }
}

fn run_solve(
    deck: usize,
    card: usize,
    height: usize,
    pieces_per_game: u32,
    allow_separable: bool,
    grid: bool,
) {
    let Some(rows) = deck
        .checked_sub(1)
        .zip(card.checked_sub(1))
        .and_then(|(deck, card)| decks::card(deck, card))
    else {
        eprintln!(
            "No such card: deck {deck} card {card} (decks 1-{}, cards 1-{})",
            decks::DECK_COUNT,
            decks::CARDS_PER_DECK
        );
        return;
    };

    let mut repository = Repository::new(pieces_per_game, &base_pieces());
    compute_compounds(&mut repository);
    let mut board = Board::parse(&repository, height, rows);

    let start = Instant::now();
    let solutions = board.solve(&mut repository, allow_separable);
    let elapsed = start.elapsed();

    let width = solutions.len().to_string().len();
    for (number, solution) in solutions.iter().enumerate() {
        println!("{:>width$}. {}", number + 1, solution.summary());
        if grid {
            println!();
            print!("{}", solution.render());
        }
    }

    println!();
    println!("Found {} in {:?}", solutions.len(), elapsed);
}

fn run_pieces() {
    for piece in base_pieces() {
        println!(
            "{}  volume {}  orientations {}",
            piece.label(),
            piece.volume(),
            piece.rotations().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use polypack::pieces::Piece;
    use polypack::{compute_compounds, Board, Repository, Snapshot};

    fn listing(solutions: &[Snapshot]) -> String {
        let mut output = String::new();
        for (number, solution) in solutions.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", number + 1, solution.summary()));
        }
        output
    }

    #[test]
    fn test_l_tromino_listing_snapshot() {
        let base = vec![Piece::parse("L", 0, &[&["xx", "x"]])];
        let mut repository = Repository::new(1, &base);
        compute_compounds(&mut repository);
        let mut board = Board::parse(&repository, 1, &["xx", "x"]);
        let solutions = board.solve(&mut repository, false);

        insta::assert_snapshot!(listing(&solutions), @"1. L");
    }

    #[test]
    fn test_square_board_listing_snapshot() {
        let base = vec![
            Piece::parse("P", 0, &[&["xx"]]),
            Piece::parse("A", 1, &[&["x"]]),
            Piece::parse("B", 2, &[&["x"]]),
        ];
        let mut repository = Repository::new(2, &base);
        compute_compounds(&mut repository);
        let mut board = Board::parse(&repository, 1, &["xx", "xx"]);
        let solutions = board.solve(&mut repository, true);

        // raw multisets {P,P}, {A,A,P}, {A,B,P}, {B,B,P} and {A,A,B,B} all
        // reduce to the two-bar solution through compound substitution
        insta::assert_snapshot!(listing(&solutions), @"1. 2 P");
    }
}
