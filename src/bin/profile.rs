use std::hint::black_box;
use std::sync::Arc;

use spooky_squares::alliance::Alliance;
use spooky_squares::piece::{Piece, PieceKind};
use spooky_squares::position::NUM_SQUARES;
use spooky_squares::{create_square, pool, Occupant, Square};

const ITERATIONS: usize = 100_000;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Occupants of the standard starting position, indexed a8..h1.
fn starting_occupants() -> Vec<Option<Arc<dyn Occupant>>> {
    (0..NUM_SQUARES)
        .map(|index| {
            let (row, col) = (index / 8, index % 8);
            let piece = match row {
                0 => Some(Piece::new(BACK_RANK[col], Alliance::Black)),
                1 => Some(Piece::new(PieceKind::Pawn, Alliance::Black)),
                6 => Some(Piece::new(PieceKind::Pawn, Alliance::White)),
                7 => Some(Piece::new(BACK_RANK[col], Alliance::White)),
                _ => None,
            };
            piece.map(|p| Arc::new(p) as Arc<dyn Occupant>)
        })
        .collect()
}

#[hotpath::measure]
fn build_board(occupants: &[Option<Arc<dyn Occupant>>]) -> Vec<Arc<Square>> {
    occupants
        .iter()
        .enumerate()
        .map(|(index, occupant)| create_square(index, occupant.clone()))
        .collect()
}

#[hotpath::measure]
fn count_occupied(board: &[Arc<Square>]) -> usize {
    board.iter().filter(|square| square.is_occupied()).count()
}

#[hotpath::main]
fn main() {
    env_logger::init();
    pool::initialize();

    let occupants = starting_occupants();
    let mut occupied = 0;
    for _ in 0..ITERATIONS {
        let board = build_board(&occupants);
        occupied += count_occupied(black_box(&board));
    }

    log::info!(
        "built {} boards, {} occupied squares total",
        ITERATIONS,
        occupied
    );
}
