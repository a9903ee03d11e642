use std::sync::Arc;

use crate::error::SquareError;
use crate::pool;
use crate::position::NUM_SQUARES;
use crate::square::{Occupant, Square};

/// Square at `index` holding `occupant`.
///
/// With an occupant this allocates a new square on every call; identical
/// arguments never share an instance. Without one it returns the pool's
/// shared empty square for `index`.
///
/// `index` must be in `0..NUM_SQUARES`. Use [`try_create_square`] for
/// untrusted input.
///
/// # Panics
///
/// An off-board index panics on the empty path and trips a debug assertion
/// on the occupied path.
pub fn create_square(index: usize, occupant: Option<Arc<dyn Occupant>>) -> Arc<Square> {
    match occupant {
        Some(occupant) => create_occupied(index, occupant),
        None => create_empty(index),
    }
}

/// [`create_square`] with the index checked first.
pub fn try_create_square(
    index: usize,
    occupant: Option<Arc<dyn Occupant>>,
) -> Result<Arc<Square>, SquareError> {
    if index >= NUM_SQUARES {
        log::trace!("rejected square index {}", index);
        return Err(SquareError::IndexOutOfRange { index });
    }
    Ok(create_square(index, occupant))
}

pub fn create_occupied(index: usize, occupant: Arc<dyn Occupant>) -> Arc<Square> {
    debug_assert!(index < NUM_SQUARES);
    Arc::new(Square::Occupied { index, occupant })
}

pub fn create_empty(index: usize) -> Arc<Square> {
    Arc::clone(pool::lookup(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alliance::Alliance;
    use crate::piece::{Piece, PieceKind};
    use crate::pool::EmptySquarePool;
    use proptest::prelude::*;

    fn piece(kind: PieceKind, alliance: Alliance) -> Arc<dyn Occupant> {
        Arc::new(Piece::new(kind, alliance))
    }

    fn arb_kind() -> impl Strategy<Value = PieceKind> {
        prop::sample::select(PieceKind::ALL.to_vec())
    }

    fn arb_alliance() -> impl Strategy<Value = Alliance> {
        prop_oneof![Just(Alliance::White), Just(Alliance::Black)]
    }

    #[test]
    fn test_empty_squares_are_shared() {
        let first = create_square(0, None);
        let second = create_square(0, None);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_white_pawn_on_four() {
        let white_pawn = piece(PieceKind::Pawn, Alliance::White);
        let square = create_square(4, Some(Arc::clone(&white_pawn)));
        assert!(square.is_occupied());
        assert!(Arc::ptr_eq(square.occupant().unwrap(), &white_pawn));

        let empty = create_square(4, None);
        assert!(!empty.is_occupied());
        assert!(empty.occupant().is_none());
    }

    #[test]
    fn test_occupied_squares_are_not_cached() {
        let rook = piece(PieceKind::Rook, Alliance::Black);
        let a = create_square(56, Some(Arc::clone(&rook)));
        let b = create_square(56, Some(Arc::clone(&rook)));
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_squares_come_from_global_pool() {
        let pool = EmptySquarePool::global();
        for index in 0..NUM_SQUARES {
            assert!(Arc::ptr_eq(&create_empty(index), pool.lookup(index)));
        }
    }

    #[test]
    fn test_try_create_square_rejects_off_board() {
        assert_eq!(
            try_create_square(64, None).unwrap_err(),
            SquareError::IndexOutOfRange { index: 64 }
        );
        assert_eq!(
            try_create_square(usize::MAX, Some(piece(PieceKind::King, Alliance::White)))
                .unwrap_err(),
            SquareError::IndexOutOfRange { index: usize::MAX }
        );
    }

    #[test]
    fn test_try_create_square_accepts_board() {
        let empty = try_create_square(63, None).unwrap();
        assert!(Arc::ptr_eq(&empty, &create_square(63, None)));
        let king = try_create_square(60, Some(piece(PieceKind::King, Alliance::White))).unwrap();
        assert_eq!(
            king.piece(),
            Some(Piece::new(PieceKind::King, Alliance::White))
        );
    }

    #[test]
    #[should_panic]
    fn test_create_square_off_board_panics() {
        create_square(64, None);
    }

    proptest! {
        #[test]
        fn prop_empty_square_identity(index in 0..NUM_SQUARES) {
            let first = create_square(index, None);
            let second = create_square(index, None);
            prop_assert!(Arc::ptr_eq(&first, &second));
            prop_assert!(!first.is_occupied());
            prop_assert!(first.occupant().is_none());
            prop_assert_eq!(first.index(), index);
        }

        #[test]
        fn prop_occupied_square_holds_occupant(
            index in 0..NUM_SQUARES,
            kind in arb_kind(),
            alliance in arb_alliance(),
        ) {
            let occupant = piece(kind, alliance);
            let square = create_square(index, Some(Arc::clone(&occupant)));
            prop_assert!(square.is_occupied());
            prop_assert!(Arc::ptr_eq(square.occupant().unwrap(), &occupant));
            prop_assert_eq!(square.index(), index);

            let again = create_square(index, Some(occupant));
            prop_assert!(!Arc::ptr_eq(&square, &again));
        }
    }
}
