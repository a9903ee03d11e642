use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::piece::Piece;
use crate::position::Position;

/// Anything that can stand on a square.
///
/// Squares never look inside their occupant; they hold it and hand it back.
/// Every `Debug + Send + Sync + 'static` type is an occupant.
pub trait Occupant: fmt::Debug + Send + Sync + 'static {
    /// Recover the concrete occupant type.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T: fmt::Debug + Send + Sync + 'static> Occupant for T {
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// One cell of the board.
///
/// Squares are immutable. Empty squares are shared through the
/// [`pool`](crate::pool), occupied ones are built fresh by the
/// [`factory`](crate::factory) on every request. Neither variant can be
/// built or cloned outside this crate, so the pool's 64 empty squares are the
/// only ones that exist.
///
/// ```compile_fail
/// use spooky_squares::Square;
///
/// let _ = Square::Empty { index: 0 };
/// ```
///
/// ```compile_fail
/// use spooky_squares::{create_square, Square};
///
/// let copy: Square = (*create_square(0, None)).clone();
/// ```
#[derive(Debug, derive_more::IsVariant)]
pub enum Square {
    #[non_exhaustive]
    Empty {
        index: usize,
    },
    #[non_exhaustive]
    Occupied {
        index: usize,
        occupant: Arc<dyn Occupant>,
    },
}

impl Square {
    pub fn index(&self) -> usize {
        match self {
            Square::Empty { index } | Square::Occupied { index, .. } => *index,
        }
    }

    pub fn position(&self) -> Position {
        Position::from_index(self.index())
    }

    pub fn occupant(&self) -> Option<&Arc<dyn Occupant>> {
        match self {
            Square::Empty { .. } => None,
            Square::Occupied { occupant, .. } => Some(occupant),
        }
    }

    /// The occupant downcast to `T`, or `None` if the square is empty or
    /// holds something else.
    pub fn occupant_as<T: Occupant>(&self) -> Option<Arc<T>> {
        self.occupant()
            .and_then(|occupant| Arc::clone(occupant).into_any().downcast::<T>().ok())
    }

    pub fn piece(&self) -> Option<Piece> {
        self.occupant_as::<Piece>().map(|piece| *piece)
    }
}

/// Two squares are equal when they share an index and hold the same occupant
/// instance.
impl PartialEq for Square {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Square::Empty { index: a }, Square::Empty { index: b }) => a == b,
            (
                Square::Occupied {
                    index: a,
                    occupant: x,
                },
                Square::Occupied {
                    index: b,
                    occupant: y,
                },
            ) => a == b && Arc::ptr_eq(x, y),
            _ => false,
        }
    }
}

impl Eq for Square {}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Square::Empty { .. } => write!(f, "-"),
            Square::Occupied { .. } => match self.piece() {
                Some(piece) => write!(f, "{}", piece),
                None => write!(f, "?"),
            },
        }
    }
}
