use paste::paste;

use crate::error::SquareError;

pub const BOARD_WIDTH: u8 = 8;
pub const BOARD_HEIGHT: u8 = 8;

/// Number of squares on the board. Valid position indices are `0..NUM_SQUARES`.
pub const NUM_SQUARES: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// A square's coordinates on the fixed 8x8 board.
///
/// Row 0 is the eighth rank and column 0 is the a-file, so index 0 is a8
/// and index 63 is h1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub col: u8,
    pub row: u8,
}

impl Position {
    pub const fn new(col: u8, row: u8) -> Self {
        Position { col, row }
    }

    pub fn from_index(index: usize) -> Self {
        debug_assert!(index < NUM_SQUARES);
        let w = BOARD_WIDTH as usize;
        Position {
            col: (index % w) as u8,
            row: (index / w) as u8,
        }
    }

    pub fn try_from_index(index: usize) -> Result<Self, SquareError> {
        if index < NUM_SQUARES {
            Ok(Self::from_index(index))
        } else {
            Err(SquareError::IndexOutOfRange { index })
        }
    }

    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_WIDTH as usize + self.col as usize
    }

    pub fn is_valid(&self) -> bool {
        self.col < BOARD_WIDTH && self.row < BOARD_HEIGHT
    }

    /// File letter, `'a'..='h'`.
    pub fn file(&self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank number, `1..=8`.
    pub fn rank(&self) -> u8 {
        BOARD_HEIGHT - self.row
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

macro_rules! rank_positions {
    ($rank:literal => $row:literal) => {
        paste! {
            pub const [<A $rank>]: Position = Position::new(0, $row);
            pub const [<B $rank>]: Position = Position::new(1, $row);
            pub const [<C $rank>]: Position = Position::new(2, $row);
            pub const [<D $rank>]: Position = Position::new(3, $row);
            pub const [<E $rank>]: Position = Position::new(4, $row);
            pub const [<F $rank>]: Position = Position::new(5, $row);
            pub const [<G $rank>]: Position = Position::new(6, $row);
            pub const [<H $rank>]: Position = Position::new(7, $row);
        }
    };
}

rank_positions!(8 => 0);
rank_positions!(7 => 1);
rank_positions!(6 => 2);
rank_positions!(5 => 3);
rank_positions!(4 => 4);
rank_positions!(3 => 5);
rank_positions!(2 => 6);
rank_positions!(1 => 7);
