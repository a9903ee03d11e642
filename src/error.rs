use crate::position::NUM_SQUARES;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SquareError {
    #[display("position index {index} is off the board (expected 0..{NUM_SQUARES})")]
    IndexOutOfRange { index: usize },
    #[display("unrecognized piece character: {ch:?}")]
    InvalidPieceChar { ch: char },
    #[display("unrecognized alliance value: {value} (expected 1 or -1)")]
    InvalidAllianceValue { value: i8 },
}
