use crate::alliance::Alliance;
use crate::error::SquareError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Uppercase letter for the kind.
    pub fn to_char(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_char(c: char) -> Result<PieceKind, SquareError> {
        match c.to_ascii_uppercase() {
            'P' => Ok(PieceKind::Pawn),
            'N' => Ok(PieceKind::Knight),
            'B' => Ok(PieceKind::Bishop),
            'R' => Ok(PieceKind::Rook),
            'Q' => Ok(PieceKind::Queen),
            'K' => Ok(PieceKind::King),
            _ => Err(SquareError::InvalidPieceChar { ch: c }),
        }
    }
}

/// A chess piece. The square layer treats it as an opaque occupant; it lives
/// here so the bindings, benchmarks and tests have something concrete to
/// place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub alliance: Alliance,
}

impl Piece {
    pub fn new(kind: PieceKind, alliance: Alliance) -> Self {
        Piece { kind, alliance }
    }

    /// Uppercase for White, lowercase for Black.
    pub fn to_char(&self) -> char {
        self.alliance.letter(self.kind.to_char())
    }

    /// Piece from a kind letter (either case) and an alliance value
    /// (`Alliance as i8`).
    pub fn from_parts(kind: char, alliance: i8) -> Result<Piece, SquareError> {
        Ok(Piece {
            kind: PieceKind::from_char(kind)?,
            alliance: Alliance::from_int(alliance)?,
        })
    }

    pub fn from_char(c: char) -> Result<Piece, SquareError> {
        let kind = PieceKind::from_char(c)?;
        Ok(Piece {
            kind,
            alliance: Alliance::of_letter(c),
        })
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
