use std::sync::Arc;

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SquareError;
use crate::factory::try_create_square;
use crate::piece::Piece;
use crate::position::Position;
use crate::square::{Occupant, Square};

impl Serialize for Position {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.to_index() as u64)
    }
}

impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let index = u64::deserialize(deserializer)?;
        usize::try_from(index)
            .map_err(|_| SquareError::IndexOutOfRange { index: usize::MAX })
            .and_then(Position::try_from_index)
            .map_err(serde::de::Error::custom)
    }
}

impl Serialize for Piece {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.to_char())
    }
}

impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Piece::from_char(c).map_err(serde::de::Error::custom),
            _ => Err(serde::de::Error::custom(format!(
                "Invalid piece format: {:?}",
                s
            ))),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct SquareRepr {
    index: usize,
    piece: Option<Piece>,
}

/// Squares serialize as `{"index": n, "piece": "P"}`, with `null` for an
/// empty square. Only [`Piece`] occupants can be written out.
impl Serialize for Square {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let piece = match self {
            Square::Empty { .. } => None,
            Square::Occupied { occupant, .. } => Some(self.piece().ok_or_else(|| {
                S::Error::custom(format!("Square occupant is not a piece: {:?}", occupant))
            })?),
        };
        SquareRepr {
            index: self.index(),
            piece,
        }
        .serialize(serializer)
    }
}

/// Reads a square written by `Square`'s `Serialize` impl. Empty squares come
/// back as the pool's shared instances.
///
/// Use with `#[serde(deserialize_with = "spooky_squares::serde_support::deserialize_square")]`.
pub fn deserialize_square<'de, D>(deserializer: D) -> Result<Arc<Square>, D::Error>
where
    D: Deserializer<'de>,
{
    let repr = SquareRepr::deserialize(deserializer)?;
    let occupant = repr.piece.map(|piece| Arc::new(piece) as Arc<dyn Occupant>);
    try_create_square(repr.index, occupant).map_err(serde::de::Error::custom)
}
