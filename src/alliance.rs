use crate::error::SquareError;

/// The side a piece plays for. Piece letters carry it in their case:
/// uppercase for White, lowercase for Black.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Alliance {
    White = 1,
    Black = -1,
}

impl Alliance {
    pub fn of_letter(c: char) -> Alliance {
        if c.is_ascii_uppercase() {
            Alliance::White
        } else {
            Alliance::Black
        }
    }

    /// `c` in this side's case.
    pub fn letter(&self, c: char) -> char {
        match self {
            Alliance::White => c.to_ascii_uppercase(),
            Alliance::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_int(i: i8) -> Result<Alliance, SquareError> {
        match i {
            1 => Ok(Alliance::White),
            -1 => Ok(Alliance::Black),
            _ => Err(SquareError::InvalidAllianceValue { value: i }),
        }
    }

    pub fn is_white(&self) -> bool {
        matches!(self, Alliance::White)
    }
}

impl std::fmt::Display for Alliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alliance::White => write!(f, "White"),
            Alliance::Black => write!(f, "Black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_case() {
        assert_eq!(Alliance::of_letter('Q'), Alliance::White);
        assert_eq!(Alliance::of_letter('q'), Alliance::Black);
        assert_eq!(Alliance::White.letter('k'), 'K');
        assert_eq!(Alliance::Black.letter('K'), 'k');
    }

    #[test]
    fn test_from_int() {
        assert_eq!(Alliance::from_int(Alliance::White as i8), Ok(Alliance::White));
        assert_eq!(Alliance::from_int(-1), Ok(Alliance::Black));
        assert_eq!(
            Alliance::from_int(0),
            Err(SquareError::InvalidAllianceValue { value: 0 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Alliance::White.to_string(), "White");
        assert_eq!(Alliance::Black.to_string(), "Black");
    }
}
