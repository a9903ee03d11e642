pub mod alliance;
pub mod error;
pub mod factory;
pub mod piece;
pub mod pool;
pub mod position;
pub mod square;

#[cfg(feature = "serde")]
pub mod serde_support;

pub use error::SquareError;
pub use factory::{create_square, try_create_square};
pub use square::{Occupant, Square};

#[cfg(feature = "python")]
extern crate pyo3;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule(gil_used = false)]
fn spooky_squares(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use python_bindings::*;
    pool::initialize();
    m.add_class::<PySquare>()?;
    m.add_class::<PyPiece>()?;
    m.add_function(wrap_pyfunction!(py_create_square, m)?)?;
    m.add("WHITE", alliance::Alliance::White as i8)?;
    m.add("BLACK", alliance::Alliance::Black as i8)?;
    m.add("NUM_SQUARES", position::NUM_SQUARES)?;
    Ok(())
}

#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use crate::piece::Piece;
    use std::sync::Arc;

    fn value_error(err: SquareError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
    }

    #[pyfunction]
    #[pyo3(name = "create_square", signature = (index, piece=None))]
    pub fn py_create_square(index: usize, piece: Option<PyRef<'_, PyPiece>>) -> PyResult<PySquare> {
        let occupant = piece.map(|p| Arc::clone(&p.piece) as Arc<dyn Occupant>);
        let square = factory::try_create_square(index, occupant).map_err(value_error)?;
        Ok(PySquare { square })
    }

    #[pyclass(name = "Piece")]
    #[derive(Clone)]
    pub struct PyPiece {
        piece: Arc<Piece>,
    }

    #[pymethods]
    impl PyPiece {
        #[new]
        pub fn new(symbol: char) -> PyResult<Self> {
            let piece = Piece::from_char(symbol).map_err(value_error)?;
            Ok(PyPiece {
                piece: Arc::new(piece),
            })
        }

        #[staticmethod]
        pub fn of(kind: char, alliance: i8) -> PyResult<Self> {
            let piece = Piece::from_parts(kind, alliance).map_err(value_error)?;
            Ok(PyPiece {
                piece: Arc::new(piece),
            })
        }

        pub fn symbol(&self) -> char {
            self.piece.to_char()
        }

        pub fn alliance(&self) -> i8 {
            self.piece.alliance as i8
        }

        pub fn alliance_name(&self) -> String {
            self.piece.alliance.to_string()
        }

        pub fn is_white(&self) -> bool {
            self.piece.alliance.is_white()
        }

        pub fn is_same(&self, other: &PyPiece) -> bool {
            Arc::ptr_eq(&self.piece, &other.piece)
        }

        pub fn __str__(&self) -> String {
            self.piece.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!("Piece('{}')", self.piece)
        }

        pub fn __eq__(&self, other: &PyPiece) -> bool {
            self.piece == other.piece
        }
    }

    #[pyclass(name = "Square")]
    #[derive(Clone)]
    pub struct PySquare {
        square: Arc<Square>,
    }

    #[pymethods]
    impl PySquare {
        pub fn index(&self) -> usize {
            self.square.index()
        }

        pub fn is_occupied(&self) -> bool {
            self.square.is_occupied()
        }

        pub fn is_empty(&self) -> bool {
            self.square.is_empty()
        }

        pub fn occupant(&self) -> Option<PyPiece> {
            self.square
                .occupant_as::<Piece>()
                .map(|piece| PyPiece { piece })
        }

        pub fn position(&self) -> String {
            self.square.position().to_string()
        }

        pub fn is_same(&self, other: &PySquare) -> bool {
            Arc::ptr_eq(&self.square, &other.square)
        }

        pub fn __str__(&self) -> String {
            self.square.to_string()
        }

        pub fn __repr__(&self) -> String {
            format!(
                "Square(index={}, occupant={})",
                self.square.index(),
                self.square
                    .piece()
                    .map(|p| format!("'{}'", p))
                    .unwrap_or_else(|| "None".to_string())
            )
        }

        pub fn __eq__(&self, other: &PySquare) -> bool {
            self.square == other.square
        }
    }
}
