use std::sync::{Arc, OnceLock};

use crate::position::NUM_SQUARES;
use crate::square::Square;

// Shared empty squares, built once per process.
static EMPTY_SQUARES: OnceLock<EmptySquarePool> = OnceLock::new();

/// One shared empty square per position index.
///
/// The pool is a fixed-size array: once built nothing can be added, removed
/// or replaced, so readers never need a lock.
#[derive(Debug)]
pub struct EmptySquarePool {
    squares: [Arc<Square>; NUM_SQUARES],
}

impl EmptySquarePool {
    pub(crate) fn build() -> Self {
        let pool = EmptySquarePool {
            squares: std::array::from_fn(|index| Arc::new(Square::Empty { index })),
        };
        log::debug!("built {} shared empty squares", pool.len());
        pool
    }

    /// The process-wide pool, building it on first use.
    pub fn global() -> &'static EmptySquarePool {
        EMPTY_SQUARES.get_or_init(Self::build)
    }

    /// Shared empty square at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= NUM_SQUARES`.
    #[inline]
    pub fn lookup(&self, index: usize) -> &Arc<Square> {
        debug_assert!(index < NUM_SQUARES);
        &self.squares[index]
    }

    /// Like [`lookup`](Self::lookup), but `None` for an off-board index.
    pub fn get(&self, index: usize) -> Option<&Arc<Square>> {
        self.squares.get(index)
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Square>> {
        self.squares.iter()
    }
}

/// Builds the shared pool now rather than on the first lookup.
///
/// Meant for engine startup; later calls do nothing.
pub fn initialize() {
    let _ = EmptySquarePool::global();
}

/// Shared empty square at `index` from the process-wide pool.
///
/// The same instance comes back for every call with the same index.
///
/// # Panics
///
/// Panics if `index >= NUM_SQUARES`.
#[inline]
pub fn lookup(index: usize) -> &'static Arc<Square> {
    EmptySquarePool::global().lookup(index)
}
