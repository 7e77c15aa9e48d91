//! The closed one-dimensional road.
//!
//! Cells are numbered `0..length` and the road wraps: cell `length - 1` is
//! followed by cell `0`.  Every position arithmetic goes through
//! [`Road::wrap`], which is a true mathematical modulo (never negative).

use crate::{CoreError, CoreResult};

/// A cell index on the road, always in `[0, length)`.
pub type Position = u32;

/// A circular road of `length` cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Road {
    length: u32,
}

impl Road {
    /// Create a road of `length` cells.  A zero-length road has no cells and
    /// is rejected.
    pub fn new(length: u32) -> CoreResult<Self> {
        if length == 0 {
            return Err(CoreError::NotPositive { what: "road length" });
        }
        Ok(Self { length })
    }

    #[inline]
    pub fn length(self) -> u32 {
        self.length
    }

    /// Map any signed offset onto `[0, length)`.
    #[inline]
    pub fn wrap(self, x: i64) -> Position {
        x.rem_euclid(self.length as i64) as Position
    }

    /// The cell `steps` cells ahead of `from`, wrapping around the loop.
    #[inline]
    pub fn advance(self, from: Position, steps: u32) -> Position {
        self.wrap(from as i64 + steps as i64)
    }

    /// `true` if `pos` is a valid cell on this road.
    #[inline]
    pub fn contains(self, pos: Position) -> bool {
        pos < self.length
    }

    /// Initial gap between consecutively indexed entities: `length / count`
    /// when the road is longer than the population, otherwise 1.
    #[inline]
    pub fn spacing(self, count: usize) -> u32 {
        if (self.length as usize) > count {
            self.length / count as u32
        } else {
            1
        }
    }
}

impl std::fmt::Display for Road {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ring road of {} cells", self.length)
    }
}
