use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use std::fmt::{self, Display};

use crate::error::PauliError;

/// All elements of a given type. Usually used for simple enums.
pub trait All<const NUM_ELEMENTS: usize>: Sized {
    fn all() -> [Self; NUM_ELEMENTS];
}

/// Labels of the four single-qubit sigma matrices.
///
/// The discriminants are the ordinals `[I, X, Y, Z] = [0, 1, 2, 3]` that index the multiplication
/// table and define the canonical ordering of algebra terms.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd, Eq, Ord, Hash, FromPrimitive, ToPrimitive)]
pub enum Sigma {
    /// One qubit identity matrix
    /// ```text
    /// |1 0|
    /// |0 1|
    /// ```
    I = 0,

    /// Pauli X
    /// ```text
    /// |0 1|
    /// |1 0|
    /// ```
    X = 1,

    /// Pauli Y
    /// ```text
    /// |0 -i|
    /// |i  0|
    /// ```
    Y = 2,

    /// Pauli Z
    /// ```text
    /// |1  0|
    /// |0 -1|
    /// ```
    Z = 3,
}

impl Sigma {
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Sigma> {
        Sigma::from_usize(index)
    }

    #[must_use]
    pub fn label(self) -> char {
        match self {
            Sigma::I => 'I',
            Sigma::X => 'X',
            Sigma::Y => 'Y',
            Sigma::Z => 'Z',
        }
    }
}

impl All<4> for Sigma {
    fn all() -> [Sigma; 4] {
        [Sigma::I, Sigma::X, Sigma::Y, Sigma::Z]
    }
}

impl TryFrom<char> for Sigma {
    type Error = PauliError;

    fn try_from(character: char) -> Result<Self, Self::Error> {
        match character {
            'I' => Ok(Sigma::I),
            'X' => Ok(Sigma::X),
            'Y' => Ok(Sigma::Y),
            'Z' => Ok(Sigma::Z),
            _ => Err(PauliError::InvalidLabel(character)),
        }
    }
}

/// `σ_X` by default, the bare letter with `{:#}`.
impl Display for Sigma {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if formatter.alternate() {
            write!(formatter, "{}", self.label())
        } else {
            write!(formatter, "\u{03C3}_{}", self.label())
        }
    }
}
