use std::ops::{Add, Mul, Neg};

use num_complex::Complex64;

use crate::algebra::PauliAlgebraElement;
use crate::error::{PauliError, Result};
use crate::group::PauliGroupElement;
use crate::tensor::PauliTensor;

/// Any value that can take part in Pauli arithmetic.
///
/// The typed operators on each value type cover the supported pairings at compile time. `Operand`
/// is for callers that only know operand kinds at runtime: its operations accept exactly the same
/// pairings and reject everything else with [`PauliError::UnsupportedOperand`].
///
/// | left \ right | Scalar | Group | Tensor | Algebra |
/// |--------------|--------|-------|--------|---------|
/// | Scalar       |        | `*`   | `*`    | `*`     |
/// | Group        | `*`    | `*`   |        |         |
/// | Tensor       | `*`    |       | `*`    | `*`     |
/// | Algebra      | `*`    |       | `*`    | `*` `+` |
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Scalar(Complex64),
    Group(PauliGroupElement),
    Tensor(PauliTensor),
    Algebra(PauliAlgebraElement),
}

impl Operand {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "scalar",
            Operand::Group(_) => "group element",
            Operand::Tensor(_) => "tensor",
            Operand::Algebra(_) => "algebra element",
        }
    }

    /// # Errors
    /// [`PauliError::UnsupportedOperand`] for a pairing outside the table above,
    /// [`PauliError::DimensionMismatch`] as for the underlying tensor product.
    pub fn try_mul(&self, rhs: &Operand) -> Result<Operand> {
        match (self, rhs) {
            (Operand::Group(left), Operand::Group(right)) => Ok(Operand::Group(left * right)),
            (Operand::Group(element), Operand::Scalar(scalar))
            | (Operand::Scalar(scalar), Operand::Group(element)) => Ok(Operand::Group(element.scaled(*scalar))),
            (Operand::Tensor(left), Operand::Tensor(right)) => left.try_mul(right).map(Operand::Tensor),
            (Operand::Tensor(tensor), Operand::Scalar(scalar))
            | (Operand::Scalar(scalar), Operand::Tensor(tensor)) => Ok(Operand::Tensor(tensor.scaled(*scalar))),
            (Operand::Algebra(left), Operand::Algebra(right)) => left.try_mul(right).map(Operand::Algebra),
            (Operand::Algebra(element), Operand::Scalar(scalar))
            | (Operand::Scalar(scalar), Operand::Algebra(element)) => Ok(Operand::Algebra(element.scaled(*scalar))),
            (Operand::Algebra(element), Operand::Tensor(tensor)) => {
                element.try_mul_tensor(tensor).map(Operand::Algebra)
            }
            (Operand::Tensor(tensor), Operand::Algebra(element)) => {
                PauliAlgebraElement::from(tensor.clone()).try_mul(element).map(Operand::Algebra)
            }
            _ => Err(self.unsupported("multiplication", rhs)),
        }
    }

    /// # Errors
    /// [`PauliError::UnsupportedOperand`] unless both operands are algebra elements.
    pub fn try_add(&self, rhs: &Operand) -> Result<Operand> {
        match (self, rhs) {
            (Operand::Algebra(left), Operand::Algebra(right)) => Ok(Operand::Algebra(left + right)),
            _ => Err(self.unsupported("addition", rhs)),
        }
    }

    #[must_use]
    pub fn negated(&self) -> Operand {
        match self {
            Operand::Scalar(scalar) => Operand::Scalar(-scalar),
            Operand::Group(element) => Operand::Group(-element),
            Operand::Tensor(tensor) => Operand::Tensor(-tensor),
            Operand::Algebra(element) => Operand::Algebra(-element),
        }
    }

    fn unsupported(&self, operation: &'static str, rhs: &Operand) -> PauliError {
        PauliError::UnsupportedOperand {
            operation,
            left: self.kind(),
            right: rhs.kind(),
        }
    }
}

impl From<Complex64> for Operand {
    fn from(scalar: Complex64) -> Self {
        Operand::Scalar(scalar)
    }
}

impl From<f64> for Operand {
    fn from(scalar: f64) -> Self {
        Operand::Scalar(scalar.into())
    }
}

impl From<PauliGroupElement> for Operand {
    fn from(element: PauliGroupElement) -> Self {
        Operand::Group(element)
    }
}

impl From<PauliTensor> for Operand {
    fn from(tensor: PauliTensor) -> Self {
        Operand::Tensor(tensor)
    }
}

impl From<PauliAlgebraElement> for Operand {
    fn from(element: PauliAlgebraElement) -> Self {
        Operand::Algebra(element)
    }
}

impl Mul for &Operand {
    type Output = Result<Operand>;

    fn mul(self, rhs: &Operand) -> Self::Output {
        self.try_mul(rhs)
    }
}

impl Add for &Operand {
    type Output = Result<Operand>;

    fn add(self, rhs: &Operand) -> Self::Output {
        self.try_add(rhs)
    }
}

impl Neg for &Operand {
    type Output = Operand;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}
