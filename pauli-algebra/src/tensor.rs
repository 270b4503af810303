use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::Mul;
use std::str::FromStr;

use itertools::Itertools;
use num_complex::Complex64;
use tracing::debug;

use crate::core::{All, Sigma};
use crate::error::{PauliError, Result};
use crate::group::{parse_phase, PauliGroupElement, ONE};
use crate::impl_scalar_mul;

/// A scaled tensor product `phase · (g₀ ⊗ g₁ ⊗ … ⊗ gₙ₋₁)` of Pauli group elements.
///
/// Phases may live on the tensor or on any factor. Equality and hashing only see the normalized
/// form produced by [`PauliTensor::factor_phase`], so two tensors that distribute the same overall
/// phase differently are equal and hash alike.
///
/// # Examples
///
/// ```
/// use pauli_algebra::PauliTensor;
///
/// let xxx = PauliTensor::from_label_string("XXX").unwrap();
/// let xyz = PauliTensor::from_label_string("XYZ").unwrap();
/// assert_eq!((&xxx * &xyz).unwrap(), PauliTensor::from_label_string("IZY").unwrap());
/// assert_eq!((&xxx * &xxx).unwrap(), PauliTensor::identity(3).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct PauliTensor {
    phase: Complex64,
    factors: Vec<PauliGroupElement>,
}

impl PauliTensor {
    /// # Errors
    /// [`PauliError::EmptyTensor`] if `factors` is empty.
    pub fn new(phase: impl Into<Complex64>, factors: Vec<PauliGroupElement>) -> Result<Self> {
        if factors.is_empty() {
            return Err(PauliError::EmptyTensor);
        }
        Ok(PauliTensor {
            phase: phase.into(),
            factors,
        })
    }

    /// # Errors
    /// [`PauliError::EmptyTensor`] if `dim` is zero.
    pub fn identity(dim: usize) -> Result<Self> {
        PauliTensor::new(ONE, vec![PauliGroupElement::id(); dim])
    }

    /// Phase 1 tensor with one phase 1 factor per character of `labels`.
    ///
    /// # Errors
    /// [`PauliError::InvalidLabel`] for a character outside `IXYZ`,
    /// [`PauliError::EmptyTensor`] for an empty string.
    pub fn from_label_string(labels: &str) -> Result<Self> {
        let factors = labels
            .chars()
            .map(|character| Sigma::try_from(character).map(PauliGroupElement::from))
            .collect::<Result<Vec<_>>>()?;
        PauliTensor::new(ONE, factors)
    }

    /// Phase 1 tensor of uniformly random labels.
    ///
    /// # Errors
    /// [`PauliError::EmptyTensor`] if `dim` is zero.
    pub fn random(dim: usize, random_number_generator: &mut impl rand::Rng) -> Result<Self> {
        let labels = Sigma::all();
        let factors = (0..dim)
            .map(|_| PauliGroupElement::from(labels[random_number_generator.gen_range(0..labels.len())]))
            .collect();
        PauliTensor::new(ONE, factors)
    }

    #[must_use]
    pub fn phase(&self) -> Complex64 {
        self.phase
    }

    #[must_use]
    pub fn factors(&self) -> &[PauliGroupElement] {
        &self.factors
    }

    pub fn labels(&self) -> impl Iterator<Item = Sigma> + '_ {
        self.factors.iter().map(PauliGroupElement::sigma)
    }

    #[must_use]
    pub fn dim(&self) -> usize {
        self.factors.len()
    }

    /// Tensor phase times the phase of every factor.
    #[must_use]
    pub fn overall_phase(&self) -> Complex64 {
        self.factors
            .iter()
            .fold(self.phase, |accumulated, factor| accumulated * factor.phase())
    }

    /// Equal tensor whose factors all have phase 1, with the accumulated phase on the tensor.
    #[must_use]
    pub fn factor_phase(&self) -> PauliTensor {
        PauliTensor {
            phase: self.overall_phase(),
            factors: self.factors.iter().map(PauliGroupElement::dephased).collect(),
        }
    }

    /// Number of non-identity factors.
    #[must_use]
    pub fn weight(&self) -> usize {
        self.labels().filter(|sigma| *sigma != Sigma::I).count()
    }

    /// True when every factor is labelled I. The phase is ignored.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.weight() == 0
    }

    /// # Errors
    /// [`PauliError::DimensionMismatch`] if the dimensions differ.
    pub fn commutes_with(&self, other: &PauliTensor) -> Result<bool> {
        self.check_equal_dims(other)?;
        let anticommuting = self
            .factors
            .iter()
            .zip(&other.factors)
            .filter(|(left, right)| !left.commutes_with(right))
            .count();
        Ok(anticommuting % 2 == 0)
    }

    /// Normalize both operands, multiply factorwise, then normalize the product.
    ///
    /// # Errors
    /// [`PauliError::DimensionMismatch`] if the dimensions differ.
    pub fn try_mul(&self, other: &PauliTensor) -> Result<PauliTensor> {
        self.check_equal_dims(other)?;
        let (left, right) = (self.factor_phase(), other.factor_phase());
        let product = PauliTensor {
            phase: left.phase * right.phase,
            factors: left
                .factors
                .iter()
                .zip(&right.factors)
                .map(|(left_factor, right_factor)| left_factor * right_factor)
                .collect(),
        };
        Ok(product.factor_phase())
    }

    #[must_use]
    pub fn scaled(&self, scalar: impl Into<Complex64>) -> PauliTensor {
        PauliTensor {
            phase: self.phase * scalar.into(),
            factors: self.factors.clone(),
        }
    }

    /// Normalized equality: same overall phase and the same label sequence.
    #[must_use]
    pub fn equals_to(&self, other: &PauliTensor) -> bool {
        self.dim() == other.dim() && self.overall_phase() == other.overall_phase() && self.labels().eq(other.labels())
    }

    /// # Errors
    /// [`PauliError::DimensionMismatch`] if the dimensions differ.
    pub fn check_equal_dims(&self, other: &PauliTensor) -> Result<()> {
        if self.dim() == other.dim() {
            Ok(())
        } else {
            debug!(left = self.dim(), right = other.dim(), "rejected tensors of different dimension");
            Err(PauliError::DimensionMismatch {
                left: self.dim(),
                right: other.dim(),
            })
        }
    }

    pub(crate) fn with_unit_phase(mut self) -> PauliTensor {
        self.phase = ONE;
        self
    }

    /// Digits of the label ordinals, left to right; the sort key for algebra terms.
    pub(crate) fn lexicographic_key(&self) -> String {
        self.labels().map(|sigma| sigma.index().to_string()).collect()
    }

    pub(crate) fn fmt_factors(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({})", self.factors.iter().join(" \u{2297} "))
    }
}

impl Default for PauliTensor {
    fn default() -> Self {
        PauliTensor {
            phase: ONE,
            factors: vec![PauliGroupElement::id()],
        }
    }
}

impl PartialEq for PauliTensor {
    fn eq(&self, other: &Self) -> bool {
        self.equals_to(other)
    }
}

impl Eq for PauliTensor {}

// -0.0 and 0.0 compare equal, so they must hash alike.
fn canonical_bits(value: f64) -> u64 {
    (value + 0.0).to_bits()
}

impl Hash for PauliTensor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let phase = self.overall_phase();
        canonical_bits(phase.re).hash(state);
        canonical_bits(phase.im).hash(state);
        for sigma in self.labels() {
            sigma.hash(state);
        }
    }
}

impl Mul<&PauliTensor> for &PauliTensor {
    type Output = Result<PauliTensor>;

    #[inline]
    fn mul(self, other: &PauliTensor) -> Self::Output {
        self.try_mul(other)
    }
}

impl Mul for PauliTensor {
    type Output = Result<PauliTensor>;

    #[inline]
    fn mul(self, other: PauliTensor) -> Self::Output {
        self.try_mul(&other)
    }
}

impl_scalar_mul!(PauliTensor);

impl From<PauliGroupElement> for PauliTensor {
    fn from(element: PauliGroupElement) -> Self {
        PauliTensor {
            phase: ONE,
            factors: vec![element],
        }
    }
}

/// `<phase>(σ_X ⊗ -σ_Y ⊗ …)`
impl Display for PauliTensor {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.phase)?;
        self.fmt_factors(formatter)
    }
}

/// Dense label string with an optional `+`, `-`, `i`, `-i` prefix, e.g. `"-iXIZ"`.
impl FromStr for PauliTensor {
    type Err = PauliError;

    fn from_str(characters: &str) -> Result<Self> {
        let (labels, phase) = parse_phase(characters.trim());
        Ok(PauliTensor::from_label_string(labels)?.scaled(phase))
    }
}
