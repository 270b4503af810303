use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub};

use itertools::{iproduct, Itertools};
use num_complex::Complex64;
use num_traits::Zero;
use tracing::trace;

use crate::error::Result;
use crate::impl_scalar_mul;
use crate::tensor::PauliTensor;

/// A finite formal sum `Σ cₜ · t` of Pauli tensors with complex coefficients.
///
/// Addition and multiplication accumulate into raw keys; [`PauliAlgebraElement::simplify`] moves every
/// tensor phase into its coefficient so that keys become phase-free label sequences. Equality
/// compares simplified forms. Tensors of different dimension may coexist in one element; only
/// multiplying them fails.
///
/// # Examples
///
/// ```
/// use pauli_algebra::PauliAlgebraElement;
///
/// let iii = PauliAlgebraElement::from_label_string("III").unwrap();
/// let xxx = PauliAlgebraElement::from_label_string("XXX").unwrap();
/// let sum = &iii + &xxx;
/// assert_eq!((&sum * &sum).unwrap(), 2.0 * &sum);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PauliAlgebraElement {
    coeffs: HashMap<PauliTensor, Complex64>,
}

impl PauliAlgebraElement {
    #[must_use]
    pub fn new(coeffs: HashMap<PauliTensor, Complex64>) -> Self {
        PauliAlgebraElement { coeffs }
    }

    /// The empty sum.
    #[must_use]
    pub fn zero() -> Self {
        PauliAlgebraElement::default()
    }

    /// Coefficients of repeated tensors are added together.
    pub fn from_terms<Terms, Coefficient>(terms: Terms) -> Self
    where
        Terms: IntoIterator<Item = (PauliTensor, Coefficient)>,
        Coefficient: Into<Complex64>,
    {
        let mut result = PauliAlgebraElement::zero();
        for (tensor, coeff) in terms {
            result.accumulate(tensor, coeff.into());
        }
        result
    }

    /// Single term with coefficient 1.
    ///
    /// # Errors
    /// As [`PauliTensor::from_label_string`].
    pub fn from_label_string(labels: &str) -> Result<Self> {
        Ok(PauliTensor::from_label_string(labels)?.into())
    }

    #[must_use]
    pub fn coeffs(&self) -> &HashMap<PauliTensor, Complex64> {
        &self.coeffs
    }

    /// Coefficient stored under `tensor`, without simplifying.
    #[must_use]
    pub fn coefficient(&self, tensor: &PauliTensor) -> Option<Complex64> {
        self.coeffs.get(tensor).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Terms in canonical order: by the ordinal digits of their labels, then by displayed
    /// coefficient, then by overall phase and factor phases so that distinct keys never tie.
    pub fn terms(&self) -> impl Iterator<Item = (&PauliTensor, &Complex64)> + '_ {
        self.coeffs.iter().sorted_by(|(left, left_coeff), (right, right_coeff)| {
            left.lexicographic_key()
                .cmp(&right.lexicographic_key())
                .then_with(|| compare_complex(**left_coeff * left.phase(), **right_coeff * right.phase()))
                .then_with(|| compare_complex(left.overall_phase(), right.overall_phase()))
                .then_with(|| {
                    let factor_phases = |tensor: &PauliTensor| tensor.factors().iter().map(|factor| factor.phase()).collect_vec();
                    factor_phases(*left)
                        .into_iter()
                        .zip(factor_phases(*right))
                        .map(|(left_phase, right_phase)| compare_complex(left_phase, right_phase))
                        .find(|ordering| ordering.is_ne())
                        .unwrap_or(Ordering::Equal)
                })
        })
    }

    /// Moves every tensor phase into its coefficient, merging terms with equal labels.
    ///
    /// Coefficients that sum to zero are kept; see [`PauliAlgebraElement::drop_zeros`].
    #[must_use]
    pub fn simplify(&self) -> PauliAlgebraElement {
        let mut simplified = PauliAlgebraElement::zero();
        for (tensor, coeff) in &self.coeffs {
            let factored = tensor.factor_phase();
            let phase = factored.phase();
            simplified.accumulate(factored.with_unit_phase(), coeff * phase);
        }
        trace!(terms_in = self.len(), terms_out = simplified.len(), "simplified algebra element");
        simplified
    }

    /// Removes terms whose coefficient is exactly zero. Never applied implicitly.
    #[must_use]
    pub fn drop_zeros(&self) -> PauliAlgebraElement {
        PauliAlgebraElement {
            coeffs: self
                .coeffs
                .iter()
                .filter(|(_, coeff)| !coeff.is_zero())
                .map(|(tensor, coeff)| (tensor.clone(), *coeff))
                .collect(),
        }
    }

    /// Distributive product over every pair of terms, without simplifying.
    ///
    /// # Errors
    /// [`crate::PauliError::DimensionMismatch`] if any pair of tensors differ in dimension.
    pub fn try_mul(&self, other: &PauliAlgebraElement) -> Result<PauliAlgebraElement> {
        let mut product = PauliAlgebraElement::zero();
        for ((left, left_coeff), (right, right_coeff)) in iproduct!(&self.coeffs, &other.coeffs) {
            product.accumulate(left.try_mul(right)?, left_coeff * right_coeff);
        }
        trace!(
            pairs = self.len() * other.len(),
            terms = product.len(),
            "multiplied algebra elements"
        );
        Ok(product)
    }

    /// Product with the singleton element `{tensor: 1}` on the right.
    ///
    /// # Errors
    /// [`crate::PauliError::DimensionMismatch`] if any term differs in dimension from `tensor`.
    pub fn try_mul_tensor(&self, tensor: &PauliTensor) -> Result<PauliAlgebraElement> {
        self.try_mul(&tensor.clone().into())
    }

    #[must_use]
    pub fn scaled(&self, scalar: impl Into<Complex64>) -> PauliAlgebraElement {
        let scalar = scalar.into();
        PauliAlgebraElement {
            coeffs: self
                .coeffs
                .iter()
                .map(|(tensor, coeff)| (tensor.clone(), scalar * coeff))
                .collect(),
        }
    }

    fn accumulate(&mut self, tensor: PauliTensor, coeff: Complex64) {
        *self.coeffs.entry(tensor).or_insert_with(Complex64::zero) += coeff;
    }
}

// Total order on complex values: real part, then imaginary part.
fn compare_complex(left: Complex64, right: Complex64) -> Ordering {
    left.re.total_cmp(&right.re).then_with(|| left.im.total_cmp(&right.im))
}

impl From<PauliTensor> for PauliAlgebraElement {
    fn from(tensor: PauliTensor) -> Self {
        PauliAlgebraElement::from_terms([(tensor, Complex64::new(1.0, 0.0))])
    }
}

impl From<HashMap<PauliTensor, Complex64>> for PauliAlgebraElement {
    fn from(coeffs: HashMap<PauliTensor, Complex64>) -> Self {
        PauliAlgebraElement::new(coeffs)
    }
}

impl PartialEq for PauliAlgebraElement {
    fn eq(&self, other: &Self) -> bool {
        self.simplify().coeffs == other.simplify().coeffs
    }
}

impl AddAssign<&PauliAlgebraElement> for PauliAlgebraElement {
    fn add_assign(&mut self, other: &PauliAlgebraElement) {
        for (tensor, coeff) in &other.coeffs {
            self.accumulate(tensor.clone(), *coeff);
        }
    }
}

impl Add<&PauliAlgebraElement> for PauliAlgebraElement {
    type Output = PauliAlgebraElement;

    fn add(mut self, other: &PauliAlgebraElement) -> Self::Output {
        self += other;
        self
    }
}

impl Add for &PauliAlgebraElement {
    type Output = PauliAlgebraElement;

    fn add(self, other: &PauliAlgebraElement) -> Self::Output {
        self.clone() + other
    }
}

impl Add for PauliAlgebraElement {
    type Output = PauliAlgebraElement;

    fn add(self, other: PauliAlgebraElement) -> Self::Output {
        self + &other
    }
}

impl Sub<&PauliAlgebraElement> for PauliAlgebraElement {
    type Output = PauliAlgebraElement;

    fn sub(self, other: &PauliAlgebraElement) -> Self::Output {
        self + &(-other)
    }
}

impl Sub for &PauliAlgebraElement {
    type Output = PauliAlgebraElement;

    fn sub(self, other: &PauliAlgebraElement) -> Self::Output {
        self.clone() - other
    }
}

impl Sub for PauliAlgebraElement {
    type Output = PauliAlgebraElement;

    fn sub(self, other: PauliAlgebraElement) -> Self::Output {
        self - &other
    }
}

impl MulAssign<Complex64> for PauliAlgebraElement {
    fn mul_assign(&mut self, scalar: Complex64) {
        self.coeffs.values_mut().for_each(|coeff| *coeff *= scalar);
    }
}

impl_scalar_mul!(PauliAlgebraElement);

impl Mul<&PauliAlgebraElement> for &PauliAlgebraElement {
    type Output = Result<PauliAlgebraElement>;

    #[inline]
    fn mul(self, other: &PauliAlgebraElement) -> Self::Output {
        self.try_mul(other)
    }
}

impl Mul for PauliAlgebraElement {
    type Output = Result<PauliAlgebraElement>;

    #[inline]
    fn mul(self, other: PauliAlgebraElement) -> Self::Output {
        self.try_mul(&other)
    }
}

impl Mul<&PauliTensor> for &PauliAlgebraElement {
    type Output = Result<PauliAlgebraElement>;

    #[inline]
    fn mul(self, tensor: &PauliTensor) -> Self::Output {
        self.try_mul_tensor(tensor)
    }
}

impl Mul<PauliTensor> for PauliAlgebraElement {
    type Output = Result<PauliAlgebraElement>;

    #[inline]
    fn mul(self, tensor: PauliTensor) -> Self::Output {
        self.try_mul(&tensor.into())
    }
}

impl Mul<&PauliAlgebraElement> for &PauliTensor {
    type Output = Result<PauliAlgebraElement>;

    #[inline]
    fn mul(self, element: &PauliAlgebraElement) -> Self::Output {
        PauliAlgebraElement::from(self.clone()).try_mul(element)
    }
}

impl Mul<PauliAlgebraElement> for PauliTensor {
    type Output = Result<PauliAlgebraElement>;

    #[inline]
    fn mul(self, element: PauliAlgebraElement) -> Self::Output {
        PauliAlgebraElement::from(self).try_mul(&element)
    }
}

/// Terms in canonical order, each as `<coefficient · tensor phase>(<factors>)`, joined by ` + `.
impl Display for PauliAlgebraElement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(formatter, "0");
        }
        for (position, (tensor, coeff)) in self.terms().enumerate() {
            if position > 0 {
                write!(formatter, " + ")?;
            }
            write!(formatter, "{}", coeff * tensor.phase())?;
            tensor.fmt_factors(formatter)?;
        }
        Ok(())
    }
}
