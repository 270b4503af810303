use std::fmt::{self, Display};
use std::ops::Mul;
use std::str::FromStr;
use std::sync::LazyLock;

use itertools::{iproduct, Itertools};
use num_complex::Complex64;

use crate::core::{All, Sigma};
use crate::error::{PauliError, Result};
use crate::impl_scalar_mul;

pub(crate) const ONE: Complex64 = Complex64::new(1.0, 0.0);
pub(crate) const MINUS_ONE: Complex64 = Complex64::new(-1.0, 0.0);
pub(crate) const PLUS_I: Complex64 = Complex64::new(0.0, 1.0);
pub(crate) const MINUS_I: Complex64 = Complex64::new(0.0, -1.0);

/// The phases a group element may carry, in the order `i^0, i^1, i^2, i^3`.
pub const FOURTH_ROOTS_OF_UNITY: [Complex64; 4] = [ONE, PLUS_I, MINUS_ONE, MINUS_I];

/// `TIMES_TABLE[j][k]` is the phase and label of `σ_j σ_k`.
static TIMES_TABLE: LazyLock<[[(Complex64, Sigma); 4]; 4]> = LazyLock::new(create_times_table);

#[must_use]
pub fn is_fourth_root_of_unity(phase: Complex64) -> bool {
    FOURTH_ROOTS_OF_UNITY.contains(&phase)
}

/// Parity of a permutation, `(-1)^inversions`.
fn sign(permutation: &[usize]) -> f64 {
    let inversions = permutation
        .iter()
        .tuple_combinations()
        .filter(|(left, right)| left > right)
        .count();
    if inversions % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

// σ_j σ_k = i ε_jkl σ_l for distinct non-identity labels, identity otherwise.
fn create_times_table() -> [[(Complex64, Sigma); 4]; 4] {
    let labels = Sigma::all();
    let mut table = [[(ONE, Sigma::I); 4]; 4];
    for (left, right) in iproduct!(0..4usize, 0..4usize) {
        let (phase, index) = if left == 0 || right == 0 {
            (ONE, left + right)
        } else if left == right {
            (ONE, 0)
        } else {
            let third = 6 - left - right;
            (Complex64::new(0.0, sign(&[left, right, third])), third)
        };
        table[left][right] = (phase, labels[index]);
    }
    table
}

/// An element of the single-qubit Pauli group: a sigma matrix times a fourth root of unity.
///
/// [`PauliGroupElement::new`] enforces the phase invariant. Multiplying by an arbitrary scalar does
/// not re-validate, so scaled elements can carry any complex phase; such values only ever feed
/// tensor-level phase accounting.
///
/// # Examples
///
/// ```
/// use num_complex::Complex64;
/// use pauli_algebra::PauliGroupElement;
///
/// let (x, y, z) = (PauliGroupElement::x(), PauliGroupElement::y(), PauliGroupElement::z());
/// assert_eq!(x * y, Complex64::i() * z);
/// assert_eq!(x * y, -(y * x));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PauliGroupElement {
    phase: Complex64,
    sigma: Sigma,
}

impl PauliGroupElement {
    /// # Errors
    /// [`PauliError::InvalidPhase`] unless `phase` is one of `1, -1, i, -i`.
    pub fn new(phase: impl Into<Complex64>, sigma: Sigma) -> Result<Self> {
        let phase = phase.into();
        if is_fourth_root_of_unity(phase) {
            Ok(PauliGroupElement { phase, sigma })
        } else {
            Err(PauliError::InvalidPhase { phase })
        }
    }

    #[must_use]
    pub fn id() -> Self {
        Sigma::I.into()
    }

    #[must_use]
    pub fn x() -> Self {
        Sigma::X.into()
    }

    #[must_use]
    pub fn y() -> Self {
        Sigma::Y.into()
    }

    #[must_use]
    pub fn z() -> Self {
        Sigma::Z.into()
    }

    #[must_use]
    pub fn phase(&self) -> Complex64 {
        self.phase
    }

    #[must_use]
    pub fn sigma(&self) -> Sigma {
        self.sigma
    }

    /// True for the identity label, whatever the phase.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.sigma == Sigma::I
    }

    #[must_use]
    pub fn commutes_with(&self, other: &PauliGroupElement) -> bool {
        self.is_identity() || other.is_identity() || self.sigma == other.sigma
    }

    /// Same label, phase multiplied by `scalar`. The result is not checked against the
    /// fourth-root invariant.
    #[must_use]
    pub fn scaled(&self, scalar: impl Into<Complex64>) -> Self {
        PauliGroupElement {
            phase: self.phase * scalar.into(),
            sigma: self.sigma,
        }
    }

    /// Same label with phase exactly 1.
    #[must_use]
    pub fn dephased(&self) -> Self {
        self.sigma.into()
    }
}

impl From<Sigma> for PauliGroupElement {
    fn from(sigma: Sigma) -> Self {
        PauliGroupElement { phase: ONE, sigma }
    }
}

impl Default for PauliGroupElement {
    fn default() -> Self {
        PauliGroupElement::id()
    }
}

impl Mul for PauliGroupElement {
    type Output = PauliGroupElement;

    #[inline]
    fn mul(self, other: PauliGroupElement) -> Self::Output {
        let (table_phase, sigma) = TIMES_TABLE[self.sigma.index()][other.sigma.index()];
        PauliGroupElement {
            phase: self.phase * other.phase * table_phase,
            sigma,
        }
    }
}

impl Mul<&PauliGroupElement> for &PauliGroupElement {
    type Output = PauliGroupElement;

    #[inline]
    fn mul(self, other: &PauliGroupElement) -> Self::Output {
        *self * *other
    }
}

impl_scalar_mul!(PauliGroupElement);

pub(crate) fn phase_prefix(phase: Complex64) -> Option<&'static str> {
    match FOURTH_ROOTS_OF_UNITY.iter().position(|root| *root == phase)? {
        0 => Some(""),
        1 => Some("i"),
        2 => Some("-"),
        _ => Some("-i"),
    }
}

/// Splits an optional `+`, `-`, `i`, `-i` (or `𝑖`) prefix from a label string.
pub(crate) fn parse_phase(no_whitespace: &str) -> (&str, Complex64) {
    const PHASE_PREFIX_OPTIONS: [&str; 8] = ["+i", "i", "-i", "+𝑖", "𝑖", "-𝑖", "+", "-"];
    for phase_prefix in PHASE_PREFIX_OPTIONS {
        if let Some(remainder) = no_whitespace.strip_prefix(phase_prefix) {
            let phase = match phase_prefix {
                "-" => MINUS_ONE,
                "+i" | "+𝑖" | "i" | "𝑖" => PLUS_I,
                "-i" | "-𝑖" => MINUS_I,
                _ => ONE,
            };
            return (remainder, phase);
        }
    }
    (no_whitespace, ONE)
}

/// `-iσ_X` by default; `{:#}` gives the parseable `-iX`. Phases outside the fourth roots print in
/// parentheses.
impl Display for PauliGroupElement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match phase_prefix(self.phase) {
            Some(prefix) => write!(formatter, "{prefix}")?,
            None => write!(formatter, "({})", self.phase)?,
        }
        if formatter.alternate() {
            write!(formatter, "{:#}", self.sigma)
        } else {
            write!(formatter, "{}", self.sigma)
        }
    }
}

impl FromStr for PauliGroupElement {
    type Err = PauliError;

    fn from_str(characters: &str) -> Result<Self> {
        let (remainder, phase) = parse_phase(characters.trim());
        let mut labels = remainder.chars();
        match (labels.next(), labels.next()) {
            (Some(label), None) => Ok(PauliGroupElement::from(Sigma::try_from(label)?).scaled(phase)),
            _ => Err(PauliError::Parse(characters.to_owned())),
        }
    }
}
