pub mod algebra;
pub mod core;
pub mod error;
pub mod group;
pub mod operand;
pub mod tensor;

#[cfg(feature = "serde")]
mod serde;

pub use self::core::{All, Sigma};
pub use algebra::PauliAlgebraElement;
pub use error::{PauliError, Result};
pub use group::PauliGroupElement;
pub use operand::Operand;
pub use tensor::PauliTensor;

// Scalar products in both operand orders, for owned values and references.
// The target type must provide `fn scaled(&self, impl Into<Complex64>) -> Self`.
macro_rules! impl_scalar_mul {
    ($target:ty, $scalar:ty) => {
        impl std::ops::Mul<$scalar> for $target {
            type Output = $target;

            #[inline]
            fn mul(self, scalar: $scalar) -> Self::Output {
                self.scaled(scalar)
            }
        }

        impl std::ops::Mul<$scalar> for &$target {
            type Output = $target;

            #[inline]
            fn mul(self, scalar: $scalar) -> Self::Output {
                self.scaled(scalar)
            }
        }

        impl std::ops::Mul<$target> for $scalar {
            type Output = $target;

            #[inline]
            fn mul(self, element: $target) -> Self::Output {
                element.scaled(self)
            }
        }

        impl std::ops::Mul<&$target> for $scalar {
            type Output = $target;

            #[inline]
            fn mul(self, element: &$target) -> Self::Output {
                element.scaled(self)
            }
        }
    };
    ($target:ty) => {
        $crate::impl_scalar_mul!($target, num_complex::Complex64);
        $crate::impl_scalar_mul!($target, f64);

        impl std::ops::Neg for $target {
            type Output = $target;

            #[inline]
            fn neg(self) -> Self::Output {
                self.scaled(-1.0)
            }
        }

        impl std::ops::Neg for &$target {
            type Output = $target;

            #[inline]
            fn neg(self) -> Self::Output {
                self.scaled(-1.0)
            }
        }
    };
}

pub(crate) use impl_scalar_mul;
