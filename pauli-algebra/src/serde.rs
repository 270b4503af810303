use num_complex::Complex64;
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

use crate::algebra::PauliAlgebraElement;
use crate::core::Sigma;
use crate::group::{is_fourth_root_of_unity, PauliGroupElement};
use crate::tensor::PauliTensor;

impl Serialize for Sigma {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.label())
    }
}

impl<'de> Deserialize<'de> for Sigma {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = char::deserialize(deserializer)?;
        Sigma::try_from(label).map_err(de::Error::custom)
    }
}

impl Serialize for PauliGroupElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if !is_fourth_root_of_unity(self.phase()) {
            return Err(ser::Error::custom(format!(
                "group element phase {} is not a fourth root of unity",
                self.phase()
            )));
        }
        serializer.serialize_str(&format!("{self:#}"))
    }
}

impl<'de> Deserialize<'de> for PauliGroupElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        string.parse().map_err(de::Error::custom)
    }
}

#[derive(Serialize, Deserialize)]
struct TensorRepr {
    phase: Complex64,
    factors: Vec<PauliGroupElement>,
}

impl Serialize for PauliTensor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Normalized so every factor carries phase 1 and serializes as a group element.
        let normalized = self.factor_phase();
        TensorRepr {
            phase: normalized.phase(),
            factors: normalized.factors().to_vec(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PauliTensor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = TensorRepr::deserialize(deserializer)?;
        PauliTensor::new(repr.phase, repr.factors).map_err(de::Error::custom)
    }
}

// A list of (tensor, coefficient) pairs in canonical order.
impl Serialize for PauliAlgebraElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.terms())
    }
}

impl<'de> Deserialize<'de> for PauliAlgebraElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let terms = Vec::<(PauliTensor, Complex64)>::deserialize(deserializer)?;
        Ok(PauliAlgebraElement::from_terms(terms))
    }
}
