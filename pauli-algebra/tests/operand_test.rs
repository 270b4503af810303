use num_complex::Complex64;
use pauli_algebra::{Operand, PauliAlgebraElement, PauliError, PauliGroupElement, PauliTensor};

fn scalar() -> Operand {
    Complex64::i().into()
}

fn group() -> Operand {
    PauliGroupElement::x().into()
}

fn tensor(labels: &str) -> Operand {
    PauliTensor::from_label_string(labels).unwrap().into()
}

fn algebra(labels: &str) -> Operand {
    PauliAlgebraElement::from_label_string(labels).unwrap().into()
}

fn unsupported(operation: &'static str, left: &'static str, right: &'static str) -> PauliError {
    PauliError::UnsupportedOperand { operation, left, right }
}

#[test]
fn supported_products_match_typed_operators() {
    let i = Complex64::i();
    assert_eq!(
        &group() * &group(),
        Ok(Operand::Group(PauliGroupElement::x() * PauliGroupElement::x()))
    );
    assert_eq!(&scalar() * &group(), Ok(Operand::Group(i * PauliGroupElement::x())));
    assert_eq!(&group() * &scalar(), Ok(Operand::Group(PauliGroupElement::x() * i)));

    let xy = PauliTensor::from_label_string("XY").unwrap();
    let zz = PauliTensor::from_label_string("ZZ").unwrap();
    assert_eq!(&tensor("XY") * &tensor("ZZ"), (&xy * &zz).map(Operand::Tensor));
    assert_eq!(&scalar() * &tensor("XY"), Ok(Operand::Tensor(i * &xy)));
    assert_eq!(&tensor("XY") * &scalar(), Ok(Operand::Tensor(&xy * i)));

    let sum = PauliAlgebraElement::from_label_string("XY").unwrap() + PauliAlgebraElement::from_label_string("ZZ").unwrap();
    let operand_sum: Operand = sum.clone().into();
    assert_eq!(&operand_sum * &operand_sum, (&sum * &sum).map(Operand::Algebra));
    assert_eq!(&scalar() * &operand_sum, Ok(Operand::Algebra(i * &sum)));
    assert_eq!(&operand_sum * &scalar(), Ok(Operand::Algebra(&sum * i)));
    assert_eq!(&operand_sum * &tensor("XY"), (&sum * &xy).map(Operand::Algebra));
    assert_eq!(&tensor("XY") * &operand_sum, (&xy * &sum).map(Operand::Algebra));
}

#[test]
fn unsupported_products() {
    assert_eq!(&scalar() * &scalar(), Err(unsupported("multiplication", "scalar", "scalar")));
    assert_eq!(&group() * &tensor("X"), Err(unsupported("multiplication", "group element", "tensor")));
    assert_eq!(&tensor("X") * &group(), Err(unsupported("multiplication", "tensor", "group element")));
    assert_eq!(
        &group() * &algebra("X"),
        Err(unsupported("multiplication", "group element", "algebra element"))
    );
    assert_eq!(
        &algebra("X") * &group(),
        Err(unsupported("multiplication", "algebra element", "group element"))
    );
}

#[test]
fn only_algebra_elements_add() {
    let sum = &algebra("XX") + &algebra("ZZ");
    let expected = PauliAlgebraElement::from_label_string("XX").unwrap() + PauliAlgebraElement::from_label_string("ZZ").unwrap();
    assert_eq!(sum, Ok(Operand::Algebra(expected)));
    assert_eq!(&tensor("X") + &tensor("X"), Err(unsupported("addition", "tensor", "tensor")));
    assert_eq!(&scalar() + &algebra("X"), Err(unsupported("addition", "scalar", "algebra element")));
    assert_eq!(&group() + &group(), Err(unsupported("addition", "group element", "group element")));
}

#[test]
fn dimension_mismatch_passes_through() {
    assert_eq!(
        &tensor("XY") * &tensor("XYZ"),
        Err(PauliError::DimensionMismatch { left: 2, right: 3 })
    );
    assert_eq!(
        &algebra("XYZ") * &tensor("XY"),
        Err(PauliError::DimensionMismatch { left: 3, right: 2 })
    );
}

#[test]
fn negation() {
    assert_eq!(-&scalar(), Operand::Scalar(-Complex64::i()));
    assert_eq!(-&group(), Operand::Group(-PauliGroupElement::x()));
    assert_eq!(-&tensor("XY"), Operand::Tensor(-PauliTensor::from_label_string("XY").unwrap()));
    assert_eq!(
        -&algebra("XY"),
        Operand::Algebra(-PauliAlgebraElement::from_label_string("XY").unwrap())
    );
}

#[test]
fn error_messages() {
    let error = unsupported("multiplication", "scalar", "scalar");
    assert_eq!(error.to_string(), "unsupported operands for multiplication: scalar and scalar");
    assert_eq!(
        PauliError::DimensionMismatch { left: 2, right: 3 }.to_string(),
        "mismatched tensor dimensions: 2, 3"
    );
}
