use itertools::{iproduct, Itertools};
use num_complex::Complex64;
use pauli_algebra::group::FOURTH_ROOTS_OF_UNITY;
use pauli_algebra::{All, PauliError, PauliGroupElement, Sigma};
use proptest::prelude::*;

fn elements() -> [PauliGroupElement; 4] {
    [
        PauliGroupElement::id(),
        PauliGroupElement::x(),
        PauliGroupElement::y(),
        PauliGroupElement::z(),
    ]
}

fn arbitrary_phase() -> impl Strategy<Value = Complex64> {
    prop::sample::select(FOURTH_ROOTS_OF_UNITY.to_vec())
}

fn arbitrary_sigma() -> impl Strategy<Value = Sigma> {
    prop::sample::select(Sigma::all().to_vec())
}

fn arbitrary_element() -> impl Strategy<Value = PauliGroupElement> {
    (arbitrary_phase(), arbitrary_sigma()).prop_map(|(phase, sigma)| PauliGroupElement::new(phase, sigma).unwrap())
}

#[test]
fn square_to_identity() {
    let identity = PauliGroupElement::id();
    for element in elements() {
        assert_eq!(element * element, identity);
    }
}

#[test]
fn multiplication_by_identity() {
    let identity = PauliGroupElement::id();
    for element in elements() {
        assert_eq!(element * identity, element);
        assert_eq!(identity * element, element);
    }
}

#[test]
fn cyclic_products() {
    let (x, y, z) = (PauliGroupElement::x(), PauliGroupElement::y(), PauliGroupElement::z());
    let i = Complex64::i();
    assert_eq!(x * y, i * z);
    assert_eq!(y * z, i * x);
    assert_eq!(z * x, i * y);
    assert_eq!(y * x, -i * z);
    assert_eq!(z * y, -i * x);
    assert_eq!(x * z, -i * y);
}

#[test]
fn distinct_sigmas_anticommute() {
    let sigmas = [PauliGroupElement::x(), PauliGroupElement::y(), PauliGroupElement::z()];
    for (left, right) in sigmas.iter().tuple_combinations() {
        assert_eq!(left * right, -(right * left));
        assert!(!left.commutes_with(right));
    }
}

#[test]
fn phase_multiplication() {
    let i = Complex64::i();
    for (element, sigma) in elements().into_iter().zip(Sigma::all()) {
        let expected = PauliGroupElement::new(i, sigma).unwrap();
        assert_eq!(i * element, expected);
        assert_eq!(element * i, expected);
    }
}

#[test]
fn invalid_phase_is_rejected() {
    let two = Complex64::new(2.0, 0.0);
    assert_eq!(
        PauliGroupElement::new(two, Sigma::X),
        Err(PauliError::InvalidPhase { phase: two })
    );
    let diagonal = Complex64::new(1.0, 1.0) / 2f64.sqrt();
    assert!(matches!(
        PauliGroupElement::new(diagonal, Sigma::Z),
        Err(PauliError::InvalidPhase { .. })
    ));
}

#[test]
fn scalar_multiplication_may_leave_the_group() {
    let scaled = PauliGroupElement::x() * 2.0;
    assert_eq!(scaled.phase(), Complex64::new(2.0, 0.0));
    assert_eq!(scaled.sigma(), Sigma::X);
    assert!(PauliGroupElement::new(scaled.phase(), scaled.sigma()).is_err());
}

#[test]
fn equality_needs_matching_phase_and_label() {
    let i = Complex64::i();
    assert_ne!(PauliGroupElement::x(), PauliGroupElement::y());
    assert_ne!(PauliGroupElement::x(), i * PauliGroupElement::x());
    assert_eq!(-(-PauliGroupElement::z()), PauliGroupElement::z());
}

#[test]
fn parse_and_display() {
    let element: PauliGroupElement = "-iY".parse().unwrap();
    assert_eq!(element, -Complex64::i() * PauliGroupElement::y());
    assert_eq!(format!("{element:#}"), "-iY");
    assert_eq!(format!("{element}"), "-iσ_Y");
    assert_eq!(format!("{}", PauliGroupElement::x()), "σ_X");
    assert_eq!(format!("{}", PauliGroupElement::x() * 2.0), "(2+0i)σ_X");
    assert_eq!("XY".parse::<PauliGroupElement>(), Err(PauliError::Parse("XY".to_owned())));
    assert_eq!("Q".parse::<PauliGroupElement>(), Err(PauliError::InvalidLabel('Q')));
}

#[test]
fn commutation_table() {
    for (left, right) in iproduct!(elements(), elements()) {
        let expected = left * right == right * left;
        assert_eq!(left.commutes_with(&right), expected);
    }
}

proptest! {
    #[test]
    fn product_is_associative(a in arbitrary_element(), b in arbitrary_element(), c in arbitrary_element()) {
        prop_assert_eq!((a * b) * c, a * (b * c));
    }

    #[test]
    fn product_stays_in_group(a in arbitrary_element(), b in arbitrary_element()) {
        let product = a * b;
        prop_assert!(PauliGroupElement::new(product.phase(), product.sigma()).is_ok());
    }

    #[test]
    fn phases_commute_with_elements(phase in arbitrary_phase(), element in arbitrary_element()) {
        prop_assert_eq!(phase * element, element * phase);
    }

    #[test]
    fn every_element_has_an_inverse(element in arbitrary_element()) {
        let inverse = element.phase().inv() * element.dephased();
        prop_assert_eq!(element * inverse, PauliGroupElement::id());
    }

    #[test]
    fn display_round_trip(element in arbitrary_element()) {
        let text = format!("{element:#}");
        prop_assert_eq!(text.parse::<PauliGroupElement>(), Ok(element));
    }
}
