//! Cross-crate tests exercising the façade the way application code
//! would: parse values from text, box the fallible results, and run the
//! arithmetic operators.

use approx::assert_relative_eq;
use numkit::complex::Complex;
use numkit::core::OptionalBox;
use numkit::rational::Rational;

/// Parse a rational and box the outcome, mirroring how a caller turns
/// the recoverable parse failure into an explicit "no value".
fn read_rational(text: &str) -> OptionalBox<Rational> {
    match text.parse::<Rational>() {
        Ok(r) => OptionalBox::new(r),
        Err(_) => OptionalBox::NONE,
    }
}

#[test]
fn boxed_parse_results_compare_by_presence() {
    let good = read_rational("3/4");
    let bad = read_rational("a/b");
    let also_good = read_rational("5");

    assert_ne!(good, bad);
    assert_eq!(good, also_good); // payloads differ, presence matches
    assert_eq!(bad, OptionalBox::NONE);

    assert_eq!(good.unwrap(), Rational::new(3, 4));
}

#[test]
fn rational_arithmetic_chain() {
    let third: Rational = "1/3".parse().unwrap();
    let sixth: Rational = "1/6".parse().unwrap();

    let sum = third + sixth;
    assert_eq!(sum, Rational::new(1, 2));
    assert_eq!(sum.to_string(), "1/2");
    assert_relative_eq!(sum.to_real(), 0.5);

    assert_eq!((sum * 4).to_string(), "2");
    assert_eq!((sum + 2).to_string(), "2 1/2");
}

#[test]
fn complex_parse_and_divide() {
    let a: Complex = "3i".parse().unwrap();
    let b: Complex = "2".parse().unwrap();

    assert_eq!(a, Complex::new(0.0, 3.0));
    assert_eq!(b, Complex::new(2.0, 0.0));

    let q = a / b;
    assert_relative_eq!(q.real, 0.0);
    assert_relative_eq!(q.imag, 1.5);
    assert_eq!(q.to_string(), "0+1.5i");
}

#[test]
fn complex_magnitude_drives_division() {
    let c = Complex::new(3.0, 4.0);
    assert_eq!(c.magnitude(), 25.0);

    let unit = c / c;
    assert_relative_eq!(unit.real, 1.0);
    assert_relative_eq!(unit.imag, 0.0);
}
