//! Tests for the self-validating value types

use rstest::rstest;

use modplan::domain::{Code, Credits, DomainError, Name, Semester, Tag, Year};

// ============================================================
// Code grammar
// ============================================================

#[rstest]
#[case("CS1010")]
#[case("MA1301")]
#[case("GER1000T")]
#[case("cs2040")]
#[case("LSM1301")]
fn given_valid_code_when_constructing_then_succeeds(#[case] raw: &str) {
    assert!(Code::is_valid(raw), "{raw} should be valid");
    assert!(Code::new(raw).is_ok());
}

#[rstest]
#[case("")]
#[case("C1010")] // too few letters
#[case("CSCS1010")] // too many letters
#[case("CS101")] // too few digits
#[case("CS10100")] // too many digits
#[case("CS1010TT")] // two trailing letters
#[case("CS 1010")]
#[case("1010CS")]
fn given_invalid_code_when_constructing_then_fails(#[case] raw: &str) {
    assert!(!Code::is_valid(raw), "{raw} should be invalid");
    let err = Code::new(raw).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidValue {
            message: Code::CONSTRAINT
        }
    );
}

#[test]
fn given_lowercase_code_when_constructing_then_canonicalizes_to_uppercase() {
    let code = Code::new("cs1010").unwrap();
    assert_eq!(code.as_str(), "CS1010");
    assert_eq!(code, Code::new("CS1010").unwrap());
}

// ============================================================
// Credits grammar
// ============================================================

#[rstest]
#[case("0")]
#[case("4")]
#[case("12")]
#[case("999")]
fn given_valid_credits_when_constructing_then_succeeds(#[case] raw: &str) {
    assert!(Credits::is_valid(raw));
    assert_eq!(Credits::new(raw).unwrap().as_str(), raw);
}

#[rstest]
#[case("")]
#[case("04")] // leading zero
#[case("1000")] // four digits
#[case("-1")]
#[case("abc")]
#[case("4.5")]
fn given_invalid_credits_when_constructing_then_fails(#[case] raw: &str) {
    assert!(!Credits::is_valid(raw));
    let err = Credits::new(raw).unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidValue {
            message: Credits::CONSTRAINT
        }
    );
}

#[test]
fn credits_order_lexicographically_by_backing_string() {
    // Deliberate simplification: "10" sorts before "9".
    assert!(Credits::new("10").unwrap() < Credits::new("9").unwrap());
}

// ============================================================
// Name, Year, Semester, Tag
// ============================================================

#[rstest]
#[case("Programming Methodology")]
#[case("x")]
#[case("  padded  ")]
fn given_non_blank_name_when_constructing_then_succeeds(#[case] raw: &str) {
    assert!(Name::is_valid(raw));
    assert!(Name::new(raw).is_ok());
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t")]
fn given_blank_name_when_constructing_then_fails(#[case] raw: &str) {
    assert!(!Name::is_valid(raw));
    assert!(Name::new(raw).is_err());
}

#[rstest]
#[case("1")]
#[case("4")]
fn given_digit_in_range_when_constructing_year_and_semester_then_succeeds(#[case] raw: &str) {
    assert!(Year::new(raw).is_ok());
    assert!(Semester::new(raw).is_ok());
}

#[rstest]
#[case("0")]
#[case("5")]
#[case("12")]
#[case("")]
#[case("one")]
fn given_digit_out_of_range_when_constructing_year_and_semester_then_fails(#[case] raw: &str) {
    assert!(Year::new(raw).is_err());
    assert!(Semester::new(raw).is_err());
}

#[rstest]
#[case("core")]
#[case("Foundation1")]
fn given_alphanumeric_tag_when_constructing_then_succeeds(#[case] raw: &str) {
    assert!(Tag::new(raw).is_ok());
}

#[rstest]
#[case("")]
#[case("two words")]
#[case("semi-colon")]
fn given_non_alphanumeric_tag_when_constructing_then_fails(#[case] raw: &str) {
    assert!(Tag::new(raw).is_err());
}
