use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("3", 3)]
#[case(" 4 workers", 4)]
#[case("2.9", 2)]
#[case("0", 1)]
#[case("-3", 1)]
#[case("abc", 1)]
#[case("", 1)]
#[case("99999999999", 1)]
fn test_parse_lenient(#[case] raw: &str, #[case] expected: u32) {
    assert_eq!(EmployeeCount::parse_lenient(raw).get(), expected);
}

#[rstest]
#[case("3", Some(3))]
#[case("2.9", Some(2))]
#[case("1e3", Some(1))]
#[case("0", None)]
#[case("-4", None)]
#[case("many", None)]
#[case("99999999999", None)]
fn test_parse_positive(#[case] raw: &str, #[case] expected: Option<u32>) {
    assert_eq!(EmployeeCount::parse_positive(raw).map(EmployeeCount::get), expected);
}

#[rstest]
#[case("4", Some(4))]
#[case("1e3", Some(1))]
#[case("0", Some(1))]
#[case("-2", Some(1))]
#[case("x", None)]
#[case("", None)]
fn test_parse_clamped(#[case] raw: &str, #[case] expected: Option<u32>) {
    assert_eq!(EmployeeCount::parse_clamped(raw).map(EmployeeCount::get), expected);
}

#[test]
fn test_new_rejects_zero() {
    assert!(EmployeeCount::new(0).is_none());
    assert_eq!(EmployeeCount::new(5).map(EmployeeCount::get), Some(5));
}

#[test]
fn test_clamped() {
    assert_eq!(EmployeeCount::clamped(0), EmployeeCount::ONE);
    assert_eq!(EmployeeCount::clamped(-7), EmployeeCount::ONE);
    assert_eq!(EmployeeCount::clamped(6).get(), 6);
}

#[test]
fn test_default_is_one() {
    assert_eq!(EmployeeCount::default().get(), 1);
    assert_eq!(EmployeeCount::default().to_string(), "1");
}

#[test]
fn test_serde() {
    let count = EmployeeCount::clamped(3);
    assert_eq!(serde_json::to_value(count).expect("serialize"), json!(3));

    let parsed: EmployeeCount = serde_json::from_value(json!("4")).expect("deserialize");
    assert_eq!(parsed.get(), 4);

    let parsed: EmployeeCount = serde_json::from_value(json!(null)).expect("deserialize");
    assert_eq!(parsed, EmployeeCount::ONE);

    let parsed: EmployeeCount = serde_json::from_value(json!(0)).expect("deserialize");
    assert_eq!(parsed, EmployeeCount::ONE);
}
