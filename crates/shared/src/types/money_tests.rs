use super::*;
use rstest::rstest;
use rust_decimal_macros::dec;
use serde_json::json;

#[rstest]
#[case("100", dec!(100))]
#[case("100.00", dec!(100.00))]
#[case("  42.5", dec!(42.5))]
#[case("12abc", dec!(12))]
#[case("7.25.3", dec!(7.25))]
#[case(".5", dec!(0.5))]
#[case("5.", dec!(5))]
#[case("1e2", dec!(100))]
#[case("+3", dec!(3))]
#[case("", Decimal::ZERO)]
#[case("abc", Decimal::ZERO)]
#[case("-15", Decimal::ZERO)]
#[case("Infinity", Decimal::ZERO)]
#[case("NaN", Decimal::ZERO)]
#[case("100000000000000000000000000000", MAX_AMOUNT)]
#[case("1e300", MAX_AMOUNT)]
#[case("5e28", MAX_AMOUNT)]
#[case("1e-300", Decimal::ZERO)]
#[case("-1e300", Decimal::ZERO)]
fn test_coerce_money(#[case] raw: &str, #[case] expected: Decimal) {
    assert_eq!(coerce_money(raw), expected);
}

#[test]
fn test_coerce_money_value() {
    assert_eq!(coerce_money_value(&json!(80)), dec!(80));
    assert_eq!(coerce_money_value(&json!(12.5)), dec!(12.5));
    assert_eq!(coerce_money_value(&json!("20.00")), dec!(20.00));
    assert_eq!(coerce_money_value(&json!(null)), Decimal::ZERO);
    assert_eq!(coerce_money_value(&json!(true)), Decimal::ZERO);
    assert_eq!(coerce_money_value(&json!([1, 2])), Decimal::ZERO);
}

#[test]
fn test_parse_decimal_prefix_keeps_sign() {
    assert_eq!(parse_decimal_prefix("-2.5"), Some(dec!(-2.5)));
    assert_eq!(parse_decimal_prefix("-"), None);
    assert_eq!(parse_decimal_prefix("."), None);
}

#[test]
fn test_parse_decimal_prefix_saturates() {
    assert_eq!(
        parse_decimal_prefix("100000000000000000000000000000"),
        Some(Decimal::MAX)
    );
    assert_eq!(parse_decimal_prefix("-1e300"), Some(Decimal::MIN));
    assert_eq!(parse_decimal_prefix("1e-300"), Some(Decimal::ZERO));
}

#[test]
fn test_max_amount() {
    assert_eq!(MAX_AMOUNT, Decimal::from(1_000_000_000_000_000_i64));
    assert_eq!(clamp_money(dec!(-4)), Decimal::ZERO);
    assert_eq!(clamp_money(dec!(12.5)), dec!(12.5));
    assert_eq!(clamp_money(Decimal::MAX), MAX_AMOUNT);
}

#[test]
fn test_round_money() {
    assert_eq!(round_money(dec!(1.005)), dec!(1.01));
    assert_eq!(round_money(dec!(1.004)), dec!(1.00));
    assert_eq!(round_money(dec!(33.3333333)), dec!(33.33));
    assert_eq!(round_money(dec!(-2.345)), dec!(-2.35));
}

#[test]
fn test_to_money_string() {
    assert_eq!(to_money_string(dec!(150)), "150.00");
    assert_eq!(to_money_string(dec!(0.5)), "0.50");
    assert_eq!(to_money_string(dec!(12.345)), "12.35");
    assert_eq!(to_money_string(dec!(-0.001)), "0.00");
    assert_eq!(to_money_string(dec!(-5)), "-5.00");
}

#[test]
fn test_format_money() {
    assert_eq!(format_money(dec!(130), "$"), "$130.00");
    assert_eq!(format_money(Decimal::ZERO, "$"), "$0.00");
    assert_eq!(format_money(dec!(-12.5), "$"), "$-12.50");
}

#[derive(serde::Serialize, serde::Deserialize)]
struct Row {
    #[serde(default, with = "two_decimal")]
    costo: Decimal,
}

#[test]
fn test_two_decimal_serde() {
    let row = Row { costo: dec!(100) };
    assert_eq!(
        serde_json::to_string(&row).expect("serialize"),
        r#"{"costo":"100.00"}"#
    );

    let parsed: Row = serde_json::from_str(r#"{"costo":"oops"}"#).expect("deserialize");
    assert_eq!(parsed.costo, Decimal::ZERO);

    let parsed: Row = serde_json::from_str(r#"{"costo":45.5}"#).expect("deserialize");
    assert_eq!(parsed.costo, dec!(45.5));

    let parsed: Row = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(parsed.costo, Decimal::ZERO);
}
