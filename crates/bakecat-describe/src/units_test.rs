use super::*;

// -----------------------------------------------------------------------
// parse_amount
// -----------------------------------------------------------------------

#[test]
fn parse_grams_no_space() {
    let amount = parse_amount("500g").unwrap();
    assert_eq!(amount.value, 500.0);
    assert_eq!(amount.unit, AmountUnit::Known(Unit::Gram));
}

#[test]
fn parse_kilograms_with_space() {
    let amount = parse_amount("1 kg").unwrap();
    assert_eq!(amount.value, 1.0);
    assert_eq!(amount.unit, AmountUnit::Known(Unit::Kilogram));
}

#[test]
fn parse_plural_pounds() {
    let amount = parse_amount("2 lbs").unwrap();
    assert_eq!(amount.value, 2.0);
    assert_eq!(amount.unit, AmountUnit::Known(Unit::Pound));
}

#[test]
fn parse_unit_case_insensitive() {
    assert_eq!(
        parse_amount("750 Grams").unwrap().unit,
        AmountUnit::Known(Unit::Gram)
    );
    assert_eq!(
        parse_amount("2KG").unwrap().unit,
        AmountUnit::Known(Unit::Kilogram)
    );
}

#[test]
fn parse_every_alias_resolves() {
    for (alias, unit) in UNIT_ALIASES {
        let amount = parse_amount(&format!("3 {alias}")).unwrap();
        assert_eq!(amount.unit, AmountUnit::Known(*unit), "alias {alias}");
    }
}

#[test]
fn parse_decimal_value() {
    assert_eq!(parse_amount("1.5kg").unwrap().value, 1.5);
    assert_eq!(parse_amount(".5kg").unwrap().value, 0.5);
}

#[test]
fn parse_surrounding_whitespace_ignored() {
    let amount = parse_amount("  250 ml  ").unwrap();
    assert_eq!(amount.value, 250.0);
    assert_eq!(amount.unit, AmountUnit::Known(Unit::Milliliter));
}

#[test]
fn parse_unknown_unit_kept_verbatim() {
    let amount = parse_amount("3 tiers").unwrap();
    assert_eq!(amount.value, 3.0);
    assert_eq!(amount.unit, AmountUnit::Literal(" tiers".to_owned()));
}

#[test]
fn parse_bare_number_has_empty_literal() {
    let amount = parse_amount("12").unwrap();
    assert_eq!(amount.unit, AmountUnit::Literal(String::new()));
}

#[test]
fn parse_empty_is_not_numeric() {
    assert_eq!(
        parse_amount(""),
        Err(DescribeError::NotNumeric(String::new()))
    );
}

#[test]
fn parse_text_is_not_numeric() {
    assert!(matches!(
        parse_amount("about a kilo"),
        Err(DescribeError::NotNumeric(_))
    ));
    assert!(matches!(parse_amount("."), Err(DescribeError::NotNumeric(_))));
}

// -----------------------------------------------------------------------
// format_amount
// -----------------------------------------------------------------------

#[test]
fn format_grams_below_threshold() {
    assert_eq!(format_amount(500.0, &AmountUnit::Known(Unit::Gram)), "500g");
}

#[test]
fn format_grams_promote_to_kilograms() {
    assert_eq!(format_amount(1000.0, &AmountUnit::Known(Unit::Gram)), "1kg");
    assert_eq!(format_amount(1500.0, &AmountUnit::Known(Unit::Gram)), "1.5kg");
}

#[test]
fn format_milliliters_promote_to_liters() {
    assert_eq!(
        format_amount(2000.0, &AmountUnit::Known(Unit::Milliliter)),
        "2l"
    );
    assert_eq!(
        format_amount(999.0, &AmountUnit::Known(Unit::Milliliter)),
        "999ml"
    );
}

#[test]
fn format_ounces_promote_to_pounds() {
    assert_eq!(format_amount(16.0, &AmountUnit::Known(Unit::Ounce)), "1lb");
    assert_eq!(format_amount(24.0, &AmountUnit::Known(Unit::Ounce)), "1.5lb");
    assert_eq!(format_amount(8.0, &AmountUnit::Known(Unit::Ounce)), "8oz");
}

#[test]
fn format_kilograms_stay_kilograms() {
    assert_eq!(format_amount(2.0, &AmountUnit::Known(Unit::Kilogram)), "2kg");
}

#[test]
fn format_rounds_float_noise() {
    assert_eq!(
        format_amount(0.1 * 3.0, &AmountUnit::Known(Unit::Kilogram)),
        "0.3kg"
    );
}

#[test]
fn format_promotes_values_that_round_up_to_threshold() {
    assert_eq!(format_amount(999.996, &AmountUnit::Known(Unit::Gram)), "1kg");
    assert_eq!(format_amount(15.999, &AmountUnit::Known(Unit::Ounce)), "1lb");
    assert_eq!(
        format_amount(999.994, &AmountUnit::Known(Unit::Gram)),
        "999.99g"
    );
    assert_eq!(normalize("999.996g"), "1kg");
}

#[test]
fn format_literal_unit_verbatim() {
    assert_eq!(
        format_amount(6.0, &AmountUnit::Literal(" tiers".to_owned())),
        "6 tiers"
    );
}

// -----------------------------------------------------------------------
// multiply / normalize
// -----------------------------------------------------------------------

#[test]
fn multiply_overflows_into_kilograms() {
    assert_eq!(multiply("500g", 2), "1kg");
}

#[test]
fn multiply_stays_in_grams() {
    assert_eq!(multiply("250g", 3), "750g");
}

#[test]
fn multiply_non_numeric_returns_input() {
    assert_eq!(multiply("Large", 3), "Large");
    assert_eq!(multiply("", 2), "");
}

#[test]
fn normalize_canonicalizes_spelling() {
    assert_eq!(normalize("1000 grams"), "1kg");
    assert_eq!(normalize("2 Pounds"), "2lb");
    assert_eq!(normalize("1 kg"), "1kg");
}

// -----------------------------------------------------------------------
// Amount::grams
// -----------------------------------------------------------------------

#[test]
fn grams_conversion_factors() {
    assert_eq!(parse_amount("2kg").unwrap().grams(), 2000.0);
    assert_eq!(parse_amount("1lb").unwrap().grams(), 453.592);
    assert_eq!(parse_amount("1oz").unwrap().grams(), 28.3495);
    assert_eq!(parse_amount("300ml").unwrap().grams(), 300.0);
    assert_eq!(parse_amount("1l").unwrap().grams(), 1000.0);
    assert_eq!(parse_amount("40 pieces").unwrap().grams(), 40.0);
}
