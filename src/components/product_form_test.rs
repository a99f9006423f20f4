use super::*;

// ====== validate ======

#[test]
fn validate_accepts_a_complete_product() {
    let result = validate(
        "Notebook Lenovo",
        "Una notebook liviana para trabajo",
        "999.99",
        "5",
        false,
        "porcentaje",
        "0",
    );
    assert_eq!(result, Ok((999.99, 5, 0.0)));
}

#[test]
fn validate_rejects_short_nombre() {
    let result = validate("ab", "descripcion suficientemente larga", "10", "1", false, "porcentaje", "0");
    assert!(result.unwrap_err().contains("nombre"));
}

#[test]
fn validate_rejects_short_descripcion() {
    let result = validate("Notebook", "corta", "10", "1", false, "porcentaje", "0");
    assert!(result.unwrap_err().contains("descripción"));
}

#[test]
fn validate_counts_characters_not_bytes() {
    // 100 accented characters is 200 bytes but still within the limit.
    let nombre = "á".repeat(100);
    let result = validate(&nombre, "descripción con acentos suficientemente larga", "10", "1", false, "porcentaje", "0");
    assert_eq!(result, Ok((10.0, 1, 0.0)));

    let result = validate(&"á".repeat(101), "descripcion suficientemente larga", "10", "1", false, "porcentaje", "0");
    assert!(result.unwrap_err().contains("nombre"));
}

#[test]
fn validate_rejects_unparsable_precio() {
    let result = validate("Notebook", "descripcion suficientemente larga", "", "1", false, "porcentaje", "0");
    assert!(result.unwrap_err().contains("precio"));
}

#[test]
fn validate_rejects_negative_stock() {
    // u32 parse fails on a leading minus sign
    let result = validate("Notebook", "descripcion suficientemente larga", "10", "-1", false, "porcentaje", "0");
    assert!(result.unwrap_err().contains("stock"));
}

#[test]
fn validate_caps_percentage_promotions_at_100() {
    let result = validate(
        "Notebook",
        "descripcion suficientemente larga",
        "10",
        "1",
        true,
        "porcentaje",
        "150",
    );
    assert!(result.unwrap_err().contains("100%"));
}

#[test]
fn validate_allows_large_fixed_amount_discounts() {
    let result = validate(
        "Notebook",
        "descripcion suficientemente larga",
        "500",
        "1",
        true,
        "monto_fijo",
        "150",
    );
    assert_eq!(result, Ok((500.0, 1, 150.0)));
}

#[test]
fn validate_defaults_blank_promo_valor_to_zero() {
    let result = validate(
        "Notebook",
        "descripcion suficientemente larga",
        "10",
        "1",
        true,
        "porcentaje",
        "",
    );
    assert_eq!(result, Ok((10.0, 1, 0.0)));
}

// ====== helpers ======

#[test]
fn nonempty_maps_blank_to_null() {
    assert_eq!(nonempty(""), Value::Null);
    assert_eq!(nonempty("2026-01-01T00:00"), Value::String("2026-01-01T00:00".into()));
}

#[test]
fn format_number_drops_trailing_decimal_for_integral_values() {
    assert_eq!(format_number(100.0), "100");
    assert_eq!(format_number(99.5), "99.5");
}

#[test]
fn datetime_local_truncates_iso_timestamps() {
    assert_eq!(datetime_local("2026-03-01T12:30:00.000Z"), "2026-03-01T12:30");
    assert_eq!(datetime_local("2026-03-01"), "2026-03-01");
}
