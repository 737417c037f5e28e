mod support;

use flashbuzzer_core::{KeyValueStore, ParamKind, TypedValue};
use flashbuzzer_portal::apply_submission;
use support::device_registry;

#[test]
fn test_applies_recognized_values() {
    let mut registry = device_registry();

    let report = apply_submission(
        &mut registry,
        [("Color_Red", "10"), ("Title", "Hall way"), ("Dot_Speed", " -2.5 ")],
    );

    assert_eq!(report.updated, ["Color_Red", "Title", "Dot_Speed"]);
    assert!(report.is_clean());
    assert_eq!(registry.get_number("Color_Red"), Ok(10.0));
    assert_eq!(registry.get_text("Title"), Ok("Hall way"));
    assert_eq!(registry.get_number("Dot_Speed"), Ok(-2.5));
    assert_eq!(
        registry.store_mut().load("Color_Red", ParamKind::Number),
        Ok(Some(TypedValue::Number(10.0)))
    );
}

#[test]
fn test_unknown_names_are_ignored() {
    let mut registry = device_registry();

    let report = apply_submission(&mut registry, [("Color_Alpha", "1"), ("submit", "Submit")]);

    assert_eq!(report.ignored, ["Color_Alpha", "submit"]);
    assert!(report.updated.is_empty());
    assert!(!registry.contains("Color_Alpha"));
}

#[test]
fn test_bad_numbers_are_rejected() {
    let mut registry = device_registry();

    let report = apply_submission(
        &mut registry,
        [("Color_Red", "red"), ("Color_Green", ""), ("Color_Blue", "inf")],
    );

    assert_eq!(report.rejected, ["Color_Red", "Color_Green", "Color_Blue"]);
    assert!(!report.is_clean());
    assert_eq!(registry.get_number("Color_Red"), Ok(255.0));
    assert_eq!(registry.get_number("Color_Green"), Ok(255.0));
    assert_eq!(registry.get_number("Color_Blue"), Ok(255.0));
}

#[test]
fn test_text_accepts_numeric_input() {
    let mut registry = device_registry();

    apply_submission(&mut registry, [("Title", "42")]);

    assert_eq!(registry.get_text("Title"), Ok("42"));
}

#[test]
fn test_persist_failure_keeps_value() {
    let mut registry = device_registry();
    registry.store_mut().fail_writes = true;

    let report = apply_submission(&mut registry, [("Color_Blue", "12.5")]);

    assert_eq!(report.updated, ["Color_Blue"]);
    assert_eq!(report.unsaved, ["Color_Blue"]);
    assert_eq!(registry.get_number("Color_Blue"), Ok(12.5));
    assert_eq!(
        registry.store_mut().records.get("Color_Blue"),
        Some(&TypedValue::Number(255.0))
    );
}
