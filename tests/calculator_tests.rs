use rkwhcalc::core::calculator::{compute, parse_power_from_label};
use rkwhcalc::errors::AppError;
use rkwhcalc::models::device::Device;
use rkwhcalc::models::usage::{Ledger, UsageRow};

fn kettle() -> Device {
    Device {
        id: 1,
        name: "Kettle".into(),
        power_watts: 1000,
    }
}

#[test]
fn test_single_row_total() {
    let ledger = Ledger::from(vec![UsageRow::new("2", "3", "Kettle 1000 W")]);
    let calc = compute(&ledger, &[]).unwrap();

    assert_eq!(calc.total_kwh, 6.0);
    assert_eq!(calc.rows.len(), 1);
    assert_eq!(calc.rows[0].energy_wh, 6000);
    assert_eq!(calc.rows[0].power_watts, 1000);
}

#[test]
fn test_total_is_sum_of_rows() {
    let ledger = Ledger::from(vec![
        UsageRow::new("2", "3", "Kettle 1000 W"),
        UsageRow::new("4", "5", "LED lamp 10 W"),
    ]);
    let calc = compute(&ledger, &[]).unwrap();

    assert_eq!(calc.rows[1].energy_kwh, 0.2);
    assert!((calc.total_kwh - 6.2).abs() < 1e-9);
}

#[test]
fn test_zero_quantity_or_duration_is_zero() {
    let ledger = Ledger::from(vec![
        UsageRow::new("0", "3", "Kettle 1000 W"),
        UsageRow::new("2", "0", "Kettle 1000 W"),
    ]);
    let calc = compute(&ledger, &[]).unwrap();

    assert_eq!(calc.rows[0].energy_kwh, 0.0);
    assert_eq!(calc.rows[1].energy_kwh, 0.0);
    assert_eq!(calc.total_kwh, 0.0);
}

#[test]
fn test_empty_ledger_is_zero() {
    let calc = compute(&Ledger::new(), &[]).unwrap();
    assert!(calc.rows.is_empty());
    assert_eq!(calc.total_kwh, 0.0);
}

#[test]
fn test_non_integer_fields_are_invalid_input() {
    for (qty, dur) in [("abc", "3"), ("2", "1.5"), ("", "3"), ("-1", "3")] {
        let ledger = Ledger::from(vec![UsageRow::new(qty, dur, "Kettle 1000 W")]);
        assert!(
            matches!(compute(&ledger, &[]), Err(AppError::InvalidInput(_))),
            "expected InvalidInput for qty={qty:?} duration={dur:?}"
        );
    }
}

#[test]
fn test_label_without_power_is_invalid_input() {
    let ledger = Ledger::from(vec![UsageRow::new("1", "1", "<Device>")]);
    assert!(matches!(
        compute(&ledger, &[]),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_power_parsed_from_trailing_term() {
    assert_eq!(parse_power_from_label("Kettle 2000 W"), Some(2000));
    assert_eq!(parse_power_from_label("Washing machine 2200 W"), Some(2200));
    assert_eq!(parse_power_from_label("  Fan 40 W  "), Some(40));
    assert_eq!(parse_power_from_label("Fan"), None);
    assert_eq!(parse_power_from_label("40 W"), None);
    assert_eq!(parse_power_from_label("Fan forty W"), None);
}

#[test]
fn test_device_reference_wins_over_label() {
    // stale label: the catalog says 1000 W
    let ledger = Ledger::from(vec![UsageRow::new("2", "3", "Kettle 2000 W").with_device_id(1)]);
    let calc = compute(&ledger, &[kettle()]).unwrap();
    assert_eq!(calc.total_kwh, 6.0);
}

#[test]
fn test_unknown_device_reference_is_invalid_input() {
    let ledger = Ledger::from(vec![UsageRow::new("2", "3", "Kettle 1000 W").with_device_id(42)]);
    assert!(matches!(
        compute(&ledger, &[kettle()]),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_overflow_is_invalid_input() {
    let ledger = Ledger::from(vec![UsageRow::new(
        &i64::MAX.to_string(),
        "2",
        "Kettle 1000 W",
    )]);
    assert!(matches!(
        compute(&ledger, &[]),
        Err(AppError::InvalidInput(_))
    ));
}
