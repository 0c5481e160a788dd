//! End-to-end calculation scenarios and engine properties

use approx::assert_relative_eq;
use compound_interest::compounding::round_cents;
use compound_interest::{
    compute, CalculationInput, CalculatorForm, CompoundingUnit, FormInput, InterestEngine, InterestError,
};

#[test]
fn annual_five_percent_one_year() {
    let result = compute(1000.0, 5.0, 1.0, CompoundingUnit::Year).unwrap();

    assert_eq!(round_cents(result.final_amount), 1050.00);
    assert_eq!(round_cents(result.total_interest), 50.00);
    assert_eq!(result.periods.len(), 1);
    let row = result.periods[0];
    assert_eq!(row.period_index, 1);
    assert_eq!(round_cents(row.balance), 1050.00);
    assert_eq!(round_cents(row.interest_for_period), 50.00);
}

#[test]
fn monthly_unit_compounds_twelve_times_per_unit() {
    let result = compute(1000.0, 12.0, 12.0, CompoundingUnit::Month).unwrap();

    assert_eq!(result.periods.len(), 12);
    assert_relative_eq!(result.final_amount, 1000.0 * 1.01_f64.powi(144), max_relative = 1e-12);
    for row in &result.periods {
        let expected = 1000.0 * 1.01_f64.powi(12 * row.period_index as i32);
        assert_relative_eq!(row.balance, expected, max_relative = 1e-12);
    }
    // The first row is one month-unit: twelve compoundings at 1%
    assert_eq!(round_cents(result.periods[0].balance), 1126.83);
}

#[test]
fn daily_unit_two_periods() {
    let result = compute(500.0, 365.0, 2.0, CompoundingUnit::Day).unwrap();

    assert_eq!(result.periods.len(), 2);
    assert_eq!(result.periods[0].period_index, 1);
    assert_eq!(result.periods[1].period_index, 2);
    assert_relative_eq!(result.final_amount, 500.0 * 1.01_f64.powi(730), max_relative = 1e-9);
    assert_relative_eq!(result.periods[0].balance, 500.0 * 1.01_f64.powi(365), max_relative = 1e-9);
    assert_eq!(result.final_amount, result.periods[1].balance);
}

#[test]
fn unknown_unit_produces_no_result() {
    let err = "Week".parse::<CompoundingUnit>().unwrap_err();
    assert!(matches!(err, InterestError::InvalidUnit { .. }));

    let mut form = CalculatorForm::with_input(FormInput::new("1000", "5", "1", "Week"));
    assert!(form.submit(&InterestEngine::default()).is_err());
    assert!(form.result().is_none());
}

#[test]
fn zero_rate_keeps_principal() {
    for unit in CompoundingUnit::ALL {
        for principal in [0.0, 1.0, 1234.56, 1e9] {
            let result = compute(principal, 0.0, 7.0, unit).unwrap();
            assert_eq!(result.final_amount, principal);
            assert_eq!(result.total_interest, 0.0);
            assert!(result.periods.iter().all(|p| p.interest_for_period == 0.0));
        }
    }
}

#[test]
fn zero_principal_stays_zero_when_growth_overflows() {
    for unit in CompoundingUnit::ALL {
        for (rate, time) in [(100.0, 5000.0), (1e6, 50.0), (365.0, 2.0)] {
            let result = compute(0.0, rate, time, unit).unwrap();
            assert_eq!(result.final_amount, 0.0, "{unit} rate {rate} time {time}");
            assert_eq!(result.total_interest, 0.0);
            assert_eq!(result.periods.len() as f64, time);
            assert!(result
                .periods
                .iter()
                .all(|p| p.balance == 0.0 && p.interest_for_period == 0.0));
        }
    }
}

#[test]
fn zero_elapsed_has_no_rows() {
    for unit in CompoundingUnit::ALL {
        let result = compute(800.0, 4.25, 0.0, unit).unwrap();
        assert!(result.periods.is_empty());
        assert_eq!(result.final_amount, 800.0);
    }
}

#[test]
fn repeated_calls_are_bit_identical() {
    let engine = InterestEngine::default();
    let input = CalculationInput::new(12_345.67, 3.3, 45.5, CompoundingUnit::Month).unwrap();

    let first = engine.compute(&input).unwrap();
    let second = engine.compute(&input).unwrap();
    assert_eq!(first.final_amount.to_bits(), second.final_amount.to_bits());
    assert_eq!(first, second);
}

#[test]
fn balances_strictly_increase_for_positive_rate() {
    for unit in CompoundingUnit::ALL {
        let result = compute(100.0, 2.5, 40.0, unit).unwrap();
        let mut previous = result.principal;
        for row in &result.periods {
            assert!(row.balance > previous, "{unit} row {} did not grow", row.period_index);
            assert!(row.interest_for_period > 0.0);
            previous = row.balance;
        }
    }
}

#[test]
fn total_interest_is_exact_difference() {
    let cases = [
        (1000.0, 5.0, 1.0, CompoundingUnit::Year),
        (999.99, 7.77, 13.3, CompoundingUnit::Month),
        (0.01, -3.0, 9.0, CompoundingUnit::Day),
        (5000.0, 150.0, -2.0, CompoundingUnit::Year),
    ];
    for (principal, rate, time, unit) in cases {
        let result = compute(principal, rate, time, unit).unwrap();
        assert_eq!(result.total_interest, result.final_amount - principal);
    }
}

#[test]
fn form_round_trip_through_clear() {
    let engine = InterestEngine::default();
    let mut form = CalculatorForm::with_input(FormInput::new("1000", "5", "3", "Year"));

    let rows = form.submit(&engine).unwrap().periods.len();
    assert_eq!(rows, 3);
    assert_eq!(form.period_label(), "Year");

    form.clear();
    assert!(form.result().is_none());
    assert_eq!(form.input, FormInput::default());
}
