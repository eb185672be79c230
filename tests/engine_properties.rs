use compound_interest::prelude::*;

const PRINCIPALS: &[f64] = &[0.0, 0.01, 1.0, 1000.0, 1_000_000.0, 123_456_789.5];
const RATES: &[f64] = &[-0.5, -0.05, 0.0, 0.01, 0.1, 0.35, 1.0];
const ELAPSED: &[f64] = &[0.0, 1.0 / 365.0, 0.5, 1.0, 2.75, 30.0];

#[test]
fn test_zero_rate_earns_nothing() {
    for &p in PRINCIPALS {
        for &t in ELAPSED {
            let result = compute(p, 0.0, t);
            assert_eq!(result.interest_earned.value(), 0.0, "p={p} t={t}");
            assert_eq!(result.final_amount.value(), p);
        }
    }
}

#[test]
fn test_zero_elapsed_returns_principal() {
    for &p in PRINCIPALS {
        for &r in RATES {
            let result = compute(p, r, 0.0);
            assert_eq!(result.final_amount.value(), p, "p={p} r={r}");
            assert_eq!(result.interest_earned.value(), 0.0);
        }
    }
}

#[test]
fn test_interest_equals_final_minus_principal() {
    for &p in PRINCIPALS {
        for &r in RATES {
            for &t in ELAPSED {
                let result = compute(p, r, t);
                assert_eq!(
                    result.final_amount.value() - p,
                    result.interest_earned.value(),
                    "p={p} r={r} t={t}"
                );
            }
        }
    }
}

#[test]
fn test_final_amount_increases_with_principal() {
    for &r in RATES {
        for &t in ELAPSED {
            for pair in PRINCIPALS.windows(2) {
                let lower = compute(pair[0], r, t).final_amount.value();
                let higher = compute(pair[1], r, t).final_amount.value();
                assert!(higher > lower, "p={:?} r={r} t={t}", pair);
            }
        }
    }
}

#[test]
fn test_final_amount_increases_with_rate() {
    for &p in PRINCIPALS.iter().filter(|p| **p > 0.0) {
        for &t in ELAPSED.iter().filter(|t| **t > 0.0) {
            for pair in RATES.windows(2) {
                let lower = compute(p, pair[0], t).final_amount.value();
                let higher = compute(p, pair[1], t).final_amount.value();
                assert!(higher > lower, "p={p} r={:?} t={t}", pair);
            }
        }
    }
}

#[test]
fn test_final_amount_increases_with_time_for_positive_rates() {
    for &p in PRINCIPALS.iter().filter(|p| **p > 0.0) {
        for &r in RATES.iter().filter(|r| **r > 0.0) {
            for pair in ELAPSED.windows(2) {
                let lower = compute(p, r, pair[0]).final_amount.value();
                let higher = compute(p, r, pair[1]).final_amount.value();
                assert!(higher > lower, "p={p} r={r} t={:?}", pair);
            }
        }
    }
}

#[test]
fn test_validation_examples() {
    assert!(matches!(
        normalize("abc", "5", "1", "0", "0"),
        Err(ValidationError::InvalidNumber(_))
    ));
    assert_eq!(
        normalize("1000", "5", "0", "0", "0").unwrap_err(),
        ValidationError::NoPeriod
    );
}

#[test]
fn test_million_at_ten_percent_for_one_year() {
    let input = normalize("1000000", "10", "1", "0", "0").unwrap();
    let elapsed = to_elapsed_years(input.period.years, input.period.months, input.period.days);
    assert_eq!(elapsed, 1.0);

    let result = compute(input.principal.value(), input.rate.as_fraction(), elapsed);
    assert!((result.final_amount.value() - 1_100_000.0).abs() < 1e-6);
    assert!((result.interest_earned.value() - 100_000.0).abs() < 1e-6);
}

#[test]
fn test_million_at_twelve_percent_for_six_months() {
    let calculation = CalculatorService::new()
        .calculate(&RawCalculationInput {
            principal: "1000000",
            rate: "12",
            years: "0",
            months: "6",
            days: "0",
        })
        .unwrap();

    assert_eq!(calculation.elapsed_years, 0.5);
    assert!((calculation.result.final_amount.value() - 1_058_300.524).abs() < 0.01);
}

#[test]
fn test_period_bounds_are_independent_of_engine() {
    let input = normalize("1000", "5", "250", "40", "900").unwrap();
    assert_eq!(input.period, Period::new(250, 40, 900));
    assert!(PeriodBounds::default().check(&input.period).is_err());
}
