//! Input rate range generation

use super::error::PayError;

/// Upper limit on the number of values a single range may produce.
pub const MAX_ROWS: usize = 100_000;

/// Generate the input rates from `low` to `high` stepping by `increment`.
///
/// Values are `low + k * increment` for `k = 0, 1, 2, ...` up to `high`. If
/// `high` is not an exact step it is appended as the final value, so the
/// result always starts at `low` and ends at `high`.
pub fn generate_range(low: f64, high: f64, increment: f64) -> Result<Vec<f64>, PayError> {
    check_bound("low rate", low)?;
    check_bound("high rate", high)?;
    if !increment.is_finite() || increment <= 0.0 {
        return Err(PayError::InvalidIncrement { increment });
    }
    if low > high {
        return Err(PayError::InvertedRange { low, high });
    }

    let steps = ((high - low) / increment).floor();
    if steps >= MAX_ROWS as f64 {
        return Err(PayError::TooManyRows {
            rows: steps + 1.0,
            limit: MAX_ROWS,
        });
    }
    let steps = steps as usize;

    // high is appended when the last step falls short of it
    let rows = if low + steps as f64 * increment < high {
        steps + 2
    } else {
        steps + 1
    };
    if rows > MAX_ROWS {
        return Err(PayError::TooManyRows {
            rows: rows as f64,
            limit: MAX_ROWS,
        });
    }

    let mut values = Vec::with_capacity(rows);
    for k in 0..=steps {
        let value = low + k as f64 * increment;
        if value > high {
            break;
        }
        // huge bounds with a tiny increment can round two steps to one value
        if values.last().is_some_and(|&last| value <= last) {
            continue;
        }
        values.push(value);
    }
    if values.last() != Some(&high) {
        values.push(high);
    }

    log::debug!(
        "Generated {} rates from {} to {} by {}",
        values.len(),
        low,
        high,
        increment
    );
    Ok(values)
}

fn check_bound(name: &'static str, value: f64) -> Result<(), PayError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PayError::InvalidBound { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_multiple_includes_both_ends() {
        assert_eq!(generate_range(20.0, 30.0, 5.0).unwrap(), vec![20.0, 25.0, 30.0]);
    }

    #[test]
    fn non_multiple_appends_high() {
        assert_eq!(
            generate_range(10.0, 21.0, 5.0).unwrap(),
            vec![10.0, 15.0, 20.0, 21.0]
        );
    }

    #[test]
    fn increment_larger_than_range() {
        assert_eq!(generate_range(10.0, 12.0, 5.0).unwrap(), vec![10.0, 12.0]);
    }

    #[test]
    fn single_value_when_low_equals_high() {
        assert_eq!(generate_range(50000.0, 50000.0, 1000.0).unwrap(), vec![50000.0]);
    }

    #[test]
    fn fractional_steps_do_not_drift() {
        let values = generate_range(0.0, 1.0, 0.1).unwrap();
        assert_eq!(values.first(), Some(&0.0));
        assert_eq!(values.last(), Some(&1.0));
        assert_eq!(values[3], 3.0 * 0.1);
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn zero_increment_rejected() {
        assert_eq!(
            generate_range(1.0, 2.0, 0.0),
            Err(PayError::InvalidIncrement { increment: 0.0 })
        );
    }

    #[test]
    fn negative_increment_rejected() {
        assert!(matches!(
            generate_range(1.0, 2.0, -1.0),
            Err(PayError::InvalidIncrement { .. })
        ));
    }

    #[test]
    fn nan_increment_rejected() {
        assert!(matches!(
            generate_range(1.0, 2.0, f64::NAN),
            Err(PayError::InvalidIncrement { .. })
        ));
    }

    #[test]
    fn inverted_range_rejected() {
        assert_eq!(
            generate_range(30.0, 20.0, 5.0),
            Err(PayError::InvertedRange { low: 30.0, high: 20.0 })
        );
    }

    #[test]
    fn negative_low_rejected() {
        assert!(matches!(
            generate_range(-5.0, 20.0, 5.0),
            Err(PayError::InvalidBound { name: "low rate", .. })
        ));
    }

    #[test]
    fn infinite_high_rejected() {
        assert!(matches!(
            generate_range(5.0, f64::INFINITY, 5.0),
            Err(PayError::InvalidBound { name: "high rate", .. })
        ));
    }

    #[test]
    fn too_many_rows_rejected() {
        assert!(matches!(
            generate_range(0.0, 1_000_000.0, 1.0),
            Err(PayError::TooManyRows { limit: MAX_ROWS, .. })
        ));
    }

    #[test]
    fn row_limit_counts_appended_high() {
        assert_eq!(
            generate_range(0.0, 99_999.5, 1.0),
            Err(PayError::TooManyRows {
                rows: 100_001.0,
                limit: MAX_ROWS,
            })
        );
    }

    #[test]
    fn row_limit_reached_exactly_with_appended_high() {
        let values = generate_range(0.0, 99_998.5, 1.0).unwrap();
        assert_eq!(values.len(), MAX_ROWS);
        assert_eq!(values.last(), Some(&99_998.5));
    }

    #[test]
    fn row_limit_reached_exactly_with_exact_multiple() {
        let values = generate_range(0.0, 99_999.0, 1.0).unwrap();
        assert_eq!(values.len(), MAX_ROWS);
    }

    proptest! {
        #[test]
        fn fractional_range_bounds_and_steps(
            low in 0.0f64..1_000.0,
            span in 0.0f64..50.0,
            increment in 0.01f64..1.0,
        ) {
            let high = low + span;
            let values = generate_range(low, high, increment).unwrap();

            prop_assert_eq!(values[0], low);
            prop_assert_eq!(*values.last().unwrap(), high);
            prop_assert!(values.len() <= MAX_ROWS);
            prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(values.iter().all(|v| *v <= high));
            for (k, value) in values[..values.len() - 1].iter().enumerate() {
                prop_assert_eq!(*value, low + k as f64 * increment);
            }
        }

        #[test]
        fn range_bounds_and_steps(
            low in 0.0f64..100_000.0,
            span in 0.0f64..10_000.0,
            increment in 1.0f64..1_000.0,
        ) {
            let high = low + span;
            let values = generate_range(low, high, increment).unwrap();

            prop_assert_eq!(values[0], low);
            prop_assert_eq!(*values.last().unwrap(), high);
            prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(values.iter().all(|v| *v <= high));
            for (k, value) in values[..values.len() - 1].iter().enumerate() {
                prop_assert_eq!(*value, low + k as f64 * increment);
            }
        }
    }
}
