use std::cmp::Ordering;

use tracing::debug;

use crate::error::{ArgumentError, Result};

use super::scalar::checked;
use super::Scalar;

/// Largest value of a sequence, compared with `<`.
///
/// # Errors
///
/// Returns [`ArgumentError::EmptySequence`] if `values` is empty.
pub fn max_value<T: Scalar>(values: &[T]) -> Result<T> {
    fold_extreme(values, |best, candidate| best < candidate)
}

/// Smallest value of a sequence, compared with `<`.
///
/// # Errors
///
/// Returns [`ArgumentError::EmptySequence`] if `values` is empty.
pub fn min_value<T: Scalar>(values: &[T]) -> Result<T> {
    fold_extreme(values, |best, candidate| candidate < best)
}

/// Arithmetic mean of a sequence.
///
/// Integer scalars use truncating division.
///
/// # Errors
///
/// Returns [`ArgumentError::EmptySequence`] if `values` is empty and
/// [`ArgumentError::Overflow`] if an integer sum leaves the type's range.
pub fn average_value<T: Scalar>(values: &[T]) -> Result<T> {
    non_empty(values)?;
    let sum = checked(
        values.iter().try_fold(T::zero(), |acc, &x| acc.checked_add(x)),
        "average",
    )?;
    Ok(sum / T::from_usize(values.len()))
}

/// Arithmetic mean of a sequence. Same as [`average_value`].
///
/// # Errors
///
/// Returns [`ArgumentError::EmptySequence`] if `values` is empty.
pub fn mean_value<T: Scalar>(values: &[T]) -> Result<T> {
    average_value(values)
}

/// Sorted median of a sequence.
///
/// For an even count this is the mean of the two middle values.
///
/// # Errors
///
/// Returns [`ArgumentError::EmptySequence`] if `values` is empty,
/// [`ArgumentError::Unordered`] if a value cannot be compared (NaN), or
/// [`ArgumentError::Overflow`] if the two middle integers overflow.
pub fn median_value<T: Scalar>(values: &[T]) -> Result<T> {
    non_empty(values)?;
    if values.iter().any(|x| x.partial_cmp(x).is_none()) {
        debug!("median over a sequence with unordered values");
        return Err(ArgumentError::Unordered.into());
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Ok(sorted[mid])
    } else {
        let pair = checked(sorted[mid - 1].checked_add(sorted[mid]), "median")?;
        Ok(pair / T::two())
    }
}

/// Sample standard deviation, with `N - 1` in the denominator.
///
/// # Errors
///
/// Returns [`ArgumentError::EmptySequence`] if `values` is empty,
/// [`ArgumentError::TooFewValues`] if it holds a single value, or
/// [`ArgumentError::Overflow`] if an integer square or sum overflows.
pub fn standard_deviation<T: Scalar>(values: &[T]) -> Result<T> {
    let mean = average_value(values)?;
    if values.len() < 2 {
        debug!(found = values.len(), "sample deviation needs two values");
        return Err(ArgumentError::TooFewValues {
            needed: 2,
            found: values.len(),
        }
        .into());
    }

    let squares = checked(
        values.iter().try_fold(T::zero(), |acc, &x| {
            let d = x.checked_sub(mean)?;
            acc.checked_add(d.checked_mul(d)?)
        }),
        "standard deviation",
    )?;
    Ok((squares / T::from_usize(values.len() - 1)).sqrt())
}

fn non_empty<T>(values: &[T]) -> Result<()> {
    if values.is_empty() {
        debug!("aggregate over an empty sequence");
        return Err(ArgumentError::EmptySequence.into());
    }
    Ok(())
}

/// Folds `values`, replacing the running extreme whenever `replaces(best, candidate)`.
fn fold_extreme<T: Scalar>(values: &[T], replaces: impl Fn(T, T) -> bool) -> Result<T> {
    let (&first, rest) = values.split_first().ok_or_else(|| {
        debug!("extreme of an empty sequence");
        ArgumentError::EmptySequence
    })?;
    Ok(rest
        .iter()
        .fold(first, |best, &x| if replaces(best, x) { x } else { best }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TrigonError;
    use approx::assert_abs_diff_eq;

    const EPS: f64 = 1e-6;

    #[test]
    fn max_and_min_over_three_and_four() {
        assert_abs_diff_eq!(max_value(&[1.0, 5.0, 3.0]).unwrap(), 5.0, epsilon = EPS);
        assert_abs_diff_eq!(min_value(&[1.0, 5.0, 3.0]).unwrap(), 1.0, epsilon = EPS);
        assert_abs_diff_eq!(min_value(&[5.0, 2.0, 8.0, 1.0]).unwrap(), 1.0, epsilon = EPS);
    }

    #[test]
    fn extremes_on_integers() {
        assert_eq!(max_value(&[3_i32, -7, 12, 4]).unwrap(), 12);
        assert_eq!(min_value(&[3_i32, -7, 12, 4]).unwrap(), -7);
        assert_eq!(max_value(&[9_i64]).unwrap(), 9);
    }

    #[test]
    fn empty_sequences_are_rejected() {
        let empty: [f64; 0] = [];
        for result in [
            max_value(&empty),
            min_value(&empty),
            average_value(&empty),
            median_value(&empty),
            standard_deviation(&empty),
        ] {
            assert!(matches!(
                result,
                Err(TrigonError::Argument(ArgumentError::EmptySequence))
            ));
        }
    }

    #[test]
    fn average_and_mean_agree() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(average_value(&values).unwrap(), 3.0, epsilon = EPS);
        // Unsorted input: still the arithmetic mean.
        assert_abs_diff_eq!(mean_value(&[1.0, 3.0, 2.0, 5.0, 4.0]).unwrap(), 3.0, epsilon = EPS);
    }

    #[test]
    fn integer_average_truncates() {
        assert_eq!(average_value(&[1_i32, 2]).unwrap(), 1);
    }

    #[test]
    fn integer_overflow_is_an_error() {
        assert_eq!(average_value(&[100_i8, 20]).unwrap(), 60);
        assert!(matches!(
            average_value(&[100_i8, 100]),
            Err(TrigonError::Argument(ArgumentError::Overflow("average")))
        ));
        assert!(matches!(
            median_value(&[100_i8, 90, 120, 1]),
            Err(TrigonError::Argument(ArgumentError::Overflow("median")))
        ));
        assert!(matches!(
            standard_deviation(&[-100_i8, 100]),
            Err(TrigonError::Argument(ArgumentError::Overflow(_)))
        ));
        assert_eq!(standard_deviation(&[-100_i32, 100]).unwrap(), 141);
    }

    #[test]
    fn median_odd_and_even() {
        assert_abs_diff_eq!(median_value(&[9.0, 1.0, 4.0]).unwrap(), 4.0);
        assert_abs_diff_eq!(median_value(&[9.0, 1.0, 4.0, 2.0]).unwrap(), 3.0);
        // Median and mean differ on skewed data.
        let skewed = [1.0, 2.0, 100.0];
        assert_abs_diff_eq!(median_value(&skewed).unwrap(), 2.0);
        assert!(mean_value(&skewed).unwrap() > 30.0);
    }

    #[test]
    fn median_rejects_nan() {
        assert!(matches!(
            median_value(&[1.0, f64::NAN]),
            Err(TrigonError::Argument(ArgumentError::Unordered))
        ));
    }

    #[test]
    fn sample_standard_deviation() {
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_abs_diff_eq!(standard_deviation(&values).unwrap(), 1.58, epsilon = 0.01);
        assert_abs_diff_eq!(
            standard_deviation(&values).unwrap(),
            2.5_f64.sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn standard_deviation_needs_two_values() {
        assert!(matches!(
            standard_deviation(&[4.0]),
            Err(TrigonError::Argument(ArgumentError::TooFewValues {
                needed: 2,
                found: 1
            }))
        ));
    }
}
