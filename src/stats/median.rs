use crate::collections::contiguous::DynamicArray;
use crate::util::error::{EmptyInput, MedianError, NotANumber};

/// Returns the median of `values`, sorting them in place as a side effect.
///
/// For an odd number of values, the median is the middle value once sorted. For an even number, it
/// is the mean of the two central values. Use [`median_of`] to leave the input untouched.
///
/// # Errors
/// - [`MedianError::EmptyInput`] if `values` is empty.
/// - [`MedianError::NotANumber`] if any value is NaN, which has no position in an ascending order.
///
/// The input isn't modified when an error is returned.
///
/// # Examples
/// ```
/// # use slice_lib::stats::median;
/// let mut values = [2.0, 1.0, 3.0, 4.0, 5.0];
/// assert_eq!(median(&mut values), Ok(3.0));
/// assert_eq!(values, [1.0, 2.0, 3.0, 4.0, 5.0]);
///
/// assert_eq!(median(&mut [1.0, 2.0, 3.0, 4.0]), Ok(2.5));
/// assert!(median(&mut []).is_err());
/// ```
pub fn median(values: &mut [f64]) -> Result<f64, MedianError> {
    if values.is_empty() {
        return Err(EmptyInput.into());
    }
    if let Some(index) = values.iter().position(|v| v.is_nan()) {
        return Err(NotANumber { index }.into());
    }

    values.sort_unstable_by(f64::total_cmp);

    let mid = values.len() / 2;
    log::trace!("median of {} values, midpoint {mid}", values.len());

    if values.len() % 2 == 1 {
        Ok(values[mid])
    } else {
        Ok((values[mid - 1] + values[mid]) / 2.0)
    }
}

/// Returns the median of `values`, like [`median`], but sorts a copy rather than the input.
///
/// # Errors
/// The same as [`median`].
///
/// # Examples
/// ```
/// # use slice_lib::stats::median_of;
/// let values = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(median_of(&values), Ok(2.5));
/// assert_eq!(values, [4.0, 1.0, 3.0, 2.0]);
/// ```
pub fn median_of(values: &[f64]) -> Result<f64, MedianError> {
    let mut copy = DynamicArray::with_cap(values.len());
    copy.extend(values.iter().copied());

    median(&mut copy)
}
