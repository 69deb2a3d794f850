use std::cmp::Ordering;
use std::ops::Range;

/// Length of the longest contiguous strictly increasing run.
///
/// # Arguments
/// * `values` - Sequence to scan; it is never modified
///
/// # Returns
/// `0` for an empty slice, otherwise at least `1`
///
/// # Example
/// ```
/// use kata_rust::algorithms::longest_increasing_run;
///
/// assert_eq!(longest_increasing_run(&[1, 3, 5, 4, 7]), 3);
/// assert_eq!(longest_increasing_run::<i32>(&[]), 0);
/// ```
pub fn longest_increasing_run<T: PartialOrd>(values: &[T]) -> usize {
    if values.is_empty() {
        return 0;
    }

    let mut max_length = 0;
    let mut current_length = 1;

    for pair in values.windows(2) {
        if pair[1] > pair[0] {
            current_length += 1;
        } else {
            max_length = max_length.max(current_length);
            current_length = 1;
        }
    }

    max_length.max(current_length)
}

/// Index range of the first longest strictly increasing run.
///
/// Returns `None` for an empty slice. The range length always equals
/// [`longest_increasing_run`] for the same input.
pub fn longest_increasing_span<T: PartialOrd>(values: &[T]) -> Option<Range<usize>> {
    if values.is_empty() {
        return None;
    }

    let mut best = 0..1;
    let mut start = 0;

    for i in 1..values.len() {
        if values[i].partial_cmp(&values[i - 1]) != Some(Ordering::Greater) {
            start = i;
        }
        if i + 1 - start > best.len() {
            best = start..i + 1;
        }
    }

    Some(best)
}
