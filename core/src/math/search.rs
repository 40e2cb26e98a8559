use std::cmp::Ordering;

/// Lower-bound search over `len` positions reached through an accessor.
///
/// `cmp(i)` compares position `i` against the target. Returns the first
/// position whose comparison is not `Less`, or `len` when every position is
/// `Less`. Positions must be partitioned: every `Less` precedes every
/// non-`Less`. An exact match returns the index of the first equal position.
pub fn lower_bound<F>(len: usize, mut cmp: F) -> usize
where
    F: FnMut(usize) -> Ordering,
{
    let mut low = 0;
    let mut high = len;
    while low < high {
        let mid = low + (high - low) / 2;
        if cmp(mid) == Ordering::Less {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    low
}

/// Slice form of [`lower_bound`].
pub fn lower_bound_by<T, F>(items: &[T], mut cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    lower_bound(items.len(), |idx| cmp(&items[idx]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_returns_zero() {
        assert_eq!(lower_bound(0, |_| Ordering::Greater), 0);
    }

    #[test]
    fn exact_match_returns_first_equal_index() {
        let values = [0.1_f64, 0.2, 0.2, 0.5];
        assert_eq!(lower_bound_by(&values, |v| v.total_cmp(&0.2)), 1);
        assert_eq!(lower_bound_by(&values, |v| v.total_cmp(&0.1)), 0);
    }

    #[test]
    fn insertion_point_between_and_past_end() {
        let values = [0.1_f64, 0.2, 0.5];
        assert_eq!(lower_bound_by(&values, |v| v.total_cmp(&0.3)), 2);
        assert_eq!(lower_bound_by(&values, |v| v.total_cmp(&0.9)), 3);
        assert_eq!(lower_bound_by(&values, |v| v.total_cmp(&0.0)), 0);
    }

    #[test]
    fn accessor_form_is_collection_independent() {
        let squares = |i: usize| (i * i) as u64;
        assert_eq!(lower_bound(10, |i| squares(i).cmp(&49)), 7);
        assert_eq!(lower_bound(10, |i| squares(i).cmp(&50)), 8);
    }

    #[test]
    fn matches_std_partition_point() {
        let values: Vec<u32> = (0..40).map(|v| v / 3).collect();
        for target in 0..16 {
            assert_eq!(
                lower_bound_by(&values, |v| v.cmp(&target)),
                values.partition_point(|v| *v < target)
            );
        }
    }
}
