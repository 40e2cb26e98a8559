use crate::prelude::{MinWidthTable, ScaleDetailLevel};

/// Widens intervals that would be too thin to see at the current zoom tier.
#[derive(Debug, Clone)]
pub struct SizeBumper {
    min_widths: MinWidthTable,
}

impl SizeBumper {
    pub fn new(min_widths: MinWidthTable) -> Self {
        Self { min_widths }
    }

    pub fn min_width_for_level(&self, level: ScaleDetailLevel) -> f64 {
        self.min_widths.min_width(level).clamp(0.0, 1.0)
    }

    /// Returns the offsets to draw for `offset_start..offset_end` at `level`.
    ///
    /// Intervals already at least the minimum width come back untouched.
    /// Thinner ones grow symmetrically around their midpoint to the minimum
    /// width, then shift back inside `[0, 1]` if they crossed a day edge.
    pub fn bump(&self, offset_start: f64, offset_end: f64, level: ScaleDetailLevel) -> (f64, f64) {
        let min_width = self.min_width_for_level(level);
        if offset_end - offset_start >= min_width {
            return (offset_start, offset_end);
        }

        let center = (offset_start + offset_end) / 2.0;
        let half = min_width / 2.0;
        let (start, end) = (center - half, center + half);
        if start < 0.0 {
            (0.0, min_width)
        } else if end > 1.0 {
            (1.0 - min_width, 1.0)
        } else {
            (start, end)
        }
    }
}

impl Default for SizeBumper {
    fn default() -> Self {
        Self::new(MinWidthTable::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn coarse_bumper() -> SizeBumper {
        SizeBumper::new(MinWidthTable {
            day: 0.01,
            ..Default::default()
        })
    }

    #[test]
    fn thin_interval_grows_around_its_center() {
        let (start, end) = coarse_bumper().bump(0.300, 0.301, ScaleDetailLevel::Day);
        assert!((end - start - 0.01).abs() < 1e-12);
        assert!(((start + end) / 2.0 - 0.3005).abs() < 1e-12);
        assert!((start - 0.2955).abs() < 1e-12);
        assert!((end - 0.3055).abs() < 1e-12);
    }

    #[test]
    fn wide_interval_is_untouched() {
        let bumper = coarse_bumper();
        assert_eq!(bumper.bump(0.1, 0.2, ScaleDetailLevel::Day), (0.1, 0.2));
        assert_eq!(bumper.bump(0.1, 0.125, ScaleDetailLevel::Day), (0.1, 0.125));
    }

    #[test]
    fn fine_levels_bump_less() {
        let bumper = SizeBumper::default();
        let (day_start, day_end) = bumper.bump(0.5, 0.5, ScaleDetailLevel::Day);
        let (min_start, min_end) = bumper.bump(0.5, 0.5, ScaleDetailLevel::Minute);
        assert!(day_end - day_start > min_end - min_start);
        assert_eq!((min_start, min_end), (0.5, 0.5));
    }

    #[test]
    fn zero_length_at_day_edges_shifts_inside() {
        let bumper = coarse_bumper();
        assert_eq!(bumper.bump(0.0, 0.0, ScaleDetailLevel::Day), (0.0, 0.01));
        let (start, end) = bumper.bump(1.0, 1.0, ScaleDetailLevel::Day);
        assert!((start - 0.99).abs() < 1e-12);
        assert_eq!(end, 1.0);
        let (start, end) = bumper.bump(0.002, 0.003, ScaleDetailLevel::Day);
        assert_eq!((start, end), (0.0, 0.01));
    }

    #[test]
    fn oversized_minimum_truncates_to_whole_day() {
        let bumper = SizeBumper::new(MinWidthTable::uniform(3.0));
        assert_eq!(bumper.bump(0.4, 0.5, ScaleDetailLevel::Hour), (0.0, 1.0));
    }

    proptest! {
        #[test]
        fn bump_never_shrinks_and_stays_in_day(
            start in 0.0f64..=1.0,
            length in 0.0f64..=0.05,
            min_width in 0.0f64..=0.2,
            level in prop::sample::select(ScaleDetailLevel::ALL.to_vec()),
        ) {
            let end = (start + length).min(1.0);
            let bumper = SizeBumper::new(MinWidthTable::uniform(min_width));
            let (bumped_start, bumped_end) = bumper.bump(start, end, level);

            prop_assert!(bumped_end - bumped_start >= (end - start) - 1e-12);
            prop_assert!(bumped_end - bumped_start >= min_width - 1e-12);
            prop_assert!(bumped_start >= 0.0);
            prop_assert!(bumped_end <= 1.0);
        }
    }
}
