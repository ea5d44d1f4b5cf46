use crate::Bar;

/// Number of zero-valued bars drawn for an empty series.
pub const FALLBACK_LEN: usize = 5;

/// Recent activity magnitudes, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    samples: Vec<f64>,
}

impl Series {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// One bar per sample, heights as a percentage of the largest sample.
    ///
    /// An empty series renders as [`FALLBACK_LEN`] zero bars. The scale never
    /// drops below 1, so all-zero input yields flat bars rather than NaN.
    pub fn bars(&self) -> Vec<Bar> {
        let samples: Vec<f64> = if self.samples.is_empty() {
            vec![0.0; FALLBACK_LEN]
        } else {
            self.samples.iter().copied().map(sanitize).collect()
        };

        let max = samples.iter().copied().fold(1.0_f64, f64::max);

        samples
            .into_iter()
            .map(|value| Bar {
                value,
                height_pct: height_pct(value, max),
            })
            .collect()
    }
}

impl From<Vec<f64>> for Series {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

impl FromIterator<f64> for Series {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

// Negative and non-finite samples count as no activity.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn height_pct(value: f64, max: f64) -> u8 {
    (value / max * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heights(samples: &[f64]) -> Vec<u8> {
        Series::new(samples.to_vec())
            .bars()
            .iter()
            .map(|bar| bar.height_pct)
            .collect()
    }

    #[test]
    fn equal_positive_samples_fill_every_bar() {
        assert_eq!(heights(&[4.0, 4.0, 4.0]), vec![100, 100, 100]);
        assert_eq!(heights(&[0.25]), vec![25]);
        assert_eq!(heights(&[7.5; 7]), vec![100; 7]);
    }

    #[test]
    fn heights_are_proportional_to_max() {
        assert_eq!(heights(&[1.0, 2.0, 4.0, 3.0]), vec![25, 50, 100, 75]);
        assert_eq!(heights(&[1.0, 3.0]), vec![33, 100]);
        assert_eq!(heights(&[2.0, 3.0]), vec![67, 100]);
    }

    #[test]
    fn empty_series_renders_five_zero_bars() {
        let bars = Series::default().bars();
        assert_eq!(bars.len(), FALLBACK_LEN);
        assert!(bars.iter().all(|bar| bar.value == 0.0 && bar.height_pct == 0));
    }

    #[test]
    fn short_series_is_not_padded() {
        assert_eq!(Series::new(vec![3.0, 6.0]).bars().len(), 2);
    }

    #[test]
    fn all_zero_series_stays_flat() {
        assert_eq!(heights(&[0.0, 0.0, 0.0]), vec![0, 0, 0]);
    }

    #[test]
    fn sub_unit_samples_scale_against_floor_of_one() {
        assert_eq!(heights(&[0.5, 0.1]), vec![50, 10]);
    }

    #[test]
    fn heights_stay_in_percent_range() {
        let samples = [
            0.0,
            -3.0,
            f64::NAN,
            f64::INFINITY,
            1e-9,
            12.0,
            1e12,
            0.999,
        ];
        let bars = Series::new(samples.to_vec()).bars();
        assert_eq!(bars.len(), samples.len());
        assert!(bars.iter().all(|bar| bar.height_pct <= 100));
        assert_eq!(bars.iter().map(|b| b.height_pct).max(), Some(100));
        assert_eq!(bars[1].height_pct, 0);
        assert_eq!(bars[2].height_pct, 0);
        assert_eq!(bars[3].height_pct, 0);
    }

    #[test]
    fn collects_from_iterator() {
        let series: Series = (1..=3).map(f64::from).collect();
        assert_eq!(series.samples(), &[1.0, 2.0, 3.0]);
    }
}
