// In crates/analytics/src/rolling.rs

use core_types::{Error, MovingAverageSeries, Result, VolatilitySeries, WindowedSeries};

/// Running mean and sum of squared deviations for one window (Welford's update).
///
/// The incremental form keeps a window of identical values at exactly that value
/// with exactly zero deviation, which a plain `sum / n` does not guarantee.
#[derive(Debug, Default, Clone, Copy)]
struct WindowStats {
    count: usize,
    mean: f64,
    sum_sq_dev: f64,
}

impl WindowStats {
    fn from_slice(window: &[f64]) -> Self {
        window.iter().fold(Self::default(), |mut stats, &value| {
            stats.count += 1;
            let delta = value - stats.mean;
            stats.mean += delta / stats.count as f64;
            stats.sum_sq_dev += delta * (value - stats.mean);
            stats
        })
    }

    /// Sample standard deviation. Only meaningful for `count >= 2`.
    fn sample_std_dev(&self) -> f64 {
        (self.sum_sq_dev / (self.count - 1) as f64).sqrt()
    }
}

fn check_window(len: usize, window: usize, min: usize) -> Result<()> {
    if window < min || window > len {
        return Err(Error::InvalidWindow { window, len, min });
    }
    Ok(())
}

/// Computes the simple moving average of every full `window` in `series`.
///
/// The result holds `series.len() - window + 1` values; value `i` averages
/// `series[i..i + window]` and describes calendar day `i + window - 1`.
///
/// # Errors
///
/// `Error::InvalidWindow` when `window` is 0 or longer than the series.
pub fn moving_average(series: &[f64], window: usize) -> Result<MovingAverageSeries> {
    check_window(series.len(), window, 1)?;

    let values = series
        .windows(window)
        .map(|slice| WindowStats::from_slice(slice).mean)
        .collect();

    Ok(WindowedSeries::new(window, values))
}

/// Computes the rolling sample standard deviation (divisor `window - 1`).
///
/// # Errors
///
/// `Error::InvalidWindow` when `window` is below 2 or longer than the series.
pub fn volatility(series: &[f64], window: usize) -> Result<VolatilitySeries> {
    check_window(series.len(), window, 2)?;

    let values = series
        .windows(window)
        .map(|slice| WindowStats::from_slice(slice).sample_std_dev())
        .collect();

    Ok(WindowedSeries::new(window, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn moving_average_of_small_series() {
        let ma = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert_eq!(ma.window(), 3);
        assert_eq!(ma.values(), &[2.0, 3.0, 4.0]);
    }

    #[test]
    fn moving_average_length_matches_window_count() {
        let series: Vec<f64> = (0..37).map(|i| (i as f64 * 0.7).sin() * 10.0 + 50.0).collect();
        for window in 1..=series.len() {
            let ma = moving_average(&series, window).unwrap();
            assert_eq!(ma.len(), series.len() - window + 1);
        }
    }

    #[test]
    fn moving_average_of_constant_series_is_constant() {
        let series = vec![0.1; 12];
        for window in 1..=12 {
            let ma = moving_average(&series, window).unwrap();
            assert!(ma.values().iter().all(|&v| v == 0.1));
        }
    }

    #[test]
    fn moving_average_matches_naive_mean() {
        let series = [10.5, 11.25, 9.75, 12.0, 13.5, 12.75, 14.0, 13.25];
        let ma = moving_average(&series, 4).unwrap();
        for (i, value) in ma.values().iter().enumerate() {
            let naive = series[i..i + 4].iter().sum::<f64>() / 4.0;
            assert_relative_eq!(*value, naive, epsilon = 1e-12);
        }
    }

    #[test]
    fn moving_average_window_equal_to_length_yields_single_value() {
        let ma = moving_average(&[2.0, 4.0, 6.0], 3).unwrap();
        assert_eq!(ma.values(), &[4.0]);
    }

    #[test]
    fn moving_average_rejects_bad_windows() {
        let series = [1.0, 2.0, 3.0];
        assert_eq!(
            moving_average(&series, 0),
            Err(Error::InvalidWindow { window: 0, len: 3, min: 1 })
        );
        assert_eq!(
            moving_average(&series, 4),
            Err(Error::InvalidWindow { window: 4, len: 3, min: 1 })
        );
        assert!(moving_average(&[], 1).is_err());
    }

    #[test]
    fn volatility_is_sample_standard_deviation() {
        let series = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let vol = volatility(&series, 8).unwrap();
        assert_eq!(vol.len(), 1);
        assert_relative_eq!(vol.values()[0], (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);

        let vol = volatility(&[1.0, 3.0, 5.0], 2).unwrap();
        assert_relative_eq!(vol.values()[0], 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(vol.values()[1], 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn volatility_of_identical_values_is_exactly_zero() {
        let series = [101.37, 101.37, 101.37, 101.37, 101.37, 99.0];
        let vol = volatility(&series, 5).unwrap();
        assert_eq!(vol.values()[0], 0.0);
        assert!(vol.values()[1] > 0.0);
    }

    #[test]
    fn volatility_rejects_windows_below_two() {
        let series = [1.0, 2.0, 3.0];
        assert_eq!(
            volatility(&series, 1),
            Err(Error::InvalidWindow { window: 1, len: 3, min: 2 })
        );
        assert!(volatility(&series, 0).is_err());
        assert!(volatility(&series, 4).is_err());
    }
}
