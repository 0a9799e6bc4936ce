use core_types::{Error, Result, TrendClassification, TrendStrength};

/// Moves below this percentage are weak.
const WEAK_TREND_PERCENT: f64 = 0.3;
/// Moves below this percentage (and at least weak) are moderate.
const MODERATE_TREND_PERCENT: f64 = 1.0;

/// Classifies the direction of a moving average from its last two points.
pub fn detect_trend(averages: &[f64]) -> TrendClassification {
    let [.., previous, last] = averages else {
        return TrendClassification::InsufficientData;
    };

    if last > previous {
        TrendClassification::Upward
    } else if last < previous {
        TrendClassification::Downward
    } else {
        TrendClassification::Sideways
    }
}

/// Buckets the percentage change between the last two points of a moving average.
///
/// The change is `|last - previous| / previous * 100`.
///
/// # Errors
///
/// `Error::DivisionByZero` when the previous point is exactly zero.
pub fn trend_strength(averages: &[f64]) -> Result<TrendStrength> {
    let [.., previous, last] = averages else {
        return Ok(TrendStrength::InsufficientData);
    };

    if *previous == 0.0 {
        return Err(Error::DivisionByZero);
    }

    let change_percent = (last - previous).abs() / previous * 100.0;

    let strength = if change_percent < WEAK_TREND_PERCENT {
        TrendStrength::Weak
    } else if change_percent < MODERATE_TREND_PERCENT {
        TrendStrength::Moderate
    } else {
        TrendStrength::Strong
    };
    Ok(strength)
}
