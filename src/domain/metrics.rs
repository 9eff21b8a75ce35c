//! Derived display metrics
//!
//! Values here are computed from raw counts for display only; nothing in
//! this module feeds back into filtering.

use std::fmt;

/// Pass rates at or above this are shown as high performing.
pub const HIGH_PERFORMING_MIN: u32 = 85;
/// Pass rates below this are shown as low performing.
pub const LOW_PERFORMING_BELOW: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassRate {
    Percent(u32),
    /// Nobody completed, so there is nothing to divide by.
    NotApplicable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceBand {
    High,
    Neutral,
    Low,
}

impl PassRate {
    pub fn value(self) -> Option<u32> {
        match self {
            PassRate::Percent(value) => Some(value),
            PassRate::NotApplicable => None,
        }
    }

    pub fn band(self) -> PerformanceBand {
        match self {
            PassRate::Percent(value) if value >= HIGH_PERFORMING_MIN => PerformanceBand::High,
            PassRate::Percent(value) if value < LOW_PERFORMING_BELOW => PerformanceBand::Low,
            _ => PerformanceBand::Neutral,
        }
    }
}

impl fmt::Display for PassRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassRate::Percent(value) => write!(f, "{value}%"),
            PassRate::NotApplicable => f.write_str("N/A"),
        }
    }
}

/// `round(passed / completed * 100)`, or [`PassRate::NotApplicable`] when
/// `completed` is zero.
pub fn pass_rate(passed: u64, completed: u64) -> PassRate {
    match percent(passed, completed) {
        Some(value) => PassRate::Percent(value),
        None => PassRate::NotApplicable,
    }
}

/// `round(part / whole * 100)`; `None` when `whole` is zero.
pub fn percent(part: u64, whole: u64) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    let ratio = part as f64 / whole as f64 * 100.0;
    Some(ratio.round() as u32)
}

/// Rounded arithmetic mean; `None` for an empty slice.
pub fn mean(values: &[u32]) -> Option<u32> {
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    percent(total, values.len() as u64 * 100)
}

/// Mean of `values` weighted by `weights`; `None` when all weights are zero.
pub fn weighted_mean(values: &[(u32, u32)]) -> Option<u32> {
    let weight: u64 = values.iter().map(|&(_, w)| u64::from(w)).sum();
    let total: u64 = values
        .iter()
        .map(|&(value, w)| u64::from(value) * u64::from(w))
        .sum();
    percent(total, weight * 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_rate_rounds() {
        assert_eq!(pass_rate(48, 52), PassRate::Percent(92));
        assert_eq!(pass_rate(42, 45), PassRate::Percent(93));
        assert_eq!(pass_rate(25, 29), PassRate::Percent(86));
        assert_eq!(pass_rate(1, 2), PassRate::Percent(50));
        assert_eq!(
            pass_rate(7_000_000_000, 8_000_000_000),
            PassRate::Percent(88)
        );
    }

    #[test]
    fn test_pass_rate_without_completions() {
        let rate = pass_rate(0, 0);
        assert_eq!(rate, PassRate::NotApplicable);
        assert_eq!(rate.value(), None);
        assert_eq!(rate.to_string(), "N/A");
        assert_eq!(rate.band(), PerformanceBand::Neutral);
    }

    #[test]
    fn test_bands() {
        assert_eq!(PassRate::Percent(85).band(), PerformanceBand::High);
        assert_eq!(PassRate::Percent(84).band(), PerformanceBand::Neutral);
        assert_eq!(PassRate::Percent(70).band(), PerformanceBand::Neutral);
        assert_eq!(PassRate::Percent(69).band(), PerformanceBand::Low);
    }

    #[test]
    fn test_means() {
        assert_eq!(mean(&[85, 65, 100]), Some(83));
        assert_eq!(mean(&[]), None);
        assert_eq!(weighted_mean(&[(90, 1), (80, 3)]), Some(83));
        assert_eq!(weighted_mean(&[(90, 0)]), None);
    }
}
