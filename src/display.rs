//! Presentation-only projections of stamina state.
//!
//! Bands and countdown strings are derived from `current/max` on demand and
//! never persisted - the engine knows nothing about styling.

use crate::constants::{LOW_STAMINA_RATIO, MEDIUM_STAMINA_RATIO};

/// Coarse fill level driving bar/icon color in the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StaminaBand {
    /// Below 20% of max
    Low,
    /// Below 50% of max
    Medium,
    /// 50% and above
    High,
}

/// Fraction of the ceiling currently available, in `[0, 1]`.
pub fn ratio(current: u32, max: u32) -> f32 {
    if max == 0 {
        return 0.0;
    }
    current as f32 / max as f32
}

/// Classify a stamina level into its display band.
pub fn band(current: u32, max: u32) -> StaminaBand {
    let ratio = ratio(current, max);
    if ratio < LOW_STAMINA_RATIO {
        StaminaBand::Low
    } else if ratio < MEDIUM_STAMINA_RATIO {
        StaminaBand::Medium
    } else {
        StaminaBand::High
    }
}

/// Format a countdown as "M:SS" with zero-padded seconds.
pub fn format_countdown(ms: u64) -> String {
    let minutes = ms / 60_000;
    let seconds = (ms % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_thresholds_are_strict() {
        // Comparisons are strict: exactly 20% is already Medium, exactly
        // 50% is already High.
        assert_eq!(band(51, 260), StaminaBand::Low);
        assert_eq!(band(52, 260), StaminaBand::Medium);
        assert_eq!(band(129, 260), StaminaBand::Medium);
        assert_eq!(band(130, 260), StaminaBand::High);
        assert_eq!(band(260, 260), StaminaBand::High);
        assert_eq!(band(0, 260), StaminaBand::Low);
    }

    #[test]
    fn test_ratio_handles_zero_max() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(130, 260), 0.5);
    }

    #[test]
    fn test_format_countdown() {
        assert_eq!(format_countdown(0), "0:00");
        assert_eq!(format_countdown(999), "0:00");
        assert_eq!(format_countdown(5_000), "0:05");
        assert_eq!(format_countdown(65_000), "1:05");
        assert_eq!(format_countdown(599_999), "9:59");
        assert_eq!(format_countdown(600_000), "10:00");
    }
}
