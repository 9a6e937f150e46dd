//! Scoring module - chain scores, advance pacing and speed progression
//!
//! Squaring a pass's elimination count rewards clearing several runs at once,
//! and each chained pass weighs the rest of the chain by 3/2.

use std::time::Duration;

use crate::types::{
    BASE_ADV_SPEED_MS, BASE_PANEL_THRESH, CHAIN_MULT_DENOMINATOR, CHAIN_MULT_NUMERATOR,
    SPEED_UP_EXP,
};

/// Apply the chain multiplier (3/2) to a point value, rounding down.
pub fn apply_chain_multiplier(points: u64) -> u64 {
    points.saturating_mul(CHAIN_MULT_NUMERATOR) / CHAIN_MULT_DENOMINATOR
}

/// Points for a single pass that eliminated `eliminated` panels.
pub fn pass_score(eliminated: u32) -> u64 {
    let e = eliminated as u64;
    e.saturating_mul(e)
}

/// Fold per-pass elimination counts (first pass first) into a chain score.
///
/// Working back from the last pass: a pass that eliminated `e > 0` panels
/// scores `e^2 + 1.5 * rest`; a pass that only let panels fall passes `rest`
/// through unchanged.
pub fn chain_score(passes: &[u32]) -> u64 {
    passes.iter().rev().fold(0u64, |rest, &e| {
        if e > 0 {
            pass_score(e).saturating_add(apply_chain_multiplier(rest))
        } else {
            rest
        }
    })
}

/// Time between advances at `speed`: `BASE_ADV_SPEED / log2(speed + 1)`.
pub fn advance_interval(speed: u32) -> Duration {
    let divisor = (speed.max(1) as f64 + 1.0).log2();
    Duration::from_secs_f64(BASE_ADV_SPEED_MS as f64 / 1000.0 / divisor)
}

/// Cleared-panel count that must be exceeded to leave `speed`.
pub fn speed_up_threshold(speed: u32) -> f64 {
    (speed as f64 * BASE_PANEL_THRESH as f64).powf(SPEED_UP_EXP)
}

/// Speed progression check.
///
/// `panels_cleared` is the cumulative count since the game started; it is
/// compared as-is against the threshold of the current speed.
pub fn should_speed_up(panels_cleared: u64, speed: u32) -> bool {
    panels_cleared as f64 > speed_up_threshold(speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_multiplier_rounds_down() {
        assert_eq!(apply_chain_multiplier(4), 6);
        assert_eq!(apply_chain_multiplier(9), 13);
        assert_eq!(apply_chain_multiplier(0), 0);
        assert_eq!(apply_chain_multiplier(u64::MAX), u64::MAX / 2);
    }

    #[test]
    fn test_single_pass_is_squared() {
        assert_eq!(chain_score(&[0]), 0);
        assert_eq!(chain_score(&[2]), 4);
        assert_eq!(chain_score(&[5]), 25);
    }

    #[test]
    fn test_chain_weights_later_passes() {
        // 3 then 2: 9 + 1.5 * 4
        assert_eq!(chain_score(&[3, 2, 0]), 15);
        // 2 then 2 then 2: 4 + 1.5 * (4 + 1.5 * 4) = 4 + 1.5 * 10
        assert_eq!(chain_score(&[2, 2, 2]), 19);
    }

    #[test]
    fn test_fall_only_pass_passes_score_through() {
        // A pass that only compacted does not multiply the rest.
        assert_eq!(chain_score(&[0, 3, 0]), 9);
        assert_eq!(chain_score(&[2, 0, 2]), 4 + 6);
    }

    #[test]
    fn test_advance_interval_by_speed() {
        assert_eq!(advance_interval(1), Duration::from_secs(2));
        assert_eq!(advance_interval(3), Duration::from_secs(1));
        assert!(advance_interval(2) < advance_interval(1));
        assert!(advance_interval(8) < advance_interval(4));
        // Diminishing returns: doubling speed does not halve the interval.
        assert!(advance_interval(8) > advance_interval(4) / 2);
    }

    #[test]
    fn test_speed_up_threshold() {
        assert!((speed_up_threshold(1) - 6f64.powf(1.5)).abs() < 1e-9);
        assert!(!should_speed_up(14, 1));
        assert!(should_speed_up(15, 1));
        // 12^1.5 ≈ 41.57
        assert!(!should_speed_up(41, 2));
        assert!(should_speed_up(42, 2));
    }
}
