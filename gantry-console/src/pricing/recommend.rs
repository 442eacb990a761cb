//! Usage recommendation heuristic

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Recommended quantity: 20% headroom over current usage, but never below
/// what is already subscribed
///
/// `max(ceil(usage * 1.2), subscribed)`, computed in decimal arithmetic so
/// that exact multiples do not pick up a float rounding step.
pub fn recommended_quantity(current_usage: u64, subscribed: u64) -> u64 {
    let headroom = (Decimal::from(current_usage) * Decimal::new(12, 1)).ceil();
    headroom.to_u64().unwrap_or(u64::MAX).max(subscribed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribed_floor_wins_over_low_usage() {
        assert_eq!(recommended_quantity(20, 250), 250);
    }

    #[test]
    fn headroom_wins_over_subscribed() {
        assert_eq!(recommended_quantity(300, 250), 360);
    }

    #[test]
    fn fractional_headroom_rounds_up() {
        // 7 * 1.2 = 8.4 -> 9
        assert_eq!(recommended_quantity(7, 0), 9);
    }

    #[test]
    fn exact_multiple_does_not_round_up() {
        // 5 * 1.2 = 6.0 exactly; a float implementation would give 7
        assert_eq!(recommended_quantity(5, 0), 6);
    }

    #[test]
    fn zero_usage_keeps_subscribed() {
        assert_eq!(recommended_quantity(0, 10), 10);
        assert_eq!(recommended_quantity(0, 0), 0);
    }
}
