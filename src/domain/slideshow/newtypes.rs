// SPDX-License-Identifier: MPL-2.0
//! Slideshow newtypes.
//!
//! Type-safe wrappers for rotation timing values, ensuring they are always
//! within valid ranges.

use std::time::Duration;

// =============================================================================
// Rotation Bounds
// =============================================================================

/// Rotation timing bounds, in milliseconds.
pub mod rotation_bounds {
    /// Default rotation period.
    pub const DEFAULT_INTERVAL_MS: u64 = 3000;
    /// Fixed crossfade duration at the end of every rotation period.
    pub const TRANSITION_MS: u64 = 750;
    /// Shortest rotation period: the crossfade must finish before the next
    /// one starts. There is no upper bound.
    pub const MIN_INTERVAL_MS: u64 = TRANSITION_MS + 1;
}

const _: () = {
    assert!(rotation_bounds::MIN_INTERVAL_MS > rotation_bounds::TRANSITION_MS);
    assert!(rotation_bounds::DEFAULT_INTERVAL_MS >= rotation_bounds::MIN_INTERVAL_MS);
};

/// Crossfade duration shared by every rotator.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(rotation_bounds::TRANSITION_MS);

// =============================================================================
// RotationInterval
// =============================================================================

/// Rotation period, guaranteed to outlast the crossfade.
///
/// # Example
///
/// ```
/// use iced_showcase::domain::slideshow::RotationInterval;
///
/// let interval = RotationInterval::new(5000);
/// assert_eq!(interval.millis(), 5000);
///
/// // Short and long periods are kept as given
/// assert_eq!(RotationInterval::new(900).millis(), 900);
/// assert_eq!(RotationInterval::new(120_000).millis(), 120_000);
///
/// // Periods the crossfade would overrun are raised to the minimum
/// let too_short = RotationInterval::new(10);
/// assert_eq!(too_short.millis(), 751);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationInterval(u64);

impl RotationInterval {
    /// Creates a new rotation interval, raising it to
    /// [`MIN_INTERVAL_MS`](rotation_bounds::MIN_INTERVAL_MS) if shorter.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.max(rotation_bounds::MIN_INTERVAL_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RotationInterval {
    fn default() -> Self {
        Self(rotation_bounds::DEFAULT_INTERVAL_MS)
    }
}

// =============================================================================
// TimerToken
// =============================================================================

/// Identifies one arming of a timer.
///
/// Tokens are minted in increasing order by the rotator. A timer callback
/// carrying a token that is no longer armed is stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(u64);

impl TimerToken {
    pub(crate) fn first() -> Self {
        Self(1)
    }

    pub(crate) fn succ(self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_raises_only_periods_the_crossfade_would_overrun() {
        assert_eq!(
            RotationInterval::new(0).millis(),
            rotation_bounds::MIN_INTERVAL_MS
        );
        assert_eq!(RotationInterval::new(750).millis(), 751);
        assert_eq!(RotationInterval::new(751).millis(), 751);
        assert_eq!(RotationInterval::new(900).millis(), 900);
        assert_eq!(RotationInterval::new(120_000).millis(), 120_000);
        assert_eq!(RotationInterval::new(u64::MAX).millis(), u64::MAX);
    }

    #[test]
    fn default_is_three_seconds() {
        assert_eq!(RotationInterval::default().millis(), 3000);
        assert_eq!(
            RotationInterval::default().as_duration(),
            Duration::from_secs(3)
        );
    }

    #[test]
    fn interval_always_outlasts_transition() {
        assert!(RotationInterval::new(1).as_duration() > TRANSITION_DURATION);
    }

    #[test]
    fn tokens_increase() {
        let first = TimerToken::first();
        let second = first.succ();
        assert!(second > first);
        assert_eq!(second.value(), first.value() + 1);
    }
}
