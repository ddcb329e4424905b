//! Rational time bases and timestamp rescaling.

use std::fmt;

/// A rational number of seconds per tick, the unit timestamps count in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub num: i32,
    pub den: i32,
}

impl Rational {
    pub const fn new(num: i32, den: i32) -> Self {
        Self { num, den }
    }

    /// A time base is usable when both terms are positive.
    pub fn is_valid(&self) -> bool {
        self.num > 0 && self.den > 0
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Rescale a tick count from one time base to another.
///
/// Rounds half away from zero. Each call rounds independently, so summing
/// rescaled pieces can drift from rescaling the whole; callers that care
/// (like the sample sink) re-anchor instead of accumulating.
pub fn rescale(ticks: i64, from: Rational, to: Rational) -> i64 {
    debug_assert!(from.is_valid() && to.is_valid());
    let num = ticks as i128 * from.num as i128 * to.den as i128;
    let den = from.den as i128 * to.num as i128;
    round_div(num, den)
}

/// Ticks of `time_base` covered by `frames` sample frames at `sample_rate`.
pub fn samples_to_ticks(frames: usize, sample_rate: u32, time_base: Rational) -> i64 {
    rescale(
        frames as i64,
        Rational::new(1, sample_rate as i32),
        time_base,
    )
}

// den must be positive; valid time bases guarantee that.
fn round_div(num: i128, den: i128) -> i64 {
    let half = den / 2;
    let q = if num >= 0 {
        (num + half) / den
    } else {
        -((-num + half) / den)
    };
    q as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rescale_identity() {
        let tb = Rational::new(1, 48000);
        assert_eq!(rescale(12345, tb, tb), 12345);
        assert_eq!(rescale(-7, tb, tb), -7);
        assert_eq!(rescale(0, tb, tb), 0);
    }

    #[test]
    fn test_rescale_rounds_half_away_from_zero() {
        // 1 tick of 1/90000 is exactly 0.5 ticks of 1/45000
        assert_eq!(
            rescale(1, Rational::new(1, 90000), Rational::new(1, 45000)),
            1
        );
        assert_eq!(
            rescale(-1, Rational::new(1, 90000), Rational::new(1, 45000)),
            -1
        );
        // 1.875 rounds up, -1.875 rounds down
        assert_eq!(
            rescale(1, Rational::new(1, 48000), Rational::new(1, 90000)),
            2
        );
        assert_eq!(
            rescale(-1, Rational::new(1, 48000), Rational::new(1, 90000)),
            -2
        );
    }

    #[test]
    fn test_rescale_large_counts_do_not_overflow_intermediates() {
        // A day of 90kHz ticks into microseconds and back
        let day_ticks: i64 = 90_000 * 60 * 60 * 24;
        let us = rescale(day_ticks, Rational::new(1, 90_000), Rational::new(1, 1_000_000));
        assert_eq!(us, 86_400_000_000);
        assert_eq!(
            rescale(us, Rational::new(1, 1_000_000), Rational::new(1, 90_000)),
            day_ticks
        );
    }

    #[test]
    fn test_samples_to_ticks() {
        // 48 frames at 48kHz is one millisecond
        assert_eq!(samples_to_ticks(48, 48000, Rational::new(1, 1000)), 1);
        // identity base passes frame counts through
        assert_eq!(samples_to_ticks(1024, 44100, Rational::new(1, 44100)), 1024);
        assert_eq!(samples_to_ticks(0, 48000, Rational::new(1, 1000)), 0);
    }

    #[test]
    fn test_piecewise_rescale_drift_is_bounded() {
        // Rescaling chunk by chunk may differ from rescaling the total,
        // but never by more than half a tick per chunk.
        let from = Rational::new(1, 44100);
        let to = Rational::new(1, 30);
        let chunks = [1000usize, 441, 999, 57, 1024, 333, 41246];
        let total: usize = chunks.iter().sum();

        let piecewise: i64 = chunks
            .iter()
            .map(|&n| rescale(n as i64, from, to))
            .sum();
        let whole = rescale(total as i64, from, to);

        let drift = (piecewise - whole).abs();
        assert!(
            drift <= chunks.len() as i64,
            "drift {} exceeds chunk count {}",
            drift,
            chunks.len()
        );
    }
}
