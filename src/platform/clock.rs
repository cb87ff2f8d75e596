//! Display-synchronized frame clock
//!
//! Turns the host's per-frame timestamps (milliseconds, as handed out by
//! an animation-frame callback) into a `dt` in seconds.

/// Tracks the previous frame timestamp
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds since the previous frame. The first frame yields 0, as does
    /// a timestamp that goes backwards or is not finite.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        if !timestamp_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_ms {
            Some(last) => ((timestamp_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        dt as f32
    }

    /// Forget the previous timestamp (e.g. after the host was suspended)
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.advance(12345.0), 0.0);
        assert!((clock.advance(12361.0) - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_and_nan() {
        let mut clock = FrameClock::new();
        clock.advance(1000.0);
        assert_eq!(clock.advance(900.0), 0.0);
        assert_eq!(clock.advance(f64::NAN), 0.0);
        assert!((clock.advance(1000.0) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::new();
        clock.advance(0.0);
        clock.reset();
        assert_eq!(clock.advance(5000.0), 0.0);
    }
}
