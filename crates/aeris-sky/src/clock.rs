//! Scaled simulation clock driving the sun.

/// Simulated time, advanced at a configurable multiple of real time.
///
/// The viewer starts its sky at noon on the summer solstice
/// (2024-06-21T12:00:00) and runs at 100x by default, so a full day of sky
/// passes in under fifteen minutes of wall time.
#[derive(Clone, Copy, Debug)]
pub struct SimClock {
    /// Simulated seconds per real second.
    pub time_scale: f64,
    /// Simulated seconds elapsed since the start instant.
    sim_seconds: f64,
}

/// Hour of day at the start instant (noon).
const START_HOUR: f64 = 12.0;

impl SimClock {
    /// Clock at the start instant with the given time scale.
    pub fn new(time_scale: f64) -> Self {
        Self {
            time_scale,
            sim_seconds: 0.0,
        }
    }

    /// Advance by `dt` real seconds.
    pub fn advance(&mut self, dt: f64) {
        self.sim_seconds += dt * self.time_scale;
    }

    /// Simulated seconds elapsed since the start instant.
    pub fn sim_seconds(&self) -> f64 {
        self.sim_seconds
    }

    /// Current simulated hour of day in `[0, 24)`.
    pub fn hour_of_day(&self) -> f64 {
        (START_HOUR + self.sim_seconds / 3600.0).rem_euclid(24.0)
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_noon() {
        let clock = SimClock::default();
        assert_eq!(clock.hour_of_day(), 12.0);
        assert_eq!(clock.sim_seconds(), 0.0);
    }

    #[test]
    fn test_advances_at_time_scale() {
        let mut clock = SimClock::new(100.0);
        clock.advance(36.0); // 36 real seconds = 3600 sim seconds
        assert!((clock.sim_seconds() - 3600.0).abs() < 1e-9);
        assert!((clock.hour_of_day() - 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_hour_wraps_past_midnight() {
        let mut clock = SimClock::new(100.0);
        // 13 sim hours from noon = 01:00 next day.
        clock.advance(13.0 * 36.0);
        assert!((clock.hour_of_day() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_unit_scale_tracks_real_time() {
        let mut clock = SimClock::new(1.0);
        clock.advance(7200.0);
        assert!((clock.hour_of_day() - 14.0).abs() < 1e-9);
    }
}
