// playback.rs - Timer state for continuous stepping

use anyhow::{ensure, Result};
use std::time::{Duration, Instant};

pub const DEFAULT_SPEED: f32 = 10.0;
/// Speed slider range, in generations per second.
pub const SPEED_RANGE: std::ops::RangeInclusive<f32> = 0.5..=60.0;

/// Decides when the next generation is due while playing.
#[derive(Debug, Clone)]
pub struct Playback {
    running: bool,
    /// Generations per second.
    speed: f32,
    last_update: Instant,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            running: false,
            speed: DEFAULT_SPEED,
            last_update: Instant::now(),
        }
    }
}

impl Playback {
    pub fn new(speed: f32) -> Result<Self> {
        let mut playback = Self::default();
        playback.set_speed(speed)?;
        Ok(playback)
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f32) -> Result<()> {
        ensure!(
            SPEED_RANGE.contains(&speed),
            "speed must be {} to {} generations per second, got {}",
            SPEED_RANGE.start(),
            SPEED_RANGE.end(),
            speed
        );
        self.speed = speed;
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs_f32(1.0 / self.speed)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self, now: Instant) {
        self.running = true;
        self.last_update = now;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.running {
            self.stop();
        } else {
            self.start(now);
        }
    }

    /// Returns whether a step is due at `now`, restarting the interval if so.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.running && now.saturating_duration_since(self.last_update) >= self.interval() {
            self.last_update = now;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_speeds() {
        assert!(Playback::new(0.0).is_err());
        assert!(Playback::new(-3.0).is_err());
        assert!(Playback::new(f32::NAN).is_err());
        let mut p = Playback::new(4.0).unwrap();
        assert!(p.set_speed(f32::INFINITY).is_err());
        assert_eq!(p.speed(), 4.0);
        assert_eq!(p.interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_rejects_speeds_outside_slider_range() {
        assert!(Playback::new(1e-30).is_err());
        assert!(Playback::new(0.49).is_err());
        assert!(Playback::new(1e30).is_err());
        let mut p = Playback::new(0.5).unwrap();
        assert!(p.set_speed(1e-30).is_err());
        assert_eq!(p.interval(), Duration::from_secs(2));
        assert!(p.set_speed(60.0).is_ok());
    }

    #[test]
    fn test_ticks_once_per_interval() {
        let t0 = Instant::now();
        let mut p = Playback::new(10.0).unwrap();
        assert!(!p.tick(t0 + Duration::from_secs(1)));

        p.start(t0);
        assert!(!p.tick(t0 + Duration::from_millis(50)));
        assert!(p.tick(t0 + Duration::from_millis(110)));
        assert!(!p.tick(t0 + Duration::from_millis(150)));
        assert!(p.tick(t0 + Duration::from_millis(230)));

        p.toggle(t0);
        assert!(!p.is_running());
        assert!(!p.tick(t0 + Duration::from_secs(5)));
    }
}
