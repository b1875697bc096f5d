use std::cell::Cell;
use std::time::Instant;

/// Source of "current time in seconds" for the animation step
pub trait TimeSource {
    fn now_seconds(&self) -> f64;
}

/// Unix epoch time in seconds with millisecond resolution
#[derive(Debug, Default, Clone, Copy)]
pub struct WallClock;

impl TimeSource for WallClock {
    fn now_seconds(&self) -> f64 {
        chrono::Utc::now().timestamp_millis() as f64 * 0.001
    }
}

/// Hand-driven clock for tests and headless runs
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, seconds: f64) {
        self.now.set(seconds);
    }

    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl TimeSource for ManualClock {
    fn now_seconds(&self) -> f64 {
        self.now.get()
    }
}

/// Minimal frame clock - just tracks delta time
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Delta in seconds since the previous tick; advances the clock
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

pub const FPS_UPDATE_INTERVAL: f32 = 1.0;

/// Frames-per-second averaged over `FPS_UPDATE_INTERVAL`
#[derive(Debug, Default, Clone, Copy)]
pub struct FpsCounter {
    frame_count: u32,
    elapsed: f32,
    fps: f32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one frame; returns the new average when the window closes
    pub fn update(&mut self, delta: f32) -> Option<f32> {
        self.frame_count += 1;
        self.elapsed += delta;

        if self.elapsed >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.elapsed;
            self.frame_count = 0;
            self.elapsed = 0.0;
            Some(self.fps)
        } else {
            None
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    pub fn frame_time_ms(&self) -> f32 {
        if self.fps > 0.0 {
            1000.0 / self.fps
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        assert!(delta >= 0.009);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        assert!(clock.tick() < 0.009);
    }

    #[test]
    fn wall_clock_is_epoch_seconds() {
        // Well after 2020-01-01
        assert!(WallClock.now_seconds() > 1_577_836_800.0);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(100.0);
        clock.advance(0.5);
        assert_eq!(clock.now_seconds(), 100.5);
        clock.set(3.0);
        assert_eq!(clock.now_seconds(), 3.0);
    }

    #[test]
    fn fps_counter_reports_once_per_interval() {
        let mut counter = FpsCounter::new();
        let mut frames = 0;
        let fps = loop {
            frames += 1;
            assert!(frames <= 51, "no report after {} frames", frames);
            if let Some(fps) = counter.update(0.02) {
                break fps;
            }
        };

        assert!((fps - 50.0).abs() < 1.0);
        assert!((counter.frame_time_ms() - 20.0).abs() < 0.5);
        assert_eq!(counter.update(0.02), None);
    }
}
