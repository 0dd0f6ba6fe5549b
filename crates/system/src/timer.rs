//! Frame timing utilities
//!
//! The render loop has no fixed timestep: every frame simply measures the
//! wall-clock time since the previous one.

use std::time::{Duration, Instant};

/// Frames per second for a given frame delta
///
/// A zero delta (the very first frame, or two frames inside one clock tick)
/// reports 0 rather than infinity.
#[inline]
pub fn fps_from_delta(delta_time: f32) -> f32 {
    if delta_time > 0.0 {
        1.0 / delta_time
    } else {
        0.0
    }
}

/// Timer for tracking frame timing
///
/// Provides delta time, elapsed time and frame counting.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    /// When the timer was started
    start_time: Instant,
    /// When the last frame was recorded
    last_frame_time: Instant,
    /// Delta time for the current frame
    delta_time: Duration,
    /// Total elapsed time since start
    elapsed: Duration,
    /// Current frame number
    frame_count: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTimer {
    /// Create a new frame timer, starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame_time: now,
            delta_time: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Call at the start of each frame to update timing
    ///
    /// Returns the delta time for this frame.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Update timing as if the frame started at `now`
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.delta_time = now.saturating_duration_since(self.last_frame_time);
        self.elapsed = now.saturating_duration_since(self.start_time);
        self.last_frame_time = now;
        self.frame_count += 1;
        self.delta_time.as_secs_f32()
    }

    /// Get the total elapsed time since the timer was created
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }

    /// Get the number of frames ticked so far
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average frames per second based on elapsed time
    #[inline]
    pub fn average_fps(&self) -> f32 {
        if self.elapsed.is_zero() {
            0.0
        } else {
            self.frame_count as f32 / self.elapsed.as_secs_f32()
        }
    }

    /// Reset the timer to its initial state
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_from_delta() {
        assert_eq!(fps_from_delta(0.0), 0.0);
        assert!((fps_from_delta(0.016) - 62.5).abs() < 0.01);
        assert_eq!(fps_from_delta(-1.0), 0.0);
    }

    #[test]
    fn test_frame_timer() {
        let mut timer = FrameTimer::new();
        assert_eq!(timer.frame_count(), 0);
        assert_eq!(timer.average_fps(), 0.0);

        for _ in 0..3 {
            let _dt = timer.tick();
        }

        assert_eq!(timer.frame_count(), 3);
        assert!(timer.elapsed() >= 0.0);
    }

    #[test]
    fn test_tick_at_measures_wall_clock_delta() {
        let mut timer = FrameTimer::new();
        let start = timer.start_time;

        let dt = timer.tick_at(start + Duration::from_millis(20));
        assert!((dt - 0.020).abs() < 1e-6);
        assert!((fps_from_delta(dt) - 50.0).abs() < 0.01);

        let dt = timer.tick_at(start + Duration::from_millis(30));
        assert!((dt - 0.010).abs() < 1e-6);
        assert!((timer.elapsed() - 0.030).abs() < 1e-6);
        assert!((timer.average_fps() - 2.0 / 0.030).abs() < 0.1);
    }

    #[test]
    fn test_same_instant_gives_zero_fps() {
        let mut timer = FrameTimer::new();
        let start = timer.start_time;
        let dt = timer.tick_at(start);
        assert_eq!(dt, 0.0);
        assert_eq!(fps_from_delta(dt), 0.0);
        assert_eq!(timer.average_fps(), 0.0);
    }

    #[test]
    fn test_frame_timer_reset() {
        let mut timer = FrameTimer::new();
        timer.tick();
        timer.tick();
        assert_eq!(timer.frame_count(), 2);

        timer.reset();
        assert_eq!(timer.frame_count(), 0);
    }
}
