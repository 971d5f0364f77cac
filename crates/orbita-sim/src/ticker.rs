//! Fixed-cadence frame ticker driving one sample per frame.
//!
//! Yields step indices `0..total_frames` once each. In realtime mode the
//! ticker sleeps so consecutive frames are at least one interval apart; a
//! frame that arrives later than that is not made up for.

use std::time::{Duration, Instant};
use tracing::warn;

/// Frames arriving this many intervals late are reported.
pub const LATE_FRAME_FACTOR: u32 = 5;

/// Hands out frame steps at a fixed interval.
pub struct FrameTicker {
    interval: Duration,
    realtime: bool,
    total_frames: u64,
    next_step: u64,
    previous_frame: Option<Instant>,
}

impl FrameTicker {
    pub fn new(total_frames: u64, interval: Duration, realtime: bool) -> Self {
        Self {
            interval,
            realtime,
            total_frames,
            next_step: 0,
            previous_frame: None,
        }
    }

    /// Step index of the next frame, or `None` after the last frame.
    pub fn tick(&mut self) -> Option<u64> {
        if self.next_step >= self.total_frames {
            return None;
        }

        if self.realtime {
            self.pace();
        }

        let step = self.next_step;
        self.next_step += 1;
        Some(step)
    }

    fn pace(&mut self) {
        if let Some(previous) = self.previous_frame {
            let elapsed = previous.elapsed();
            if elapsed < self.interval {
                std::thread::sleep(self.interval - elapsed);
            } else if elapsed > self.interval * LATE_FRAME_FACTOR {
                warn!(
                    "Frame {} is {:.1}ms late",
                    self.next_step,
                    (elapsed - self.interval).as_secs_f64() * 1000.0
                );
            }
        }
        self.previous_frame = Some(Instant::now());
    }

    /// Frames handed out so far.
    pub fn frame_count(&self) -> u64 {
        self.next_step
    }

    pub fn remaining(&self) -> u64 {
        self.total_frames - self.next_step
    }

    pub fn is_finished(&self) -> bool {
        self.next_step >= self.total_frames
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Iterator for FrameTicker {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.tick()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_sequential() {
        let ticker = FrameTicker::new(5, Duration::from_millis(20), false);
        assert_eq!(ticker.collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_finished_after_last_frame() {
        let mut ticker = FrameTicker::new(2, Duration::ZERO, false);
        assert_eq!(ticker.remaining(), 2);
        ticker.tick();
        ticker.tick();
        assert!(ticker.is_finished());
        assert_eq!(ticker.tick(), None);
        assert_eq!(ticker.frame_count(), 2);
    }

    #[test]
    fn test_zero_frames() {
        let mut ticker = FrameTicker::new(0, Duration::ZERO, true);
        assert_eq!(ticker.tick(), None);
    }

    #[test]
    fn test_realtime_keeps_interval() {
        let interval = Duration::from_millis(5);
        let start = Instant::now();
        let frames = FrameTicker::new(4, interval, true).count();
        assert_eq!(frames, 4);
        // The first frame is immediate, the other three wait one interval each.
        assert!(start.elapsed() >= interval * 3);
    }
}
