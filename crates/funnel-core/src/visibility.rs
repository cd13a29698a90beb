//! Decides how many leading pool slots are shown each frame.
//!
//! Two signals feed the visible count: camera distance (every frame) and a
//! coarse frame-rate sample (about once a second). How they combine is chosen
//! by [`VisibilityPolicy`].

use crate::constants::{
    FPS_HIGH, FPS_LOW, FPS_SAMPLE_INTERVAL_SEC, FPS_VISIBLE_STEP, MAX_DISTANCE, MIN_DISTANCE,
    MIN_WORDS,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisibilityPolicy {
    /// The distance-derived count replaces whatever the frame-rate sampler
    /// wrote, every frame.
    #[default]
    DistanceOverrides,
    /// The frame-rate sampler maintains a budget and the distance-derived
    /// count may not exceed it.
    FrameRateBudget,
}

impl VisibilityPolicy {
    pub fn toggled(self) -> Self {
        match self {
            Self::DistanceOverrides => Self::FrameRateBudget,
            Self::FrameRateBudget => Self::DistanceOverrides,
        }
    }
}

/// Floor at `MIN_WORDS`, then cap at the pool length. A pool smaller than
/// `MIN_WORDS` therefore shows every slot.
#[inline]
pub fn clamp_visible(count: usize, pool_len: usize) -> usize {
    count.max(MIN_WORDS).min(pool_len)
}

/// Linear map from camera distance to a word count: closer shows more.
///
/// Distances outside `[MIN_DISTANCE, MAX_DISTANCE]` are not clamped up front;
/// the result is clamped instead, so any input yields a valid count.
pub fn visible_from_distance(distance: f32, pool_len: usize) -> usize {
    let max_words = pool_len as f32;
    let min_words = MIN_WORDS as f32;
    let raw = ((MAX_DISTANCE - distance) / (MAX_DISTANCE - MIN_DISTANCE)) * (max_words - min_words)
        + min_words;
    // NaN and negatives saturate to 0 here and are lifted by the clamp
    let words = raw.floor().max(0.0) as usize;
    clamp_visible(words, pool_len)
}

/// Step the visible count by the frame-rate rule: below `FPS_LOW` shed
/// `FPS_VISIBLE_STEP` words, above `FPS_HIGH` add as many.
pub fn adjust_for_fps(current: usize, fps: f32, pool_len: usize) -> usize {
    let next = if fps < FPS_LOW {
        current.saturating_sub(FPS_VISIBLE_STEP).max(MIN_WORDS)
    } else if fps > FPS_HIGH {
        (current + FPS_VISIBLE_STEP).min(pool_len)
    } else {
        current
    };
    clamp_visible(next, pool_len)
}

/// Counts frames over a fixed window and reports the average rate.
#[derive(Clone, Debug)]
pub struct FrameRateSampler {
    interval_sec: f64,
    window_start_sec: Option<f64>,
    frames: u32,
}

impl Default for FrameRateSampler {
    fn default() -> Self {
        Self::new(FPS_SAMPLE_INTERVAL_SEC)
    }
}

impl FrameRateSampler {
    pub fn new(interval_sec: f64) -> Self {
        Self {
            interval_sec,
            window_start_sec: None,
            frames: 0,
        }
    }

    /// Count one frame at `now_sec`. Returns the frame rate once a full
    /// interval has elapsed, then starts a new window.
    ///
    /// The first call only opens the sampling window.
    pub fn record_frame(&mut self, now_sec: f64) -> Option<f32> {
        let Some(start) = self.window_start_sec else {
            self.window_start_sec = Some(now_sec);
            return None;
        };
        self.frames += 1;
        let elapsed = now_sec - start;
        if elapsed < self.interval_sec || elapsed <= 0.0 {
            return None;
        }
        let fps = (self.frames as f64 / elapsed) as f32;
        self.frames = 0;
        self.window_start_sec = Some(now_sec);
        Some(fps)
    }

    pub fn reset(&mut self) {
        self.window_start_sec = None;
        self.frames = 0;
    }
}
