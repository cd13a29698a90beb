use crate::clock::AnimationClock;
use crate::constants::{
    group_offset_vec3, CYCLE_DURATION_SEC, CYCLE_SPEED, DEFAULT_SEED, INITIAL_VISIBLE_WORDS,
    ROTATION_STEP_RAD,
};
use crate::error::Result;
use crate::pool::WordPool;
use crate::spiral::{is_inside_span, position_at};
use crate::text::tokenize;
use crate::visibility::{
    adjust_for_fps, clamp_visible, visible_from_distance, FrameRateSampler, VisibilityPolicy,
};
use glam::{Mat4, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AnimatorParams {
    /// Multiplier applied to elapsed seconds before wrapping into a cycle.
    pub speed: f32,
    /// Length of one cycle in scaled seconds.
    pub duration: f32,
    /// Group rotation about +Y per frame, in radians.
    pub rotation_step: f32,
    pub initial_visible: usize,
    pub policy: VisibilityPolicy,
    pub seed: u64,
}

impl Default for AnimatorParams {
    fn default() -> Self {
        Self {
            speed: CYCLE_SPEED,
            duration: CYCLE_DURATION_SEC,
            rotation_step: ROTATION_STEP_RAD,
            initial_visible: INITIAL_VISIBLE_WORDS,
            policy: VisibilityPolicy::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// New state of one slot after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotUpdate {
    pub index: usize,
    pub position: Vec3,
    pub visible: bool,
}

pub struct FunnelAnimator {
    pub params: AnimatorParams,
    pool: WordPool,
    clock: AnimationClock,
    sampler: FrameRateSampler,
    rng: StdRng,
    rotation_y: f32,
    visible_count: usize,
    // Only consulted under `VisibilityPolicy::FrameRateBudget`
    fps_budget: usize,
    last_fps: Option<f32>,
}

impl FunnelAnimator {
    pub fn new(tokens: &[String], params: AnimatorParams) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(params.seed);
        let pool = WordPool::build(tokens, &mut rng)?;
        let visible_count = clamp_visible(params.initial_visible, pool.len());
        Ok(Self {
            clock: AnimationClock::new(params.speed, params.duration),
            sampler: FrameRateSampler::default(),
            rng,
            rotation_y: 0.0,
            visible_count,
            fps_budget: visible_count,
            last_fps: None,
            pool,
            params,
        })
    }

    pub fn from_text(text: &str, params: AnimatorParams) -> Result<Self> {
        Self::new(&tokenize(text), params)
    }

    /// Replace the word list. The pool is rebuilt from scratch; clock and
    /// rotation carry on.
    pub fn set_words(&mut self, tokens: &[String]) -> Result<()> {
        self.pool = WordPool::build(tokens, &mut self.rng)?;
        self.visible_count = clamp_visible(self.visible_count, self.pool.len());
        self.fps_budget = clamp_visible(self.fps_budget, self.pool.len());
        Ok(())
    }

    pub fn pool(&self) -> &WordPool {
        &self.pool
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn fps_budget(&self) -> usize {
        self.fps_budget
    }

    pub fn last_fps(&self) -> Option<f32> {
        self.last_fps
    }

    pub fn rotation_y(&self) -> f32 {
        self.rotation_y
    }

    pub fn phase(&self) -> f32 {
        self.clock.phase()
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut AnimationClock {
        &mut self.clock
    }

    pub fn policy(&self) -> VisibilityPolicy {
        self.params.policy
    }

    pub fn set_policy(&mut self, policy: VisibilityPolicy) {
        if policy != self.params.policy {
            log::info!("[visibility] policy {:?} -> {:?}", self.params.policy, policy);
            self.fps_budget = self.visible_count;
        }
        self.params.policy = policy;
    }

    /// Reference point the host measures camera distance from.
    pub fn group_origin(&self) -> Vec3 {
        group_offset_vec3()
    }

    /// Model matrix of the whole funnel: offset, then spin about +Y.
    pub fn group_transform(&self) -> Mat4 {
        Mat4::from_translation(group_offset_vec3()) * Mat4::from_rotation_y(self.rotation_y)
    }

    /// Feed the frame-rate sampler. Call once per rendered frame, before
    /// [`tick`](Self::tick). Returns the measured rate when a sample completes.
    pub fn record_frame(&mut self, now_sec: f64) -> Option<f32> {
        let fps = self.sampler.record_frame(now_sec)?;
        self.last_fps = Some(fps);
        let len = self.pool.len();
        match self.params.policy {
            VisibilityPolicy::DistanceOverrides => {
                let next = adjust_for_fps(self.visible_count, fps, len);
                if next != self.visible_count {
                    log::info!(
                        "[visibility] fps={:.1} visible {} -> {}",
                        fps,
                        self.visible_count,
                        next
                    );
                }
                self.visible_count = next;
            }
            VisibilityPolicy::FrameRateBudget => {
                let next = adjust_for_fps(self.fps_budget, fps, len);
                if next != self.fps_budget {
                    log::info!(
                        "[visibility] fps={:.1} budget {} -> {}",
                        fps,
                        self.fps_budget,
                        next
                    );
                }
                self.fps_budget = next;
            }
        }
        Some(fps)
    }

    /// Advance one frame and lay out the pool.
    ///
    /// Every slot gets exactly one entry in `out`, in pool order. The caller
    /// owns `out` and is expected to clear it between frames.
    pub fn tick(&mut self, dt: Duration, camera_distance: f32, out: &mut Vec<SlotUpdate>) {
        if !self.clock.is_paused() {
            self.rotation_y = (self.rotation_y + self.params.rotation_step).rem_euclid(TAU);
        }
        self.clock.advance(dt);
        let base_phase = self.clock.phase();

        let len = self.pool.len();
        let from_distance = visible_from_distance(camera_distance, len);
        self.visible_count = match self.params.policy {
            VisibilityPolicy::DistanceOverrides => from_distance,
            VisibilityPolicy::FrameRateBudget => {
                clamp_visible(from_distance.min(self.fps_budget), len)
            }
        };

        debug_assert!(self.visible_count > 0 || len == 0);
        let visible_count = self.visible_count;
        let spacing = 1.0 / visible_count.max(1) as f32;

        out.reserve(len);
        for (i, slot) in self.pool.slots_mut().iter_mut().enumerate() {
            if i < visible_count {
                let t = (base_phase + i as f32 * spacing) % 1.0;
                let position = position_at(t);
                slot.position = position;
                slot.visible = is_inside_span(position.y);
            } else {
                slot.visible = false;
            }
            out.push(SlotUpdate {
                index: i,
                position: slot.position,
                visible: slot.visible,
            });
        }
    }

    /// Allocating convenience over [`tick`](Self::tick).
    pub fn step(&mut self, dt: Duration, camera_distance: f32) -> Vec<SlotUpdate> {
        let mut out = Vec::with_capacity(self.pool.len());
        self.tick(dt, camera_distance, &mut out);
        out
    }
}
