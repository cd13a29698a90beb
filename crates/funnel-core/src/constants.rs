use glam::Vec3;

// Shared tuning constants for the funnel animation and the native frontend.

// Spiral shape
pub const SPIRAL_DEPTH: f32 = 5.6; // total drop from top (y = 0) to bottom (y = -5.6)
pub const SPIRAL_TAPER: f32 = 0.6; // radius shrinks from 1.0 to 1.0 - TAPER over one cycle

// Word styling
pub const WORD_SIZE_MIN: f32 = 0.05;
pub const WORD_SIZE_MAX: f32 = 0.10; // exclusive
pub const POOL_MULTIPLIER: usize = 2; // pool slots per distinct word

// Visible-count limits
pub const MIN_WORDS: usize = 20;
pub const INITIAL_VISIBLE_WORDS: usize = 100;
pub const MIN_DISTANCE: f32 = 5.0; // at or closer: whole pool visible
pub const MAX_DISTANCE: f32 = 15.0; // at or farther: MIN_WORDS visible

// Frame-rate feedback
pub const FPS_SAMPLE_INTERVAL_SEC: f64 = 1.0;
pub const FPS_LOW: f32 = 30.0;
pub const FPS_HIGH: f32 = 55.0;
pub const FPS_VISIBLE_STEP: usize = 10;

// Animation timing
pub const CYCLE_DURATION_SEC: f32 = 10.0;
pub const CYCLE_SPEED: f32 = 0.1;
pub const ROTATION_STEP_RAD: f32 = 0.01; // per frame, about +Y

// Scene layout
pub const GROUP_OFFSET: [f32; 3] = [0.0, 3.92, 0.0]; // centers the funnel in view

// Camera
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 9.8];
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_MIN_DISTANCE: f32 = 2.0;
pub const CAMERA_MAX_DISTANCE: f32 = 30.0;

// Deterministic styling unless the host asks otherwise
pub const DEFAULT_SEED: u64 = 42;

#[inline]
pub fn group_offset_vec3() -> Vec3 {
    Vec3::from(GROUP_OFFSET)
}
