//! GPU-facing layouts for the word billboards, matched by `shaders/words.wgsl`.

use crate::pool::WordPool;
use glam::{Mat4, Vec3};

/// Approximate advance of one glyph relative to the font size.
pub const GLYPH_ASPECT: f32 = 0.6;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Uniforms {
    pub view_proj: [[f32; 4]; 4],
    pub cam_right: [f32; 4],
    pub cam_up: [f32; 4],
}

impl Uniforms {
    pub fn new(view_proj: Mat4, cam_right: Vec3, cam_up: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            cam_right: cam_right.extend(0.0).to_array(),
            cam_up: cam_up.extend(0.0).to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct WordInstance {
    pub pos: [f32; 3],
    pub width: f32,
    pub color: [f32; 4],
    pub height: f32,
    pub _pad: [f32; 3],
}

/// Width of a word's billboard in world units.
#[inline]
pub fn word_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * GLYPH_ASPECT
}

/// Append one instance per visible slot, placed in world space by `model`.
pub fn build_word_instances(pool: &WordPool, model: Mat4, out: &mut Vec<WordInstance>) {
    for (_, slot) in pool.visible_slots() {
        let [r, g, b] = slot.color_rgb;
        out.push(WordInstance {
            pos: model.transform_point3(slot.position).to_array(),
            width: word_width(&slot.text, slot.size),
            color: [r, g, b, 1.0],
            height: slot.size,
            _pad: [0.0; 3],
        });
    }
}
