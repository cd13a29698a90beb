use crate::constants::{POOL_MULTIPLIER, WORD_SIZE_MAX, WORD_SIZE_MIN};
use crate::error::{FunnelError, Result};
use glam::Vec3;
use rand::prelude::*;

/// One reusable word instance. The slot's index in its [`WordPool`] doubles as
/// the handle the renderer keys its drawable by.
#[derive(Clone, Debug)]
pub struct PoolSlot {
    pub text: String,
    pub color_rgb: [f32; 3],
    pub size: f32,
    pub position: Vec3,
    pub visible: bool,
}

/// Fixed-size set of word slots, twice as many as there are distinct words.
#[derive(Clone, Debug)]
pub struct WordPool {
    slots: Vec<PoolSlot>,
    word_count: usize,
}

impl WordPool {
    pub fn build<R: Rng>(tokens: &[String], rng: &mut R) -> Result<Self> {
        if tokens.is_empty() {
            return Err(FunnelError::EmptyText);
        }
        let word_count = tokens.len();
        let slots = (0..word_count * POOL_MULTIPLIER)
            .map(|i| PoolSlot {
                text: tokens[i % word_count].clone(),
                color_rgb: [rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>()],
                size: rng.gen_range(WORD_SIZE_MIN..WORD_SIZE_MAX),
                position: Vec3::ZERO,
                visible: false,
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[pool] built {} slots from {} words",
            slots.len(),
            word_count
        );
        Ok(Self { slots, word_count })
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of distinct words the pool was built from.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn slots(&self) -> &[PoolSlot] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&PoolSlot> {
        self.slots.get(index)
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [PoolSlot] {
        &mut self.slots
    }

    pub fn visible_slots(&self) -> impl Iterator<Item = (usize, &PoolSlot)> {
        self.slots.iter().enumerate().filter(|(_, s)| s.visible)
    }
}
