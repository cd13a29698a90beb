use winit::event::MouseScrollDelta;
use winit::keyboard::{Key, NamedKey};

// Camera dolly per input unit (world units; positive moves closer)
pub const DOLLY_PER_LINE: f32 = 0.5;
pub const DOLLY_PER_PIXEL: f32 = 0.01;
pub const DOLLY_KEY_STEP: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Dolly(f32),
    TogglePause,
    TogglePolicy,
    Quit,
}

#[inline]
pub fn action_for_key(key: &Key) -> Option<Action> {
    match key {
        Key::Named(NamedKey::Escape) => Some(Action::Quit),
        Key::Named(NamedKey::Space) => Some(Action::TogglePause),
        Key::Named(NamedKey::ArrowUp) => Some(Action::Dolly(DOLLY_KEY_STEP)),
        Key::Named(NamedKey::ArrowDown) => Some(Action::Dolly(-DOLLY_KEY_STEP)),
        Key::Character(c) if c.eq_ignore_ascii_case("p") => Some(Action::TogglePolicy),
        _ => None,
    }
}

/// Scrolling up (positive y) dollies toward the funnel.
#[inline]
pub fn dolly_for_scroll(delta: &MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => *y * DOLLY_PER_LINE,
        MouseScrollDelta::PixelDelta(p) => p.y as f32 * DOLLY_PER_PIXEL,
    }
}
