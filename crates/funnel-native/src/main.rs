use std::time::Instant;

use anyhow::Context;
use funnel_core::{AnimatorParams, Camera, FunnelAnimator, FunnelError, SlotUpdate, DEFAULT_TEXT};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

mod input;
mod render;

use input::Action;

fn load_text() -> anyhow::Result<String> {
    match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read text from {path}")),
        None => Ok(DEFAULT_TEXT.to_owned()),
    }
}

fn build_animator(text: &str) -> anyhow::Result<FunnelAnimator> {
    match FunnelAnimator::from_text(text, AnimatorParams::default()) {
        Err(FunnelError::EmptyText) => {
            log::warn!("source text has no words; using the built-in text");
            Ok(FunnelAnimator::from_text(
                DEFAULT_TEXT,
                AnimatorParams::default(),
            )?)
        }
        other => Ok(other?),
    }
}

fn apply_action(
    action: Action,
    camera: &mut Camera,
    animator: &mut FunnelAnimator,
    elwt: &winit::event_loop::EventLoopWindowTarget<()>,
) {
    match action {
        Action::Dolly(amount) => camera.dolly(amount),
        Action::TogglePause => {
            animator.clock_mut().toggle_pause();
            log::info!("paused: {}", animator.clock().is_paused());
        }
        Action::TogglePolicy => animator.set_policy(animator.policy().toggled()),
        Action::Quit => elwt.exit(),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let text = load_text()?;
    let mut animator = build_animator(&text)?;
    log::info!(
        "[funnel] words={} pool={} visible={}",
        animator.pool().word_count(),
        animator.pool().len(),
        animator.visible_count()
    );

    let event_loop = EventLoop::new().context("event loop")?;
    let window = WindowBuilder::new()
        .with_title("Word Funnel")
        .build(&event_loop)
        .context("window")?;

    let mut state = pollster::block_on(render::GpuState::new(&window, animator.pool().len()))?;
    let mut camera = Camera {
        aspect: state.aspect(),
        ..Camera::default()
    };
    let start = Instant::now();
    let mut last = start;
    let mut updates: Vec<SlotUpdate> = Vec::with_capacity(animator.pool().len());

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::Resized(size),
            ..
        } => {
            state.resize(size);
            camera.aspect = state.aspect();
        }
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent {
            event:
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            logical_key,
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                },
            ..
        } => {
            if let Some(action) = input::action_for_key(&logical_key) {
                apply_action(action, &mut camera, &mut animator, elwt);
            }
        }
        Event::WindowEvent {
            event: WindowEvent::MouseWheel { delta, .. },
            ..
        } => camera.dolly(input::dolly_for_scroll(&delta)),
        Event::AboutToWait => {
            let now = Instant::now();
            let dt = now - last;
            last = now;

            // Sampler first: the distance pass inside `tick` has the last word
            if let Some(fps) = animator.record_frame(start.elapsed().as_secs_f64()) {
                let shown = updates.iter().filter(|u| u.visible).count();
                state.window.set_title(&format!(
                    "Word Funnel - {shown}/{} words, {fps:.0} fps",
                    animator.pool().len()
                ));
            }
            let distance = camera.distance_to(animator.group_origin());
            updates.clear();
            animator.tick(dt, distance, &mut updates);

            match state.render(&camera, &animator) {
                Ok(_) => state.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("surface out of memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("frame skipped: {e:?}"),
            }
        }
        _ => {}
    })?;
    Ok(())
}
