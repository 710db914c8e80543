use framekit_ipc::ResizeMode;

use super::actions::plan;
use super::decorations::DrawParts;
use super::executor::execute_step;
use super::geometry::Rectangle;
use super::gravity::{resize_gravities, set_decor_gravities};
use crate::animation::ResizeAnimation;
use crate::protocol::FrameContext;
use crate::window::ManagedWindow;

/// Resizes the frame of `window` from `start` to `end`.
///
/// Runs every animation step to completion before returning, with a sync after each step.
/// `steps` is interpreted as described in [`step_count`](crate::animation::step_count).
pub fn resize(
    ctx: &mut FrameContext,
    window: &mut ManagedWindow,
    start: Rectangle,
    end: Rectangle,
    mode: ResizeMode,
    steps: i32,
) {
    let _span = tracy_client::span!("resize");

    trace!("start {start}");
    trace!("end   {end}");

    if ctx.protocol.shapes_supported() && window.state.is_shaped {
        ctx.screen.shape_helper(&mut *ctx.protocol);
    }

    let end = end.clamped();
    let Some(animation) = ResizeAnimation::new(start, end, mode, steps) else {
        trace!("size of {:?} unchanged, nothing to do", window.id());
        return;
    };

    let grav = resize_gravities(window.style.title_direction(), mode);
    set_decor_gravities(&mut *ctx.protocol, window, &grav);

    let has_focus = ctx.focus.focused() == Some(window.id());
    let delta = animation.delta();
    let actions = plan(
        delta,
        mode,
        window.is_hidden(&start),
        window.is_hidden(&end),
        has_focus,
    );
    debug!(
        "resizing {:?} in {mode} mode, {} steps, {} actions",
        window.id(),
        animation.step_count(),
        actions.len()
    );

    let mut current = window.state.geometry;
    for step in animation.steps() {
        execute_step(
            ctx,
            window,
            &actions,
            &step.rect,
            &current,
            step.is_first,
            step.is_last,
        );
        ctx.protocol.sync();
        current = step.rect;
    }

    window.state.geometry = end;
    window.state.client_size = end.size().shrink_max1(window.borders().total_size);

    if delta.width != 0 || delta.height != 0 || mode != ResizeMode::Opaque {
        let is_active = ctx.focus.focused() == Some(window.id());
        ctx.painter
            .draw(window.id(), DrawParts::FRAME | DrawParts::BUTTONS, is_active);
    }
}
