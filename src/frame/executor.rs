//! Applies planned actions to the sub-windows of a frame.

use super::actions::{Action, Axes, ResizeActionList};
use super::configure_border;
use super::decorations::title_length;
use super::geometry::{Axis, Rectangle, Size};
use crate::protocol::FrameContext;
use crate::window::ManagedWindow;

/// Picks the new extent on the given axes and the previous one on the others.
fn size_for(axes: Axes, new: &Rectangle, old: &Rectangle) -> Size {
    match axes {
        Axes::X => Size::new(new.width, old.height),
        Axes::Y => Size::new(old.width, new.height),
        Axes::Both => new.size(),
    }
}

/// Runs one action for a step towards `new`.
///
/// `old` is the geometry the frame has on screen. [`Action::MoveResizeFrame`] commits `new` to
/// it.
pub fn execute_action(
    ctx: &mut FrameContext,
    window: &ManagedWindow,
    action: Action,
    new: &Rectangle,
    old: &mut Rectangle,
) {
    trace!("{action} towards {new}");

    let handles = &window.handles;
    let style = &window.style;
    let total = window.borders().total_size;

    match action {
        Action::RaiseContainer => ctx.protocol.raise_window(handles.parent),
        Action::LowerContainer => ctx.protocol.lower_window(handles.parent),
        Action::SetupHidden => trace!("container of {:?} changes visibility", window.id()),
        Action::ResizeTitle(axis) => {
            let Some(title) = handles.title else { return };
            if !style.has_title || (axis == Axis::Y) != style.has_vertical_title() {
                return;
            }

            let length = title_length(style, new.size());
            let thickness = style.title_thickness.max(1);
            match axis {
                Axis::X => ctx.protocol.resize_window(title, length, thickness),
                Axis::Y => ctx.protocol.resize_window(title, thickness, length),
            }
        }
        Action::ResizeDecorations(axes) => {
            configure_border(&mut *ctx.protocol, window, size_for(axes, new, old));
        }
        Action::ResizeClient(axes) => {
            let size = size_for(axes, new, old).shrink_max1(total);
            ctx.protocol
                .resize_window(handles.client, size.width, size.height);
            ctx.protocol.flush();
        }
        Action::ResizeContainer(axes) => {
            let size = size_for(axes, new, old).shrink_max1(total);
            ctx.protocol
                .resize_window(handles.parent, size.width, size.height);
        }
        Action::MoveResizeFrame => {
            ctx.protocol.move_resize_window(handles.frame, *new);
            *old = *new;
        }
        Action::RestoreFocus => {
            ctx.focus
                .set_focus(&mut *ctx.protocol, window.id(), handles.client);
        }
    }
}

/// Runs the actions live in one animation step.
///
/// `current` is the frame geometry before the step.
pub fn execute_step(
    ctx: &mut FrameContext,
    window: &ManagedWindow,
    actions: &ResizeActionList,
    new: &Rectangle,
    current: &Rectangle,
    is_first_step: bool,
    is_last_step: bool,
) {
    let mut old = *current;
    for action in actions.live(is_first_step, is_last_step) {
        execute_action(ctx, window, action, new, &mut old);
    }
}
