//! Frame geometry: layout, gravities and resizing of decorated window frames.

use framekit_ipc::{Event, ResizeMode};

use self::decorations::{layout_border, layout_title_bar, sidebar_geometry};
use self::geometry::{Rectangle, Size};
use self::shape::setup_shape;
use crate::protocol::{FrameContext, Protocol};
use crate::window::ManagedWindow;

pub mod actions;
pub mod borders;
pub mod decorations;
pub mod executor;
pub mod geometry;
pub mod gravity;
pub mod hit;
pub mod resize;
pub mod shape;

pub use self::gravity::resize_gravities as compute_resize_gravities;
pub use self::hit::{context_for_subwindow, is_decoration_subwindow};
pub use self::resize::resize;

/// Applies a new frame geometry to `window`.
///
/// Decorations are only laid out again if the size changed. A pure move always sends a
/// synthetic configure notify to the client, which otherwise would not learn about it.
pub fn setup_window(
    ctx: &mut FrameContext,
    window: &mut ManagedWindow,
    rect: Rectangle,
    send_configure_notify: bool,
) {
    setup_window_internal(ctx, window, rect, send_configure_notify, false);
}

/// Like [`setup_window`], but lays everything out even if the geometry did not change.
pub fn force_setup_window(
    ctx: &mut FrameContext,
    window: &mut ManagedWindow,
    rect: Rectangle,
    send_configure_notify: bool,
) {
    setup_window_internal(ctx, window, rect, send_configure_notify, true);
}

fn setup_window_internal(
    ctx: &mut FrameContext,
    window: &mut ManagedWindow,
    rect: Rectangle,
    mut send_configure_notify: bool,
    force: bool,
) {
    let _span = tracy_client::span!("setup_window");

    let new = rect.clamped();
    let old = window.state.geometry;
    let is_resized = force || new.size() != old.size();
    let is_moved = force || new.x != old.x || new.y != old.y;
    debug!(
        "setting up {:?} at {new}, resized: {is_resized}, moved: {is_moved}",
        window.id()
    );

    setup_frame(ctx, window, new);
    if is_resized {
        setup_title_bar(&mut *ctx.protocol, window, new.size());
        configure_border(&mut *ctx.protocol, window, new.size());
        if ctx.protocol.shapes_supported() && window.state.is_shaped {
            setup_shape(ctx, window, new.size());
        }
    }

    if is_moved && !is_resized {
        send_configure_notify = true;
    }

    // A shaded client would look at its collapsed geometry.
    if send_configure_notify && !window.state.is_shaded {
        ctx.protocol
            .send_configure_notify(window.handles.client, window.client_geometry());
    }

    ctx.protocol.sync();
    ctx.broadcaster.broadcast(Event::WindowConfigured {
        window: window.configuration(),
    });
}

/// Resizes the container and client to match `new` in a single step.
fn setup_frame(ctx: &mut FrameContext, window: &mut ManagedWindow, new: Rectangle) {
    window.state.client_size = new.size().shrink_max1(window.borders().total_size);
    let current = window.state.geometry;
    resize(ctx, window, current, new, ResizeMode::Setup, 0);
    window.state.geometry = new;
}

fn setup_title_bar(protocol: &mut dyn Protocol, window: &mut ManagedWindow, frame: Size) {
    let slots = window.handles.button_slots();
    let Some(layout) = layout_title_bar(&window.style, slots, frame) else {
        return;
    };

    window.state.title_length = layout.title_length;
    for (handle, rect) in window.handles.buttons.iter().zip(&layout.buttons) {
        if let (Some(handle), Some(rect)) = (handle, rect) {
            protocol.configure_window(*handle, *rect);
        }
    }
    if let Some(title) = window.handles.title {
        protocol.configure_window(title, layout.title);
    }
}

/// Moves the sides and corners into place for a frame of the given size.
pub(crate) fn configure_border(protocol: &mut dyn Protocol, window: &ManagedWindow, frame: Size) {
    if !window.style.has_border {
        return;
    }

    let _span = tracy_client::span!("configure_border");

    let sidebar = sidebar_geometry(&window.style, window.state.parts_drawn, None, frame);
    let layout = layout_border(&window.style, &sidebar);
    let handles = &window.handles;
    let parts = handles
        .sides
        .iter()
        .zip(&layout.sides)
        .chain(handles.corners.iter().zip(&layout.corners));
    for (handle, rect) in parts {
        if let Some(handle) = *handle {
            protocol.configure_window(handle, *rect);
        }
    }
}
