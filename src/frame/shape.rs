use super::decorations::title_geometry;
use super::geometry::Size;
use crate::protocol::{FrameContext, ShapeOp};
use crate::window::ManagedWindow;

/// Recomputes the bounding shape of the frame for the given frame size.
///
/// The shape is the client shape inside the borders plus the title strip. It is composed on
/// the screen's shape helper window and then copied to the frame in one request.
pub fn setup_shape(ctx: &mut FrameContext, window: &ManagedWindow, frame: Size) {
    if !ctx.protocol.shapes_supported() {
        return;
    }

    let handles = &window.handles;
    if !window.state.is_shaped {
        ctx.protocol.shape_reset(handles.frame);
        return;
    }

    let _span = tracy_client::span!("setup_shape");

    let helper = ctx.screen.shape_helper(&mut *ctx.protocol);
    let borders = window.borders();
    ctx.protocol.shape_combine_window(
        helper,
        borders.top_left.width as i32,
        borders.top_left.height as i32,
        handles.client,
        ShapeOp::Set,
    );

    if window.style.has_title && handles.title.is_some() {
        let title = title_geometry(&window.style, frame);
        ctx.protocol
            .shape_combine_rectangles(helper, &[title], ShapeOp::Union);
    }

    ctx.protocol
        .shape_combine_window(handles.frame, 0, 0, helper, ShapeOp::Set);
}
