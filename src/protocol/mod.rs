//! Seams to the windowing server and the other collaborators of the frame engine.
//!
//! The engine never talks to a display connection or global screen state directly. Every entry
//! point takes a [`FrameContext`] bundling the collaborators for the duration of one call.

use std::fmt;
use std::io::Write;

use framekit_ipc::Event;

use crate::frame::decorations::DrawParts;
use crate::frame::geometry::Rectangle;
use crate::frame::gravity::Gravity;
use crate::window::WindowId;

pub mod recording;

/// Handle of a protocol-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowHandle(pub u32);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeOp {
    Set,
    Union,
}

/// Requests understood by the windowing server.
///
/// Requests are fire-and-forget. Protocol errors are fatal to the process and are not reported
/// back here.
pub trait Protocol {
    fn root(&self) -> WindowHandle;

    /// Creates a window; `override_redirect` windows are never managed.
    fn create_window(
        &mut self,
        parent: WindowHandle,
        rect: Rectangle,
        override_redirect: bool,
    ) -> WindowHandle;

    fn resize_window(&mut self, window: WindowHandle, width: u32, height: u32);
    fn move_resize_window(&mut self, window: WindowHandle, rect: Rectangle);
    fn configure_window(&mut self, window: WindowHandle, rect: Rectangle);
    fn raise_window(&mut self, window: WindowHandle);
    fn lower_window(&mut self, window: WindowHandle);

    /// Sets the window gravity, and the bit gravity if given.
    fn set_gravity(&mut self, window: WindowHandle, win: Gravity, bit: Option<Gravity>);

    /// Sends a synthetic configure notification to a client.
    fn send_configure_notify(&mut self, window: WindowHandle, rect: Rectangle);

    fn set_input_focus(&mut self, window: WindowHandle);

    fn shapes_supported(&self) -> bool;
    /// Removes any bounding shape from the window.
    fn shape_reset(&mut self, window: WindowHandle);
    /// Combines the bounding shape of `src`, offset by `(x, y)`, into `dst`.
    fn shape_combine_window(
        &mut self,
        dst: WindowHandle,
        x: i32,
        y: i32,
        src: WindowHandle,
        op: ShapeOp,
    );
    fn shape_combine_rectangles(&mut self, dst: WindowHandle, rects: &[Rectangle], op: ShapeOp);

    fn flush(&mut self);
    /// Flushes and waits until the server has processed every request.
    fn sync(&mut self);
}

/// Tracks which managed window holds the input focus.
pub trait FocusTracker {
    fn focused(&self) -> Option<WindowId>;

    /// Gives the input focus to `client` of the managed window `window`.
    fn set_focus(&mut self, protocol: &mut dyn Protocol, window: WindowId, client: WindowHandle);
}

/// Draws decoration pixels once the layout is final.
pub trait DecorationPainter {
    fn draw(&mut self, window: WindowId, parts: DrawParts, is_active: bool);
}

/// Notifies observers about configuration changes.
pub trait Broadcaster {
    fn broadcast(&mut self, event: Event);
}

/// Protocol handles of a desktop window standing in for the root window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesktopWindow {
    pub frame: WindowHandle,
    pub parent: WindowHandle,
    pub client: WindowHandle,
}

impl DesktopWindow {
    pub fn contains(&self, handle: WindowHandle) -> bool {
        handle == self.frame || handle == self.parent || handle == self.client
    }
}

/// Screen-wide state shared by all managed windows.
#[derive(Debug, Default)]
pub struct ScreenState {
    /// Number of buttons with a binding in the left group.
    pub left_buttons: u8,
    /// Number of buttons with a binding in the right group.
    pub right_buttons: u8,
    pub desktop: Option<DesktopWindow>,
    shape_helper: Option<WindowHandle>,
}

impl ScreenState {
    pub fn new(left_buttons: u8, right_buttons: u8) -> Self {
        Self {
            left_buttons,
            right_buttons,
            desktop: None,
            shape_helper: None,
        }
    }

    /// Returns the off-screen scratch window used to compose shape masks.
    ///
    /// It is created on first use and shared by every window of the screen.
    pub fn shape_helper(&mut self, protocol: &mut dyn Protocol) -> WindowHandle {
        *self.shape_helper.get_or_insert_with(|| {
            let root = protocol.root();
            let handle =
                protocol.create_window(root, Rectangle::new(-32768, -32768, 1, 1), true);
            debug!("created shape helper window {handle}");
            handle
        })
    }
}

/// Everything a frame operation needs from the outside world.
pub struct FrameContext<'a> {
    pub protocol: &'a mut dyn Protocol,
    pub focus: &'a mut dyn FocusTracker,
    pub painter: &'a mut dyn DecorationPainter,
    pub broadcaster: &'a mut dyn Broadcaster,
    pub screen: &'a mut ScreenState,
}

/// Focus bookkeeping that forwards focus changes to the protocol.
#[derive(Debug, Default)]
pub struct FocusState {
    pub focused: Option<WindowId>,
}

impl FocusTracker for FocusState {
    fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    fn set_focus(&mut self, protocol: &mut dyn Protocol, window: WindowId, client: WindowHandle) {
        self.focused = Some(window);
        protocol.set_input_focus(client);
    }
}

impl Broadcaster for Vec<Event> {
    fn broadcast(&mut self, event: Event) {
        self.push(event);
    }
}

/// Writes every event as a line of JSON.
pub struct JsonBroadcaster<W> {
    writer: W,
}

impl<W: Write> JsonBroadcaster<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> Broadcaster for JsonBroadcaster<W> {
    fn broadcast(&mut self, event: Event) {
        if let Err(err) = event.write_json_line(&mut self.writer) {
            warn!("error writing event: {err:?}");
        }
    }
}
