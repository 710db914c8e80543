//! In-memory protocol backend that records every request.
//!
//! Used by the command line simulator and by the tests.

use std::collections::HashMap;
use std::fmt;

use super::{DecorationPainter, Protocol, ShapeOp, WindowHandle};
use crate::frame::decorations::DrawParts;
use crate::frame::geometry::Rectangle;
use crate::frame::gravity::Gravity;
use crate::window::WindowId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Create {
        window: WindowHandle,
        parent: WindowHandle,
        rect: Rectangle,
        override_redirect: bool,
    },
    Resize {
        window: WindowHandle,
        width: u32,
        height: u32,
    },
    MoveResize {
        window: WindowHandle,
        rect: Rectangle,
    },
    Configure {
        window: WindowHandle,
        rect: Rectangle,
    },
    Raise(WindowHandle),
    Lower(WindowHandle),
    SetGravity {
        window: WindowHandle,
        win: Gravity,
        bit: Option<Gravity>,
    },
    ConfigureNotify {
        window: WindowHandle,
        rect: Rectangle,
    },
    SetInputFocus(WindowHandle),
    ShapeReset(WindowHandle),
    ShapeCombineWindow {
        dst: WindowHandle,
        x: i32,
        y: i32,
        src: WindowHandle,
        op: ShapeOp,
    },
    ShapeCombineRectangles {
        dst: WindowHandle,
        rects: Vec<Rectangle>,
        op: ShapeOp,
    },
    Flush,
    Sync,
}

#[derive(Debug)]
pub struct RecordingProtocol {
    root: WindowHandle,
    next_handle: u32,
    shapes_supported: bool,
    geometry: HashMap<WindowHandle, Rectangle>,
    pub log: Vec<Request>,
}

impl RecordingProtocol {
    pub fn new() -> Self {
        Self::with_shapes(true)
    }

    pub fn with_shapes(shapes_supported: bool) -> Self {
        Self {
            root: WindowHandle(1),
            next_handle: 2,
            shapes_supported,
            geometry: HashMap::new(),
            log: Vec::new(),
        }
    }

    /// Last geometry requested for `window`, relative to its parent.
    pub fn geometry(&self, window: WindowHandle) -> Option<Rectangle> {
        self.geometry.get(&window).copied()
    }

    /// Takes the requests logged so far.
    pub fn take_log(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.log)
    }

    /// Formats the log one request per line.
    pub fn format_log(&self) -> String {
        let mut buf = String::new();
        for request in &self.log {
            buf += &request.to_string();
            buf.push('\n');
        }
        buf
    }

    fn push(&mut self, request: Request) {
        trace!("{request}");
        self.log.push(request);
    }
}

impl Default for RecordingProtocol {
    fn default() -> Self {
        Self::new()
    }
}

impl Protocol for RecordingProtocol {
    fn root(&self) -> WindowHandle {
        self.root
    }

    fn create_window(
        &mut self,
        parent: WindowHandle,
        rect: Rectangle,
        override_redirect: bool,
    ) -> WindowHandle {
        let window = WindowHandle(self.next_handle);
        self.next_handle += 1;
        self.geometry.insert(window, rect);
        self.push(Request::Create {
            window,
            parent,
            rect,
            override_redirect,
        });
        window
    }

    fn resize_window(&mut self, window: WindowHandle, width: u32, height: u32) {
        if let Some(rect) = self.geometry.get_mut(&window) {
            rect.width = width;
            rect.height = height;
        }
        self.push(Request::Resize {
            window,
            width,
            height,
        });
    }

    fn move_resize_window(&mut self, window: WindowHandle, rect: Rectangle) {
        self.geometry.insert(window, rect);
        self.push(Request::MoveResize { window, rect });
    }

    fn configure_window(&mut self, window: WindowHandle, rect: Rectangle) {
        self.geometry.insert(window, rect);
        self.push(Request::Configure { window, rect });
    }

    fn raise_window(&mut self, window: WindowHandle) {
        self.push(Request::Raise(window));
    }

    fn lower_window(&mut self, window: WindowHandle) {
        self.push(Request::Lower(window));
    }

    fn set_gravity(&mut self, window: WindowHandle, win: Gravity, bit: Option<Gravity>) {
        self.push(Request::SetGravity { window, win, bit });
    }

    fn send_configure_notify(&mut self, window: WindowHandle, rect: Rectangle) {
        self.push(Request::ConfigureNotify { window, rect });
    }

    fn set_input_focus(&mut self, window: WindowHandle) {
        self.push(Request::SetInputFocus(window));
    }

    fn shapes_supported(&self) -> bool {
        self.shapes_supported
    }

    fn shape_reset(&mut self, window: WindowHandle) {
        self.push(Request::ShapeReset(window));
    }

    fn shape_combine_window(
        &mut self,
        dst: WindowHandle,
        x: i32,
        y: i32,
        src: WindowHandle,
        op: ShapeOp,
    ) {
        self.push(Request::ShapeCombineWindow {
            dst,
            x,
            y,
            src,
            op,
        });
    }

    fn shape_combine_rectangles(&mut self, dst: WindowHandle, rects: &[Rectangle], op: ShapeOp) {
        self.push(Request::ShapeCombineRectangles {
            dst,
            rects: rects.to_vec(),
            op,
        });
    }

    fn flush(&mut self) {
        self.push(Request::Flush);
    }

    fn sync(&mut self) {
        self.push(Request::Sync);
    }
}

impl fmt::Display for ShapeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeOp::Set => "set",
            ShapeOp::Union => "union",
        })
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Create {
                window,
                parent,
                rect,
                override_redirect,
            } => {
                write!(f, "create {window} in {parent} {rect}")?;
                if *override_redirect {
                    f.write_str(" override-redirect")?;
                }
                Ok(())
            }
            Request::Resize {
                window,
                width,
                height,
            } => write!(f, "resize {window} {width}x{height}"),
            Request::MoveResize { window, rect } => write!(f, "move-resize {window} {rect}"),
            Request::Configure { window, rect } => write!(f, "configure {window} {rect}"),
            Request::Raise(window) => write!(f, "raise {window}"),
            Request::Lower(window) => write!(f, "lower {window}"),
            Request::SetGravity { window, win, bit } => {
                write!(f, "gravity {window} {win}")?;
                if let Some(bit) = bit {
                    write!(f, " bit {bit}")?;
                }
                Ok(())
            }
            Request::ConfigureNotify { window, rect } => {
                write!(f, "configure-notify {window} {rect}")
            }
            Request::SetInputFocus(window) => write!(f, "focus {window}"),
            Request::ShapeReset(window) => write!(f, "shape-reset {window}"),
            Request::ShapeCombineWindow {
                dst,
                x,
                y,
                src,
                op,
            } => write!(f, "shape-{op} {dst} from {src} at {x},{y}"),
            Request::ShapeCombineRectangles { dst, rects, op } => {
                write!(f, "shape-{op} {dst} rects")?;
                for rect in rects {
                    write!(f, " [{rect}]")?;
                }
                Ok(())
            }
            Request::Flush => f.write_str("flush"),
            Request::Sync => f.write_str("sync"),
        }
    }
}

/// Painter that remembers what it was asked to draw.
#[derive(Debug, Default)]
pub struct RecordingPainter {
    pub draws: Vec<(WindowId, DrawParts, bool)>,
}

impl DecorationPainter for RecordingPainter {
    fn draw(&mut self, window: WindowId, parts: DrawParts, is_active: bool) {
        trace!("draw {window:?} {parts:?} active: {is_active}");
        self.draws.push((window, parts, is_active));
    }
}
