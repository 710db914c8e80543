use framekit_ipc::{Event, ResizeMode};

use crate::frame::actions::{Action, ResizeActionList};
use crate::frame::executor::{execute_action, execute_step};
use crate::frame::geometry::Rectangle;
use crate::frame::shape::setup_shape;
use crate::frame::{force_setup_window, resize, setup_window};
use crate::protocol::recording::{RecordingPainter, RecordingProtocol, Request};
use crate::protocol::{FocusState, FrameContext, Protocol, ScreenState, WindowHandle};
use crate::window::{FrameStyle, ManagedWindow};

/// One managed window on a recording protocol, with every collaborator recording too.
pub struct Fixture {
    pub protocol: RecordingProtocol,
    pub focus: FocusState,
    pub painter: RecordingPainter,
    pub events: Vec<Event>,
    pub screen: ScreenState,
    pub window: ManagedWindow,
}

impl Fixture {
    pub fn new(geometry: Rectangle) -> Self {
        Self::with_style(FrameStyle::default(), geometry)
    }

    pub fn with_style(style: FrameStyle, geometry: Rectangle) -> Self {
        Self::with_protocol(RecordingProtocol::new(), style, geometry)
    }

    /// Creates the window without laying it out.
    pub fn with_protocol(
        mut protocol: RecordingProtocol,
        style: FrameStyle,
        geometry: Rectangle,
    ) -> Self {
        let root = protocol.root();
        let client = protocol.create_window(root, geometry.clamped(), false);
        let window = ManagedWindow::create(&mut protocol, style, client, geometry);
        let screen = ScreenState::new(style.left_buttons, style.right_buttons);

        Self {
            protocol,
            focus: FocusState::default(),
            painter: RecordingPainter::default(),
            events: Vec::new(),
            screen,
            window,
        }
    }

    fn parts(&mut self) -> (FrameContext<'_>, &mut ManagedWindow) {
        let ctx = FrameContext {
            protocol: &mut self.protocol,
            focus: &mut self.focus,
            painter: &mut self.painter,
            broadcaster: &mut self.events,
            screen: &mut self.screen,
        };
        (ctx, &mut self.window)
    }

    pub fn client(&self) -> WindowHandle {
        self.window.handles.client
    }

    pub fn focus_window(&mut self) {
        self.focus.focused = Some(self.window.id());
    }

    pub fn resize(&mut self, start: Rectangle, end: Rectangle, mode: ResizeMode, steps: i32) {
        let (mut ctx, window) = self.parts();
        resize(&mut ctx, window, start, end, mode, steps);
    }

    /// Resizes from the current geometry.
    pub fn resize_to(&mut self, end: Rectangle, mode: ResizeMode, steps: i32) {
        let start = self.window.state.geometry;
        self.resize(start, end, mode, steps);
    }

    pub fn setup(&mut self, rect: Rectangle, send_configure_notify: bool) {
        let (mut ctx, window) = self.parts();
        setup_window(&mut ctx, window, rect, send_configure_notify);
    }

    pub fn force_setup(&mut self, rect: Rectangle, send_configure_notify: bool) {
        let (mut ctx, window) = self.parts();
        force_setup_window(&mut ctx, window, rect, send_configure_notify);
    }

    pub fn setup_shape(&mut self) {
        let (mut ctx, window) = self.parts();
        let size = window.state.geometry.size();
        setup_shape(&mut ctx, window, size);
    }

    pub fn execute(&mut self, action: Action, new: &Rectangle, old: &mut Rectangle) {
        let (mut ctx, window) = self.parts();
        execute_action(&mut ctx, window, action, new, old);
    }

    pub fn step(
        &mut self,
        actions: &ResizeActionList,
        new: &Rectangle,
        current: &Rectangle,
        is_first_step: bool,
        is_last_step: bool,
    ) {
        let (mut ctx, window) = self.parts();
        execute_step(
            &mut ctx,
            window,
            actions,
            new,
            current,
            is_first_step,
            is_last_step,
        );
    }

    /// Frame geometries requested from the protocol, in order.
    pub fn frame_moves(&self) -> Vec<Rectangle> {
        let frame = self.window.handles.frame;
        self.protocol
            .log
            .iter()
            .filter_map(|request| match request {
                Request::MoveResize { window, rect }
                    if *window == frame =>
                {
                    Some(*rect)
                }
                _ => None,
            })
            .collect()
    }
}
