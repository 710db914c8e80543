//! Managed window records.

use framekit_ipc::{TitleDirection, WindowConfiguration};

use crate::frame::borders::BorderMetrics;
use crate::frame::decorations::{BorderFace, DrawParts};
use crate::frame::geometry::{Rectangle, Size};
use crate::protocol::{Protocol, WindowHandle};
use crate::utils::id::IdCounter;

/// Number of title bar button slots.
///
/// Even slots belong to the left group, odd slots to the right group.
pub const NUMBER_OF_BUTTONS: usize = 10;

static WINDOW_ID_COUNTER: IdCounter = IdCounter::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(u64);

impl WindowId {
    pub fn next() -> WindowId {
        WindowId(WINDOW_ID_COUNTER.next())
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Decoration style of a window, fixed for the duration of any one frame operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStyle {
    pub has_title: bool,
    pub has_border: bool,
    pub has_handles: bool,
    pub hidden_handles: bool,
    pub title_direction: TitleDirection,
    pub title_thickness: u32,
    pub boundary_width: u32,
    pub corner_size: u32,
    pub left_buttons: u8,
    pub right_buttons: u8,
}

impl FrameStyle {
    pub fn has_vertical_title(&self) -> bool {
        self.has_title
            && matches!(
                self.title_direction,
                TitleDirection::Left | TitleDirection::Right
            )
    }

    /// Edge the title sits on, or `None` without a title.
    pub fn title_direction(&self) -> Option<TitleDirection> {
        self.has_title.then_some(self.title_direction)
    }

    /// Which button slots a frame of this style has.
    pub fn button_slots(&self) -> [bool; NUMBER_OF_BUTTONS] {
        std::array::from_fn(|i| {
            let group_size = if i % 2 == 0 {
                self.left_buttons
            } else {
                self.right_buttons
            };
            self.has_title && i / 2 < usize::from(group_size)
        })
    }

    pub fn border_face(&self) -> BorderFace {
        BorderFace {
            hidden_handles: self.hidden_handles,
        }
    }
}

impl From<&framekit_config::Style> for FrameStyle {
    fn from(style: &framekit_config::Style) -> Self {
        if style.buttons.left > framekit_config::MAX_BUTTONS_PER_SIDE
            || style.buttons.right > framekit_config::MAX_BUTTONS_PER_SIDE
        {
            warn!(
                "at most {} buttons per side are supported, capping",
                framekit_config::MAX_BUTTONS_PER_SIDE
            );
        }

        Self {
            has_title: !style.title.off,
            has_border: !style.no_border,
            has_handles: !style.no_handles,
            hidden_handles: style.hidden_handles,
            title_direction: style.title.position,
            title_thickness: u32::from(style.title.thickness),
            boundary_width: u32::from(style.border_width),
            corner_size: u32::from(style.corner_size),
            left_buttons: style.buttons.left(),
            right_buttons: style.buttons.right(),
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self::from(&framekit_config::Style::default())
    }
}

/// Protocol handles of the sub-windows making up a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameHandles {
    pub frame: WindowHandle,
    /// Container between the frame and the client.
    pub parent: WindowHandle,
    pub client: WindowHandle,
    pub title: Option<WindowHandle>,
    pub buttons: [Option<WindowHandle>; NUMBER_OF_BUTTONS],
    /// Top-left, top-right, bottom-left, bottom-right.
    pub corners: [Option<WindowHandle>; 4],
    /// Top, right, bottom, left.
    pub sides: [Option<WindowHandle>; 4],
    pub icon_title: Option<WindowHandle>,
    pub icon_pixmap: Option<WindowHandle>,
}

impl FrameHandles {
    /// Which button slots have a window.
    pub fn button_slots(&self) -> [bool; NUMBER_OF_BUTTONS] {
        self.buttons.map(|button| button.is_some())
    }
}

/// Geometry state of a frame, owned by its managed window and only changed by frame operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameState {
    /// Current outer frame rectangle.
    pub geometry: Rectangle,
    pub client_size: Size,
    /// Length of the title text area along the title axis.
    pub title_length: u32,
    pub is_shaped: bool,
    pub is_shaded: bool,
    pub parts_drawn: DrawParts,
}

#[derive(Debug)]
pub struct ManagedWindow {
    id: WindowId,
    pub style: FrameStyle,
    pub handles: FrameHandles,
    pub state: FrameState,
}

impl ManagedWindow {
    pub fn new(style: FrameStyle, handles: FrameHandles, geometry: Rectangle) -> Self {
        let geometry = geometry.clamped();
        let borders = BorderMetrics::new(&style);

        let mut parts_drawn = DrawParts::empty();
        if style.has_border {
            parts_drawn |= DrawParts::FRAME;
            if style.has_handles && !style.hidden_handles {
                parts_drawn |= DrawParts::X_HANDLES | DrawParts::Y_HANDLES;
            }
        }
        if style.has_title {
            parts_drawn |= DrawParts::TITLE | DrawParts::BUTTONS;
        }

        Self {
            id: WindowId::next(),
            style,
            handles,
            state: FrameState {
                geometry,
                client_size: geometry.size().shrink_max1(borders.total_size),
                title_length: 1,
                is_shaped: false,
                is_shaded: false,
                parts_drawn,
            },
        }
    }

    /// Creates the frame sub-windows for `client` and wraps them in a managed window.
    ///
    /// The sub-windows are created at a placeholder geometry. Apply the real geometry with
    /// [`force_setup_window`](crate::frame::force_setup_window).
    pub fn create(
        protocol: &mut dyn Protocol,
        style: FrameStyle,
        client: WindowHandle,
        geometry: Rectangle,
    ) -> Self {
        let _span = tracy_client::span!("ManagedWindow::create");

        let unit = Rectangle::new(0, 0, 1, 1);
        let root = protocol.root();
        let frame = protocol.create_window(root, geometry.clamped(), false);
        let parent = protocol.create_window(frame, unit, false);

        let title = style
            .has_title
            .then(|| protocol.create_window(frame, unit, false));

        let buttons = style
            .button_slots()
            .map(|exists| exists.then(|| protocol.create_window(frame, unit, false)));

        let mut corners = [None; 4];
        let mut sides = [None; 4];
        if style.has_border {
            for corner in &mut corners {
                *corner = Some(protocol.create_window(frame, unit, false));
            }
            for side in &mut sides {
                *side = Some(protocol.create_window(frame, unit, false));
            }
        }

        let handles = FrameHandles {
            frame,
            parent,
            client,
            title,
            buttons,
            corners,
            sides,
            icon_title: None,
            icon_pixmap: None,
        };

        let window = Self::new(style, handles, geometry);
        debug!(
            "created frame {frame} for client {client}, window {:?}",
            window.id
        );
        window
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn borders(&self) -> BorderMetrics {
        BorderMetrics::new(&self.style)
    }

    /// Whether a frame of this geometry leaves no room for the client.
    pub fn is_hidden(&self, rect: &Rectangle) -> bool {
        let total = self.borders().total_size;
        rect.width <= total.width || rect.height <= total.height
    }

    /// Client rectangle in root coordinates for the current frame geometry.
    pub fn client_geometry(&self) -> Rectangle {
        let borders = self.borders();
        let frame = self.state.geometry;
        let size = frame.size().shrink_max1(borders.total_size);
        Rectangle {
            x: frame.x.saturating_add_unsigned(borders.top_left.width),
            y: frame.y.saturating_add_unsigned(borders.top_left.height),
            width: size.width,
            height: size.height,
        }
    }

    pub fn configuration(&self) -> WindowConfiguration {
        WindowConfiguration {
            id: self.id.get(),
            frame: self.state.geometry.into(),
            client_width: self.state.client_size.width,
            client_height: self.state.client_size.height,
            title_direction: self.style.title_direction(),
            title_length: self.state.title_length,
            is_shaded: self.state.is_shaded,
            is_shaped: self.state.is_shaped,
        }
    }
}
