//! Gravities of the frame parts during a resize.
//!
//! Gravity tells the windowing server where to keep a sub-window when its parent is resized, so
//! the parts anchored on the stable edge never need an explicit move. Wrong gravities show up as
//! decorations jumping around during a live resize.
//!
//! Anchors are computed separately for each axis and only then merged into one gravity per part.
//! The two axes never influence each other.

use std::fmt;

use framekit_ipc::{ResizeMode, TitleDirection};

use crate::protocol::Protocol;
use crate::window::ManagedWindow;

/// Edge a sub-window sticks to along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// West or north.
    Negative,
    /// East or south.
    Positive,
}

/// Two-axis gravity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gravity {
    pub x: Anchor,
    pub y: Anchor,
}

/// One value per part of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorGravities<G> {
    pub decor: G,
    pub title: G,
    pub left_buttons: G,
    pub right_buttons: G,
    /// The container between frame and client.
    pub container: G,
    pub client: G,
}

pub type AxisGravities = DecorGravities<Anchor>;

impl Gravity {
    pub const NORTH_WEST: Gravity = Gravity {
        x: Anchor::Negative,
        y: Anchor::Negative,
    };
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let y = match self.y {
            Anchor::Negative => "North",
            Anchor::Positive => "South",
        };
        let x = match self.x {
            Anchor::Negative => "West",
            Anchor::Positive => "East",
        };
        write!(f, "{y}{x}")
    }
}

/// Anchors along one axis.
///
/// `title` is the anchor of the title if it sits on this axis, i.e. on one of the two edges
/// perpendicular to it.
pub fn gravities_for_axis(title: Option<Anchor>, mode: ResizeMode) -> AxisGravities {
    let (decor, left_buttons, right_buttons) = match title {
        // Everything sticks to the edge holding the title.
        Some(title) => (title, title, title),
        None => (Anchor::Negative, Anchor::Negative, Anchor::Positive),
    };

    let client = match mode {
        ResizeMode::Scroll => Anchor::Positive,
        ResizeMode::Shrink | ResizeMode::Opaque | ResizeMode::Setup => Anchor::Negative,
    };

    DecorGravities {
        decor,
        title: decor,
        left_buttons,
        right_buttons,
        container: Anchor::Negative,
        client,
    }
}

/// Merges the per-axis anchors field by field.
pub fn combine(x: AxisGravities, y: AxisGravities) -> DecorGravities<Gravity> {
    let merge = |x, y| Gravity { x, y };

    DecorGravities {
        decor: merge(x.decor, y.decor),
        title: merge(x.title, y.title),
        left_buttons: merge(x.left_buttons, y.left_buttons),
        right_buttons: merge(x.right_buttons, y.right_buttons),
        container: merge(x.container, y.container),
        client: merge(x.client, y.client),
    }
}

/// Splits a title direction into its anchor on the x and y axes.
fn split_title_direction(title: Option<TitleDirection>) -> (Option<Anchor>, Option<Anchor>) {
    match title {
        None => (None, None),
        Some(TitleDirection::Top) => (None, Some(Anchor::Negative)),
        Some(TitleDirection::Bottom) => (None, Some(Anchor::Positive)),
        Some(TitleDirection::Left) => (Some(Anchor::Negative), None),
        Some(TitleDirection::Right) => (Some(Anchor::Positive), None),
    }
}

/// Gravities of all frame parts for a resize in the given mode.
pub fn resize_gravities(
    title: Option<TitleDirection>,
    mode: ResizeMode,
) -> DecorGravities<Gravity> {
    let (title_x, title_y) = split_title_direction(title);
    combine(
        gravities_for_axis(title_x, mode),
        gravities_for_axis(title_y, mode),
    )
}

/// Applies the gravities to the sub-windows of `window`.
///
/// Bit gravity is set along with window gravity on the client and the title, which keeps their
/// contents in place and avoids a redraw.
pub fn set_decor_gravities(
    protocol: &mut dyn Protocol,
    window: &ManagedWindow,
    grav: &DecorGravities<Gravity>,
) {
    let handles = &window.handles;
    trace!(
        "gravities for {:?}: client {}, container {}, title {}",
        window.id(),
        grav.client,
        grav.container,
        grav.title
    );

    protocol.set_gravity(handles.client, grav.client, Some(grav.client));
    protocol.set_gravity(handles.parent, grav.container, None);

    if !window.style.has_title {
        return;
    }

    if let Some(title) = handles.title {
        protocol.set_gravity(title, grav.title, Some(grav.title));
    }
    for (i, button) in handles.buttons.iter().enumerate() {
        let Some(button) = *button else { continue };
        let gravity = if i % 2 == 0 {
            grav.left_buttons
        } else {
            grav.right_buttons
        };
        protocol.set_gravity(button, gravity, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_without_title() {
        let grav = gravities_for_axis(None, ResizeMode::Opaque);
        assert_eq!(grav.decor, Anchor::Negative);
        assert_eq!(grav.title, Anchor::Negative);
        assert_eq!(grav.left_buttons, Anchor::Negative);
        assert_eq!(grav.right_buttons, Anchor::Positive);
        assert_eq!(grav.container, Anchor::Negative);
        assert_eq!(grav.client, Anchor::Negative);
    }

    #[test]
    fn axis_with_title_glues_decorations_to_it() {
        let grav = gravities_for_axis(Some(Anchor::Positive), ResizeMode::Shrink);
        assert_eq!(grav.decor, Anchor::Positive);
        assert_eq!(grav.title, Anchor::Positive);
        assert_eq!(grav.left_buttons, Anchor::Positive);
        assert_eq!(grav.right_buttons, Anchor::Positive);
        assert_eq!(grav.container, Anchor::Negative);
    }

    #[test]
    fn client_anchor_follows_mode() {
        for (mode, anchor) in [
            (ResizeMode::Scroll, Anchor::Positive),
            (ResizeMode::Shrink, Anchor::Negative),
            (ResizeMode::Opaque, Anchor::Negative),
            (ResizeMode::Setup, Anchor::Negative),
        ] {
            assert_eq!(gravities_for_axis(None, mode).client, anchor, "{mode}");
        }
    }

    #[test]
    fn combine_takes_each_field_from_its_axis() {
        let x = DecorGravities {
            decor: Anchor::Positive,
            title: Anchor::Negative,
            left_buttons: Anchor::Positive,
            right_buttons: Anchor::Negative,
            container: Anchor::Negative,
            client: Anchor::Positive,
        };
        let y = DecorGravities {
            decor: Anchor::Negative,
            title: Anchor::Positive,
            left_buttons: Anchor::Positive,
            right_buttons: Anchor::Negative,
            container: Anchor::Positive,
            client: Anchor::Negative,
        };

        let grav = combine(x, y);
        assert_eq!(grav.decor.to_string(), "NorthEast");
        assert_eq!(grav.title.to_string(), "SouthWest");
        assert_eq!(grav.left_buttons.to_string(), "SouthEast");
        assert_eq!(grav.right_buttons.to_string(), "NorthWest");
        assert_eq!(grav.container.to_string(), "SouthWest");
        assert_eq!(grav.client.to_string(), "NorthEast");

        // Swapping the axes transposes every field.
        let swapped = combine(y, x);
        assert_eq!(swapped.title.to_string(), "NorthEast");
    }

    #[test]
    fn bottom_title_in_scroll_mode() {
        let grav = resize_gravities(Some(TitleDirection::Bottom), ResizeMode::Scroll);
        assert_eq!(grav.title.to_string(), "SouthWest");
        assert_eq!(grav.right_buttons.to_string(), "SouthEast");
        assert_eq!(grav.container, Gravity::NORTH_WEST);
        assert_eq!(grav.client.to_string(), "SouthEast");
    }

    #[test]
    fn left_title() {
        let grav = resize_gravities(Some(TitleDirection::Left), ResizeMode::Opaque);
        assert_eq!(grav.decor, Gravity::NORTH_WEST);
        // The title axis is x, so along y the right group takes the far edge.
        assert_eq!(grav.right_buttons.to_string(), "SouthWest");
    }
}
