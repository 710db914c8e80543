//! Mapping of protocol sub-windows to the frame region they belong to.

use crate::protocol::{ScreenState, WindowHandle};
use crate::window::ManagedWindow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Not part of any managed window.
    Root,
    Title,
    /// Part of the desktop window standing in for the root.
    EwmhDesktop,
    /// Client, container or the frame itself.
    Window,
    Icon,
    /// Corner handle; the index is top-left, top-right, bottom-left, bottom-right.
    Corner,
    /// Side handle; the index is top, right, bottom, left.
    Side,
    /// Corner or side of a window without resize handles.
    Sidebar,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitContext {
    pub region: Region,
    /// Index of the corner, side or button, 0 otherwise.
    pub index: usize,
}

impl HitContext {
    const ROOT: Self = Self::new(Region::Root, 0);

    const fn new(region: Region, index: usize) -> Self {
        Self { region, index }
    }
}

fn position(handles: &[Option<WindowHandle>], handle: WindowHandle) -> Option<usize> {
    handles.iter().position(|h| *h == Some(handle))
}

/// Finds the region of `window` that `handle` belongs to.
pub fn context_for_subwindow(
    screen: &ScreenState,
    window: Option<&ManagedWindow>,
    handle: Option<WindowHandle>,
) -> HitContext {
    let (Some(window), Some(handle)) = (window, handle) else {
        return HitContext::ROOT;
    };

    let handles = &window.handles;
    let context = if handles.title == Some(handle) {
        HitContext::new(Region::Title, 0)
    } else if screen.desktop.is_some_and(|desktop| desktop.contains(handle)) {
        HitContext::new(Region::EwmhDesktop, 0)
    } else if handle == handles.client || handle == handles.parent || handle == handles.frame {
        HitContext::new(Region::Window, 0)
    } else if handles.icon_title == Some(handle) || handles.icon_pixmap == Some(handle) {
        HitContext::new(Region::Icon, 0)
    } else if let Some(i) = position(&handles.corners, handle) {
        HitContext::new(Region::Corner, i)
    } else if let Some(i) = position(&handles.sides, handle) {
        HitContext::new(Region::Side, i)
    } else {
        // Buttons count only while the screen has a binding for their slot.
        handles
            .buttons
            .iter()
            .enumerate()
            .find(|(i, button)| {
                let bound = if i % 2 == 0 {
                    screen.left_buttons
                } else {
                    screen.right_buttons
                };
                **button == Some(handle) && i / 2 < usize::from(bound)
            })
            .map_or(HitContext::ROOT, |(i, _)| HitContext::new(Region::Button, i))
    };

    if !window.style.has_handles && matches!(context.region, Region::Corner | Region::Side) {
        return HitContext::new(Region::Sidebar, context.index);
    }

    context
}

/// Whether `handle` is one of the decoration sub-windows of `window`: the title, a button, a
/// side or a corner.
pub fn is_decoration_subwindow(window: Option<&ManagedWindow>, handle: Option<WindowHandle>) -> bool {
    let (Some(window), Some(handle)) = (window, handle) else {
        return false;
    };

    let handles = &window.handles;
    handles.title == Some(handle)
        || position(&handles.buttons, handle).is_some()
        || position(&handles.sides, handle).is_some()
        || position(&handles.corners, handle).is_some()
}
