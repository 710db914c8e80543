use framekit_ipc::TitleDirection;

use super::geometry::Size;
use crate::window::FrameStyle;

/// Thickness of the decorations on each side of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderMetrics {
    /// Left border width and top border height.
    pub top_left: Size,
    /// Right border width and bottom border height.
    pub bottom_right: Size,
    pub total_size: Size,
}

impl BorderMetrics {
    /// Border metrics including the title bar on whichever side it sits.
    pub fn new(style: &FrameStyle) -> Self {
        let mut metrics = Self::without_title(style);
        if !style.has_title {
            return metrics;
        }

        let thickness = style.title_thickness;
        match style.title_direction {
            TitleDirection::Top => {
                metrics.top_left.height = metrics.top_left.height.saturating_add(thickness)
            }
            TitleDirection::Bottom => {
                metrics.bottom_right.height = metrics.bottom_right.height.saturating_add(thickness)
            }
            TitleDirection::Left => {
                metrics.top_left.width = metrics.top_left.width.saturating_add(thickness)
            }
            TitleDirection::Right => {
                metrics.bottom_right.width = metrics.bottom_right.width.saturating_add(thickness)
            }
        }
        metrics.total_size = metrics.top_left + metrics.bottom_right;
        metrics
    }

    /// Border metrics of the sidebars alone.
    pub fn without_title(style: &FrameStyle) -> Self {
        let width = if style.has_border {
            style.boundary_width
        } else {
            0
        };
        let side = Size::new(width, width);

        Self {
            top_left: side,
            bottom_right: side,
            total_size: side + side,
        }
    }
}
