//! Layout of the title bar, its buttons and the border sidebars inside a frame.
//!
//! All rectangles are relative to the frame origin.

use bitflags::bitflags;
use framekit_ipc::TitleDirection;

use super::borders::BorderMetrics;
use super::geometry::{Axis, Rectangle, Size};
use crate::window::{FrameStyle, NUMBER_OF_BUTTONS};

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DrawParts : u16 {
        const BORDER_N = 1;
        const BORDER_S = 1 << 1;
        const BORDER_E = 1 << 2;
        const BORDER_W = 1 << 3;
        const BORDER_NW = 1 << 4;
        const BORDER_NE = 1 << 5;
        const BORDER_SW = 1 << 6;
        const BORDER_SE = 1 << 7;
        const FRAME = Self::BORDER_N.bits()
            | Self::BORDER_S.bits()
            | Self::BORDER_E.bits()
            | Self::BORDER_W.bits()
            | Self::BORDER_NW.bits()
            | Self::BORDER_NE.bits()
            | Self::BORDER_SW.bits()
            | Self::BORDER_SE.bits();
        const TITLE = 1 << 8;
        const BUTTONS = 1 << 9;
        /// Handle marks along the x axis.
        const X_HANDLES = 1 << 10;
        /// Handle marks along the y axis.
        const Y_HANDLES = 1 << 11;
    }
}

/// Border face settings relevant to the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderFace {
    pub hidden_handles: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBarLayout {
    pub title: Rectangle,
    /// Length of the title text area, at least 1.
    pub title_length: u32,
    /// Geometry of every button slot that has a window.
    ///
    /// Buttons without room are placed off-screen rather than dropped.
    pub buttons: [Option<Rectangle>; NUMBER_OF_BUTTONS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarGeometry {
    /// `x` and `y` are the corner sizes, `width` and `height` the lengths of the sidebars
    /// between the corners.
    pub rect: Rectangle,
    pub has_marks_x: bool,
    pub has_marks_y: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderLayout {
    /// Top, right, bottom, left.
    pub sides: [Rectangle; 4],
    /// Top-left, top-right, bottom-left, bottom-right.
    pub corners: [Rectangle; 4],
}

/// Maps title-axis coordinates to a frame rectangle.
///
/// `along` runs parallel to the title, `across` perpendicular to it.
fn title_rect(vertical: bool, along: i64, across: i64, length: i64, thickness: i64) -> Rectangle {
    let (x, y, width, height) = if vertical {
        (across, along, thickness, length)
    } else {
        (along, across, length, thickness)
    };

    Rectangle {
        x: x as i32,
        y: y as i32,
        width: width.max(1) as u32,
        height: height.max(1) as u32,
    }
}

/// Geometry of the title strip inside a frame of the given size.
pub fn title_geometry(style: &FrameStyle, frame: Size) -> Rectangle {
    let borders = BorderMetrics::new(style);
    let sides = BorderMetrics::without_title(style);
    let thickness = i64::from(style.title_thickness);
    let width = i64::from(frame.width);
    let height = i64::from(frame.height);

    let mut x = i64::from(sides.top_left.width);
    let mut y = i64::from(sides.top_left.height);
    match style.title_direction {
        TitleDirection::Bottom => y = height - i64::from(sides.bottom_right.height) - thickness,
        TitleDirection::Right => x = width - i64::from(sides.bottom_right.width) - thickness,
        TitleDirection::Top | TitleDirection::Left => (),
    }

    let (width, height) = if style.has_vertical_title() {
        (thickness, height - i64::from(borders.total_size.height))
    } else {
        (width - i64::from(borders.total_size.width), thickness)
    };

    Rectangle {
        x: x as i32,
        y: y as i32,
        width: width.max(1) as u32,
        height: height.max(1) as u32,
    }
}

/// Length of the title text area, leaving room for every configured button.
///
/// Never less than 1.
pub fn title_length(style: &FrameStyle, frame: Size) -> u32 {
    let axis = if style.has_vertical_title() {
        Axis::Y
    } else {
        Axis::X
    };
    let space = i64::from(frame.extent(axis));
    let bsize = i64::from(BorderMetrics::new(style).total_size.extent(axis));
    let nominal = i64::from(style.left_buttons) + i64::from(style.right_buttons);
    (space - nominal * i64::from(style.title_thickness) - bsize).max(1) as u32
}

/// Lays out the title and its buttons for a frame of the given size.
///
/// Returns `None` for windows without a title.
///
/// When the buttons do not fit at their nominal thickness they are shrunk evenly. The pixels
/// left over are handed out one per button starting from the first left button; the right group
/// additionally shifts by one pixel when the leftovers run out.
pub fn layout_title_bar(
    style: &FrameStyle,
    slots: [bool; NUMBER_OF_BUTTONS],
    frame: Size,
) -> Option<TitleBarLayout> {
    if !style.has_title {
        return None;
    }

    let _span = tracy_client::span!("layout_title_bar");

    let vertical = style.has_vertical_title();
    let axis = if vertical { Axis::Y } else { Axis::X };
    let borders = BorderMetrics::new(style);
    let boundary = i64::from(BorderMetrics::without_title(style).top_left.width);
    let thickness = i64::from(style.title_thickness);

    let space = i64::from(frame.extent(axis));
    let bsize = i64::from(borders.total_size.extent(axis));
    let wsize = space - bsize;

    let title_length = i64::from(title_length(style, frame));

    let origin = title_geometry(style, frame);
    let (mut pos, across) = if vertical {
        (i64::from(origin.y), i64::from(origin.x))
    } else {
        (i64::from(origin.x), i64::from(origin.y))
    };

    let count = slots.iter().filter(|exists| **exists).count() as i64;
    let mut button_len = thickness;
    let mut rest = 0;
    if count > 0 && wsize < count * button_len {
        button_len = (wsize / count).max(1).min(thickness);
        rest = wsize - count * button_len;
        if rest > 0 {
            button_len += 1;
        }
        trace!("shrinking {count} buttons to {button_len}, {rest} px left over");
    }

    let mut buttons = [None; NUMBER_OF_BUTTONS];
    let off_screen = -thickness;

    // Left group, placed from the start of the title strip.
    let mut title_off = pos;
    let mut overflowed = false;
    for i in (0..NUMBER_OF_BUTTONS).step_by(2) {
        if !slots[i] {
            continue;
        }

        if !overflowed && pos + button_len < space - boundary {
            buttons[i] = Some(title_rect(vertical, pos, across, button_len, thickness));
            pos += button_len;
            title_off += button_len;
        } else {
            overflowed = true;
            buttons[i] = Some(title_rect(vertical, off_screen, across, button_len, thickness));
        }

        rest -= 1;
        if rest == 0 {
            button_len -= 1;
        }
    }
    let right_len = button_len;
    let left_end = pos;

    if wsize < 0 {
        title_off = -10;
    }
    let title = title_rect(vertical, title_off, across, title_length, thickness);

    // Right group, placed from the end of the title strip backwards, never into the left group.
    let mut button_len = right_len;
    let mut pos = space - boundary - button_len;
    let mut overflowed = false;
    for i in (1..NUMBER_OF_BUTTONS).step_by(2) {
        if !slots[i] {
            continue;
        }

        if !overflowed && pos > boundary && pos >= left_end {
            buttons[i] = Some(title_rect(vertical, pos, across, button_len, thickness));
            pos -= button_len;
        } else {
            overflowed = true;
            buttons[i] = Some(title_rect(vertical, off_screen, across, button_len, thickness));
        }

        rest -= 1;
        if rest == 0 {
            button_len -= 1;
            pos += 1;
        }
    }

    Some(TitleBarLayout {
        title,
        title_length: title_length as u32,
        buttons,
    })
}

/// Corner sizes and sidebar lengths for a frame of the given size.
///
/// Corners shrink to a third of the frame extent on an axis too short to hold two full corners,
/// and the handle marks along that axis are dropped.
pub fn sidebar_geometry(
    style: &FrameStyle,
    parts_drawn: DrawParts,
    face: Option<&BorderFace>,
    frame: Size,
) -> SidebarGeometry {
    if !style.has_border {
        return SidebarGeometry::default();
    }

    let (mut has_marks_x, mut has_marks_y) = match face {
        None => (
            parts_drawn.contains(DrawParts::X_HANDLES),
            parts_drawn.contains(DrawParts::Y_HANDLES),
        ),
        Some(face) => (!face.hidden_handles, !face.hidden_handles),
    };

    let corner = style.corner_size;
    let min_extent = corner.saturating_mul(2).saturating_add(2);

    let mut corner_x = corner;
    if frame.width < min_extent {
        corner_x = frame.width / 3;
        has_marks_x = false;
    }
    let mut corner_y = corner;
    if frame.height < min_extent {
        corner_y = frame.height / 3;
        has_marks_y = false;
    }

    let length = |extent: u32, corner: u32| extent.saturating_sub(corner.saturating_mul(2)).max(1);

    SidebarGeometry {
        rect: Rectangle {
            x: corner_x as i32,
            y: corner_y as i32,
            width: length(frame.width, corner_x),
            height: length(frame.height, corner_y),
        },
        has_marks_x,
        has_marks_y,
    }
}

/// Geometry of the four sidebars and four corners.
pub fn layout_border(style: &FrameStyle, sidebar: &SidebarGeometry) -> BorderLayout {
    let width = i64::from(BorderMetrics::without_title(style).top_left.width);
    let g = &sidebar.rect;
    let (sx, sy) = (i64::from(g.x), i64::from(g.y));
    let (sw, sh) = (i64::from(g.width), i64::from(g.height));

    let rect = |x: i64, y: i64, w: i64, h: i64| Rectangle {
        x: x as i32,
        y: y as i32,
        width: w.max(1) as u32,
        height: h.max(1) as u32,
    };

    BorderLayout {
        sides: [
            rect(sx, 0, sw, width),
            rect(2 * sx + sw - width, sy, width, sh),
            rect(sx, 2 * sy + sh - width, sw, width),
            rect(0, sy, width, sh),
        ],
        corners: [
            rect(0, 0, sx, sy),
            rect(sx + sw, 0, sx, sy),
            rect(0, sy + sh, sx, sy),
            rect(sx + sw, sy + sh, sx, sy),
        ],
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use proptest::prelude::*;

    use super::*;

    fn style(boundary_width: u32, title_thickness: u32, left: u8, right: u8) -> FrameStyle {
        FrameStyle {
            boundary_width,
            title_thickness,
            left_buttons: left,
            right_buttons: right,
            ..FrameStyle::default()
        }
    }

    fn slots(left: u8, right: u8) -> [bool; NUMBER_OF_BUTTONS] {
        let mut slots = [false; NUMBER_OF_BUTTONS];
        for (i, slot) in slots.iter_mut().enumerate() {
            let group = if i % 2 == 0 { left } else { right };
            *slot = i / 2 < usize::from(group);
        }
        slots
    }

    fn format_title_bar(layout: &TitleBarLayout) -> String {
        let mut buf = format!("title {} len {}\n", layout.title, layout.title_length);
        for (i, button) in layout.buttons.iter().enumerate() {
            if let Some(button) = button {
                buf += &format!("button {i} {button}\n");
            }
        }
        buf
    }

    #[test]
    fn title_geometry_per_direction() {
        let mut style = style(4, 18, 1, 1);
        let frame = Size::new(100, 80);

        assert_eq!(title_geometry(&style, frame), Rectangle::new(4, 4, 92, 18));
        style.title_direction = TitleDirection::Bottom;
        assert_eq!(title_geometry(&style, frame), Rectangle::new(4, 58, 92, 18));
        style.title_direction = TitleDirection::Left;
        assert_eq!(title_geometry(&style, frame), Rectangle::new(4, 4, 18, 72));
        style.title_direction = TitleDirection::Right;
        assert_eq!(title_geometry(&style, frame), Rectangle::new(78, 4, 18, 72));
    }

    #[test]
    fn title_bar_with_room() {
        let style = style(4, 18, 2, 1);
        let layout = layout_title_bar(&style, slots(2, 1), Size::new(200, 100)).unwrap();
        assert_snapshot!(format_title_bar(&layout), @r"
        title   40    4  138x18   (  40 -  177    4 -   21) len 138
        button 0    4    4   18x18   (   4 -   21    4 -   21)
        button 1  178    4   18x18   ( 178 -  195    4 -   21)
        button 2   22    4   18x18   (  22 -   39    4 -   21)
        ");
    }

    #[test]
    fn vertical_title_bar() {
        let style = FrameStyle {
            title_direction: TitleDirection::Right,
            ..style(2, 10, 1, 1)
        };
        let layout = layout_title_bar(&style, slots(1, 1), Size::new(60, 100)).unwrap();
        assert_eq!(layout.buttons[0], Some(Rectangle::new(48, 2, 10, 10)));
        assert_eq!(layout.buttons[1], Some(Rectangle::new(48, 88, 10, 10)));
        assert_eq!(layout.title, Rectangle::new(48, 12, 10, 76));
        assert_eq!(layout.title_length, 76);
    }

    #[test]
    fn shrunk_buttons_share_leftover_pixels() {
        // 10 px between the borders for 3 buttons of nominal thickness 5.
        let style = style(2, 5, 2, 1);
        let layout = layout_title_bar(&style, slots(2, 1), Size::new(14, 40)).unwrap();
        assert_snapshot!(format_title_bar(&layout), @r"
        title    9    2    1x5    (   9 -    9    2 -    6) len 1
        button 0    2    2    4x5    (   2 -    5    2 -    6)
        button 1    9    2    3x5    (   9 -   11    2 -    6)
        button 2    6    2    3x5    (   6 -    8    2 -    6)
        ");

        let buttons: Vec<_> = layout.buttons.iter().flatten().collect();
        let total: u32 = buttons.iter().map(|b| b.width).sum();
        assert!(total <= 10);
        assert!(buttons.iter().all(|b| b.width <= 5));
    }

    #[test]
    fn right_group_shifts_when_leftovers_run_out() {
        // 11 px for 3 buttons: widths 4, 4, 3, the last one shifted to stay adjacent.
        let style = style(2, 5, 1, 2);
        let layout = layout_title_bar(&style, slots(1, 2), Size::new(15, 40)).unwrap();
        assert_eq!(layout.buttons[0], Some(Rectangle::new(2, 2, 4, 5)));
        assert_eq!(layout.buttons[1], Some(Rectangle::new(9, 2, 4, 5)));
        assert_eq!(layout.buttons[3], Some(Rectangle::new(6, 2, 3, 5)));
    }

    #[test]
    fn right_group_stops_at_left_group() {
        // 3 px for 4 buttons clamped to 1 px each.
        let style = style(0, 5, 2, 2);
        let layout = layout_title_bar(&style, slots(2, 2), Size::new(3, 40)).unwrap();
        assert_eq!(layout.buttons[0], Some(Rectangle::new(0, 0, 1, 5)));
        assert_eq!(layout.buttons[2], Some(Rectangle::new(1, 0, 1, 5)));
        assert_eq!(layout.buttons[1], Some(Rectangle::new(2, 0, 1, 5)));
        assert_eq!(layout.buttons[3], Some(Rectangle::new(-5, 0, 1, 5)));
    }

    #[test]
    fn buttons_without_room_go_off_screen() {
        let style = style(2, 5, 2, 0);
        let layout = layout_title_bar(&style, slots(2, 0), Size::new(6, 40)).unwrap();

        // 2 px for 2 buttons: the first fits, the second does not.
        assert_eq!(layout.buttons[0], Some(Rectangle::new(2, 2, 1, 5)));
        assert_eq!(layout.buttons[2], Some(Rectangle::new(-5, 2, 1, 5)));
        assert_eq!(layout.title_length, 1);
    }

    #[test]
    fn negative_space_hides_title() {
        let style = style(4, 18, 1, 1);
        let layout = layout_title_bar(&style, slots(1, 1), Size::new(5, 40)).unwrap();
        assert_eq!(layout.title.x, -10);
        assert_eq!(layout.title.width, 1);
        assert!(layout.buttons[0].unwrap().right() <= 0);
        assert!(layout.buttons[1].unwrap().right() <= 0);
    }

    #[test]
    fn untitled_has_no_title_bar() {
        let style = FrameStyle {
            has_title: false,
            ..FrameStyle::default()
        };
        assert_eq!(layout_title_bar(&style, slots(1, 1), Size::new(100, 100)), None);
    }

    #[test]
    fn sidebar_full_size() {
        let style = FrameStyle {
            corner_size: 20,
            ..FrameStyle::default()
        };
        let parts = DrawParts::X_HANDLES | DrawParts::Y_HANDLES;
        let sidebar = sidebar_geometry(&style, parts, None, Size::new(200, 100));
        assert_eq!(sidebar.rect, Rectangle::new(20, 20, 160, 60));
        assert!(sidebar.has_marks_x);
        assert!(sidebar.has_marks_y);
    }

    #[test]
    fn sidebar_corners_shrink_on_short_axis() {
        let style = FrameStyle {
            corner_size: 20,
            ..FrameStyle::default()
        };
        let parts = DrawParts::X_HANDLES | DrawParts::Y_HANDLES;

        // 41 < 2 * 20 + 2 on the x axis only.
        let sidebar = sidebar_geometry(&style, parts, None, Size::new(41, 100));
        assert_eq!(sidebar.rect.x, 13);
        assert_eq!(sidebar.rect.y, 20);
        assert!(!sidebar.has_marks_x);
        assert!(sidebar.has_marks_y);

        let sidebar = sidebar_geometry(&style, parts, None, Size::new(100, 30));
        assert_eq!(sidebar.rect.y, 10);
        assert_eq!(sidebar.rect.height, 10);
        assert!(sidebar.has_marks_x);
        assert!(!sidebar.has_marks_y);
    }

    #[test]
    fn huge_corner_size_shrinks_both_axes() {
        let style = FrameStyle {
            corner_size: u32::MAX,
            ..FrameStyle::default()
        };
        let parts = DrawParts::X_HANDLES | DrawParts::Y_HANDLES;

        let sidebar = sidebar_geometry(&style, parts, None, Size::new(200, 100));
        assert_eq!(sidebar.rect, Rectangle::new(66, 33, 68, 34));
        assert!(!sidebar.has_marks_x);
        assert!(!sidebar.has_marks_y);
    }

    #[test]
    fn sidebar_marks_from_face() {
        let style = FrameStyle::default();
        let face = BorderFace {
            hidden_handles: true,
        };
        let sidebar = sidebar_geometry(
            &style,
            DrawParts::X_HANDLES | DrawParts::Y_HANDLES,
            Some(&face),
            Size::new(200, 200),
        );
        assert!(!sidebar.has_marks_x);
        assert!(!sidebar.has_marks_y);

        let sidebar = sidebar_geometry(
            &style,
            DrawParts::empty(),
            Some(&BorderFace::default()),
            Size::new(200, 200),
        );
        assert!(sidebar.has_marks_x);
        assert!(sidebar.has_marks_y);
    }

    #[test]
    fn borderless_sidebar_is_empty() {
        let style = FrameStyle {
            has_border: false,
            ..FrameStyle::default()
        };
        let sidebar = sidebar_geometry(&style, DrawParts::all(), None, Size::new(200, 200));
        assert_eq!(sidebar, SidebarGeometry::default());
    }

    #[test]
    fn border_parts_tile_the_frame_edges() {
        let style = FrameStyle {
            boundary_width: 4,
            corner_size: 20,
            ..FrameStyle::default()
        };
        let sidebar = sidebar_geometry(&style, DrawParts::empty(), None, Size::new(200, 100));
        let border = layout_border(&style, &sidebar);

        assert_eq!(border.sides[0], Rectangle::new(20, 0, 160, 4));
        assert_eq!(border.sides[1], Rectangle::new(196, 20, 4, 60));
        assert_eq!(border.sides[2], Rectangle::new(20, 96, 160, 4));
        assert_eq!(border.sides[3], Rectangle::new(0, 20, 4, 60));

        assert_eq!(border.corners[0], Rectangle::new(0, 0, 20, 20));
        assert_eq!(border.corners[1], Rectangle::new(180, 0, 20, 20));
        assert_eq!(border.corners[2], Rectangle::new(0, 80, 20, 20));
        assert_eq!(border.corners[3], Rectangle::new(180, 80, 20, 20));
    }

    proptest! {
        #[test]
        fn title_bar_invariants(
            width in 0u32..300,
            height in 0u32..300,
            boundary in 0u32..8,
            thickness in 1u32..24,
            left in 0u8..=5,
            right in 0u8..=5,
        ) {
            let style = style(boundary, thickness, left, right);
            let layout = layout_title_bar(&style, slots(left, right), Size::new(width, height)).unwrap();

            prop_assert!(layout.title.width >= 1 && layout.title.height >= 1);
            prop_assert!(layout.title_length >= 1);

            let buttons: Vec<_> = layout.buttons.iter().flatten().collect();
            prop_assert_eq!(buttons.len(), usize::from(left) + usize::from(right));
            for (i, a) in buttons.iter().enumerate() {
                prop_assert!(a.width >= 1 && a.height >= 1);
                prop_assert!(a.width <= thickness);
                for b in &buttons[i + 1..] {
                    let on_screen = a.right() > 0 && b.right() > 0;
                    prop_assert!(!on_screen || !a.overlaps(b), "{a} overlaps {b}");
                }
            }
        }

        #[test]
        fn sidebar_sizes_are_positive(width in 0u32..200, height in 0u32..200, corner in 0u32..40) {
            let style = FrameStyle { corner_size: corner, ..FrameStyle::default() };
            let sidebar = sidebar_geometry(&style, DrawParts::all(), None, Size::new(width, height));
            prop_assert!(sidebar.rect.width >= 1 && sidebar.rect.height >= 1);

            let border = layout_border(&style, &sidebar);
            for rect in border.sides.iter().chain(&border.corners) {
                prop_assert!(rect.width >= 1 && rect.height >= 1);
            }
        }
    }
}
