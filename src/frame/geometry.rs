use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Context as _};

/// Axis of the frame plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

/// Rectangle with a signed origin and an unsigned size.
///
/// Sizes coming from callers may be zero; everything handed to the protocol goes through
/// [`Rectangle::clamped`] first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Signed difference between two rectangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectDelta {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn extent(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Subtracts `other`, never going below 1 on either axis.
    pub fn shrink_max1(self, other: Size) -> Size {
        Size {
            width: self.width.saturating_sub(other.width).max(1),
            height: self.height.saturating_sub(other.height).max(1),
        }
    }
}

impl std::ops::Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size {
            width: self.width.saturating_add(rhs.width),
            height: self.height.saturating_add(rhs.height),
        }
    }
}

impl Rectangle {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn extent(&self, axis: Axis) -> u32 {
        self.size().extent(axis)
    }

    /// Returns the rectangle with width and height of at least 1.
    pub fn clamped(self) -> Self {
        if self.width < 1 || self.height < 1 {
            warn!("clamping degenerate rectangle {self}");
        }

        Self {
            width: self.width.max(1),
            height: self.height.max(1),
            ..self
        }
    }

    pub fn delta_to(&self, other: &Rectangle) -> RectDelta {
        RectDelta {
            x: i64::from(other.x) - i64::from(self.x),
            y: i64::from(other.y) - i64::from(self.y),
            width: i64::from(other.width) - i64::from(self.width),
            height: i64::from(other.height) - i64::from(self.height),
        }
    }

    /// Computes `self + delta * num / den` with truncating division on every field.
    ///
    /// With `num == den` this reproduces `self + delta` exactly.
    pub fn interpolate(&self, delta: RectDelta, num: u32, den: u32) -> Rectangle {
        debug_assert!(den > 0);
        let num = i64::from(num);
        let den = i64::from(den.max(1));
        let lerp = |from: i64, d: i64| from + d * num / den;

        Rectangle {
            x: lerp(i64::from(self.x), delta.x) as i32,
            y: lerp(i64::from(self.y), delta.y) as i32,
            width: lerp(i64::from(self.width), delta.width).max(1) as u32,
            height: lerp(i64::from(self.height), delta.height).max(1) as u32,
        }
    }

    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }

    pub fn overlaps(&self, other: &Rectangle) -> bool {
        i64::from(self.x) < other.right()
            && i64::from(other.x) < self.right()
            && i64::from(self.y) < other.bottom()
            && i64::from(other.y) < self.bottom()
    }
}

impl RectDelta {
    /// Largest absolute size change on either axis.
    pub fn span(&self) -> u64 {
        self.width.unsigned_abs().max(self.height.unsigned_abs())
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:4} {:4} {:4}x{:<4} ({:4} - {:4} {:4} - {:4})",
            self.x,
            self.y,
            self.width,
            self.height,
            self.x,
            self.right() - 1,
            self.y,
            self.bottom() - 1,
        )
    }
}

/// Parses `x,y,width,height`.
impl FromStr for Rectangle {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<_> = s.split(',').map(str::trim).collect();
        let [x, y, width, height] = parts[..] else {
            bail!("expected x,y,width,height, got {s:?}");
        };

        Ok(Self {
            x: x.parse().context("error parsing x")?,
            y: y.parse().context("error parsing y")?,
            width: width.parse().context("error parsing width")?,
            height: height.parse().context("error parsing height")?,
        })
    }
}

impl From<Rectangle> for framekit_ipc::Rect {
    fn from(value: Rectangle) -> Self {
        Self {
            x: value.x,
            y: value.y,
            width: value.width,
            height: value.height,
        }
    }
}
