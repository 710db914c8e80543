//! Stepping of animated frame resizes.
//!
//! An animation is a fixed number of intermediate rectangles between a start and an end
//! rectangle. There is no clock: every step is applied synchronously, one after the other.

use framekit_ipc::ResizeMode;

use crate::frame::geometry::{RectDelta, Rectangle};

/// Number of steps to go from a size change of `span` pixels.
///
/// `requested` is a step count when positive and a pixel increment when negative. Zero, as
/// well as any request in the opaque and setup modes, jumps straight to the end in one step.
pub fn step_count(span: u64, mode: ResizeMode, requested: i32) -> u32 {
    let requested = if mode.resizes_client() { 0 } else { requested };

    let steps = if requested < 0 {
        let increment = u64::from(requested.unsigned_abs());
        span.saturating_sub(1) / increment
    } else {
        let requested = u64::from(requested.unsigned_abs());
        if requested > 0 && requested >= span {
            span.saturating_sub(1)
        } else {
            requested
        }
    };

    u32::try_from(steps).unwrap_or(u32::MAX - 1) + 1
}

/// Intermediate geometry of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// 1-based index of the step.
    pub index: u32,
    pub rect: Rectangle,
    pub is_first: bool,
    pub is_last: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeAnimation {
    start: Rectangle,
    delta: RectDelta,
    step_count: u32,
}

impl ResizeAnimation {
    /// Returns `None` when the size does not change, unless this is a setup resize.
    ///
    /// A pure move in a mode other than setup is not animated at all.
    pub fn new(start: Rectangle, end: Rectangle, mode: ResizeMode, requested: i32) -> Option<Self> {
        let delta = start.delta_to(&end);
        let span = delta.span();
        if span == 0 && mode != ResizeMode::Setup {
            return None;
        }

        Some(Self {
            start,
            delta,
            step_count: step_count(span, mode, requested),
        })
    }

    pub fn delta(&self) -> RectDelta {
        self.delta
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Geometry after step `index` of [`step_count`](Self::step_count).
    pub fn rect_at(&self, index: u32) -> Rectangle {
        self.start.interpolate(self.delta, index, self.step_count)
    }

    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        let count = self.step_count;
        (1..=count).map(move |index| Step {
            index,
            rect: self.rect_at(index),
            is_first: index == 1,
            is_last: index == count,
        })
    }
}
