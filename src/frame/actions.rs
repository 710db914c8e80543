//! Ordering of the primitive operations of a frame resize.
//!
//! The planner runs once per resize and produces a short list of actions. The same list is then
//! replayed for every animation step, each action filtered by its [`Phase`].

use std::fmt;

use arrayvec::ArrayVec;
use framekit_ipc::ResizeMode;

use super::geometry::{Axis, RectDelta};

/// Upper bound of the number of actions in one plan.
pub const MAX_ACTIONS: usize = 32;

/// Axes an action applies the new geometry to.
///
/// The other axis keeps the geometry of the previous step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axes {
    X,
    Y,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RaiseContainer,
    /// Marks the transition of the container into or out of the hidden state.
    SetupHidden,
    /// Resizes the title; only the variant matching the title orientation does anything.
    ResizeTitle(Axis),
    /// Lays the border sidebars out for the new size.
    ResizeDecorations(Axes),
    ResizeClient(Axes),
    ResizeContainer(Axes),
    /// Moves and resizes the outer frame, committing the step geometry.
    MoveResizeFrame,
    LowerContainer,
    RestoreFocus,
}

/// Animation steps an action runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    FirstStepOnly,
    /// First step of an animation with more than one step.
    FirstStepOnlyIfMultistep,
    EveryStep,
    LastStepOnly,
    /// Last step of an animation with more than one step.
    LastStepOnlyIfMultistep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedAction {
    pub action: Action,
    pub phase: Phase,
}

/// Ordered actions of one resize.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResizeActionList {
    actions: ArrayVec<PlannedAction, MAX_ACTIONS>,
}

impl Phase {
    /// Whether an action of this phase runs in a step with these flags.
    pub fn is_live(self, is_first_step: bool, is_last_step: bool) -> bool {
        match self {
            Phase::FirstStepOnly => is_first_step,
            Phase::FirstStepOnlyIfMultistep => is_first_step && !is_last_step,
            Phase::EveryStep => true,
            Phase::LastStepOnly => is_last_step,
            Phase::LastStepOnlyIfMultistep => is_last_step && !is_first_step,
        }
    }
}

impl Action {
    fn phase(self) -> Phase {
        match self {
            Action::RaiseContainer | Action::SetupHidden => Phase::FirstStepOnlyIfMultistep,
            Action::ResizeTitle(_)
            | Action::ResizeDecorations(_)
            | Action::ResizeClient(_)
            | Action::ResizeContainer(_)
            | Action::MoveResizeFrame => Phase::EveryStep,
            Action::LowerContainer | Action::RestoreFocus => Phase::LastStepOnly,
        }
    }

    /// Whether the action touches the title or the border decorations.
    pub fn is_decoration(self) -> bool {
        matches!(self, Action::ResizeTitle(_) | Action::ResizeDecorations(_))
    }

    /// Whether the action resizes the frame or the container.
    pub fn is_outer_bound(self) -> bool {
        matches!(self, Action::MoveResizeFrame | Action::ResizeContainer(_))
    }
}

impl ResizeActionList {
    fn push(&mut self, action: Action) {
        self.push_with_phase(action, action.phase());
    }

    fn push_with_phase(&mut self, action: Action, phase: Phase) {
        self.actions.push(PlannedAction { action, phase });
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlannedAction> + '_ {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn position(&self, action: Action) -> Option<usize> {
        self.actions.iter().position(|a| a.action == action)
    }

    /// Actions running in a step with these flags, in order.
    pub fn live(&self, is_first_step: bool, is_last_step: bool) -> impl Iterator<Item = Action> + '_ {
        self.actions
            .iter()
            .filter(move |a| a.phase.is_live(is_first_step, is_last_step))
            .map(|a| a.action)
    }
}

/// Plans the actions of a resize.
///
/// Parts grow outward from the anchored corner, and shrink from the outside in, so that no
/// sub-window ever pokes out of its parent mid-resize. With mixed signs each axis gets its own
/// complete pass.
pub fn plan(
    delta: RectDelta,
    mode: ResizeMode,
    is_hidden_at_start: bool,
    is_hidden_at_end: bool,
    has_focus: bool,
) -> ResizeActionList {
    let mut list = ResizeActionList::default();

    if is_hidden_at_start
        && mode.can_reveal()
        && ((delta.width != 0 && delta.height != 0) || !is_hidden_at_end)
    {
        // The container becomes visible during the animation, make sure it is not buried.
        list.push(Action::SetupHidden);
        list.push(Action::RaiseContainer);
    }

    let resizes_client = mode.resizes_client();
    let axis_pass = |list: &mut ResizeActionList, axis: Axis, axes: Axes| {
        list.push(Action::ResizeTitle(axis));
        list.push(Action::ResizeDecorations(axes));
        if resizes_client {
            list.push(Action::ResizeClient(axes));
        }
        list.push(Action::ResizeContainer(axes));
    };
    let reverse_axis_pass = |list: &mut ResizeActionList, axis: Axis, axes: Axes| {
        list.push(Action::ResizeContainer(axes));
        if resizes_client {
            list.push(Action::ResizeClient(axes));
        }
        list.push(Action::ResizeDecorations(axes));
        list.push(Action::ResizeTitle(axis));
    };

    match (delta.width >= 0, delta.height >= 0) {
        (true, true) => {
            list.push(Action::ResizeTitle(Axis::X));
            list.push(Action::ResizeTitle(Axis::Y));
            list.push(Action::ResizeDecorations(Axes::Both));
            if resizes_client {
                list.push(Action::ResizeClient(Axes::Both));
            }
            list.push(Action::ResizeContainer(Axes::Both));
            list.push(Action::MoveResizeFrame);
        }
        (true, false) => {
            axis_pass(&mut list, Axis::X, Axes::X);
            list.push(Action::MoveResizeFrame);
            reverse_axis_pass(&mut list, Axis::Y, Axes::Y);
        }
        (false, true) => {
            axis_pass(&mut list, Axis::Y, Axes::Y);
            list.push(Action::MoveResizeFrame);
            reverse_axis_pass(&mut list, Axis::X, Axes::X);
        }
        (false, false) => {
            list.push(Action::MoveResizeFrame);
            list.push(Action::ResizeContainer(Axes::Both));
            if resizes_client {
                list.push(Action::ResizeClient(Axes::Both));
            }
            list.push(Action::ResizeDecorations(Axes::Both));
            list.push(Action::ResizeTitle(Axis::Y));
            list.push(Action::ResizeTitle(Axis::X));
        }
    }

    if is_hidden_at_end && !resizes_client {
        list.push(Action::LowerContainer);
    }

    if has_focus && is_hidden_at_end {
        // Moving and resizing the frame can silently take the input focus away from the client.
        list.push_with_phase(Action::SetupHidden, Phase::LastStepOnly);
        list.push(Action::RestoreFocus);
    }

    trace!("planned {} resize actions", list.len());
    list
}

impl fmt::Display for Axes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axes::X => "x",
            Axes::Y => "y",
            Axes::Both => "xy",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::RaiseContainer => f.write_str("raise-container"),
            Action::SetupHidden => f.write_str("setup-hidden"),
            Action::ResizeTitle(Axis::X) => f.write_str("resize-title x"),
            Action::ResizeTitle(Axis::Y) => f.write_str("resize-title y"),
            Action::ResizeDecorations(axes) => write!(f, "resize-decorations {axes}"),
            Action::ResizeClient(axes) => write!(f, "resize-client {axes}"),
            Action::ResizeContainer(axes) => write!(f, "resize-container {axes}"),
            Action::MoveResizeFrame => f.write_str("move-resize-frame"),
            Action::LowerContainer => f.write_str("lower-container"),
            Action::RestoreFocus => f.write_str("restore-focus"),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::FirstStepOnly => "first",
            Phase::FirstStepOnlyIfMultistep => "first-multistep",
            Phase::EveryStep => "every",
            Phase::LastStepOnly => "last",
            Phase::LastStepOnlyIfMultistep => "last-multistep",
        };
        f.write_str(name)
    }
}

impl fmt::Display for ResizeActionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for planned in &self.actions {
            writeln!(f, "{:<24} [{}]", planned.action.to_string(), planned.phase)?;
        }
        Ok(())
    }
}
