//! Types broadcast by framekit to observers of window frame geometry.
//!
//! Every time a managed window's frame is set up or resized, framekit emits an [`Event`]
//! describing the final, fully-applied configuration. Observers never see intermediate
//! animation steps.
#![warn(missing_docs)]

use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Event broadcast to observers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The frame configuration of a managed window changed.
    WindowConfigured {
        /// The new configuration.
        window: WindowConfiguration,
    },
}

/// Configuration of a managed window frame after a geometry change.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WindowConfiguration {
    /// Unique id of the managed window.
    pub id: u64,
    /// Outer frame rectangle in root coordinates.
    pub frame: Rect,
    /// Width of the client content.
    pub client_width: u32,
    /// Height of the client content.
    pub client_height: u32,
    /// Edge of the frame the title bar sits on, if the window has a title.
    pub title_direction: Option<TitleDirection>,
    /// Length of the title text area along the title axis.
    pub title_length: u32,
    /// Whether the frame is collapsed to its title bar.
    pub is_shaded: bool,
    /// Whether the client uses a non-rectangular shape.
    pub is_shaped: bool,
}

/// Rectangle with a signed origin and unsigned size.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// X position.
    pub x: i32,
    /// Y position.
    pub y: i32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Edge of the frame that holds the title bar.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum TitleDirection {
    /// Title along the top edge.
    Top,
    /// Title along the bottom edge.
    Bottom,
    /// Title along the left edge, drawn vertically.
    Left,
    /// Title along the right edge, drawn vertically.
    Right,
}

/// How a frame resize treats the client content.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ResizeMode {
    /// Client content is pinned to the far edge and scrolls as the frame changes.
    Scroll,
    /// Client content is pinned to the near edge and only resized at the end.
    Shrink,
    /// Client content is resized live, in a single step.
    #[default]
    Opaque,
    /// Non-animated resize used when (re)applying window geometry.
    Setup,
}

impl ResizeMode {
    /// Whether the client is resized along with the frame.
    ///
    /// Only these modes resize the client; the others leave it for a single final
    /// application.
    pub fn resizes_client(self) -> bool {
        matches!(self, ResizeMode::Opaque | ResizeMode::Setup)
    }

    /// Whether the container may be revealed from a hidden, degenerate size during the
    /// animation.
    pub fn can_reveal(self) -> bool {
        matches!(self, ResizeMode::Scroll | ResizeMode::Shrink)
    }
}

impl FromStr for ResizeMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scroll" => Ok(Self::Scroll),
            "shrink" => Ok(Self::Shrink),
            "opaque" => Ok(Self::Opaque),
            "setup" => Ok(Self::Setup),
            _ => Err(r#"invalid resize mode, can be "scroll", "shrink", "opaque" or "setup""#),
        }
    }
}

impl fmt::Display for ResizeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResizeMode::Scroll => "scroll",
            ResizeMode::Shrink => "shrink",
            ResizeMode::Opaque => "opaque",
            ResizeMode::Setup => "setup",
        };
        f.write_str(name)
    }
}

impl FromStr for TitleDirection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(r#"invalid title position, can be "top", "bottom", "left" or "right""#),
        }
    }
}

impl Event {
    /// Writes the event as a single line of JSON.
    pub fn write_json_line(&self, mut writer: impl Write) -> io::Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n")
    }
}
