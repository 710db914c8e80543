use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use framekit_ipc::ResizeMode;

use crate::frame::geometry::Rectangle;
use crate::utils::version;

#[derive(Parser)]
#[command(author, version = version(), about, long_about = None)]
#[command(subcommand_value_name = "SUBCOMMAND")]
#[command(subcommand_help_heading = "Subcommands")]
pub struct Cli {
    #[command(subcommand)]
    pub subcommand: Sub,
}

#[derive(Subcommand)]
pub enum Sub {
    /// Print the actions a resize would run, with the steps they run in.
    Plan {
        #[command(flatten)]
        resize: ResizeArgs,
        /// Treat the frame as hidden at the start.
        #[arg(long)]
        hidden_start: bool,
        /// Treat the frame as hidden at the end.
        #[arg(long)]
        hidden_end: bool,
        /// Treat the window as focused.
        #[arg(long)]
        focused: bool,
    },
    /// Run a resize against an in-memory server and print the requests it makes.
    Simulate {
        #[command(flatten)]
        resize: ResizeArgs,
        /// Animation steps: a step count when positive, a pixel increment when negative.
        ///
        /// Defaults to `animation-steps` from the config.
        #[arg(long, allow_negative_numbers = true)]
        steps: Option<i32>,
        /// Path to config file (default: `$XDG_CONFIG_HOME/framekit/config.kdl`).
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Treat the window as focused.
        #[arg(long)]
        focused: bool,
        /// Treat the client as shaped.
        #[arg(long)]
        shaped: bool,
        /// Print the broadcast events as JSON lines instead of the request log.
        #[arg(short, long)]
        json: bool,
    },
    /// Print the decoration layout of a frame.
    Layout {
        /// Frame rectangle as `x,y,width,height`.
        #[arg(long, allow_hyphen_values = true)]
        rect: Rectangle,
        /// Path to config file (default: `$XDG_CONFIG_HOME/framekit/config.kdl`).
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate the config file.
    Validate {
        /// Path to config file (default: `$XDG_CONFIG_HOME/framekit/config.kdl`).
        ///
        /// This can also be set with the `FRAMEKIT_CONFIG` environment variable. If both are
        /// set, the command line argument takes precedence.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
pub struct ResizeArgs {
    /// Start frame rectangle as `x,y,width,height`.
    #[arg(long, allow_hyphen_values = true)]
    pub from: Rectangle,
    /// End frame rectangle as `x,y,width,height`.
    #[arg(long, allow_hyphen_values = true)]
    pub to: Rectangle,
    /// Resize mode, defaults to the config for `simulate` and to opaque for `plan`.
    #[arg(short, long, value_enum)]
    pub mode: Option<ResizeMode>,
}
