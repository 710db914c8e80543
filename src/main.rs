#[macro_use]
extern crate tracing;

use std::env;
use std::io::{self, Write as _};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context as _};
use clap::Parser;
use framekit::cli::{Cli, ResizeArgs, Sub};
use framekit::frame::actions::plan;
use framekit::frame::decorations::{layout_border, layout_title_bar, sidebar_geometry, DrawParts};
use framekit::frame::geometry::Rectangle;
use framekit::frame::{force_setup_window, resize, setup_window};
use framekit::protocol::recording::{RecordingPainter, RecordingProtocol};
use framekit::protocol::{
    Broadcaster, FocusState, FrameContext, JsonBroadcaster, Protocol, ScreenState,
};
use framekit::utils::{config_path, version};
use framekit::window::{FrameStyle, ManagedWindow};
use framekit_config::Config;
use framekit_ipc::{Event, ResizeMode};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| "framekit=debug,info".to_owned());
    let env_filter = EnvFilter::builder().parse_lossy(directives);
    tracing_subscriber::fmt()
        .compact()
        .with_writer(io::stderr)
        .with_env_filter(env_filter)
        .init();

    let cli = Cli::parse();

    let _client = tracy_client::Client::start();

    debug!("starting framekit {}", version());

    match cli.subcommand {
        Sub::Plan {
            resize,
            hidden_start,
            hidden_end,
            focused,
        } => {
            let mode = resize.mode.unwrap_or_default();
            let actions = plan(
                resize.from.delta_to(&resize.to),
                mode,
                hidden_start,
                hidden_end,
                focused,
            );
            print!("{actions}");
        }
        Sub::Simulate {
            resize,
            steps,
            config,
            focused,
            shaped,
            json,
        } => simulate(resize, steps, config, focused, shaped, json)?,
        Sub::Layout { rect, config } => {
            let config = load_config(config)?;
            print_layout(&FrameStyle::from(&config.style), rect)?;
        }
        Sub::Validate { config } => {
            let path = config_path(config)?;
            if let Err(err) = path.load() {
                error!("{err:?}");
                bail!("config is invalid");
            }
            info!("config is valid");
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    config_path(path)?
        .load()
        .map_err(|err: miette::Report| anyhow!("{err:?}"))
        .context("error loading config")
}

fn simulate(
    args: ResizeArgs,
    steps: Option<i32>,
    config: Option<PathBuf>,
    focused: bool,
    shaped: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(config)?;
    let style = FrameStyle::from(&config.style);
    let mode = args.mode.unwrap_or(config.resize.mode);
    let steps = steps.unwrap_or(config.resize.animation_steps);

    let mut protocol = RecordingProtocol::new();
    let root = protocol.root();
    let client = protocol.create_window(root, args.from.clamped(), false);
    let mut window = ManagedWindow::create(&mut protocol, style, client, args.from);
    window.state.is_shaped = shaped;

    let mut focus = FocusState::default();
    if focused {
        focus.focused = Some(window.id());
    }
    let mut painter = RecordingPainter::default();
    let mut screen = ScreenState::new(style.left_buttons, style.right_buttons);
    let mut broadcaster: Box<dyn Broadcaster> = if json {
        Box::new(JsonBroadcaster::new(io::stdout()))
    } else {
        Box::new(Vec::<Event>::new())
    };

    let mut ctx = FrameContext {
        protocol: &mut protocol,
        focus: &mut focus,
        painter: &mut painter,
        broadcaster: &mut *broadcaster,
        screen: &mut screen,
    };

    force_setup_window(&mut ctx, &mut window, args.from, false);
    let setup_requests = protocol.take_log().len();
    debug!("initial setup took {setup_requests} requests");

    let mut ctx = FrameContext {
        protocol: &mut protocol,
        focus: &mut focus,
        painter: &mut painter,
        broadcaster: &mut *broadcaster,
        screen: &mut screen,
    };
    resize(&mut ctx, &mut window, args.from, args.to, mode, steps);
    if mode != ResizeMode::Setup {
        // The resize only moves the frame parts, lay the decorations out for the final size.
        setup_window(&mut ctx, &mut window, args.to, false);
    }

    if json {
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    for request in &protocol.log {
        writeln!(stdout, "{request}").context("error writing request log")?;
    }
    for (id, parts, is_active) in &painter.draws {
        writeln!(stdout, "draw {id:?} {parts:?} active: {is_active}")
            .context("error writing request log")?;
    }

    Ok(())
}

fn print_layout(style: &FrameStyle, rect: Rectangle) -> anyhow::Result<()> {
    let rect = rect.clamped();
    let size = rect.size();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "frame    {rect}")?;
    if let Some(title_bar) = layout_title_bar(style, style.button_slots(), size) {
        writeln!(stdout, "title    {}", title_bar.title)?;
        for (i, button) in title_bar.buttons.iter().enumerate() {
            if let Some(button) = button {
                writeln!(stdout, "button {i} {button}")?;
            }
        }
    }

    let sidebar = sidebar_geometry(style, DrawParts::empty(), Some(&style.border_face()), size);
    if style.has_border {
        writeln!(
            stdout,
            "sidebar  {} marks x: {} y: {}",
            sidebar.rect, sidebar.has_marks_x, sidebar.has_marks_y
        )?;
        let border = layout_border(style, &sidebar);
        for (name, side) in ["top", "right", "bottom", "left"].iter().zip(&border.sides) {
            writeln!(stdout, "{name:<8} {side}")?;
        }
        for (name, corner) in ["nw", "ne", "sw", "se"].iter().zip(&border.corners) {
            writeln!(stdout, "{name:<8} {corner}")?;
        }
    }

    Ok(())
}
