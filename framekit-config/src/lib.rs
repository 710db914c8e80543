#[macro_use]
extern crate tracing;

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use miette::{Context as _, IntoDiagnostic as _};

pub mod resize;
pub mod style;

pub use crate::resize::Resize;
pub use crate::style::{Buttons, Style, Title, MAX_BUTTONS_PER_SIDE};

#[derive(knuffel::Decode, Debug, Default, Clone, PartialEq)]
pub struct Config {
    #[knuffel(child, default)]
    pub style: Style,
    #[knuffel(child, default)]
    pub resize: Resize,
}

#[derive(Debug, Clone)]
pub enum ConfigPath {
    /// Explicitly set config path.
    ///
    /// Load the config only from this path.
    Explicit(PathBuf),

    /// Default config path.
    ///
    /// Prioritize the user path, fallback to the system path, fallback to the built-in defaults.
    Regular {
        /// User config path, usually `$XDG_CONFIG_HOME/framekit/config.kdl`.
        user_path: PathBuf,
        /// System config path, usually `/etc/framekit/config.kdl`.
        system_path: PathBuf,
    },
}

impl Config {
    pub fn load(path: &Path) -> miette::Result<Self> {
        let contents = fs::read_to_string(path)
            .into_diagnostic()
            .with_context(|| format!("error reading {path:?}"))?;

        let config = Self::parse(
            path.file_name()
                .and_then(OsStr::to_str)
                .unwrap_or("config.kdl"),
            &contents,
        )
        .context("error parsing")?;
        debug!("loaded config from {path:?}");
        Ok(config)
    }

    pub fn parse(filename: &str, text: &str) -> Result<Self, knuffel::Error> {
        let _span = tracy_client::span!("Config::parse");
        knuffel::parse(filename, text)
    }
}

impl ConfigPath {
    /// Loads the config.
    ///
    /// An explicit path must exist. For the regular paths, a missing file on both locations
    /// yields the built-in defaults.
    pub fn load(&self) -> miette::Result<Config> {
        let _span = tracy_client::span!("ConfigPath::load");

        let path = match self {
            ConfigPath::Explicit(path) => path.as_path(),
            ConfigPath::Regular {
                user_path,
                system_path,
            } => {
                if user_path.exists() {
                    user_path.as_path()
                } else if system_path.exists() {
                    system_path.as_path()
                } else {
                    debug!("no config file found, using defaults");
                    return Ok(Config::default());
                }
            }
        };

        Config::load(path).context("error loading config")
    }
}
