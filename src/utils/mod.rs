use std::env;
use std::path::PathBuf;

use anyhow::Context as _;
use directories::ProjectDirs;
use framekit_config::ConfigPath;
use git_version::git_version;

pub mod id;

pub fn version() -> String {
    format!(
        "{} ({})",
        env!("CARGO_PKG_VERSION"),
        git_version!(fallback = "unknown commit"),
    )
}

/// Resolves where to load the config from.
///
/// An explicit path wins over `$FRAMEKIT_CONFIG`, which wins over the XDG config directory and
/// `/etc/framekit/config.kdl`.
pub fn config_path(cli_path: Option<PathBuf>) -> anyhow::Result<ConfigPath> {
    if let Some(path) = cli_path.or_else(|| env::var_os("FRAMEKIT_CONFIG").map(PathBuf::from)) {
        return Ok(ConfigPath::Explicit(path));
    }

    let mut user_path = ProjectDirs::from("", "", "framekit")
        .context("error retrieving home directory")?
        .config_dir()
        .to_owned();
    user_path.push("config.kdl");

    Ok(ConfigPath::Regular {
        user_path,
        system_path: PathBuf::from("/etc/framekit/config.kdl"),
    })
}
