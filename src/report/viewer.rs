//! Best-effort opening of the rendered chart in a viewer.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

#[cfg(target_os = "macos")]
const OPEN_COMMAND: &str = "open";

#[cfg(not(target_os = "macos"))]
const OPEN_COMMAND: &str = "xdg-open";

/// Open the chart in the platform image viewer.
///
/// Never fails the run: a missing display or a failed spawn is logged and
/// swallowed. The chart file has already been written at this point.
pub fn open_chart(path: &Path) {
    if !display_available() {
        debug!(path = %path.display(), "no display available, skipping viewer");
        return;
    }

    let result = Command::new(OPEN_COMMAND)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match result {
        Ok(_) => debug!(path = %path.display(), "viewer spawned"),
        Err(error) => warn!(%error, "failed to open chart in viewer"),
    }
}

#[cfg(target_os = "macos")]
fn display_available() -> bool {
    true
}

#[cfg(not(target_os = "macos"))]
fn display_available() -> bool {
    std::env::var_os("DISPLAY").is_some() || std::env::var_os("WAYLAND_DISPLAY").is_some()
}
