//! [`Desktop`] implementation backed by the X11 command-line tools.
//!
//! Workspaces are queried through `wmctrl -d` and monitor outputs
//! through `xrandr --query`; both are invoked as short-lived child
//! processes and their stdout is parsed here.  Nothing outside this
//! module should reference wmctrl or xrandr for queries (the command
//! lines the tool *emits* are formatted in [`crate::shell`]).

use crate::traits::Desktop;
use std::process::Command;

/// Desktop backed by wmctrl / xrandr child processes.
///
/// No process is spawned eagerly; each method call runs one short-lived
/// query.
pub struct XorgDesktop;

/// Errors that can occur when running or parsing the query tools.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct XorgDesktopError(String);

impl Default for XorgDesktop {
    fn default() -> Self {
        Self
    }
}

impl XorgDesktop {
    /// Create a new handle.
    pub fn new() -> Self {
        Self
    }
}

//  Query helpers

/// Run `program` with `args` and return its stdout as a string.
fn run_query(program: &str, args: &[&str]) -> Result<String, XorgDesktopError> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| XorgDesktopError(format!("failed to run {}: {}", program, e)))?;
    if !output.status.success() {
        return Err(XorgDesktopError(format!(
            "{} exited with {}",
            program, output.status
        )));
    }
    String::from_utf8(output.stdout)
        .map_err(|e| XorgDesktopError(format!("{} output not utf-8: {}", program, e)))
}

/// Count the desktops in `wmctrl -d` output (one line per desktop).
fn parse_desktop_count(listing: &str) -> i64 {
    listing.lines().filter(|l| !l.trim().is_empty()).count() as i64
}

/// Find the active desktop in `wmctrl -d` output.
///
/// Each line starts with the desktop index; the second column is `*` for
/// the active desktop and `-` otherwise.
fn parse_current_desktop(listing: &str) -> Result<i64, XorgDesktopError> {
    for line in listing.lines() {
        let mut fields = line.split_whitespace();
        if let (Some(index), Some("*")) = (fields.next(), fields.next()) {
            return index
                .parse()
                .map_err(|e| XorgDesktopError(format!("bad desktop index in {:?}: {}", line, e)));
        }
    }
    Err(XorgDesktopError(
        "no active desktop in wmctrl output".into(),
    ))
}

/// Extract connected output names from `xrandr --query` output.
///
/// Output lines look like `DP-1 connected primary 2560x1440+0+0 …`;
/// disconnected outputs and the `Screen 0:` header have a different
/// second column and are skipped.
fn parse_connected_outputs(query: &str) -> Vec<String> {
    query
        .lines()
        .filter_map(|line| {
            let mut fields = line.split_whitespace();
            let name = fields.next()?;
            (fields.next()? == "connected").then(|| name.to_string())
        })
        .collect()
}

impl Desktop for XorgDesktop {
    type Error = XorgDesktopError;

    fn workspace_count(&self) -> Result<i64, Self::Error> {
        Ok(parse_desktop_count(&run_query("wmctrl", &["-d"])?))
    }

    fn current_workspace(&self) -> Result<i64, Self::Error> {
        parse_current_desktop(&run_query("wmctrl", &["-d"])?)
    }

    fn monitor_codes(&self) -> Result<Vec<String>, Self::Error> {
        Ok(parse_connected_outputs(&run_query(
            "xrandr",
            &["--query"],
        )?))
    }
}

//  Tests
