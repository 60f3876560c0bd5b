//! Command-line interface definitions.
//!
//! The subcommand tree mirrors how the tool is bound to keys:
//!
//! ```text
//! wshift left | right | back | <N>
//! wshift brightness set <WORKSPACE> <VALUE> | up | down | list
//! wshift monitors list
//! ```
//!
//! A bare workspace number (`wshift 3`) is an absolute move; clap routes
//! it through an external subcommand and [`parse_workspace_arg`] turns it
//! into an index.  Range checks happen here, before any external query
//! runs.

use crate::state::{BRIGHTNESS_MAX, BRIGHTNESS_MIN};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Workspace switching with per-workspace monitor brightness.
#[derive(Parser, Debug)]
#[command(name = "wshift", version, about, long_about = None)]
pub struct Cli {
    /// Path to the state file (defaults to $XDG_STATE_HOME/wshift/state.json)
    #[arg(long, value_name = "PATH", global = true)]
    pub state_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Action,
}

/// All supported subcommands.
#[derive(Subcommand, Debug)]
pub enum Action {
    /// Move one workspace left
    Left,

    /// Move one workspace right
    Right,

    /// Move to the previously visited workspace
    Back,

    /// Per-workspace brightness table
    Brightness {
        #[command(subcommand)]
        action: BrightnessAction,
    },

    /// Connected monitor outputs
    Monitors {
        #[command(subcommand)]
        action: MonitorsAction,
    },

    /// Move to a specific workspace (`wshift <N>`)
    #[command(external_subcommand)]
    Goto(Vec<String>),
}

/// Subcommands under `wshift brightness`.
#[derive(Subcommand, Debug)]
pub enum BrightnessAction {
    /// Set the brightness for a workspace
    Set {
        /// Workspace number
        #[arg(value_parser = clap::value_parser!(i64).range(0..))]
        workspace: i64,

        /// Monitor brightness percent
        #[arg(value_parser = clap::value_parser!(i64).range(BRIGHTNESS_MIN..=BRIGHTNESS_MAX))]
        value: i64,
    },

    /// Raise the current workspace's brightness
    Up,

    /// Lower the current workspace's brightness
    Down,

    /// List stored brightness values per workspace
    List,
}

/// Subcommands under `wshift monitors`.
#[derive(Subcommand, Debug)]
pub enum MonitorsAction {
    /// List connected monitor codes
    List,
}

/// Error from parsing a bare workspace-number argument.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum WorkspaceArgError {
    #[error("expected exactly one workspace number, got {0} arguments")]
    Count(usize),

    #[error("invalid workspace number: {0:?}")]
    Invalid(String),

    #[error("workspace number must be non-negative, got {0}")]
    Negative(i64),
}

/// Parse the argv captured by [`Action::Goto`] into a workspace index.
pub fn parse_workspace_arg(args: &[String]) -> Result<i64, WorkspaceArgError> {
    match args {
        [arg] => {
            let workspace: i64 = arg
                .parse()
                .map_err(|_| WorkspaceArgError::Invalid(arg.clone()))?;
            if workspace < 0 {
                return Err(WorkspaceArgError::Negative(workspace));
            }
            Ok(workspace)
        }
        _ => Err(WorkspaceArgError::Count(args.len())),
    }
}

//  Tests
