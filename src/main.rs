//! Entry point for the **wshift** CLI.
//!
//! Loads the persisted [`WorkspaceState`], runs exactly one action
//! against the real [`XorgDesktop`], prints the resulting shell command
//! lines on stdout, and re-saves the state only when it changed.
//!
//! Failures print a single-line diagnostic on stderr and exit non-zero;
//! a no-op move exits 0 with nothing printed.

use anyhow::Result;
use clap::Parser;
use log::debug;
use std::path::PathBuf;
use wshift::cli::{self, Action, BrightnessAction, Cli, MonitorsAction};
use wshift::state::{WorkspaceState, BRIGHTNESS_STEP};
use wshift::switcher::WorkspaceSwitcher;
use wshift::xorg::XorgDesktop;

/// Resolve the state directory (`$XDG_STATE_HOME/wshift`).
fn state_dir() -> PathBuf {
    let base = std::env::var("XDG_STATE_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.local/state", home)
    });
    PathBuf::from(base).join("wshift")
}

/// Default path of the state file.
fn default_state_path() -> PathBuf {
    state_dir().join("state.json")
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let state_path = cli.state_file.unwrap_or_else(default_state_path);
    let state = WorkspaceState::load(&state_path)?;
    debug!("state loaded from {}", state_path.display());

    let mut switcher = WorkspaceSwitcher::new(XorgDesktop::new(), state);

    let commands = match cli.command {
        Action::Left => switcher.move_left()?,
        Action::Right => switcher.move_right()?,
        Action::Back => switcher.move_back()?,
        Action::Goto(args) => {
            let workspace = cli::parse_workspace_arg(&args)?;
            switcher.move_to(workspace)?
        }
        Action::Brightness { action } => match action {
            BrightnessAction::Set { workspace, value } => {
                switcher.set_brightness(workspace, value);
                Vec::new()
            }
            BrightnessAction::Up => switcher.adjust_brightness(BRIGHTNESS_STEP)?,
            BrightnessAction::Down => switcher.adjust_brightness(-BRIGHTNESS_STEP)?,
            BrightnessAction::List => {
                for (workspace, value) in switcher.state().brightness_table() {
                    println!("{:2}: {}", workspace, value);
                }
                Vec::new()
            }
        },
        Action::Monitors { action } => match action {
            MonitorsAction::List => {
                let mut codes = switcher.monitor_codes()?;
                codes.sort();
                for code in codes {
                    println!("{}", code);
                }
                Vec::new()
            }
        },
    };

    for command in &commands {
        println!("{}", command);
    }

    if switcher.state().changed() {
        switcher.state().save(&state_path)?;
        debug!("state saved to {}", state_path.display());
    }

    Ok(())
}
