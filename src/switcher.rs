//! The orchestrator that ties desktop queries, position arithmetic, and
//! the brightness table together.
//!
//! [`WorkspaceSwitcher`] owns the [`WorkspaceState`] for one invocation
//! and reacts to a single CLI action by querying the [`Desktop`],
//! updating the state, and returning the shell commands to emit.

use crate::position;
use crate::shell;
use crate::state::WorkspaceState;
use crate::traits::Desktop;
use log::{debug, info, warn};

/// Possible errors from the switcher.
///
/// Query failures carry the backend's message, prefixed with which query
/// failed.
#[derive(Debug, thiserror::Error)]
pub enum SwitcherError {
    #[error("couldn't get number of workspaces: {0}")]
    WorkspaceCount(String),

    #[error("couldn't get current workspace: {0}")]
    CurrentWorkspace(String),

    #[error("couldn't list monitors: {0}")]
    MonitorList(String),

    #[error(transparent)]
    Position(#[from] position::InvalidWorkspaceCount),
}

/// Orchestrates workspace moves and brightness changes.
///
/// The switcher is generic over any [`Desktop`] implementation, making it
/// independent of wmctrl / xrandr or any other concrete toolchain.
///
/// Every operation returns the shell command lines it wants executed (an
/// empty list for no-ops and pure state changes); the caller prints them.
///
/// # Typical usage
///
/// ```ignore
/// let mut switcher = WorkspaceSwitcher::new(XorgDesktop::new(), state);
/// let commands = switcher.move_left()?;
/// ```
pub struct WorkspaceSwitcher<D: Desktop> {
    desktop: D,
    state: WorkspaceState,
}

impl<D: Desktop> WorkspaceSwitcher<D> {
    /// Create a switcher over `desktop` with the loaded `state`.
    pub fn new(desktop: D, state: WorkspaceState) -> Self {
        Self { desktop, state }
    }

    /// The state as mutated so far in this invocation.
    pub fn state(&self) -> &WorkspaceState {
        &self.state
    }

    //  Moves

    /// Move one workspace left, wrapping past workspace 0.
    pub fn move_left(&mut self) -> Result<Vec<String>, SwitcherError> {
        self.move_relative(-1)
    }

    /// Move one workspace right, wrapping past the last workspace.
    pub fn move_right(&mut self) -> Result<Vec<String>, SwitcherError> {
        self.move_relative(1)
    }

    /// Move by a signed `offset` with wraparound.
    pub fn move_relative(&mut self, offset: i64) -> Result<Vec<String>, SwitcherError> {
        let total = self
            .desktop
            .workspace_count()
            .map_err(|e| SwitcherError::WorkspaceCount(e.to_string()))?;
        let current = self
            .desktop
            .current_workspace()
            .map_err(|e| SwitcherError::CurrentWorkspace(e.to_string()))?;
        let target = position::resolve(total, current, offset)?;
        Ok(self.complete_move(current, target))
    }

    /// Move to the absolute workspace `target`.
    ///
    /// No wraparound and no bound check are applied; an out-of-range
    /// target is passed through to the window manager as-is.
    pub fn move_to(&mut self, target: i64) -> Result<Vec<String>, SwitcherError> {
        let current = self
            .desktop
            .current_workspace()
            .map_err(|e| SwitcherError::CurrentWorkspace(e.to_string()))?;
        Ok(self.complete_move(current, target))
    }

    /// Move to the workspace that was active before the last move.
    pub fn move_back(&mut self) -> Result<Vec<String>, SwitcherError> {
        let previous = self.state.previous();
        self.move_to(previous)
    }

    //  Brightness

    /// Overwrite the stored brightness for `workspace`.
    ///
    /// A pure state change: no queries are made and no commands are
    /// emitted until the workspace is next entered.
    pub fn set_brightness(&mut self, workspace: i64, value: i64) {
        info!("workspace {} brightness set to {}", workspace, value);
        self.state.set_brightness(workspace, value);
    }

    /// Add `delta` to the current workspace's brightness and apply the
    /// new value to every connected monitor.
    pub fn adjust_brightness(&mut self, delta: i64) -> Result<Vec<String>, SwitcherError> {
        let current = self
            .desktop
            .current_workspace()
            .map_err(|e| SwitcherError::CurrentWorkspace(e.to_string()))?;
        let value = self.state.adjust_brightness(current, delta);
        info!("workspace {} brightness now {}", current, value);
        let mut commands = Vec::new();
        self.push_brightness_commands(&mut commands, current);
        Ok(commands)
    }

    //  Monitors

    /// The connected monitor codes, cleaned of whitespace and blanks.
    pub fn monitor_codes(&self) -> Result<Vec<String>, SwitcherError> {
        let codes = self
            .desktop
            .monitor_codes()
            .map_err(|e| SwitcherError::MonitorList(e.to_string()))?;
        Ok(shell::clean_monitor_codes(codes))
    }

    //  Internal

    /// Shared tail of every move: no-op check, state update, switch
    /// command, brightness restoration.
    fn complete_move(&mut self, current: i64, target: i64) -> Vec<String> {
        if target == current {
            debug!("already on workspace {}", current);
            return Vec::new();
        }
        info!("moving from workspace {} to {}", current, target);
        self.state.record_visit(current);
        let mut commands = vec![shell::switch_command(target)];
        self.push_brightness_commands(&mut commands, target);
        commands
    }

    /// Append a brightness command per connected monitor at `workspace`'s
    /// stored value.
    ///
    /// Best-effort: a monitor-list failure is logged and skipped, it must
    /// never fail the surrounding operation.
    fn push_brightness_commands(&mut self, commands: &mut Vec<String>, workspace: i64) {
        match self.desktop.monitor_codes() {
            Ok(codes) => {
                let percent = self.state.brightness_for(workspace);
                for code in shell::clean_monitor_codes(codes) {
                    commands.push(shell::brightness_command(&code, percent));
                }
            }
            Err(e) => {
                warn!("couldn't list monitors, skipping brightness restore: {}", e);
            }
        }
    }
}

//  Tests
