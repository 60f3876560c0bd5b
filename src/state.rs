//! Persisted workspace state.
//!
//! The state is a small JSON object kept in a file between invocations:
//!
//! ```json
//! {
//!   "Prev": 2,
//!   "Brightness": { "0": 70, "3": 110 }
//! }
//! ```
//!
//! `Prev` is the workspace that was active before the last successful
//! move (0 until a move has happened).  `Brightness` maps a workspace
//! index to a brightness percentage; a workspace without an entry is
//! treated as [`DEFAULT_BRIGHTNESS`].
//!
//! Mutating operations set an in-memory `changed` flag, so the binary
//! only rewrites the file when something actually changed.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Brightness percentage assumed for a workspace with no stored entry.
pub const DEFAULT_BRIGHTNESS: i64 = 100;

/// Step applied by a single `brightness up` / `brightness down`.
pub const BRIGHTNESS_STEP: i64 = 10;

/// Lowest brightness percentage an explicit `set` accepts.
pub const BRIGHTNESS_MIN: i64 = 5;

/// Highest brightness percentage an explicit `set` accepts.
pub const BRIGHTNESS_MAX: i64 = 250;

/// Accept JSON `null` for a field by falling back to its default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// State carried across invocations: the previously visited workspace
/// and the per-workspace brightness table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceState {
    #[serde(rename = "Prev", default, deserialize_with = "null_as_default")]
    prev: i64,
    #[serde(rename = "Brightness", default, deserialize_with = "null_as_default")]
    brightness: BTreeMap<i64, i64>,
    #[serde(skip)]
    changed: bool,
}

/// Error from loading, parsing, or saving the state file.
#[derive(Debug, thiserror::Error)]
#[error("state error: {0}")]
pub struct StateError(String);

impl WorkspaceState {
    /// Parse state from a JSON string.
    ///
    /// Empty or whitespace-only input yields a fresh default state.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(json)
            .map_err(|e| StateError(format!("failed to parse workspace state: {}", e)))
    }

    /// Load state from the file at `path`.
    ///
    /// A missing file yields a fresh default state.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_json(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(StateError(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    /// Write the state as JSON to the file at `path`, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StateError(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }
        let json = serde_json::to_string(self)
            .map_err(|e| StateError(format!("failed to serialize workspace state: {}", e)))?;
        std::fs::write(path, json)
            .map_err(|e| StateError(format!("failed to write {}: {}", path.display(), e)))
    }

    //  Accessors

    /// Workspace that was active before the last recorded move.
    pub fn previous(&self) -> i64 {
        self.prev
    }

    /// Whether any mutating operation has run since the state was loaded.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Stored brightness for `workspace`, or [`DEFAULT_BRIGHTNESS`] when
    /// unset.
    pub fn brightness_for(&self, workspace: i64) -> i64 {
        self.brightness
            .get(&workspace)
            .copied()
            .unwrap_or(DEFAULT_BRIGHTNESS)
    }

    /// The stored brightness table, ordered by workspace index.
    pub fn brightness_table(&self) -> &BTreeMap<i64, i64> {
        &self.brightness
    }

    //  Transitions

    /// Record that a move away from `current` happened.
    pub fn record_visit(&mut self, current: i64) {
        self.prev = current;
        self.changed = true;
    }

    /// Overwrite the brightness entry for `workspace`.
    ///
    /// The value is expected to be within [`BRIGHTNESS_MIN`] ..=
    /// [`BRIGHTNESS_MAX`]; the argument layer enforces the range before
    /// this is called.
    pub fn set_brightness(&mut self, workspace: i64, value: i64) {
        self.brightness.insert(workspace, value);
        self.changed = true;
    }

    /// Add `delta` to the brightness entry for `workspace` (reading
    /// [`DEFAULT_BRIGHTNESS`] when unset) and return the new value.
    ///
    /// No range check here: an adjusted value may drift outside the
    /// limits enforced on explicit sets.
    pub fn adjust_brightness(&mut self, workspace: i64, delta: i64) -> i64 {
        let value = self.brightness_for(workspace) + delta;
        self.brightness.insert(workspace, value);
        self.changed = true;
        value
    }
}

//  Tests
