//! The shell-command vocabulary wshift emits.
//!
//! Every side effect on the desktop is expressed as a command line for
//! one of two external tools:
//!
//! ```text
//! wmctrl -s 3
//! xrandr --output DP-1 --brightness 0.37
//! ```
//!
//! The tool only prints these lines; an outer shell executes them.

/// Command line that switches the window manager to `workspace`.
pub fn switch_command(workspace: i64) -> String {
    format!("wmctrl -s {}", workspace)
}

/// Command line that sets `output` to a brightness of `percent`.
///
/// The percentage is passed to xrandr as a fractional scale factor,
/// formatted with exactly two decimal digits (37 becomes `0.37`, 101
/// becomes `1.01`).
pub fn brightness_command(output: &str, percent: i64) -> String {
    format!(
        "xrandr --output {} --brightness {:.2}",
        output,
        percent as f64 / 100.0
    )
}

/// Trim whitespace from monitor codes and drop entries that are blank.
///
/// The display tool's output is line-oriented, so codes routinely carry
/// stray whitespace or empty lines.
pub fn clean_monitor_codes<I>(codes: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    codes
        .into_iter()
        .map(|code| code.trim().to_string())
        .filter(|code| !code.is_empty())
        .collect()
}

//  Tests
