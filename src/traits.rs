//! Core trait that decouples wshift from the real desktop environment.
//!
//! The concrete backend (wmctrl / xrandr child processes, a test double,
//! …) implements this trait.  The
//! [`WorkspaceSwitcher`](crate::switcher::WorkspaceSwitcher) only depends
//! on the abstraction.

/// Abstraction over the desktop queries wshift needs.
///
/// An implementation might shell out to `wmctrl` and `xrandr`, or it
/// might be a scripted stub used in tests.
///
/// # Contract
///
/// * Every method performs a fresh query; results are never cached
///   between calls.
/// * [`monitor_codes`](Desktop::monitor_codes) may return entries with
///   surrounding whitespace or blank entries — callers clean them with
///   [`clean_monitor_codes`](crate::shell::clean_monitor_codes) before
///   use.
pub trait Desktop {
    /// The error type produced by this backend.
    type Error: std::error::Error + Send + 'static;

    /// Total number of workspaces the window manager knows about.
    fn workspace_count(&self) -> Result<i64, Self::Error>;

    /// Index of the currently active workspace (0-based).
    fn current_workspace(&self) -> Result<i64, Self::Error>;

    /// Identifiers of the connected monitor outputs (e.g. `"DP-1"`), in
    /// the order the display tool reports them.
    fn monitor_codes(&self) -> Result<Vec<String>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    //  Mock Desktop

    /// A test double that records every query made to it.
    #[derive(Debug, Default)]
    struct MockDesktop {
        queries: RefCell<Vec<&'static str>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    impl Desktop for MockDesktop {
        type Error = MockError;

        fn workspace_count(&self) -> Result<i64, MockError> {
            self.queries.borrow_mut().push("count");
            Ok(4)
        }

        fn current_workspace(&self) -> Result<i64, MockError> {
            self.queries.borrow_mut().push("current");
            Ok(2)
        }

        fn monitor_codes(&self) -> Result<Vec<String>, MockError> {
            self.queries.borrow_mut().push("monitors");
            Ok(vec!["DP-1".into(), "HDMI-A-1".into()])
        }
    }

    #[test]
    fn mock_desktop_records_queries() {
        let desktop = MockDesktop::default();
        assert_eq!(desktop.workspace_count().unwrap(), 4);
        assert_eq!(desktop.current_workspace().unwrap(), 2);
        assert_eq!(desktop.monitor_codes().unwrap().len(), 2);
        assert_eq!(
            *desktop.queries.borrow(),
            vec!["count", "current", "monitors"]
        );
    }
}
