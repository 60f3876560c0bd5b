//! Workspace position arithmetic.
//!
//! Workspaces form a ring of `total` slots indexed `0..total`.  Relative
//! moves wrap around both ends: one step left of workspace 0 is the last
//! workspace, one step right of the last is workspace 0.

/// The window manager reported a non-positive workspace count.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid workspace count: {0}")]
pub struct InvalidWorkspaceCount(pub i64);

/// Resolve the destination of a relative move.
///
/// Starting from `current`, applies the signed `offset` and wraps the
/// result into `0..total`.  Negative intermediate values are corrected by
/// repeated addition of `total`, so any offset magnitude wraps correctly.
///
/// Fails if `total` is zero or negative.
pub fn resolve(total: i64, current: i64, offset: i64) -> Result<i64, InvalidWorkspaceCount> {
    if total <= 0 {
        return Err(InvalidWorkspaceCount(total));
    }
    let mut raw = current + offset;
    while raw < 0 {
        raw += total;
    }
    Ok(raw % total)
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_offset_is_identity() {
        for total in 1..6 {
            for current in 0..total {
                assert_eq!(resolve(total, current, 0), Ok(current));
            }
        }
    }

    #[test]
    fn wraps_left_from_zero() {
        assert_eq!(resolve(4, 0, -1), Ok(3));
    }

    #[test]
    fn wraps_right_from_last() {
        assert_eq!(resolve(4, 3, 1), Ok(0));
    }

    #[test]
    fn plain_step_right() {
        assert_eq!(resolve(4, 1, 1), Ok(2));
    }

    #[test]
    fn plain_step_left() {
        assert_eq!(resolve(4, 2, -1), Ok(1));
    }

    #[test]
    fn large_negative_offset_wraps() {
        // -9 from workspace 2 on a 4-ring: 2 - 9 = -7 -> 1.
        assert_eq!(resolve(4, 2, -9), Ok(1));
    }

    #[test]
    fn large_positive_offset_wraps() {
        assert_eq!(resolve(4, 2, 10), Ok(0));
    }

    #[test]
    fn result_always_in_range() {
        for total in 1..8 {
            for current in 0..total {
                for offset in -20..20 {
                    let resolved = resolve(total, current, offset).unwrap();
                    assert!(
                        (0..total).contains(&resolved),
                        "resolve({}, {}, {}) = {} out of range",
                        total,
                        current,
                        offset,
                        resolved
                    );
                }
            }
        }
    }

    #[test]
    fn zero_count_is_an_error() {
        assert_eq!(resolve(0, 0, 1), Err(InvalidWorkspaceCount(0)));
    }

    #[test]
    fn negative_count_is_an_error() {
        assert_eq!(resolve(-3, 0, 1), Err(InvalidWorkspaceCount(-3)));
    }

    #[test]
    fn single_workspace_always_resolves_to_zero() {
        for offset in -5..5 {
            assert_eq!(resolve(1, 0, offset), Ok(0));
        }
    }
}
