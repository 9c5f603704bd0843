//! Debug-only invariant assertion helpers.
//!
//! Graph types use these to keep the matrix/list invariant explicit while
//! release builds remain unaffected.

/// Debug-asserts a structural invariant with a message.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
#[inline(always)]
pub(crate) fn math_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}
