//! Debug-only structural checks for canonical graphs.
//!
//! Constructors call these after building the CSR arrays; release builds skip them.

/// Debug-asserts a structural invariant with a message.
#[inline(always)]
pub(crate) fn graph_assert_msg(condition: bool, message: &str) {
    debug_assert!(condition, "Graph invariant violated: {}", message);
}
