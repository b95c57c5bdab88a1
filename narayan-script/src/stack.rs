//! Stack growth for the recursive parts of the pipeline.
//!
//! Nested blocks and parenthesised groups are handled by recursion in both the
//! parser and the interpreter. The depth is already capped by
//! [`Config::max_depth`](crate::config::Config), but a large cap on a small
//! thread stack could still overflow, so each level runs through
//! [`ensure_sufficient_stack`].

/// Grow the stack when less than this remains.
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
