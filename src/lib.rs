//! Stable insertion sort in decreasing order.
//!
//! Two entry points share one algorithm core: [`sort_decreasing`] returns a
//! newly allocated, decreasing-ordered copy of its input, and
//! [`sort_decreasing_inplace`] reorders the caller's buffer directly and
//! returns it for chaining. Equal elements keep their relative input order.
//!
//! The [`patterns`] module provides the input shapes the test suite and
//! benchmarks run against.

pub mod insertion;
pub mod patterns;

pub use insertion::{sort_decreasing, sort_decreasing_inplace};
