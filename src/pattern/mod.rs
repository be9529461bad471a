//! # Pattern Module
//!
//! Compiles route declaration strings into typed segment sequences.
//!
//! A declaration like `/users/:id/contents` is split on `/` and compiled into
//! a [`RoutePattern`]: an ordered, fixed-length sequence of [`Segment`]s where
//! `users` and `contents` are literals and `:id` is a named capture. The same
//! splitting rule is applied to incoming request paths at lookup time, so the
//! two sides always agree on segment boundaries (consecutive, leading, and
//! trailing slashes collapse; no empty segments are ever produced).
//!
//! There is no escaping, no regex, and no optional segments: a token is a
//! parameter if and only if it starts with [`PARAM_MARKER`], and a literal
//! otherwise.

mod error;
mod parse;
mod types;

pub use error::InvalidPatternError;
pub use parse::{split_path, PARAM_MARKER};
pub use types::{RoutePattern, Segment};
