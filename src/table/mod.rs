//! # Table Module
//!
//! The append-only, then-frozen route table.
//!
//! ## Overview
//!
//! A [`RouteTable`] is built during a single-threaded setup phase: each
//! [`register`](RouteTable::register) call appends a [`RouteEntry`] carrying
//! the next sequence number. Sequence numbers are assigned at insertion,
//! monotonically increasing, and never reused; they are the *only* precedence
//! signal the match resolver sees. No duplicate or conflict detection happens
//! here: two structurally identical patterns, or two patterns that would
//! collide at lookup time, may both be registered, and whichever was
//! registered first wins at lookup.
//!
//! ## Lifecycle
//!
//! The table has exactly two states with one irreversible transition:
//!
//! ```text
//! open --freeze()--> frozen
//! ```
//!
//! [`freeze`](RouteTable::freeze) is idempotent. Once frozen, the table is
//! immutable and safe for unsynchronized concurrent reads; a `register` call
//! against a frozen table fails fast with [`TableFrozenError`] instead of
//! silently mutating entries that concurrent readers may be observing.

mod core;

pub use core::{RouteEntry, RouteTable, TableFrozenError};
