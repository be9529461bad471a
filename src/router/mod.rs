//! # Router Module
//!
//! The registration/lookup facade and the order-based match resolver.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Compiling route declarations and appending them to the route table
//! - Freezing the table at the end of the setup phase
//! - Matching incoming request paths against the frozen table
//! - Extracting parameter bindings from matched routes
//!
//! ## Precedence
//!
//! Resolution is deliberately *not* most-specific-wins. Candidates are the
//! entries whose segment count equals the request's component count — two
//! patterns of different lengths never conflict, regardless of registration
//! order. Among candidates, the scan runs in ascending sequence-number order
//! and the first positional match wins outright. A literal-bearing pattern
//! registered after an equal-length parameterized pattern is therefore
//! permanently shadowed (`/users/config` loses to an earlier `/users/:id`,
//! which binds `id = "config"`); registering the literal pattern first
//! reverses the outcome. Which grouping a route was declared in has no effect
//! on any of this — only the global sequence number does.
//!
//! ## Lifecycle
//!
//! A [`Router`] goes through a single-threaded setup phase
//! ([`add_route`](Router::add_route) / [`mount`](Router::mount), order is
//! semantically significant), one [`finalize`](Router::finalize) call, and
//! then a concurrent read-only serving phase in which
//! [`lookup`](Router::lookup) may run from any number of threads without
//! locking: the frozen table is immutable and [`resolve`] is a pure function
//! over it.
//!
//! ## Example
//!
//! ```
//! use seqroute::router::Router;
//!
//! let mut router = Router::new();
//! router.add_route("/users", "list_users")?;
//! router.add_route("/users/:id", "get_user")?;
//! router.finalize();
//!
//! let m = router.lookup("/users/123").expect("route should match");
//! assert_eq!(m.handler.as_str(), "get_user");
//! assert_eq!(m.get_binding("id"), Some("123"));
//! # Ok::<(), seqroute::router::RegisterError>(())
//! ```

mod core;
mod resolve;

pub use core::{BindingVec, RegisterError, RouteMatch, Router, MAX_INLINE_BINDINGS};
pub use resolve::resolve;
