//! # seqroute
//!
//! **seqroute** is a deterministic HTTP path-routing resolution core: given an
//! ordered set of registered path patterns, each bound to an opaque handler
//! token, and an incoming request path, it decides which single pattern
//! matches and extracts its parameter bindings.
//!
//! ## Overview
//!
//! The crate models routers whose precedence is *first registered, first
//! matched* rather than most-specific-wins. That single rule explains the
//! shadowing behavior such routers exhibit: a literal route like
//! `/users/config` declared after `/users/:id` is permanently absorbed by the
//! parameterized route (`config` binds as the id), while declaring it first
//! makes it win. Patterns of different segment counts never compete, so
//! `/users/:id/contents` is safe from `/users/:id` no matter the order.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`pattern`]** - route declaration compilation into typed segments
//! - **[`table`]** - the append-only, then-frozen ordered route table
//! - **[`router`]** - the registration/lookup facade and the match resolver
//! - **[`registry`]** - grouped registration flattened into one linear stream
//! - **[`runtime_config`]** - environment-driven runtime tuning
//!
//! ### Request Resolution Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Setup as Setup Collaborators
//!     participant Router as Router (facade)
//!     participant Pattern as pattern::parse
//!     participant Table as RouteTable
//!     participant Resolve as resolve()
//!
//!     Setup->>Router: add_route("/users/:id", "get_user")
//!     Router->>Pattern: compile declaration
//!     Pattern-->>Router: RoutePattern
//!     Router->>Table: register(pattern, handler)
//!     Table-->>Router: seq = 1
//!     Setup->>Router: finalize()
//!     Router->>Table: freeze()
//!
//!     Note over Router: serving phase - concurrent, read-only
//!
//!     Router->>Resolve: lookup("/users/123")
//!     Resolve->>Table: scan entries in seq order
//!     Resolve-->>Router: RouteMatch { handler, bindings }
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use seqroute::Router;
//!
//! let mut router = Router::new();
//! router.add_route("/users", "list_users")?;
//! router.add_route("/users/:id", "get_user")?;
//! router.add_route("/users/:id/contents", "get_contents")?;
//! router.finalize();
//!
//! let m = router.lookup("/users/42/contents").expect("route should match");
//! assert_eq!(m.handler.as_str(), "get_contents");
//! assert_eq!(m.get_binding("id"), Some("42"));
//!
//! assert!(router.lookup("/nonexistent/path").is_none());
//! # Ok::<(), seqroute::RegisterError>(())
//! ```
//!
//! ## Lifecycle
//!
//! Registration happens in a single-threaded setup phase; call order is the
//! precedence order, so it must not be parallelized or reordered. After
//! [`Router::finalize`] the table is frozen - immutable, with no reverse
//! transition - and [`Router::lookup`] may run from arbitrarily many threads
//! with no locking. A late `add_route` fails fast with
//! [`TableFrozenError`] instead of mutating a table concurrent readers may be
//! observing.
//!
//! ## What this core is not
//!
//! No HTTP methods, headers, or query strings; no wildcard, regex, or
//! optional segments; no conflict detection at registration (ambiguity is
//! resolved at lookup time, by order, on purpose); no transport, wire format,
//! or CLI surface. Handler tokens are returned verbatim for an external
//! dispatch layer to interpret.

pub mod ids;
pub mod pattern;
pub mod registry;
pub mod router;
pub mod runtime_config;
pub mod table;

pub use ids::HandlerId;
pub use pattern::{InvalidPatternError, RoutePattern, Segment};
pub use registry::RouteGroup;
pub use router::{resolve, RegisterError, RouteMatch, Router};
pub use runtime_config::RuntimeConfig;
pub use table::{RouteEntry, RouteTable, TableFrozenError};
