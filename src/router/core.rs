//! Router facade - registration, freezing, and the lookup hot path.

use crate::ids::HandlerId;
use crate::pattern::{InvalidPatternError, RoutePattern};
use crate::registry::RouteGroup;
use crate::runtime_config::RuntimeConfig;
use crate::table::{RouteTable, TableFrozenError};
use smallvec::SmallVec;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Maximum number of captured bindings before heap allocation.
/// Most route patterns bind ≤4 params (e.g. `/users/:id/contents/:contentId`).
pub const MAX_INLINE_BINDINGS: usize = 8;

/// Stack-allocated binding storage for the lookup hot path.
///
/// Binding names use `Arc<str>` instead of `String` because:
/// - Names come from the static route table (known at registration)
/// - `Arc::clone()` is O(1) atomic increment vs O(n) string copy
/// - Values remain `String` as they're per-request data from the path
pub type BindingVec = SmallVec<[(Arc<str>, String); MAX_INLINE_BINDINGS]>;

/// Result of successfully matching a request path to a route
///
/// Contains the matched entry's pattern, handler token, sequence number, and
/// the extracted parameter bindings in left-to-right pattern order.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched pattern (shared with the table via `Arc`)
    pub pattern: Arc<RoutePattern>,
    /// The winning entry's position in the registration order
    pub seq: usize,
    /// Handler token to hand to the external dispatch layer
    pub handler: HandlerId,
    /// Parameter bindings extracted from the path (e.g. `:id` → `("id", "123")`)
    /// Stack-allocated for ≤8 params
    pub bindings: BindingVec,
}

impl RouteMatch {
    /// Get a binding by parameter name
    ///
    /// Parameter names are unique within a pattern (enforced at compile
    /// time), so the first hit is the only hit.
    #[inline]
    #[must_use]
    pub fn get_binding(&self, name: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert bindings to a HashMap for compatibility with map-shaped APIs
    /// Note: this allocates - use get_binding() in hot paths instead
    #[must_use]
    pub fn bindings_map(&self) -> HashMap<String, String> {
        self.bindings
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}

/// Error returned by [`Router::add_route`] and [`Router::mount`].
///
/// The facade propagates component errors unchanged; this enum only gives
/// them a single registration-surface type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// The declaration failed to compile.
    Pattern(InvalidPatternError),
    /// The table was already frozen by [`Router::finalize`].
    Frozen(TableFrozenError),
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::Pattern(err) => write!(f, "{}", err),
            RegisterError::Frozen(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RegisterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RegisterError::Pattern(err) => Some(err),
            RegisterError::Frozen(err) => Some(err),
        }
    }
}

impl From<InvalidPatternError> for RegisterError {
    fn from(err: InvalidPatternError) -> Self {
        RegisterError::Pattern(err)
    }
}

impl From<TableFrozenError> for RegisterError {
    fn from(err: TableFrozenError) -> Self {
        RegisterError::Frozen(err)
    }
}

/// Registration/lookup facade over the route table and match resolver.
///
/// Owns its [`RouteTable`] exclusively; the resolver only ever borrows it for
/// the duration of a lookup. After [`finalize`](Self::finalize), share the
/// router behind an `Arc` and call [`lookup`](Self::lookup) from as many
/// threads as needed.
#[derive(Debug, Clone)]
pub struct Router {
    table: RouteTable,
    slow_lookup: Duration,
}

impl Default for Router {
    fn default() -> Self {
        Self::with_config(RuntimeConfig::default())
    }
}

impl Router {
    /// Create a router with an empty, open table, configured from the
    /// environment (see [`RuntimeConfig`]).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::from_env())
    }

    /// Create a router with an explicit runtime configuration.
    #[must_use]
    pub fn with_config(config: RuntimeConfig) -> Self {
        Self {
            table: RouteTable::open(),
            slow_lookup: config.slow_lookup(),
        }
    }

    /// Compile `declaration` and append it to the table, returning the
    /// assigned sequence number.
    ///
    /// Call order is semantically significant: the sequence number is the
    /// sole precedence signal at lookup time.
    ///
    /// # Errors
    ///
    /// Propagates [`InvalidPatternError`] for malformed declarations and
    /// [`TableFrozenError`] once [`finalize`](Self::finalize) has run, each
    /// wrapped in [`RegisterError`]. A failed registration leaves the table
    /// untouched.
    pub fn add_route(
        &mut self,
        declaration: &str,
        handler: impl Into<HandlerId>,
    ) -> Result<usize, RegisterError> {
        let pattern = RoutePattern::parse(declaration)?;
        let seq = self.table.register(pattern, handler.into())?;
        Ok(seq)
    }

    /// Register every route of a [`RouteGroup`] in its flattened traversal
    /// order, returning the assigned sequence numbers.
    ///
    /// Mounting is exactly equivalent to the corresponding sequence of
    /// [`add_route`](Self::add_route) calls: grouping is organizational only
    /// and carries no precedence weight of its own.
    ///
    /// # Errors
    ///
    /// Stops at the first failing declaration; routes flattened before it
    /// stay registered.
    pub fn mount(&mut self, group: &RouteGroup) -> Result<Vec<usize>, RegisterError> {
        let flattened = group.flatten();
        let mut seqs = Vec::with_capacity(flattened.len());
        for (declaration, handler) in flattened {
            seqs.push(self.add_route(declaration, handler.clone())?);
        }
        debug!(
            group = group.name(),
            routes_count = seqs.len(),
            "Route group mounted"
        );
        Ok(seqs)
    }

    /// Freeze the table, ending the setup phase. Idempotent.
    pub fn finalize(&mut self) {
        self.table.freeze();
    }

    /// Match a request path against the table.
    ///
    /// Returns the first-registered, equal-length, positionally-compatible
    /// entry with its extracted bindings, or `None` when no entry matches.
    /// "No route" is an expected, frequent outcome, never an error.
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<RouteMatch> {
        debug!(path = %path, "Route match attempt");
        if !self.table.is_frozen() {
            debug!(path = %path, "Lookup against an unfrozen table");
        }

        let lookup_start = Instant::now();
        let result = super::resolve(&self.table, path);
        let lookup_duration = lookup_start.elapsed();

        match &result {
            Some(matched) => {
                if lookup_duration > self.slow_lookup {
                    warn!(
                        path = %path,
                        pattern = %matched.pattern,
                        handler = %matched.handler,
                        seq = matched.seq,
                        duration_us = lookup_duration.as_micros(),
                        "Slow route lookup detected"
                    );
                } else {
                    info!(
                        path = %path,
                        pattern = %matched.pattern,
                        handler = %matched.handler,
                        seq = matched.seq,
                        duration_us = lookup_duration.as_micros(),
                        "Route matched"
                    );
                }
            }
            None => {
                debug!(
                    path = %path,
                    duration_us = lookup_duration.as_micros(),
                    "No route matched"
                );
            }
        }

        result
    }

    /// The underlying table, e.g. for direct [`resolve`](super::resolve) calls.
    #[must_use]
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    #[must_use]
    pub fn routes_count(&self) -> usize {
        self.table.len()
    }

    /// Print all registered routes to stdout in sequence order.
    ///
    /// Useful for debugging and verifying registration order.
    pub fn dump_routes(&self) {
        println!(
            "[routes] count={} frozen={}",
            self.table.len(),
            self.table.is_frozen()
        );
        for entry in self.table.entries() {
            println!("[route] #{} {} -> {}", entry.seq, entry.pattern, entry.handler);
        }
    }
}
