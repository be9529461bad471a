use crate::ids::HandlerId;
use crate::pattern::RoutePattern;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Registration attempted after the table was frozen
///
/// Setup-phase API misuse: callers should treat this as fatal rather than
/// retry, since the serving phase may already have concurrent readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFrozenError;

impl fmt::Display for TableFrozenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "route table is frozen; registration is only permitted during the setup phase"
        )
    }
}

impl std::error::Error for TableFrozenError {}

/// One registered route: a compiled pattern bound to an opaque handler token,
/// stamped with its position in the global registration order.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    /// Position in the registration order. Assigned at insertion, never reused.
    pub seq: usize,
    /// The compiled pattern (shared with match results via `Arc`).
    pub pattern: Arc<RoutePattern>,
    /// The opaque handler token returned verbatim on a match.
    pub handler: HandlerId,
    /// Capture names in left-to-right pattern order, pre-shared as `Arc<str>`
    /// so binding extraction never copies a name.
    pub(crate) param_names: Vec<Arc<str>>,
}

impl RouteEntry {
    pub(crate) fn param_names(&self) -> &[Arc<str>] {
        &self.param_names
    }
}

/// Append-only, then-frozen ordered collection of route entries.
///
/// Entry order is registration order and is never re-sorted: the match
/// resolver relies on it as its sole tie-break signal.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    frozen: bool,
}

impl RouteTable {
    /// Create an empty, open table.
    #[must_use]
    pub fn open() -> Self {
        Self::default()
    }

    /// Append an entry with the next sequence number and return that number.
    ///
    /// # Errors
    ///
    /// Fails with [`TableFrozenError`] once [`freeze`](Self::freeze) has run.
    pub fn register(
        &mut self,
        pattern: RoutePattern,
        handler: HandlerId,
    ) -> Result<usize, TableFrozenError> {
        if self.frozen {
            return Err(TableFrozenError);
        }
        let seq = self.entries.len();
        let param_names = pattern
            .param_names()
            .map(Arc::from)
            .collect();
        debug!(seq, pattern = %pattern, handler = %handler, "Route registered");
        self.entries.push(RouteEntry {
            seq,
            pattern: Arc::new(pattern),
            handler,
            param_names,
        });
        Ok(seq)
    }

    /// Transition open → frozen. Idempotent: freezing an already-frozen table
    /// is a no-op, not an error. There is no reverse transition.
    pub fn freeze(&mut self) {
        if self.frozen {
            return;
        }
        self.frozen = true;

        let routes_summary: Vec<String> = self
            .entries
            .iter()
            .take(10)
            .map(|entry| format!("#{} {} -> {}", entry.seq, entry.pattern, entry.handler))
            .collect();
        info!(
            routes_count = self.entries.len(),
            routes_summary = ?routes_summary,
            "Route table frozen"
        );
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Entries in ascending sequence-number order.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
