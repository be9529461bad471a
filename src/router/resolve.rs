//! Match resolution - the pure core of the routing engine.
//!
//! [`resolve`] is a stateless function over a borrowed table: no side
//! effects, identical inputs yield identical outputs, and concurrent calls
//! against a frozen table need no synchronization.

use super::core::{BindingVec, RouteMatch};
use crate::pattern::{split_path, Segment};
use crate::table::{RouteEntry, RouteTable};
use std::sync::Arc;

/// Match a request path against a table, first-registered entry wins.
///
/// The scan visits entries in ascending sequence-number order and considers
/// only those whose pattern length equals the request's component count:
/// patterns of a different segment count are never candidates, so `/users/:id`
/// can never absorb `/users/123/contents` no matter when either was
/// registered. At each position a literal segment requires textual equality
/// while a param segment accepts any non-empty component unconditionally. The
/// first candidate matching at every position is returned with its bindings;
/// if none does, the result is `None` - a plain value, not an error.
#[must_use]
pub fn resolve(table: &RouteTable, path: &str) -> Option<RouteMatch> {
    let components = split_path(path);

    for entry in table.entries() {
        if entry.pattern.len() != components.len() {
            continue;
        }
        if let Some(bindings) = bind(entry, &components) {
            return Some(RouteMatch {
                pattern: Arc::clone(&entry.pattern),
                seq: entry.seq,
                handler: entry.handler.clone(),
                bindings,
            });
        }
    }

    None
}

/// Test segment-wise compatibility and extract bindings on success.
///
/// Callers guarantee `components.len() == entry.pattern.len()`.
fn bind(entry: &RouteEntry, components: &[&str]) -> Option<BindingVec> {
    let mut bindings = BindingVec::new();
    let mut param_names = entry.param_names().iter();

    for (segment, component) in entry.pattern.segments().iter().zip(components) {
        match segment {
            Segment::Literal(text) => {
                if text != component {
                    return None;
                }
            }
            Segment::Param(_) => {
                // param_names holds exactly one pre-shared name per Param
                // segment, in the same left-to-right order.
                let name = param_names.next()?;
                bindings.push((Arc::clone(name), (*component).to_string()));
            }
        }
    }

    Some(bindings)
}
