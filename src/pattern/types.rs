use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One `/`-delimited component of a compiled route pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Matches only a textually identical request component.
    Literal(String),
    /// Matches any single non-empty request component, capturing its value
    /// under the given name.
    Param(String),
}

impl Segment {
    #[must_use]
    pub fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }

    /// Parameter name if this segment is a capture, `None` for literals.
    #[must_use]
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Param(name) => Some(name),
            Segment::Literal(_) => None,
        }
    }
}

/// A compiled route declaration: an ordered, fixed-length sequence of segments.
///
/// Invariants, enforced by [`RoutePattern::parse`](RoutePattern::parse):
/// - length ≥ 1 (a declaration resolving to zero segments does not compile)
/// - parameter names are unique within the pattern
///
/// Equality is structural: same length, same segment kind and value at every
/// position. Two patterns written with different slash placement (e.g.
/// `users/:id/` and `/users/:id`) compile to equal values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    segments: Vec<Segment>,
    canonical: String,
}

impl RoutePattern {
    /// Build a pattern from already-validated segments.
    ///
    /// Callers must uphold the pattern invariants; this is only reachable
    /// through the parser.
    pub(crate) fn from_segments(segments: Vec<Segment>) -> Self {
        let mut canonical = String::new();
        for segment in &segments {
            canonical.push('/');
            match segment {
                Segment::Literal(text) => canonical.push_str(text),
                Segment::Param(name) => {
                    canonical.push(super::PARAM_MARKER);
                    canonical.push_str(name);
                }
            }
        }
        Self {
            segments,
            canonical,
        }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments. Compiled patterns always have at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parameter names in left-to-right declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(Segment::param_name)
    }

    /// Canonical rendering, e.g. `/users/:id/contents`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

impl Serialize for RoutePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.canonical)
    }
}

impl<'de> Deserialize<'de> for RoutePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        RoutePattern::parse(&s).map_err(serde::de::Error::custom)
    }
}
