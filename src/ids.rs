use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Opaque handler token bound to a registered route.
///
/// The routing core never interprets the token; it is returned verbatim on a
/// successful match so the external dispatch layer can invoke the
/// corresponding behavior. Backed by `Arc<str>` so cloning a token into a
/// match result is an O(1) refcount bump rather than a string copy.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct HandlerId(Arc<str>);

impl HandlerId {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for HandlerId {
    fn from(name: &str) -> Self {
        Self(Arc::from(name))
    }
}

impl From<String> for HandlerId {
    fn from(name: String) -> Self {
        Self(Arc::from(name.as_str()))
    }
}

impl Display for HandlerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for HandlerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for HandlerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(HandlerId::from(s))
    }
}
