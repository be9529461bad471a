use std::fmt;

/// Route declaration compile error
///
/// Returned by [`RoutePattern::parse`](super::RoutePattern::parse) when a
/// declaration is structurally malformed. A failed compilation affects only
/// that single registration; previously registered routes are untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidPatternError {
    /// The declaration is empty or resolves to zero segments (e.g. `""`, `"/"`, `"///"`).
    EmptyPattern,
    /// A parameter segment has no name (a bare marker, e.g. `/users/:`).
    EmptyParamName {
        /// The offending declaration
        declaration: String,
    },
    /// Two parameter segments in the same declaration share a name.
    DuplicateParamName {
        /// The repeated parameter name
        name: String,
        /// The offending declaration
        declaration: String,
    },
}

impl fmt::Display for InvalidPatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPatternError::EmptyPattern => {
                write!(
                    f,
                    "invalid route pattern: declaration resolves to zero segments"
                )
            }
            InvalidPatternError::EmptyParamName { declaration } => {
                write!(
                    f,
                    "invalid route pattern '{}': parameter segment has an empty name",
                    declaration
                )
            }
            InvalidPatternError::DuplicateParamName { name, declaration } => {
                write!(
                    f,
                    "invalid route pattern '{}': parameter name '{}' appears more than once",
                    declaration, name
                )
            }
        }
    }
}

impl std::error::Error for InvalidPatternError {}
