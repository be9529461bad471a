use super::error::InvalidPatternError;
use super::types::{RoutePattern, Segment};

/// Marker prefix denoting a capture segment in a route declaration.
pub const PARAM_MARKER: char = ':';

/// Split a declaration or request path into its non-empty components.
///
/// This is the single splitting rule shared by pattern compilation and
/// request-path decomposition: components are delimited by `/`, and
/// consecutive, leading, and trailing slashes collapse, so a trailing slash
/// is insignificant and no empty components are ever produced.
#[must_use]
pub fn split_path(path: &str) -> Vec<&str> {
    path.trim_start_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

impl RoutePattern {
    /// Compile a route declaration into a pattern.
    ///
    /// A token is a [`Segment::Param`] if and only if it begins with
    /// [`PARAM_MARKER`]; every other non-empty token is a [`Segment::Literal`]
    /// held verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPatternError`] when the declaration resolves to zero
    /// segments, a parameter segment has an empty name, or two parameter
    /// segments share a name.
    ///
    /// # Example
    ///
    /// ```
    /// use seqroute::pattern::RoutePattern;
    ///
    /// let pattern = RoutePattern::parse("/users/:id/contents")?;
    /// assert_eq!(pattern.len(), 3);
    /// assert_eq!(pattern.param_names().collect::<Vec<_>>(), vec!["id"]);
    /// assert_eq!(pattern.to_string(), "/users/:id/contents");
    /// # Ok::<(), seqroute::pattern::InvalidPatternError>(())
    /// ```
    pub fn parse(declaration: &str) -> Result<Self, InvalidPatternError> {
        let tokens = split_path(declaration);
        if tokens.is_empty() {
            return Err(InvalidPatternError::EmptyPattern);
        }

        let mut segments = Vec::with_capacity(tokens.len());
        // Patterns carry a handful of params at most; a linear scan over the
        // seen names beats hashing here.
        let mut seen_params: Vec<&str> = Vec::new();

        for token in tokens {
            match token.strip_prefix(PARAM_MARKER) {
                Some(name) => {
                    if name.is_empty() {
                        return Err(InvalidPatternError::EmptyParamName {
                            declaration: declaration.to_string(),
                        });
                    }
                    if seen_params.contains(&name) {
                        return Err(InvalidPatternError::DuplicateParamName {
                            name: name.to_string(),
                            declaration: declaration.to_string(),
                        });
                    }
                    seen_params.push(name);
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(token.to_string())),
            }
        }

        Ok(RoutePattern::from_segments(segments))
    }
}
