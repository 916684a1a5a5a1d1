/// Structured configuration diagnostics
///
/// Nothing in path resolution is fatal. Every defect degrades to a defined
/// fallback (never-matching pattern, first sibling, nothing rendered) and is
/// reported as a [`Diagnostic`] value next to the normal result, so callers
/// can log it, assert on it in tests, or ignore it.

use crate::route::pattern::PatternError;
use thiserror::Error;

/// A non-fatal configuration defect found while resolving a path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Wildcard immediately followed by a parameter; the pattern never matches
    #[error(transparent)]
    InvalidPattern(#[from] PatternError),

    /// More than one sibling matches; the first in declaration order wins
    #[error(
        "found multiple routes matching path \"{path}\" ({}); only the first one will be rendered",
        .patterns.join(", ")
    )]
    AmbiguousSiblingMatch { path: String, patterns: Vec<String> },

    /// A route's children are not all routes; the subtree renders nothing
    #[error(
        "invalid <{kind}> child under route \"{parent}\": all children of a route must also be routes"
    )]
    MalformedDeclarationShape { parent: String, kind: String },
}

impl Diagnostic {
    /// Short stable name, used as a structured logging field
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::InvalidPattern(_) => "invalid_pattern",
            Diagnostic::AmbiguousSiblingMatch { .. } => "ambiguous_sibling_match",
            Diagnostic::MalformedDeclarationShape { .. } => "malformed_declaration_shape",
        }
    }

    /// Logs the diagnostic once, at the point it is created
    pub(crate) fn emit(self) -> Self {
        tracing::warn!(kind = self.kind(), "{}", self);
        self
    }
}

/// A result value together with the diagnostics produced computing it
///
/// # Examples
///
/// ```
/// use ctx_router::check_match;
///
/// let checked = check_match("/users/1", "/users/:id");
/// assert!(checked.value);
/// assert!(checked.is_clean());
///
/// let checked = check_match("/a/b", "/*/:id");
/// assert!(!checked.value);
/// assert_eq!(checked.diagnostics.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked<T> {
    pub value: T,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Checked<T> {
    /// A value with no diagnostics
    pub fn clean(value: T) -> Self {
        Self {
            value,
            diagnostics: Vec::new(),
        }
    }

    pub fn with_diagnostic(value: T, diagnostic: Diagnostic) -> Self {
        Self {
            value,
            diagnostics: vec![diagnostic],
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked {
            value: f(self.value),
            diagnostics: self.diagnostics,
        }
    }

    /// Moves this value's diagnostics into `sink`, returning the bare value
    pub fn drain_into(self, sink: &mut Vec<Diagnostic>) -> T {
        sink.extend(self.diagnostics);
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguity_message_lists_patterns() {
        let diagnostic = Diagnostic::AmbiguousSiblingMatch {
            path: "/about".to_string(),
            patterns: vec!["/about".to_string(), "/:section".to_string()],
        };
        assert_eq!(
            diagnostic.to_string(),
            "found multiple routes matching path \"/about\" (/about, /:section); \
             only the first one will be rendered"
        );
        assert_eq!(diagnostic.kind(), "ambiguous_sibling_match");
    }

    #[test]
    fn test_invalid_pattern_is_transparent() {
        let error = PatternError::ParamAfterWildcard {
            pattern: "/*/:id".to_string(),
            segment: ":id".to_string(),
        };
        let diagnostic = Diagnostic::from(error.clone());
        assert_eq!(diagnostic.to_string(), error.to_string());
        assert_eq!(diagnostic.kind(), "invalid_pattern");
    }

    #[test]
    fn test_checked_drain_into() {
        let diagnostic = Diagnostic::MalformedDeclarationShape {
            parent: "/".to_string(),
            kind: "div".to_string(),
        };
        let checked = Checked::with_diagnostic(7, diagnostic.clone());
        let mut sink = Vec::new();
        assert_eq!(checked.drain_into(&mut sink), 7);
        assert_eq!(sink, vec![diagnostic]);
    }

    #[test]
    fn test_checked_map_keeps_diagnostics() {
        let checked = Checked::clean(2).map(|n| n * 2);
        assert_eq!(checked.value, 4);
        assert!(checked.is_clean());
    }
}
