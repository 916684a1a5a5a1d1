/// Pattern parsing for route segments
///
/// Pure functional classification of pattern strings into typed segments,
/// plus the validation that rejects ambiguous patterns before matching.

use crate::path::segments;
use thiserror::Error;

/// The wildcard token: matches zero or more consecutive path segments
pub const WILDCARD: &str = "*";

/// Sigil that marks a parameter segment (`:id`)
pub const PARAM_SIGIL: char = ':';

/// Represents different types of route pattern segments
///
/// Borrowed from the pattern string, so classifying never allocates.
///
/// # Examples
///
/// ```
/// use ctx_router::route::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("users"), Segment::Literal("users"));
/// assert_eq!(classify_segment(":id"), Segment::Param("id"));
/// assert_eq!(classify_segment("*"), Segment::Wildcard);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Matches only an identical path segment
    Literal(&'a str),
    /// `:name` - matches any single path segment and binds `name`
    Param(&'a str),
    /// `*` - matches zero or more path segments
    Wildcard,
}

impl<'a> Segment<'a> {
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }
}

/// Classifies a single segment (pure function)
///
/// Only the exact token `*` is a wildcard; `*foo` is a literal.
/// Anything starting with `:` is a parameter, even a bare `:` (empty name).
pub fn classify_segment(segment: &str) -> Segment<'_> {
    if segment == WILDCARD {
        Segment::Wildcard
    } else if let Some(name) = segment.strip_prefix(PARAM_SIGIL) {
        Segment::Param(name)
    } else {
        Segment::Literal(segment)
    }
}

/// Pattern rejected before any matching is attempted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// A wildcard cannot know where to stop consuming when a parameter follows it
    #[error(
        "illegal route pattern \"{pattern}\": parameter segment \"{segment}\" cannot immediately \
         follow a wildcard; insert a literal segment between them"
    )]
    ParamAfterWildcard { pattern: String, segment: String },
}

/// A pattern string split into classified segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern<'a> {
    raw: &'a str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Pattern<'a> {
    /// Parses a pattern string. Parsing is total; use [`Pattern::validate`]
    /// to reject ambiguous patterns.
    ///
    /// # Examples
    ///
    /// ```
    /// use ctx_router::route::pattern::{Pattern, Segment};
    ///
    /// let pattern = Pattern::parse("/users/:id/*");
    /// assert_eq!(
    ///     pattern.segments(),
    ///     &[Segment::Literal("users"), Segment::Param("id"), Segment::Wildcard]
    /// );
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw,
            segments: segments(raw).into_iter().map(classify_segment).collect(),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Whether the whole pattern is the bare wildcard token (global catch-all)
    pub fn is_catch_all(&self) -> bool {
        self.raw == WILDCARD
    }

    /// Names of the parameter segments, in order of appearance
    pub fn param_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Param(name) => Some(*name),
            _ => None,
        })
    }

    /// Rejects a wildcard immediately followed by a parameter segment
    ///
    /// # Examples
    ///
    /// ```
    /// use ctx_router::route::pattern::Pattern;
    ///
    /// assert!(Pattern::parse("/files/*/raw").validate().is_ok());
    /// assert!(Pattern::parse("/files/*/:name").validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), PatternError> {
        self.segments
            .windows(2)
            .find_map(|pair| match pair {
                [Segment::Wildcard, Segment::Param(name)] => Some(name),
                _ => None,
            })
            .map_or(Ok(()), |name| {
                Err(PatternError::ParamAfterWildcard {
                    pattern: self.raw.to_string(),
                    segment: format!("{}{}", PARAM_SIGIL, name),
                })
            })
    }
}

/// Validates a pattern string (see [`Pattern::validate`])
pub fn validate_pattern(pattern: &str) -> Result<(), PatternError> {
    Pattern::parse(pattern).validate()
}
