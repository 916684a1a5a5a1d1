/// Segment matching with single-point wildcard backtracking
///
/// Boolean matching and parameter extraction share one traversal,
/// [`walk`], parametrized by a [`CaptureSink`]. The boolean matcher passes a
/// sink that discards captures; the extractor passes a [`Params`].
///
/// # Algorithm
///
/// Two cursors walk the path and the pattern. A wildcard records the only
/// live backtrack point and initially consumes nothing. On a mismatch the
/// walk resumes right after the most recent wildcard, which now consumes one
/// more path segment. Once the path is exhausted, trailing wildcards are
/// skipped and the match succeeds iff the pattern is exhausted too.
///
/// The backtrack point only moves forward, so the walk is bounded by
/// `path_len * pattern_len` steps.

use crate::diagnostic::{Checked, Diagnostic};
use crate::params::Params;
use crate::path::segments;
use crate::route::pattern::{Pattern, Segment};

/// Receives parameter bindings as the traversal consumes parameter segments
pub trait CaptureSink<'a> {
    fn capture(&mut self, name: &'a str, value: &'a str);
}

/// Discards every capture (boolean matching)
impl<'a> CaptureSink<'a> for () {
    fn capture(&mut self, _name: &'a str, _value: &'a str) {}
}

impl<'a> CaptureSink<'a> for Params {
    fn capture(&mut self, name: &'a str, value: &'a str) {
        self.insert(name, value);
    }
}

/// Walks `path` against `pattern`, feeding parameter bindings to `sink`
///
/// Does not validate the pattern and does not special-case the global
/// catch-all; use [`check_match`] / [`check_params`] for the full contract.
/// When this returns `false` the sink may hold partial captures.
pub fn walk<'a, S>(path: &[&'a str], pattern: &[Segment<'a>], sink: &mut S) -> bool
where
    S: CaptureSink<'a> + ?Sized,
{
    let mut path_idx = 0;
    let mut pattern_idx = 0;
    // (pattern index of the wildcard, path index it started consuming at)
    let mut backtrack: Option<(usize, usize)> = None;

    while path_idx < path.len() {
        let segment = path[path_idx];

        match pattern.get(pattern_idx).copied() {
            Some(Segment::Wildcard) => {
                backtrack = Some((pattern_idx, path_idx));
                pattern_idx += 1;
                continue;
            }
            Some(Segment::Param(name)) => {
                sink.capture(name, segment);
                pattern_idx += 1;
                path_idx += 1;
                continue;
            }
            Some(Segment::Literal(literal)) if literal == segment => {
                pattern_idx += 1;
                path_idx += 1;
                continue;
            }
            _ => {}
        }

        match backtrack.as_mut() {
            Some((star_pattern_idx, star_path_idx)) => {
                *star_path_idx += 1;
                pattern_idx = *star_pattern_idx + 1;
                path_idx = *star_path_idx;
            }
            None => return false,
        }
    }

    while matches!(pattern.get(pattern_idx), Some(Segment::Wildcard)) {
        pattern_idx += 1;
    }

    pattern_idx == pattern.len()
}

/// Boolean match with diagnostics
///
/// An invalid pattern never matches and yields a
/// [`Diagnostic::InvalidPattern`].
pub fn check_match(path: &str, pattern: &str) -> Checked<bool> {
    let pattern = Pattern::parse(pattern);
    if pattern.is_catch_all() {
        return Checked::clean(true);
    }

    if let Err(error) = pattern.validate() {
        return Checked::with_diagnostic(false, Diagnostic::from(error).emit());
    }

    let path_segments = segments(path);
    Checked::clean(walk(&path_segments, pattern.segments(), &mut ()))
}

/// Parameter extraction with diagnostics
///
/// Returns an empty map when the pattern is invalid (with a diagnostic) or
/// when the path does not match; partial captures never leak out.
pub fn check_params(path: &str, pattern: &str) -> Checked<Params> {
    let pattern = Pattern::parse(pattern);
    if let Err(error) = pattern.validate() {
        return Checked::with_diagnostic(Params::new(), Diagnostic::from(error).emit());
    }

    let path_segments = segments(path);
    let mut params = Params::new();
    if walk(&path_segments, pattern.segments(), &mut params) {
        Checked::clean(params)
    } else {
        Checked::clean(Params::new())
    }
}

/// Checks if a path matches a route pattern
///
/// Supports:
/// - Exact routes: `/users` matches `/users`
/// - Parameters: `/users/:id` matches `/users/123`
/// - Wildcards: `/*/foo/bar/*` matches `/fizz/buzz/foo/bar/baz`
///
/// An invalid pattern (a parameter right after a wildcard) never matches;
/// the defect is logged. Use [`check_match`] to receive it as a value.
///
/// # Examples
///
/// ```
/// use ctx_router::matches;
///
/// assert!(matches("/users/123", "/users/:id"));
/// assert!(matches("/settings/profile/edit", "/settings/*"));
/// assert!(matches("/a/c", "/a/*/c"));
/// assert!(!matches("/x/y", "/x"));
/// ```
pub fn matches(path: &str, pattern: &str) -> bool {
    check_match(path, pattern).value
}

/// Extracts named parameters of `pattern` from `path`
///
/// # Examples
///
/// ```
/// use ctx_router::extract_params;
///
/// let params = extract_params("/users/123/posts/456", "/users/:userId/posts/:postId");
/// assert_eq!(params.get("userId"), Some("123"));
/// assert_eq!(params.get("postId"), Some("456"));
///
/// assert!(extract_params("/users", "/users/:id").is_empty());
/// ```
pub fn extract_params(path: &str, pattern: &str) -> Params {
    check_params(path, pattern).value
}
