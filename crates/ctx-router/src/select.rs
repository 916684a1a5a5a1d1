/// First-match-wins selection over a sibling set
///
/// Siblings are tested in declaration order. Every sibling is tested, so an
/// ambiguous configuration (several siblings matching one path) can be
/// reported; the first match still wins so rendering stays deterministic.

use crate::diagnostic::{Checked, Diagnostic};
use crate::matcher::check_match;

/// Selects the first sibling pattern matching `path`
///
/// Reports [`Diagnostic::AmbiguousSiblingMatch`] when more than one sibling
/// matches, plus any [`Diagnostic::InvalidPattern`] found along the way.
/// `None` means nothing matched; callers render nothing.
///
/// # Examples
///
/// ```
/// use ctx_router::select;
///
/// let selection = select("/about", &["/about", "/:section"]);
/// assert_eq!(selection.value, Some(0));
/// assert_eq!(selection.diagnostics.len(), 1);
///
/// let selection = select("/contact", &["/about", "/faq"]);
/// assert_eq!(selection.value, None);
/// ```
pub fn select<S: AsRef<str>>(path: &str, siblings: &[S]) -> Checked<Option<usize>> {
    select_with(path, siblings, true)
}

/// [`select`] with ambiguity reporting switchable
///
/// Invalid patterns are reported either way.
pub fn select_with<S: AsRef<str>>(
    path: &str,
    siblings: &[S],
    report_ambiguity: bool,
) -> Checked<Option<usize>> {
    let mut diagnostics = Vec::new();

    let matching: Vec<usize> = siblings
        .iter()
        .enumerate()
        .filter_map(|(index, pattern)| {
            check_match(path, pattern.as_ref())
                .drain_into(&mut diagnostics)
                .then_some(index)
        })
        .collect();

    if report_ambiguity && matching.len() > 1 {
        let patterns = matching
            .iter()
            .map(|&index| siblings[index].as_ref().to_string())
            .collect();
        diagnostics.push(
            Diagnostic::AmbiguousSiblingMatch {
                path: path.to_string(),
                patterns,
            }
            .emit(),
        );
    }

    let selected = matching.first().copied();
    match selected {
        Some(index) => tracing::debug!(path, index, pattern = siblings[index].as_ref(), "route selected"),
        None => tracing::trace!(path, candidates = siblings.len(), "no route matched"),
    }

    Checked {
        value: selected,
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_select_first_in_declaration_order() {
        let siblings = ["/users/new", "/users/:id"];
        let selection = select("/users/42", &siblings);
        assert_eq!(selection.value, Some(1));
        assert!(selection.is_clean());
    }

    #[test]
    fn test_select_ambiguous_keeps_first() {
        let selection = select("/about", &["/about", "/:section"]);
        assert_eq!(selection.value, Some(0));
        assert_eq!(
            selection.diagnostics,
            vec![Diagnostic::AmbiguousSiblingMatch {
                path: "/about".to_string(),
                patterns: vec!["/about".to_string(), "/:section".to_string()],
            }]
        );
    }

    #[test]
    fn test_select_ambiguity_reporting_disabled() {
        let selection = select_with("/about", &["/about", "*"], false);
        assert_eq!(selection.value, Some(0));
        assert!(selection.is_clean());
    }

    #[test]
    fn test_select_skips_invalid_pattern() {
        let siblings = vec!["/docs/*/:page".to_string(), "/docs/*".to_string()];
        let selection = select("/docs/intro", siblings.as_slice());
        assert_eq!(selection.value, Some(1));
        assert!(matches!(
            selection.diagnostics.as_slice(),
            [Diagnostic::InvalidPattern(_)]
        ));
    }

    #[test]
    fn test_select_none() {
        let selection = select::<&str>("/anything", &[]);
        assert_eq!(selection.value, None);
        assert!(selection.is_clean());
    }
}
