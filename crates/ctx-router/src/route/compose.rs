/// Pattern composition for nested route declarations
///
/// A nested route's pattern is relative to its parent's. Composition turns
/// the chain of ancestor patterns plus a node's own pattern into the single
/// full pattern the node exposes to its descendants.

use super::pattern::WILDCARD;
use crate::path::collapse_separators;

/// Strips one trailing `/*` (a bare `*` is left untouched)
///
/// # Examples
///
/// ```
/// use ctx_router::route::compose::strip_trailing_wildcard;
///
/// assert_eq!(strip_trailing_wildcard("/dashboard/*"), "/dashboard");
/// assert_eq!(strip_trailing_wildcard("/a/*/*"), "/a/*");
/// assert_eq!(strip_trailing_wildcard("*"), "*");
/// ```
pub fn strip_trailing_wildcard(pattern: &str) -> &str {
    pattern.strip_suffix("/*").unwrap_or(pattern)
}

/// The literal prefix a parent's full pattern contributes to its children
///
/// A bare `*` parent contributes nothing.
pub fn static_base(parent_full: &str) -> &str {
    if parent_full == WILDCARD {
        ""
    } else {
        strip_trailing_wildcard(parent_full)
    }
}

/// Composes one nesting level: parent full pattern + own pattern
///
/// # Examples
///
/// ```
/// use ctx_router::route::compose::compose_step;
///
/// assert_eq!(compose_step("", "/about"), "/about");
/// assert_eq!(compose_step("/dashboard", "/stats/*"), "/dashboard/stats");
/// ```
pub fn compose_step(parent_full: &str, own: &str) -> String {
    join(static_base(parent_full), strip_trailing_wildcard(own))
}

/// The pattern a sibling is tested against: the parent's static base joined
/// with the node's own raw pattern, trailing wildcard kept
///
/// # Examples
///
/// ```
/// use ctx_router::route::compose::match_pattern;
///
/// assert_eq!(match_pattern("", "/dashboard/*"), "/dashboard/*");
/// assert_eq!(match_pattern("/dashboard", "stats"), "/dashboard/stats");
/// ```
pub fn match_pattern(parent_full: &str, own: &str) -> String {
    join(static_base(parent_full), own)
}

/// Composes a whole chain: ancestor patterns (root first) then the node's own
///
/// Folds [`compose_step`] left to right, starting from the empty pattern.
///
/// # Examples
///
/// ```
/// use ctx_router::route::compose::compose;
///
/// assert_eq!(compose(&["/dashboard/*"], "/stats"), "/dashboard/stats");
/// assert_eq!(compose::<&str>(&[], "/users/:id/*"), "/users/:id");
/// assert_eq!(compose(&["*", "/admin/*"], "users"), "/admin/users");
/// ```
pub fn compose<S: AsRef<str>>(ancestors: &[S], own: &str) -> String {
    let parent = ancestors
        .iter()
        .fold(String::new(), |full, ancestor| compose_step(&full, ancestor.as_ref()));
    compose_step(&parent, own)
}

fn join(base: &str, own: &str) -> String {
    collapse_separators(&format!("{}/{}", base, own)).into_owned()
}

/// Ordered ancestor patterns from the declaration root to a node
///
/// Threaded explicitly down a declaration tree: each level calls
/// [`PatternChain::descend`] and hands the new chain to its children.
///
/// # Examples
///
/// ```
/// use ctx_router::route::compose::PatternChain;
///
/// let chain = PatternChain::root().descend("/dashboard/*").descend("/reports");
/// assert_eq!(chain.full_pattern(), "/dashboard/reports");
/// assert_eq!(chain.patterns(), &["/dashboard/*", "/reports"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternChain {
    patterns: Vec<String>,
    full: String,
}

impl PatternChain {
    /// The empty chain above the top-level sibling set
    pub fn root() -> Self {
        Self::default()
    }

    /// Returns the chain one level deeper (pure: `self` is unchanged)
    pub fn descend(&self, own: &str) -> Self {
        let mut patterns = self.patterns.clone();
        patterns.push(own.to_string());
        Self {
            patterns,
            full: compose_step(&self.full, own),
        }
    }

    /// Full pattern of the deepest node (empty at the root)
    pub fn full_pattern(&self) -> &str {
        &self.full
    }

    /// Pattern a child with pattern `own` is matched against
    pub fn match_pattern_for(&self, own: &str) -> String {
        match_pattern(&self.full, own)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn depth(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_root(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_only_one_trailing_wildcard() {
        assert_eq!(strip_trailing_wildcard("/a/*/*"), "/a/*");
        assert_eq!(strip_trailing_wildcard("/a/*/b"), "/a/*/b");
        assert_eq!(strip_trailing_wildcard("/*"), "");
    }

    #[test]
    fn test_static_base_of_bare_wildcard() {
        assert_eq!(static_base("*"), "");
        assert_eq!(static_base("/*"), "");
        assert_eq!(static_base("/docs/*"), "/docs");
    }

    #[test]
    fn test_compose_top_level() {
        assert_eq!(compose::<&str>(&[], "/about"), "/about");
        assert_eq!(compose::<&str>(&[], "about"), "/about");
        assert_eq!(compose::<&str>(&[], "/"), "/");
        assert_eq!(compose::<&str>(&[], "*"), "/*");
    }

    #[test]
    fn test_compose_nested() {
        assert_eq!(compose(&["/dashboard/*"], "/stats"), "/dashboard/stats");
        assert_eq!(compose(&["/dashboard/*"], "stats/*"), "/dashboard/stats");
        assert_eq!(compose(&["/users/:id/*"], "/posts/:postId"), "/users/:id/posts/:postId");
    }

    #[test]
    fn test_compose_under_catch_all_parent() {
        assert_eq!(compose(&["*"], "/help"), "/help");
        assert_eq!(compose(&["/*"], "/help"), "/help");
    }

    #[test]
    fn test_compose_three_levels_matches_chain() {
        let chain = PatternChain::root()
            .descend("/app/*")
            .descend("/settings/*")
            .descend("/profile");
        assert_eq!(chain.full_pattern(), "/app/settings/profile");
        assert_eq!(compose(&["/app/*", "/settings/*"], "/profile"), chain.full_pattern());
        assert_eq!(chain.depth(), 3);
    }

    #[test]
    fn test_match_pattern_keeps_own_wildcard() {
        let chain = PatternChain::root().descend("/dashboard/*");
        assert_eq!(chain.match_pattern_for("/settings/*"), "/dashboard/settings/*");
        assert_eq!(chain.match_pattern_for("*"), "/dashboard/*");
    }

    #[test]
    fn test_root_chain() {
        let root = PatternChain::root();
        assert!(root.is_root());
        assert_eq!(root.full_pattern(), "");
        assert_eq!(root.match_pattern_for("/about"), "/about");
    }
}
