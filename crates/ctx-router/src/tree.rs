/// Declaration tree evaluation
///
/// A [`Routes`] holds the top-level sibling set of a declaration tree. Each
/// [`RouteNode`] declares a pattern relative to its parent, an optional
/// payload to render, and nested children rendered through its outlet.
///
/// Resolution is one explicit depth-first descent: the [`PatternChain`] is
/// threaded down as a value, never looked up from shared state.

use crate::diagnostic::Diagnostic;
use crate::matcher::check_params;
use crate::params::Params;
use crate::route::compose::PatternChain;
use crate::select::select_with;

/// A node of a declaration tree
#[derive(Debug, Clone, PartialEq)]
pub enum Node<T> {
    Route(RouteNode<T>),
    /// Anything that is not a route; `kind` names it in diagnostics
    Foreign { kind: String },
}

impl<T> Node<T> {
    pub fn foreign(kind: impl Into<String>) -> Self {
        Node::Foreign { kind: kind.into() }
    }

    pub fn as_route(&self) -> Option<&RouteNode<T>> {
        match self {
            Node::Route(route) => Some(route),
            Node::Foreign { .. } => None,
        }
    }
}

impl<T> From<RouteNode<T>> for Node<T> {
    fn from(route: RouteNode<T>) -> Self {
        Node::Route(route)
    }
}

/// A route declaration: pattern, payload and nested routes
///
/// # Examples
///
/// ```
/// use ctx_router::RouteNode;
///
/// let dashboard = RouteNode::new("/dashboard/*")
///     .with_element("DashboardLayout")
///     .with_child(RouteNode::new("/stats").with_element("StatsPage"))
///     .with_child(RouteNode::new("/settings").with_element("SettingsPage"));
///
/// assert_eq!(dashboard.children().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteNode<T> {
    path: String,
    element: Option<T>,
    children: Vec<Node<T>>,
}

impl<T> RouteNode<T> {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            element: None,
            children: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: T) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_child(mut self, child: RouteNode<T>) -> Self {
        self.children.push(Node::Route(child));
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteNode<T>>,
    {
        self.children.extend(children.into_iter().map(Node::Route));
        self
    }

    /// Adds any node, including foreign ones
    pub fn with_node(mut self, node: Node<T>) -> Self {
        self.children.push(node);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn element(&self) -> Option<&T> {
        self.element.as_ref()
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }
}

/// One matched level of a resolution
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedRoute<'a, T> {
    /// Composed pattern exposed to descendants (trailing wildcard stripped)
    pub full_pattern: String,
    /// Pattern the path was tested against (own wildcard kept)
    pub match_pattern: String,
    /// Parameters extracted with `match_pattern`
    pub params: Params,
    pub element: Option<&'a T>,
    /// Index among its siblings
    pub index: usize,
}

/// Outcome of resolving one path against a declaration tree
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution<'a, T> {
    /// Matched routes, outermost first
    pub matches: Vec<MatchedRoute<'a, T>>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<'a, T> Resolution<'a, T> {
    pub fn is_match(&self) -> bool {
        !self.matches.is_empty()
    }

    /// The deepest matched route
    pub fn leaf(&self) -> Option<&MatchedRoute<'a, T>> {
        self.matches.last()
    }

    /// Parameters visible to the deepest matched route
    pub fn params(&self) -> Option<&Params> {
        self.leaf().map(|leaf| &leaf.params)
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params().and_then(|params| params.get(name))
    }

    /// Payloads to render, outermost first
    pub fn elements(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.matches.iter().filter_map(|matched| matched.element)
    }
}

/// A declared route flattened out of the tree, with its composed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredRoute {
    pub depth: usize,
    pub path: String,
    pub full_pattern: String,
    pub match_pattern: String,
}

/// The top-level sibling set of a declaration tree
///
/// # Examples
///
/// ```
/// use ctx_router::{Routes, RouteNode};
///
/// let routes = Routes::new()
///     .with_route(RouteNode::new("/").with_element("Home"))
///     .with_route(
///         RouteNode::new("/users/*")
///             .with_element("UsersLayout")
///             .with_child(RouteNode::new("/:userId").with_element("UserProfile")),
///     );
///
/// let resolution = routes.resolve("/users/42");
/// assert_eq!(resolution.elements().copied().collect::<Vec<_>>(), vec!["UsersLayout", "UserProfile"]);
/// assert_eq!(resolution.param("userId"), Some("42"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Routes<T> {
    children: Vec<Node<T>>,
    report_ambiguity: bool,
}

impl<T> Default for Routes<T> {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            report_ambiguity: true,
        }
    }
}

impl<T> Routes<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_route(mut self, route: RouteNode<T>) -> Self {
        self.children.push(Node::Route(route));
        self
    }

    pub fn with_routes<I>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = RouteNode<T>>,
    {
        self.children.extend(routes.into_iter().map(Node::Route));
        self
    }

    pub fn with_node(mut self, node: Node<T>) -> Self {
        self.children.push(node);
        self
    }

    /// Whether ambiguous sibling matches are reported (default: true)
    pub fn with_ambiguity_reports(mut self, report: bool) -> Self {
        self.report_ambiguity = report;
        self
    }

    pub fn children(&self) -> &[Node<T>] {
        &self.children
    }

    /// Resolves `path` against the tree
    ///
    /// At each level: a foreign child aborts the level (nothing rendered
    /// from there down, [`Diagnostic::MalformedDeclarationShape`]); otherwise
    /// the first matching sibling is selected, its parameters extracted, and
    /// the descent continues into its children.
    pub fn resolve(&self, path: &str) -> Resolution<'_, T> {
        let mut matches = Vec::new();
        let mut diagnostics = Vec::new();
        let mut chain = PatternChain::root();
        let mut level: &[Node<T>] = &self.children;

        while !level.is_empty() {
            let Some(routes) = routes_only(level, &chain, &mut diagnostics) else {
                // The route owning this level renders nothing either.
                if !chain.is_root() {
                    matches.pop();
                }
                break;
            };

            let candidates: Vec<String> = routes
                .iter()
                .map(|route| chain.match_pattern_for(&route.path))
                .collect();

            let selected = select_with(path, candidates.as_slice(), self.report_ambiguity)
                .drain_into(&mut diagnostics);
            let Some(index) = selected else {
                break;
            };

            let route = routes[index];
            let match_pattern = candidates[index].clone();
            let params = check_params(path, &match_pattern).drain_into(&mut diagnostics);
            chain = chain.descend(&route.path);

            tracing::trace!(
                depth = chain.depth(),
                full_pattern = chain.full_pattern(),
                "descending into route"
            );

            matches.push(MatchedRoute {
                full_pattern: chain.full_pattern().to_string(),
                match_pattern,
                params,
                element: route.element.as_ref(),
                index,
            });
            level = &route.children;
        }

        Resolution {
            matches,
            diagnostics,
        }
    }

    /// Every declared route in depth-first declaration order
    ///
    /// Foreign nodes are skipped.
    pub fn declared_routes(&self) -> Vec<DeclaredRoute> {
        fn visit<T>(nodes: &[Node<T>], chain: &PatternChain, out: &mut Vec<DeclaredRoute>) {
            for route in nodes.iter().filter_map(Node::as_route) {
                let child_chain = chain.descend(&route.path);
                out.push(DeclaredRoute {
                    depth: chain.depth(),
                    path: route.path.clone(),
                    full_pattern: child_chain.full_pattern().to_string(),
                    match_pattern: chain.match_pattern_for(&route.path),
                });
                visit(&route.children, &child_chain, out);
            }
        }

        let mut out = Vec::new();
        visit(&self.children, &PatternChain::root(), &mut out);
        out
    }
}

/// Returns the level's routes, or `None` after reporting every foreign node
fn routes_only<'n, T>(
    level: &'n [Node<T>],
    chain: &PatternChain,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<Vec<&'n RouteNode<T>>> {
    let parent = if chain.is_root() {
        "<routes>".to_string()
    } else {
        chain.full_pattern().to_string()
    };

    let mut routes = Vec::with_capacity(level.len());
    let mut valid = true;

    for node in level {
        match node {
            Node::Route(route) => routes.push(route),
            Node::Foreign { kind } => {
                valid = false;
                diagnostics.push(
                    Diagnostic::MalformedDeclarationShape {
                        parent: parent.clone(),
                        kind: kind.clone(),
                    }
                    .emit(),
                );
            }
        }
    }

    valid.then_some(routes)
}
