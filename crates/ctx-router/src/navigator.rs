/// Current-path state and link click filtering
///
/// The navigator owns the only mutable input of path resolution. It keeps
/// no history: navigating replaces the current path.

use crate::config::RouterConfig;
use crate::tree::{Resolution, Routes};

/// Primary (usually left) mouse button
pub const PRIMARY_BUTTON: u16 = 0;

/// Modifier state of a click on a navigation link
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkClick {
    pub button: u16,
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    /// Another handler already cancelled the default action
    pub default_prevented: bool,
}

impl LinkClick {
    /// A plain primary-button click
    pub fn primary() -> Self {
        Self::default()
    }

    pub fn with_button(mut self, button: u16) -> Self {
        self.button = button;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    pub fn prevented(mut self) -> Self {
        self.default_prevented = true;
        self
    }

    /// Whether the router should handle this click
    ///
    /// Modified clicks (new tab, new window) and non-primary buttons are left
    /// to the host.
    pub fn is_plain(&self) -> bool {
        !self.default_prevented
            && !self.meta
            && !self.ctrl
            && !self.shift
            && self.button == PRIMARY_BUTTON
    }
}

/// Holds the current path
///
/// # Examples
///
/// ```
/// use ctx_router::{LinkClick, Navigator};
///
/// let mut navigator = Navigator::new();
/// assert_eq!(navigator.path(), "/");
///
/// assert!(navigator.follow_link(LinkClick::primary(), "/about"));
/// assert_eq!(navigator.path(), "/about");
///
/// assert!(!navigator.follow_link(LinkClick::primary().with_ctrl(), "/privacy"));
/// assert_eq!(navigator.path(), "/about");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    path: String,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::with_base_path("/")
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_path(base_path: impl Into<String>) -> Self {
        Self {
            path: base_path.into(),
        }
    }

    pub fn from_config(config: &RouterConfig) -> Self {
        Self::with_base_path(config.base_path.clone())
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replaces the current path (stored as given)
    pub fn navigate(&mut self, to: impl Into<String>) {
        let to = to.into();
        tracing::debug!(from = %self.path, to = %to, "navigate");
        self.path = to;
    }

    /// Navigates for plain clicks only; returns whether it navigated
    pub fn follow_link(&mut self, click: LinkClick, to: &str) -> bool {
        if !click.is_plain() {
            return false;
        }
        self.navigate(to);
        true
    }

    /// Resolves `routes` against the current path snapshot
    pub fn resolve<'r, T>(&self, routes: &'r Routes<T>) -> Resolution<'r, T> {
        routes.resolve(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::RouteNode;
    use rstest::rstest;

    #[rstest]
    #[case::plain(LinkClick::primary(), true)]
    #[case::middle_button(LinkClick::primary().with_button(1), false)]
    #[case::meta(LinkClick::primary().with_meta(), false)]
    #[case::ctrl(LinkClick::primary().with_ctrl(), false)]
    #[case::shift(LinkClick::primary().with_shift(), false)]
    #[case::prevented(LinkClick::primary().prevented(), false)]
    fn test_link_click_is_plain(#[case] click: LinkClick, #[case] expected: bool) {
        assert_eq!(click.is_plain(), expected);
    }

    #[test]
    fn test_navigator_base_path() {
        let navigator = Navigator::with_base_path("/welcome");
        assert_eq!(navigator.path(), "/welcome");

        let config = RouterConfig {
            base_path: "/app".to_string(),
            ..RouterConfig::default()
        };
        assert_eq!(Navigator::from_config(&config).path(), "/app");
    }

    #[test]
    fn test_navigator_resolves_current_path() {
        let routes = Routes::new()
            .with_route(RouteNode::new("/").with_element("Home"))
            .with_route(RouteNode::new("/about").with_element("About"));

        let mut navigator = Navigator::new();
        assert_eq!(navigator.resolve(&routes).elements().copied().collect::<Vec<_>>(), vec!["Home"]);

        navigator.navigate("/about");
        assert_eq!(navigator.resolve(&routes).elements().copied().collect::<Vec<_>>(), vec!["About"]);
    }
}
