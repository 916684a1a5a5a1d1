// File: src/config.rs
// Purpose: Configuration and route declarations from ctxroute.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::tree::{Node, RouteNode, Routes};

/// Default file name looked up by [`Config::load_default`]
pub const DEFAULT_CONFIG_FILE: &str = "ctxroute.toml";

/// Node kind of a route declaration
pub const ROUTE_KIND: &str = "route";

/// Router configuration plus the declared route tree
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,

    #[serde(default)]
    pub routes: Vec<RouteDecl>,
}

/// Routing behaviour
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouterConfig {
    /// Initial path of a navigator (default: "/")
    #[serde(default = "default_base_path")]
    pub base_path: String,

    /// Whether ambiguous sibling matches are reported (default: true)
    #[serde(default = "default_true")]
    pub report_ambiguity: bool,
}

/// A serialized declaration node
///
/// Any `kind` other than `"route"` is a foreign node and makes its level
/// malformed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteDecl {
    #[serde(default = "default_kind")]
    pub kind: String,

    #[serde(default)]
    pub path: String,

    #[serde(default)]
    pub element: Option<String>,

    #[serde(default)]
    pub children: Vec<RouteDecl>,
}

// Default values
fn default_base_path() -> String {
    "/".to_string()
}

fn default_kind() -> String {
    ROUTE_KIND.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            report_ambiguity: true,
        }
    }
}

impl RouteDecl {
    fn into_node(self) -> Node<String> {
        if self.kind != ROUTE_KIND {
            return Node::foreign(self.kind);
        }

        let mut route = RouteNode::new(self.path);
        if let Some(element) = self.element {
            route = route.with_element(element);
        }
        Node::Route(
            self.children
                .into_iter()
                .fold(route, |route, child| route.with_node(child.into_node())),
        )
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::parse(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./ctxroute.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Builds the declaration tree described by `routes`
    pub fn routes_tree(&self) -> Routes<String> {
        self.routes
            .iter()
            .cloned()
            .fold(Routes::new(), |routes, decl| routes.with_node(decl.into_node()))
            .with_ambiguity_reports(self.router.report_ambiguity)
    }
}
