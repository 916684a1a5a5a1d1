//! # ctx-router
//!
//! A path-matching and nested route resolution library for component-tree
//! UIs, with support for:
//! - Literal segments (`/about`)
//! - Parameters (`/users/:id`)
//! - Wildcards matching zero or more segments (`/settings/*`, `/*/raw`)
//! - Nested route declarations composed into full patterns
//! - First-match-wins selection with ambiguity diagnostics
//!
//! ## Design
//!
//! - **Pure functions**: every evaluation is a function of the current path
//!   and a snapshot of the declaration tree; no matcher state persists
//! - **One traversal** for boolean matching and parameter extraction,
//!   parametrized by a [`CaptureSink`]
//! - **Explicit context**: pattern chains are threaded down the tree as
//!   values ([`PatternChain`])
//! - **Non-fatal diagnostics**: defects come back as [`Diagnostic`] values
//!   next to a defined fallback result, and are logged with `tracing`
//!
//! ## Path Normalization
//!
//! Leading, trailing and doubled separators are insignificant:
//! `/users/123`, `users/123/` and `//users//123` are the same path.
//!
//! ## Example
//!
//! ```
//! use ctx_router::{compose, extract_params, matches, select};
//!
//! assert!(matches("/users/123", "/users/:id"));
//! assert_eq!(extract_params("/users/123", "/users/:id").get("id"), Some("123"));
//!
//! assert_eq!(compose(&["/dashboard/*"], "/stats"), "/dashboard/stats");
//!
//! let selection = select("/about", &["/about", "/:section"]);
//! assert_eq!(selection.value, Some(0));
//! assert!(!selection.is_clean()); // ambiguous
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod diagnostic;
pub mod matcher;
pub mod navigator;
pub mod params;
pub mod path;
pub mod route;
pub mod select;
pub mod tree;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{Config, RouteDecl, RouterConfig};
pub use diagnostic::{Checked, Diagnostic};
pub use matcher::{check_match, check_params, extract_params, matches, walk, CaptureSink};
pub use navigator::{LinkClick, Navigator};
pub use params::Params;
pub use path::{collapse_separators, normalize_path, segments};
pub use route::compose::{compose, compose_step, strip_trailing_wildcard, PatternChain};
pub use route::pattern::{classify_segment, validate_pattern, Pattern, PatternError, Segment};
pub use select::{select, select_with};
pub use tree::{DeclaredRoute, MatchedRoute, Node, Resolution, RouteNode, Routes};
