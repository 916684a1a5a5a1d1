/// Path utilities: segment splitting and separator normalization
///
/// Normalizers borrow their input when it is already canonical.

use std::borrow::Cow;

/// Splits a path or pattern into its non-empty `/`-delimited segments
///
/// Leading, trailing and doubled separators vanish, so `/users/123`,
/// `users/123/` and `//users///123` all produce the same segments.
/// Never fails.
///
/// # Examples
///
/// ```
/// use ctx_router::path::segments;
///
/// assert_eq!(segments("/users/123"), vec!["users", "123"]);
/// assert_eq!(segments("//users///123/"), vec!["users", "123"]);
/// assert!(segments("/").is_empty());
/// assert!(segments("").is_empty());
/// ```
pub fn segments(input: &str) -> Vec<&str> {
    input.split('/').filter(|s| !s.is_empty()).collect()
}

/// Collapses every run of consecutive `/` into a single `/`
///
/// **Zero-copy** when there is nothing to collapse (`Cow::Borrowed`).
/// Only separators are touched: leading and trailing `/` survive.
///
/// # Examples
///
/// ```
/// use ctx_router::path::collapse_separators;
/// use std::borrow::Cow;
///
/// assert!(matches!(collapse_separators("/about"), Cow::Borrowed("/about")));
/// assert_eq!(collapse_separators("//dashboard//stats"), "/dashboard/stats");
/// assert_eq!(collapse_separators("/a///"), "/a/");
/// ```
pub fn collapse_separators(input: &str) -> Cow<'_, str> {
    if !input.contains("//") {
        return Cow::Borrowed(input);
    }

    let mut collapsed = String::with_capacity(input.len());
    let mut previous_was_slash = false;

    for ch in input.chars() {
        let is_slash = ch == '/';
        if !(is_slash && previous_was_slash) {
            collapsed.push(ch);
        }
        previous_was_slash = is_slash;
    }

    Cow::Owned(collapsed)
}

/// Normalize a path to canonical form: leading `/`, no empty segments,
/// no trailing `/` (except root)
///
/// Returns `Cow::Borrowed` when input is already canonical.
///
/// # Examples
///
/// ```
/// use ctx_router::path::normalize_path;
///
/// assert_eq!(normalize_path("/about/"), "/about");
/// assert_eq!(normalize_path("users//123"), "/users/123");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let joined = segments(path).join("/");
    if joined.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", joined))
    }
}

fn is_canonical(path: &str) -> bool {
    if path == "/" {
        return true;
    }
    path.starts_with('/') && !path.ends_with('/') && !path.contains("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_basic() {
        assert_eq!(segments("/settings/profile/edit"), vec!["settings", "profile", "edit"]);
        assert_eq!(segments("settings"), vec!["settings"]);
    }

    #[test]
    fn test_segments_discards_empty_components() {
        assert_eq!(segments("/a//b/"), vec!["a", "b"]);
        assert_eq!(segments("///"), Vec::<&str>::new());
    }

    #[test]
    fn test_segments_keeps_sigils() {
        assert_eq!(segments("/users/:id/*"), vec!["users", ":id", "*"]);
    }

    #[test]
    fn test_collapse_separators_borrowed() {
        let collapsed = collapse_separators("/dashboard/stats");
        assert!(matches!(collapsed, Cow::Borrowed("/dashboard/stats")));
    }

    #[test]
    fn test_collapse_separators_runs() {
        assert_eq!(collapse_separators("//"), "/");
        assert_eq!(collapse_separators("/a////b"), "/a/b");
        assert_eq!(collapse_separators("a//b//"), "a/b/");
    }

    #[test]
    fn test_normalize_path() {
        assert!(matches!(normalize_path("/users/1"), Cow::Borrowed("/users/1")));
        assert!(matches!(normalize_path("/"), Cow::Borrowed("/")));
        assert_eq!(normalize_path("users/1/"), "/users/1");
        assert_eq!(normalize_path("///"), "/");
    }
}
