//! Static route classification table.

use serde::{Deserialize, Serialize};

/// Access class of a navigable path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteClass {
    /// Anyone, signed in or not
    Public,
    /// Any signed-in user
    Authenticated,
    /// Administrators only
    Admin,
    /// Property owners only
    Owner,
}

/// Path prefixes per access class, checked in priority order.
///
/// A path belongs to the first class owning a prefix of it. Paths matching no
/// prefix are public. Prefixes match on raw string prefix, so `/admin` also
/// covers `/admin/users` and `/administration`.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    classes: &'static [(RouteClass, &'static [&'static str])],
    ungated: &'static [&'static str],
}

/// Admin before owner before generic protection; public is the fallback.
const STANDARD_CLASSES: &[(RouteClass, &[&str])] = &[
    (RouteClass::Admin, &["/admin"]),
    (RouteClass::Owner, &["/owners"]),
    (RouteClass::Authenticated, &["/appointments"]),
    (RouteClass::Public, &["/login", "/register", "/properties", "/"]),
];

/// API routes, built assets and the favicon bypass the gate entirely.
const STANDARD_UNGATED: &[&str] = &[
    "/api",
    "/_next/static",
    "/_next/image",
    "/static",
    "/favicon.ico",
];

impl RouteTable {
    /// The marketplace's route table
    pub const STANDARD: RouteTable = RouteTable {
        classes: STANDARD_CLASSES,
        ungated: STANDARD_UNGATED,
    };

    pub const fn new(
        classes: &'static [(RouteClass, &'static [&'static str])],
        ungated: &'static [&'static str],
    ) -> Self {
        Self { classes, ungated }
    }

    /// Classifies a request path
    pub fn classify(&self, path: &str) -> RouteClass {
        let path = normalize_path(path);
        self.classes
            .iter()
            .find(|(_, prefixes)| prefixes.iter().any(|prefix| path.starts_with(prefix)))
            .map(|(class, _)| *class)
            .unwrap_or(RouteClass::Public)
    }

    /// Whether the gate intercepts this path at all
    pub fn is_gated(&self, path: &str) -> bool {
        let path = normalize_path(path);
        !self.ungated.iter().any(|prefix| path.starts_with(prefix))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Strips query and fragment, percent-decodes and collapses repeated slashes,
/// so that `//admin` and `/%61dmin` classify like `/admin`.
///
/// The router dispatches on the decoded path, so classification must too.
/// Invalid UTF-8 escapes decode lossily.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let decoded = urlencoding::decode_binary(path.as_bytes());
    let path = String::from_utf8_lossy(&decoded);

    let mut normalized = String::with_capacity(path.len() + 1);
    normalized.push('/');
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        normalized.push_str(segment);
    }
    if path.ends_with('/') && !normalized.ends_with('/') {
        normalized.push('/');
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_classification() {
        let table = RouteTable::STANDARD;
        assert_eq!(table.classify("/admin"), RouteClass::Admin);
        assert_eq!(table.classify("/admin/users"), RouteClass::Admin);
        assert_eq!(table.classify("/owners"), RouteClass::Owner);
        assert_eq!(table.classify("/owners/properties/3"), RouteClass::Owner);
        assert_eq!(table.classify("/appointments"), RouteClass::Authenticated);
        assert_eq!(table.classify("/properties"), RouteClass::Public);
        assert_eq!(table.classify("/properties/12"), RouteClass::Public);
        assert_eq!(table.classify("/login"), RouteClass::Public);
        assert_eq!(table.classify("/"), RouteClass::Public);
    }

    #[test]
    fn test_unlisted_paths_are_public() {
        let table = RouteTable::STANDARD;
        assert_eq!(table.classify("/profile"), RouteClass::Public);
        assert_eq!(table.classify("/health"), RouteClass::Public);
        assert_eq!(table.classify(""), RouteClass::Public);
    }

    #[test]
    fn test_raw_prefix_covers_lookalikes() {
        let table = RouteTable::STANDARD;
        assert_eq!(table.classify("/administration"), RouteClass::Admin);
        assert_eq!(table.classify("/owners-guide"), RouteClass::Owner);
    }

    #[test]
    fn test_slash_tricks_do_not_escape_classification() {
        let table = RouteTable::STANDARD;
        assert_eq!(table.classify("//admin"), RouteClass::Admin);
        assert_eq!(table.classify("/admin?tab=users"), RouteClass::Admin);
        assert_eq!(table.classify("admin/users"), RouteClass::Admin);
        assert_eq!(table.classify("/owners//"), RouteClass::Owner);
    }

    #[test]
    fn test_percent_encoded_paths_classify_decoded() {
        let table = RouteTable::STANDARD;
        assert_eq!(table.classify("/%61dmin"), RouteClass::Admin);
        assert_eq!(table.classify("/%61dmin/users"), RouteClass::Admin);
        assert_eq!(table.classify("/%41dmin"), RouteClass::Public);
        assert_eq!(table.classify("/%6Fwners"), RouteClass::Owner);
        assert_eq!(table.classify("/%6fwners"), RouteClass::Owner);
        assert_eq!(table.classify("/%61ppointments"), RouteClass::Authenticated);
        assert_eq!(table.classify("/%2Fadmin"), RouteClass::Admin);
        assert_eq!(table.classify("/%ff%61dmin"), RouteClass::Public);
        assert!(!table.is_gated("/%61pi/auth"));
        assert!(table.is_gated("/%61ppointments"));
    }

    #[test]
    fn test_ungated_paths() {
        let table = RouteTable::STANDARD;
        assert!(!table.is_gated("/api/auth/login"));
        assert!(!table.is_gated("/api/properties?city=Chicago"));
        assert!(!table.is_gated("/_next/static/chunks/main.js"));
        assert!(!table.is_gated("/_next/image"));
        assert!(!table.is_gated("/static/logo.png"));
        assert!(!table.is_gated("/favicon.ico"));
        assert!(table.is_gated("/admin"));
        assert!(table.is_gated("/"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/a//b/"), "/a/b/");
        assert_eq!(normalize_path("a/b?x=1"), "/a/b");
        assert_eq!(normalize_path("/#top"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/%61dmin%2Fusers"), "/admin/users");
    }

    #[test]
    fn test_custom_table() {
        const CLASSES: &[(RouteClass, &[&str])] = &[(RouteClass::Authenticated, &["/private"])];
        let table = RouteTable::new(CLASSES, &[]);
        assert_eq!(table.classify("/private/x"), RouteClass::Authenticated);
        assert_eq!(table.classify("/admin"), RouteClass::Public);
        assert!(table.is_gated("/api"));
    }
}
