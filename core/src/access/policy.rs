//! Access decisions for page navigation.

use serde::Serialize;

use super::route::{RouteClass, RouteTable};
use crate::domain::entities::{Role, User};

/// Where a denied navigation is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectTarget {
    /// No usable session
    Login,
    /// Signed in with the wrong role
    Properties,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::Properties => "/properties",
        }
    }
}

/// Outcome of evaluating a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "decision", content = "target")]
pub enum AccessDecision {
    Allow,
    Redirect(RedirectTarget),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }

    /// Redirect location, if the navigation is denied
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            AccessDecision::Allow => None,
            AccessDecision::Redirect(target) => Some(target.path()),
        }
    }
}

/// Maps (path, session) to an [`AccessDecision`].
///
/// Admins are not let into owner routes; they have their own area.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessPolicy {
    routes: RouteTable,
}

impl AccessPolicy {
    pub fn new(routes: RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        self.routes.classify(path)
    }

    /// Whether the gate should evaluate this path
    pub fn is_gated(&self, path: &str) -> bool {
        self.routes.is_gated(path)
    }

    /// Decides a navigation to `path`.
    ///
    /// `session` must be `None` whenever the session could not be decoded.
    pub fn evaluate(&self, path: &str, session: Option<&User>) -> AccessDecision {
        Self::decide(self.classify(path), session.map(|user| user.role))
    }

    /// The decision table
    pub fn decide(class: RouteClass, role: Option<Role>) -> AccessDecision {
        use AccessDecision::{Allow, Redirect};

        match (class, role) {
            (RouteClass::Public, _) => Allow,
            (_, None) => Redirect(RedirectTarget::Login),
            (RouteClass::Authenticated, Some(_)) => Allow,
            (RouteClass::Admin, Some(Role::Admin)) => Allow,
            (RouteClass::Owner, Some(Role::Owner)) => Allow,
            (RouteClass::Admin, Some(_)) | (RouteClass::Owner, Some(_)) => {
                Redirect(RedirectTarget::Properties)
            }
        }
    }
}
