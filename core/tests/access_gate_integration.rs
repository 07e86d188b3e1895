//! Integration tests for the session store feeding the access policy

use rf_core::{AccessDecision, AccessPolicy, RedirectTarget, Role, SessionStore, User};
use rf_shared::SessionConfig;

fn identity(role: Role) -> User {
    User {
        id: match role {
            Role::Admin => 1,
            Role::Owner => 4,
            Role::Tenant => 8,
        },
        role,
        name: format!("{} user", role),
        email: format!("{}@rentify.com", role),
        phone: String::new(),
        verified: true,
    }
}

/// Cookie value a browser would send back after logging in as `role`
fn cookie_for(template: &SessionStore, role: Role) -> String {
    let mut store = template.restore(None);
    store.login(identity(role)).unwrap().value
}

fn decide(template: &SessionStore, path: &str, cookie: Option<&str>) -> AccessDecision {
    let store = template.restore(cookie);
    AccessPolicy::default().evaluate(path, store.current())
}

#[test]
fn test_navigation_scenarios() {
    let template = SessionStore::new(&SessionConfig::default());
    let owner = cookie_for(&template, Role::Owner);

    assert_eq!(
        decide(&template, "/admin/users", None),
        AccessDecision::Redirect(RedirectTarget::Login)
    );
    assert_eq!(
        decide(&template, "/admin", Some(&owner)),
        AccessDecision::Redirect(RedirectTarget::Properties)
    );
    assert_eq!(decide(&template, "/owners", Some(&owner)), AccessDecision::Allow);
    assert_eq!(decide(&template, "/properties", None), AccessDecision::Allow);
}

#[test]
fn test_role_only_cookie_is_a_session() {
    let template = SessionStore::new(&SessionConfig::default());
    assert_eq!(
        decide(&template, "/admin", Some(r#"{"role":"owner"}"#)),
        AccessDecision::Redirect(RedirectTarget::Properties)
    );
}

#[test]
fn test_invalid_cookie_behaves_like_no_cookie() {
    let template = SessionStore::new(&SessionConfig::default());
    let paths = ["/", "/login", "/properties/3", "/appointments", "/admin", "/owners/1"];
    let garbage = ["{", "null", "%7B%22role%22", r#"{"role":"superuser"}"#, ""];

    for path in paths {
        let expected = decide(&template, path, None);
        for cookie in garbage {
            assert_eq!(decide(&template, path, Some(cookie)), expected, "{} with {:?}", path, cookie);
        }
    }
}

#[test]
fn test_signed_sessions_resist_forgery() {
    let template = SessionStore::new(&SessionConfig::signed("integration-secret"));
    let forged = serde_json::to_string(&identity(Role::Admin)).unwrap();

    assert_eq!(
        decide(&template, "/admin", Some(&forged)),
        AccessDecision::Redirect(RedirectTarget::Login)
    );

    let genuine = cookie_for(&template, Role::Admin);
    assert_eq!(decide(&template, "/admin", Some(&genuine)), AccessDecision::Allow);

    let other_key = SessionStore::new(&SessionConfig::signed("another-secret"));
    assert_eq!(
        decide(&other_key, "/admin", Some(&genuine)),
        AccessDecision::Redirect(RedirectTarget::Login)
    );
}

#[test]
fn test_logout_ends_access() {
    let template = SessionStore::new(&SessionConfig::default());
    let mut store = template.restore(None);
    store.login(identity(Role::Tenant)).unwrap();
    assert!(AccessPolicy::default()
        .evaluate("/appointments", store.current())
        .is_allowed());

    let removal = store.logout();
    assert!(store.current().is_none());
    assert_eq!(
        decide(&template, "/appointments", Some(&removal.value)),
        AccessDecision::Redirect(RedirectTarget::Login)
    );
}
