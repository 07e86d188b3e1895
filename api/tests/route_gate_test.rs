//! Integration tests for the route gate in front of the page routes

mod common;

use actix_web::{cookie::Cookie, http::header::LOCATION, http::StatusCode, test};
use rf_api::create_app;
use rf_shared::SessionConfig;

use common::{admin_cookie, demo_state, owner_cookie, session_cookie, tenant_cookie, test_config};

fn location(resp: &actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>) -> String {
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[actix_web::test]
async fn test_admin_users_without_cookie_redirects_to_login() {
    let (state, _) = demo_state(&SessionConfig::default());
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::get().uri("/admin/users").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/login");
}

#[actix_web::test]
async fn test_admin_with_owner_cookie_redirects_to_properties() {
    let (state, _) = demo_state(&SessionConfig::default());
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::get()
        .uri("/admin")
        .cookie(session_cookie(serde_json::json!({ "role": "owner" })))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/properties");
}

#[actix_web::test]
async fn test_owners_with_owner_cookie_is_allowed() {
    let (state, _) = demo_state(&SessionConfig::default());
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::get()
        .uri("/owners")
        .cookie(owner_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let properties = body["data"]["properties"].as_array().unwrap();
    assert!(!properties.is_empty());
    assert!(properties.iter().all(|p| p["ownerId"] == 4));
    assert_eq!(
        body["data"]["stats"]["totalProperties"].as_u64().unwrap() as usize,
        properties.len()
    );
}

#[actix_web::test]
async fn test_properties_without_cookie_is_allowed() {
    let (state, _) = demo_state(&SessionConfig::default());
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::get().uri("/properties").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
}

#[actix_web::test]
async fn test_wrong_roles_are_sent_to_properties() {
    let (state, _) = demo_state(&SessionConfig::default());
    let app = test::init_service(create_app(state, &test_config())).await;

    let cases = [
        ("/admin", tenant_cookie()),
        ("/owners", tenant_cookie()),
        ("/owners", admin_cookie()),
    ];
    for (path, cookie) in cases {
        let req = test::TestRequest::get().uri(path).cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT, "{}", path);
        assert_eq!(location(&resp), "/properties", "{}", path);
    }
}

#[actix_web::test]
async fn test_unusable_cookie_counts_as_no_session() {
    let (state, _) = demo_state(&SessionConfig::default());
    let app = test::init_service(create_app(state, &test_config())).await;

    let garbage = [
        Cookie::new("auth-user", "not-json"),
        Cookie::new("auth-user", ""),
        session_cookie(serde_json::json!({ "role": "landlord" })),
        session_cookie(serde_json::json!([1, 2, 3])),
    ];
    for cookie in garbage {
        let req = test::TestRequest::get()
            .uri("/appointments")
            .cookie(cookie.clone())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(location(&resp), "/login", "cookie {}", cookie.value());

        let req = test::TestRequest::get().uri("/").cookie(cookie).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[actix_web::test]
async fn test_any_session_opens_appointments() {
    let (state, _) = demo_state(&SessionConfig::default());
    let app = test::init_service(create_app(state, &test_config())).await;

    for cookie in [admin_cookie(), owner_cookie(), tenant_cookie()] {
        let req = test::TestRequest::get()
            .uri("/appointments")
            .cookie(cookie)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}

#[actix_web::test]
async fn test_api_routes_are_not_gated() {
    let (state, _) = demo_state(&SessionConfig::default());
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::get().uri("/api/auth/session").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/api/properties")
        .set_json(serde_json::json!({
            "title": "Garden Flat",
            "city": "Chicago",
            "type": "Apartment",
            "price": 1800
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_unlisted_paths_are_public() {
    let (state, _) = demo_state(&SessionConfig::default());
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get().uri("/profile").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].is_null());
}

#[actix_web::test]
async fn test_signed_sessions_reject_forged_cookies() {
    let (state, _) = demo_state(&SessionConfig::signed("integration-secret"));
    let app = test::init_service(create_app(state, &test_config())).await;

    let req = test::TestRequest::get()
        .uri("/owners")
        .cookie(owner_cookie())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp), "/login");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(serde_json::json!({ "email": "owner4@rentify.com", "password": "owner123" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let issued = resp
        .response()
        .cookies()
        .find(|c| c.name() == "auth-user")
        .map(|c| c.into_owned())
        .unwrap();

    let req = test::TestRequest::get()
        .uri("/owners")
        .cookie(Cookie::new("auth-user", issued.value().to_string()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_percent_encoded_paths_are_gated_like_plain_ones() {
    let (state, _) = demo_state(&SessionConfig::default());
    let app = test::init_service(create_app(state, &test_config())).await;

    let sessions = [
        ("none", None),
        ("admin", Some(admin_cookie())),
        ("owner", Some(owner_cookie())),
        ("tenant", Some(tenant_cookie())),
    ];
    // Expected redirect per session, in the order above; None means allowed
    let cases: [(&str, [Option<&str>; 4]); 4] = [
        ("/%61dmin", [Some("/login"), None, Some("/properties"), Some("/properties")]),
        ("/%61dmin/users", [Some("/login"), None, Some("/properties"), Some("/properties")]),
        ("/%6Fwners", [Some("/login"), Some("/properties"), None, Some("/properties")]),
        ("/%61ppointments", [Some("/login"), None, None, None]),
    ];

    for (path, expected) in cases {
        for ((label, cookie), redirect) in sessions.iter().zip(expected) {
            let mut req = test::TestRequest::get().uri(path);
            if let Some(cookie) = cookie {
                req = req.cookie(cookie.clone());
            }
            let resp = test::call_service(&app, req.to_request()).await;

            match redirect {
                Some(target) => {
                    assert_eq!(
                        resp.status(),
                        StatusCode::TEMPORARY_REDIRECT,
                        "{} with {} session",
                        path,
                        label
                    );
                    assert_eq!(location(&resp), target, "{} with {} session", path, label);
                }
                None => assert_eq!(resp.status(), StatusCode::OK, "{} with {} session", path, label),
            }
        }
    }
}
