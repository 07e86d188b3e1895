//! Route gate middleware deciding page navigations.
//!
//! Runs once per request before any handler. The session cookie is restored
//! through the [`SessionStore`], the [`AccessPolicy`] is evaluated for the
//! request path, and a denied navigation is answered with
//! `307 Temporary Redirect` without calling the wrapped service.
//!
//! The restored store is inserted into the request extensions on every
//! request, gated or not, so handlers read the same decoded session.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::LOCATION,
    Error, HttpMessage, HttpResponse,
};
use futures_util::future::LocalBoxFuture;
use rf_core::{AccessDecision, AccessPolicy, SessionStore};
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};

/// Route gate middleware factory
pub struct RouteGate {
    sessions: SessionStore,
    policy: AccessPolicy,
}

impl RouteGate {
    /// Creates a gate restoring sessions from `sessions`
    pub fn new(sessions: SessionStore, policy: AccessPolicy) -> Self {
        Self { sessions, policy }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RouteGate
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RouteGateMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGateMiddleware {
            service: Rc::new(service),
            sessions: self.sessions.clone(),
            policy: self.policy,
        }))
    }
}

/// Route gate middleware service
pub struct RouteGateMiddleware<S> {
    service: Rc<S>,
    sessions: SessionStore,
    policy: AccessPolicy,
}

impl<S> RouteGateMiddleware<S> {
    /// Session for this request; an unusable cookie yields an empty session
    fn restore_session(&self, req: &ServiceRequest) -> SessionStore {
        let cookie = req.cookie(self.sessions.cookie_name());
        self.sessions.restore(cookie.as_ref().map(|c| c.value()))
    }

    fn decide(&self, path: &str, session: &SessionStore) -> AccessDecision {
        if self.policy.is_gated(path) {
            self.policy.evaluate(path, session.current())
        } else {
            AccessDecision::Allow
        }
    }
}

impl<S, B> Service<ServiceRequest> for RouteGateMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = self.restore_session(&req);
        let decision = self.decide(req.path(), &session);
        req.extensions_mut().insert(session);

        if let Some(location) = decision.redirect_path() {
            log::debug!("Route gate redirecting {} to {}", req.path(), location);
            let response = HttpResponse::TemporaryRedirect()
                .insert_header((LOCATION, location))
                .finish();
            let response = req.into_response(response).map_into_right_body();
            return Box::pin(async move { Ok(response) });
        }

        let service = Rc::clone(&self.service);
        Box::pin(async move {
            let response = service.call(req).await?;
            Ok(response.map_into_left_body())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{cookie::Cookie, http::StatusCode, test, web, App};
    use rf_shared::SessionConfig;

    fn gate() -> RouteGate {
        RouteGate::new(SessionStore::new(&SessionConfig::default()), AccessPolicy::default())
    }

    #[actix_web::test]
    async fn test_redirect_skips_handler() {
        let app = test::init_service(
            App::new()
                .wrap(gate())
                .route("/admin", web::get().to(|| async { HttpResponse::Ok().body("admin") })),
        )
        .await;

        let req = test::TestRequest::get().uri("/admin").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");
    }

    #[actix_web::test]
    async fn test_session_is_shared_with_handlers() {
        let app = test::init_service(App::new().wrap(gate()).route(
            "/whoami",
            web::get().to(|req: actix_web::HttpRequest| async move {
                let role = req
                    .extensions()
                    .get::<SessionStore>()
                    .and_then(|s| s.current().map(|u| u.role.to_string()))
                    .unwrap_or_default();
                HttpResponse::Ok().body(role)
            }),
        ))
        .await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .cookie(Cookie::new("auth-user", r#"{"role":"tenant"}"#))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "tenant");
    }

    #[actix_web::test]
    async fn test_excluded_paths_pass_through() {
        let app = test::init_service(
            App::new()
                .wrap(gate())
                .route("/favicon.ico", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get().uri("/favicon.ico").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
