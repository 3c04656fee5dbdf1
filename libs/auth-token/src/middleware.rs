use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    Error, HttpMessage, HttpRequest,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::rc::Rc;
use uuid::Uuid;

use crate::jwt;

/// User ID extracted from a validated JWT, stored in request extensions
#[derive(Debug, Clone, Copy)]
pub struct UserId(pub Uuid);

fn user_id_from_bearer(req: &HttpRequest) -> Result<UserId, Error> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ErrorUnauthorized("Missing Authorization header"))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ErrorUnauthorized("Invalid Authorization scheme"))?;

    let token_data = jwt::validate_token(token).map_err(|e| {
        tracing::warn!("JWT validation failed: {}", e);
        ErrorUnauthorized("Invalid or expired token")
    })?;

    let user_id = Uuid::parse_str(&token_data.claims.sub)
        .map_err(|_| ErrorUnauthorized("Invalid user ID"))?;

    Ok(UserId(user_id))
}

/// Actix middleware that validates a Bearer token on every request
///
/// Wrap write scopes with this; unauthenticated requests never reach a
/// handler, so no mutation can occur without a session user.
pub struct JwtAuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for JwtAuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

pub struct JwtAuthMiddlewareService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let user_id = user_id_from_bearer(req.request())?;
            req.extensions_mut().insert(user_id);

            service.call(req).await
        })
    }
}

/// Extractor usable on resources that mix public and protected methods:
/// prefers the identity the middleware already established, otherwise
/// validates the Bearer token itself.
impl actix_web::FromRequest for UserId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(
        req: &actix_web::HttpRequest,
        _payload: &mut actix_web::dev::Payload,
    ) -> Self::Future {
        if let Some(user_id) = req.extensions().get::<UserId>() {
            return ready(Ok(*user_id));
        }
        ready(user_id_from_bearer(req))
    }
}
