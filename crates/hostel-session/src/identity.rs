//! Session extractor.

use axum::extract::FromRequestParts;
use http::request::Parts;

use hostel_core::error::AppError;

use crate::session::SessionData;

/// The session resolved for this request.
///
/// The router's session middleware loads the cookie-referenced session and
/// stores it in request extensions; this extractor only reads it back.
/// Rejects with 401 when the request carries no live session.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub SessionData);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`; read the
    // extension synchronously and hand back a 'static future.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let session = parts.extensions.get::<SessionData>().cloned();
        async move { session.map(Self).ok_or(AppError::Unauthenticated) }
    }
}
