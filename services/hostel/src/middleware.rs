use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use hostel_session::cookie::session_id;

use crate::domain::repository::SessionStore;
use crate::error::HostelError;
use crate::state::AppState;

/// Resolve the session cookie into a `SessionData` request extension.
///
/// Requests without a cookie, or with an expired one, pass through without a
/// session; handlers that need one reject them via `CurrentSession`.
pub async fn resolve_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, HostelError> {
    if let Some(id) = session_id(&jar) {
        if let Some(session) = state.session_store().load(&id).await? {
            request.extensions_mut().insert(session);
        }
    }
    Ok(next.run(request).await)
}
