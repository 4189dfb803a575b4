use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use hostel_core::health::health;
use hostel_core::middleware::{cors_layer, request_id_layer};

use crate::handlers::{
    auth::{login, logout, me, signup},
    health::{not_found, readyz},
    registration::pay_and_book,
    student::{get_me, get_student, list_students},
};
use crate::middleware::resolve_session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Routes that need no session never touch the session store.
    let public = Router::new()
        // Health
        .route("/health", get(health))
        .route("/readyz", get(readyz))
        .route("/student/ping", get(health))
        .route("/registration/ping", get(health))
        // Auth
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout));

    let authenticated = Router::new()
        .route("/auth/me", get(me))
        // Student
        .route("/student/me", get(get_me))
        .route("/student/list", get(list_students))
        .route("/student/{id}", get(get_student))
        // Registration
        .route("/registration/pay-and-book", post(pay_and_book))
        .route_layer(from_fn_with_state(state.clone(), resolve_session));

    Router::new()
        .nest("/api", public.merge(authenticated))
        .fallback(not_found)
        .layer(cors_layer(&state.config.frontend_url))
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .with_state(state)
}
