// src/routes.rs

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{admin, answer, candidate, question},
    state::AppState,
    utils::gate::admin_gate,
};

/// Assembles the main application router.
///
/// * `/api/*` quiz endpoints.
/// * `/api/admin/*` reporting endpoints behind the shared-password gate.
/// * Everything else falls through to the static front end.
pub fn create_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/candidates", get(admin::list_candidates))
        .route("/csv", get(admin::export_csv))
        .layer(middleware::from_fn_with_state(state.clone(), admin_gate));

    let quiz_routes = Router::new()
        .route("/start", post(candidate::start))
        .route("/questions/{index}", get(question::get_question))
        .route("/answer", post(answer::submit_answer))
        .route("/result/{candidate_id}", get(candidate::get_result))
        .nest("/admin", admin_routes);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .nest("/api", quiz_routes)
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
