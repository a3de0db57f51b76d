pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::registry::handlers as registry;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Company / skill registration
        .route("/register_company", post(registry::handle_register_company))
        .route("/add_skills", post(registry::handle_add_skills))
        .route("/companies", get(registry::handle_list_companies))
        .route("/skills_map", get(registry::handle_skills_map))
        // Resume processing
        .route("/process_resume", post(matching::handle_process_resume))
        .with_state(state)
}
