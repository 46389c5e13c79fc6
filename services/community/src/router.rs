use std::path::Path;

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;

use campusmap_core::health::healthz;
use campusmap_core::middleware::{
    cors_layer, propagate_request_id_layer, request_id_layer, trace_layer,
};

use crate::handlers::{
    comment::{create_comment, delete_comment, list_comments},
    department::{get_department, register_department, register_departments},
    directory::{
        directory_departments, directory_detail, directory_meals, directory_schedules,
        search_directory,
    },
    health::readyz,
    keyword::{list_keywords, list_user_keywords, register_keyword, set_user_keywords},
    map::{create_map, get_map, list_maps},
    school::{list_school_departments, list_school_users, lookup_schools, register_school},
    user::{check_idname, get_user, login, register_user, update_user},
};
use crate::state::AppState;

/// API routes plus a static-file fallback rooted at `static_dir`.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // School directory (NEIS)
        .route("/api/schools/search", get(search_directory))
        .route("/api/schools/detail", get(directory_detail))
        .route("/api/schools/departments", get(directory_departments))
        .route("/api/schools/meals", get(directory_meals))
        .route("/api/schools/schedules", get(directory_schedules))
        // Schools
        .route("/api/schools", get(lookup_schools).post(register_school))
        .route("/api/schools/{id}/users", get(list_school_users))
        .route("/api/schools/{id}/departments", get(list_school_departments))
        // Departments
        .route("/api/departments", post(register_department))
        .route("/api/departments/bulk", post(register_departments))
        .route("/api/departments/{id}", get(get_department))
        // Users
        .route("/api/users/idname/{idname}", get(check_idname))
        .route("/api/users/register", post(register_user))
        .route("/api/users/login", post(login))
        .route("/api/users/{id}", get(get_user).put(update_user))
        .route(
            "/api/users/{id}/keywords",
            get(list_user_keywords).post(set_user_keywords),
        )
        // Keywords
        .route("/api/keywords", get(list_keywords).post(register_keyword))
        // Maps and comments
        .route("/api/maps", get(list_maps).post(create_map))
        .route("/api/maps/{id}", get(get_map))
        .route(
            "/api/maps/{id}/comments",
            get(list_comments).post(create_comment),
        )
        .route("/api/comments/{id}", delete(delete_comment))
        .fallback_service(ServeDir::new(static_dir))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(trace_layer())
                .layer(propagate_request_id_layer())
                .layer(cors_layer()),
        )
        .with_state(state)
}
