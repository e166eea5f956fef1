//! HTTP front for the roster: JSON routes, static files, root redirect.

pub mod error;
pub mod routes;

use std::path::Path;
use axum::{
    response::Redirect,
    routing::{delete, get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use crate::clients::RosterClient;

pub const INDEX_PATH: &str = "/static/index.html";

pub fn router(roster: RosterClient, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary(INDEX_PATH) }))
        .route("/activities", get(routes::list_activities_handler))
        .route("/activities/:activity_name/signup", post(routes::signup_handler))
        .route("/activities/:activity_name/unregister", delete(routes::unregister_handler))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::new())
        .with_state(roster)
}
