pub mod routes;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{get, get_service, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::database::activities_repo::ActivityDirectory;
use routes::activities;

pub const LANDING_PAGE: &str = "/static/index.html";

pub fn router(directory: ActivityDirectory, static_dir: impl AsRef<Path>) -> Router {
    let app: Router<ActivityDirectory> = Router::new()
        .route("/", get(|| async { Redirect::temporary(LANDING_PAGE) }))
        .route("/activities", get(activities::activities_handler))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_handler),
        )
        .nest_service("/static", get_service(ServeDir::new(static_dir.as_ref())));
    with_layers(app).with_state(directory)
}

/// Panic catching sits inside the header layer so 500s get `no-store` too.
pub fn with_layers<S>(app: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    app.layer(CatchPanicLayer::new())
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
}
