use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::{AppConfig, SecurityConfig};
use crate::database::Repository;
use crate::handlers;

/// Shared handler state. The repository is created at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn Repository>,
}

impl AppState {
    pub fn new(repository: impl Repository + 'static) -> Self {
        Self::from_arc(Arc::new(repository))
    }

    pub fn from_arc(repository: Arc<dyn Repository>) -> Self {
        Self { repository }
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health))
        // Admin
        .merge(country_routes())
        .fallback(handlers::system::not_found)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    let router = match cors_layer(&config.security) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn country_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new()
        .route("/api/countries/delete", post(admin::country_delete))
        // Path used by clients of the legacy PHP backend
        .route("/delete_country.php", post(admin::country_delete))
}

fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }
    if security.cors_origins.iter().any(|origin| origin == "*") {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
