/**
 * Router Configuration
 *
 * Assembles the API routes under the configured prefix and wraps them in
 * the middleware stack.
 *
 * # Layer Order (outermost first)
 *
 * 1. CORS
 * 2. Request tracing
 * 3. Authentication gate
 *
 * Unknown paths fall through to a 404 rendered in the failure envelope.
 */

use axum::http::{HeaderValue, Uri};
use axum::middleware::from_fn_with_state;
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::backend::error::ApiError;
use crate::backend::middleware::auth::auth_gate;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::Settings;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let api = configure_api_routes(Router::new());

    let prefix = app_state.settings.api_prefix.trim_end_matches('/');
    let router = if prefix.is_empty() {
        Router::new().merge(api)
    } else {
        Router::new().nest(prefix, api)
    };

    router
        .fallback(fallback)
        .layer(from_fn_with_state(app_state.clone(), auth_gate))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&app_state.settings))
        .with_state(app_state)
}

async fn fallback(uri: Uri) -> ApiError {
    tracing::warn!("No route for {}", uri.path());
    ApiError::not_found("Not Found")
}

/// Any origin without credentials when no hosts are configured, otherwise
/// the listed origins with credentials
fn cors_layer(settings: &Settings) -> CorsLayer {
    if settings.allowed_hosts.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .allowed_hosts
        .iter()
        .filter_map(|host| match host.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", host);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
