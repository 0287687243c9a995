use axum::{
    http::{header, HeaderValue, Method},
    middleware::{from_fn_with_state, map_response},
    routing::{delete, get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::TokenService;
use crate::config::{AppConfig, CatalogConfig, SecurityConfig};
use crate::database::Database;
use crate::handlers;
use crate::middleware::{jwt_auth_middleware, json_error_bodies};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub tokens: TokenService,
    pub catalog: CatalogConfig,
}

impl AppState {
    pub fn new(db: Database, config: &AppConfig) -> Self {
        Self {
            db,
            tokens: TokenService::new(&config.security.jwt_secret, config.security.jwt_expiry_hours),
            catalog: config.catalog.clone(),
        }
    }
}

pub fn app(state: AppState, security: &SecurityConfig) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .layer(map_response(json_error_bodies))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(security)),
        )
        .with_state(state)
}

fn public_routes() -> Router<AppState> {
    use handlers::public::{auth, products};

    Router::new()
        .route("/login", post(auth::login_post))
        .route("/register", post(auth::register_post))
        .route("/products", get(products::products_get))
        .route("/products/:id", get(products::product_get))
}

fn protected_routes(state: AppState) -> Router<AppState> {
    use handlers::protected::favorites;

    Router::new()
        .route(
            "/favorites",
            get(favorites::favorites_get).post(favorites::favorites_post),
        )
        .route("/favorites/:product_id", delete(favorites::favorite_delete))
        .route_layer(from_fn_with_state(state, jwt_auth_middleware))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT]);

    if security.cors_origins.is_empty() || security.cors_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
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
    cors.allow_origin(AllowOrigin::list(origins))
}
