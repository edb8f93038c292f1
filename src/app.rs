use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use serde_json::json;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::auth::PasswordHasher;
use crate::database::Store;
use crate::handlers::{autores, etiquetas, noticias, secciones};

/// Shared state cloned into every handler. Built once in main; nothing in it
/// mutates after startup.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub hasher: PasswordHasher,
}

/// Builds the full router: per-resource route groups, then CORS and request
/// tracing over everything.
pub fn app(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(seccion_routes())
        .merge(etiqueta_routes())
        .merge(noticia_routes())
        .merge(autor_routes())
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn seccion_routes() -> Router<AppState> {
    Router::new()
        .route("/secciones", get(secciones::list).post(secciones::create))
        .route(
            "/secciones/:id",
            get(secciones::get)
                .put(secciones::update)
                .delete(secciones::delete),
        )
        // The router needs one parameter name per position, so the slug
        // route reuses :id; the handler reads it as the slug it is.
        .route("/secciones/:id/noticias", get(secciones::noticias))
}

fn etiqueta_routes() -> Router<AppState> {
    Router::new()
        .route("/etiquetas", get(etiquetas::list).post(etiquetas::create))
        .route(
            "/etiquetas/:id",
            get(etiquetas::get)
                .put(etiquetas::update)
                .delete(etiquetas::delete),
        )
        .route("/etiquetas/:id/noticias", get(etiquetas::noticias))
}

fn noticia_routes() -> Router<AppState> {
    use axum::routing::{delete, post};

    Router::new()
        .route("/noticias", get(noticias::list).post(noticias::create))
        .route(
            "/noticias/:id",
            get(noticias::get)
                .put(noticias::update)
                .delete(noticias::delete),
        )
        .route(
            "/noticias/:id/etiquetas/:id_etiqueta",
            post(noticias::asociar_etiqueta).delete(noticias::desasociar_etiqueta),
        )
        .route(
            "/noticias/:id/imagenes",
            get(noticias::listar_imagenes).post(noticias::agregar_imagen),
        )
        .route(
            "/noticias/:id/imagenes/:url",
            delete(noticias::quitar_imagen),
        )
}

fn autor_routes() -> Router<AppState> {
    use axum::routing::post;

    Router::new()
        .route("/login", post(autores::login))
        .route("/autores", get(autores::list).post(autores::register))
        .route(
            "/autores/:id",
            get(autores::get)
                .put(autores::update)
                .delete(autores::delete),
        )
}

/// An empty allow-list means permissive CORS; otherwise only the listed
/// origins, with credentials and the explicit method/header set tower-http
/// requires alongside credentials.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(parsed))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

async fn root() -> &'static str {
    "¡Hola desde el backend de prensa!"
}

async fn health(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(_) => (
            axum::http::StatusCode::OK,
            axum::response::Json(json!({
                "status": "ok",
                "timestamp": now,
                "database": "ok"
            })),
        ),
        Err(e) => (
            axum::http::StatusCode::SERVICE_UNAVAILABLE,
            axum::response::Json(json!({
                "status": "degraded",
                "timestamp": now,
                "database_error": e.to_string()
            })),
        ),
    }
}
