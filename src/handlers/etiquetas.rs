use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{Etiqueta, EtiquetaPayload, Noticia};

/// GET /etiquetas - list all tags
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Etiqueta>>, ApiError> {
    let etiquetas = sqlx::query_as::<_, Etiqueta>("SELECT * FROM etiquetas ORDER BY id_etiqueta")
        .fetch_all(state.store.pool())
        .await?;
    Ok(Json(etiquetas))
}

/// POST /etiquetas - create a tag
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<EtiquetaPayload>,
) -> Result<(StatusCode, Json<Etiqueta>), ApiError> {
    let (nombre, slug) = match (payload.nombre_etiqueta, payload.slug_etiqueta) {
        (Some(n), Some(s)) => (n, s),
        _ => {
            return Err(ApiError::validation(
                "El nombre y el slug de la etiqueta son requeridos",
            ))
        }
    };

    let etiqueta = sqlx::query_as::<_, Etiqueta>(
        "INSERT INTO etiquetas (nombre_etiqueta, slug_etiqueta) VALUES ($1, $2) RETURNING *",
    )
    .bind(&nombre)
    .bind(&slug)
    .fetch_one(state.store.pool())
    .await?;

    Ok((StatusCode::CREATED, Json(etiqueta)))
}

/// GET /etiquetas/:id - get one tag by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Etiqueta>, ApiError> {
    let etiqueta = sqlx::query_as::<_, Etiqueta>("SELECT * FROM etiquetas WHERE id_etiqueta = $1")
        .bind(id)
        .fetch_optional(state.store.pool())
        .await?
        .ok_or_else(|| ApiError::not_found("Etiqueta no encontrada"))?;
    Ok(Json(etiqueta))
}

/// PUT /etiquetas/:id - full replace of name and slug
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<EtiquetaPayload>,
) -> Result<Json<Etiqueta>, ApiError> {
    let (nombre, slug) = match (payload.nombre_etiqueta, payload.slug_etiqueta) {
        (Some(n), Some(s)) => (n, s),
        _ => {
            return Err(ApiError::validation(
                "El nombre y el slug de la etiqueta son requeridos",
            ))
        }
    };

    let etiqueta = sqlx::query_as::<_, Etiqueta>(
        "UPDATE etiquetas SET nombre_etiqueta = $1, slug_etiqueta = $2 WHERE id_etiqueta = $3 RETURNING *",
    )
    .bind(&nombre)
    .bind(&slug)
    .bind(id)
    .fetch_optional(state.store.pool())
    .await?
    .ok_or_else(|| ApiError::not_found("Etiqueta no encontrada"))?;

    Ok(Json(etiqueta))
}

/// DELETE /etiquetas/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let deleted = sqlx::query_scalar::<_, i32>(
        "DELETE FROM etiquetas WHERE id_etiqueta = $1 RETURNING id_etiqueta",
    )
    .bind(id)
    .fetch_optional(state.store.pool())
    .await?;

    match deleted {
        Some(_) => Ok(Json(json!({
            "message": format!("Etiqueta con ID {} eliminada exitosamente", id)
        }))),
        None => Err(ApiError::not_found("Etiqueta no encontrada")),
    }
}

/// GET /etiquetas/:slug/noticias - all articles carrying the tag named by
/// slug, joined through noticias_etiquetas
pub async fn noticias(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Noticia>>, ApiError> {
    let id_etiqueta = sqlx::query_scalar::<_, i32>(
        "SELECT id_etiqueta FROM etiquetas WHERE slug_etiqueta = $1",
    )
    .bind(&slug)
    .fetch_optional(state.store.pool())
    .await?
    .ok_or_else(|| ApiError::not_found("Etiqueta no encontrada"))?;

    let noticias = sqlx::query_as::<_, Noticia>(
        "SELECT n.* FROM noticias n \
         INNER JOIN noticias_etiquetas ne ON n.id_noticia = ne.id_noticia \
         WHERE ne.id_etiqueta = $1 ORDER BY n.id_noticia",
    )
    .bind(id_etiqueta)
    .fetch_all(state.store.pool())
    .await?;

    Ok(Json(noticias))
}
