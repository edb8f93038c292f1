use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{Noticia, Seccion, SeccionPayload};

/// GET /secciones - list all sections
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Seccion>>, ApiError> {
    let secciones = sqlx::query_as::<_, Seccion>("SELECT * FROM secciones ORDER BY id_seccion")
        .fetch_all(state.store.pool())
        .await?;
    Ok(Json(secciones))
}

/// POST /secciones - create a section
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SeccionPayload>,
) -> Result<(StatusCode, Json<Seccion>), ApiError> {
    let (nombre, slug) = match (payload.nombre_seccion, payload.slug_seccion) {
        (Some(n), Some(s)) => (n, s),
        _ => {
            return Err(ApiError::validation(
                "El nombre y el slug de la sección son requeridos",
            ))
        }
    };

    let seccion = sqlx::query_as::<_, Seccion>(
        "INSERT INTO secciones (nombre_seccion, slug_seccion) VALUES ($1, $2) RETURNING *",
    )
    .bind(&nombre)
    .bind(&slug)
    .fetch_one(state.store.pool())
    .await?;

    Ok((StatusCode::CREATED, Json(seccion)))
}

/// GET /secciones/:id - get one section by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Seccion>, ApiError> {
    let seccion = sqlx::query_as::<_, Seccion>("SELECT * FROM secciones WHERE id_seccion = $1")
        .bind(id)
        .fetch_optional(state.store.pool())
        .await?
        .ok_or_else(|| ApiError::not_found("Sección no encontrada"))?;
    Ok(Json(seccion))
}

/// PUT /secciones/:id - full replace of name and slug
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SeccionPayload>,
) -> Result<Json<Seccion>, ApiError> {
    let (nombre, slug) = match (payload.nombre_seccion, payload.slug_seccion) {
        (Some(n), Some(s)) => (n, s),
        _ => {
            return Err(ApiError::validation(
                "El nombre y el slug de la sección son requeridos",
            ))
        }
    };

    let seccion = sqlx::query_as::<_, Seccion>(
        "UPDATE secciones SET nombre_seccion = $1, slug_seccion = $2 WHERE id_seccion = $3 RETURNING *",
    )
    .bind(&nombre)
    .bind(&slug)
    .bind(id)
    .fetch_optional(state.store.pool())
    .await?
    .ok_or_else(|| ApiError::not_found("Sección no encontrada"))?;

    Ok(Json(seccion))
}

/// DELETE /secciones/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let deleted = sqlx::query_scalar::<_, i32>(
        "DELETE FROM secciones WHERE id_seccion = $1 RETURNING id_seccion",
    )
    .bind(id)
    .fetch_optional(state.store.pool())
    .await?;

    match deleted {
        Some(_) => Ok(Json(json!({
            "message": format!("Sección con ID {} eliminada exitosamente", id)
        }))),
        None => Err(ApiError::not_found("Sección no encontrada")),
    }
}

/// GET /secciones/:slug/noticias - all articles in the section named by slug
pub async fn noticias(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Noticia>>, ApiError> {
    let id_seccion = sqlx::query_scalar::<_, i32>(
        "SELECT id_seccion FROM secciones WHERE slug_seccion = $1",
    )
    .bind(&slug)
    .fetch_optional(state.store.pool())
    .await?
    .ok_or_else(|| ApiError::not_found("Sección no encontrada"))?;

    let noticias = sqlx::query_as::<_, Noticia>(
        "SELECT * FROM noticias WHERE id_seccion = $1 ORDER BY id_noticia",
    )
    .bind(id_seccion)
    .fetch_all(state.store.pool())
    .await?;

    Ok(Json(noticias))
}
