use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{ImagenResumen, Noticia, NoticiaImagen, NoticiaPayload, NuevaImagen};

/// GET /noticias - list all articles
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Noticia>>, ApiError> {
    let noticias = sqlx::query_as::<_, Noticia>("SELECT * FROM noticias ORDER BY id_noticia")
        .fetch_all(state.store.pool())
        .await?;
    Ok(Json(noticias))
}

/// POST /noticias - create an article
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NoticiaPayload>,
) -> Result<(StatusCode, Json<Noticia>), ApiError> {
    let noticia = sqlx::query_as::<_, Noticia>(
        "INSERT INTO noticias \
           (titulo, subtitulo, contenido, id_seccion, id_autor, fuente_original, \
            url_fuente, palabras_clave, es_destacada, estado) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
    )
    .bind(&payload.titulo)
    .bind(&payload.subtitulo)
    .bind(&payload.contenido)
    .bind(payload.id_seccion)
    .bind(payload.id_autor)
    .bind(&payload.fuente_original)
    .bind(&payload.url_fuente)
    .bind(&payload.palabras_clave)
    .bind(payload.es_destacada)
    .bind(&payload.estado)
    .fetch_one(state.store.pool())
    .await?;

    Ok((StatusCode::CREATED, Json(noticia)))
}

/// GET /noticias/:id - get one article by id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Noticia>, ApiError> {
    let noticia = sqlx::query_as::<_, Noticia>("SELECT * FROM noticias WHERE id_noticia = $1")
        .bind(id)
        .fetch_optional(state.store.pool())
        .await?
        .ok_or_else(|| ApiError::not_found("Noticia no encontrada"))?;
    Ok(Json(noticia))
}

/// PUT /noticias/:id - full replace; the store sets fecha_actualizacion
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<NoticiaPayload>,
) -> Result<Json<Noticia>, ApiError> {
    let noticia = sqlx::query_as::<_, Noticia>(
        "UPDATE noticias SET \
           titulo = $1, subtitulo = $2, contenido = $3, id_seccion = $4, id_autor = $5, \
           fuente_original = $6, url_fuente = $7, palabras_clave = $8, es_destacada = $9, \
           estado = $10, fecha_actualizacion = NOW() \
         WHERE id_noticia = $11 RETURNING *",
    )
    .bind(&payload.titulo)
    .bind(&payload.subtitulo)
    .bind(&payload.contenido)
    .bind(payload.id_seccion)
    .bind(payload.id_autor)
    .bind(&payload.fuente_original)
    .bind(&payload.url_fuente)
    .bind(&payload.palabras_clave)
    .bind(payload.es_destacada)
    .bind(&payload.estado)
    .bind(id)
    .fetch_optional(state.store.pool())
    .await?
    .ok_or_else(|| ApiError::not_found("Noticia no encontrada"))?;

    Ok(Json(noticia))
}

/// DELETE /noticias/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let deleted = sqlx::query_scalar::<_, i32>(
        "DELETE FROM noticias WHERE id_noticia = $1 RETURNING id_noticia",
    )
    .bind(id)
    .fetch_optional(state.store.pool())
    .await?;

    match deleted {
        Some(_) => Ok(Json(json!({
            "message": format!("Noticia con ID {} eliminada exitosamente", id)
        }))),
        None => Err(ApiError::not_found("Noticia no encontrada")),
    }
}

/// POST /noticias/:id/etiquetas/:id_etiqueta - associate a tag with an
/// article. Existence checks and the join insert share one transaction so a
/// concurrent delete cannot slip between them.
pub async fn asociar_etiqueta(
    State(state): State<AppState>,
    Path((id_noticia, id_etiqueta)): Path<(i32, i32)>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let mut tx = state.store.pool().begin().await?;

    let noticia = sqlx::query_scalar::<_, i32>("SELECT id_noticia FROM noticias WHERE id_noticia = $1")
        .bind(id_noticia)
        .fetch_optional(&mut *tx)
        .await?;
    let etiqueta =
        sqlx::query_scalar::<_, i32>("SELECT id_etiqueta FROM etiquetas WHERE id_etiqueta = $1")
            .bind(id_etiqueta)
            .fetch_optional(&mut *tx)
            .await?;

    if noticia.is_none() || etiqueta.is_none() {
        return Err(ApiError::not_found("Noticia o etiqueta no encontrada"));
    }

    sqlx::query("INSERT INTO noticias_etiquetas (id_noticia, id_etiqueta) VALUES ($1, $2)")
        .bind(id_noticia)
        .bind(id_etiqueta)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!(
                "Etiqueta {} asociada a la noticia {} exitosamente",
                id_etiqueta, id_noticia
            )
        })),
    ))
}

/// DELETE /noticias/:id/etiquetas/:id_etiqueta - remove the join row
pub async fn desasociar_etiqueta(
    State(state): State<AppState>,
    Path((id_noticia, id_etiqueta)): Path<(i32, i32)>,
) -> Result<Json<Value>, ApiError> {
    let deleted = sqlx::query(
        "DELETE FROM noticias_etiquetas WHERE id_noticia = $1 AND id_etiqueta = $2",
    )
    .bind(id_noticia)
    .bind(id_etiqueta)
    .execute(state.store.pool())
    .await?;

    if deleted.rows_affected() == 0 {
        return Err(ApiError::not_found("Asociación no encontrada"));
    }

    Ok(Json(json!({
        "message": format!(
            "Etiqueta {} desasociada de la noticia {} exitosamente",
            id_etiqueta, id_noticia
        )
    })))
}

/// POST /noticias/:id/imagenes - attach an image URL to an article. The
/// article existence check runs in the same transaction as the insert.
pub async fn agregar_imagen(
    State(state): State<AppState>,
    Path(id_noticia): Path<i32>,
    Json(payload): Json<NuevaImagen>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let url_imagen = payload
        .url_imagen
        .ok_or_else(|| ApiError::validation("La URL de la imagen es requerida"))?;
    let es_principal = payload.es_principal.unwrap_or(false);

    let mut tx = state.store.pool().begin().await?;

    let noticia = sqlx::query_scalar::<_, i32>("SELECT id_noticia FROM noticias WHERE id_noticia = $1")
        .bind(id_noticia)
        .fetch_optional(&mut *tx)
        .await?;
    if noticia.is_none() {
        return Err(ApiError::not_found("Noticia no encontrada"));
    }

    let imagen = sqlx::query_as::<_, NoticiaImagen>(
        "INSERT INTO noticias_imagenes (id_noticia, url_imagen, es_principal) \
         VALUES ($1, $2, $3) RETURNING *",
    )
    .bind(id_noticia)
    .bind(&url_imagen)
    .bind(es_principal)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": format!("Imagen asociada a la noticia {} exitosamente", id_noticia),
            "imagen": imagen
        })),
    ))
}

/// GET /noticias/:id/imagenes - list image associations for an article. No
/// article existence check; an unknown id yields an empty array.
pub async fn listar_imagenes(
    State(state): State<AppState>,
    Path(id_noticia): Path<i32>,
) -> Result<Json<Vec<ImagenResumen>>, ApiError> {
    let imagenes = sqlx::query_as::<_, ImagenResumen>(
        "SELECT url_imagen, es_principal FROM noticias_imagenes \
         WHERE id_noticia = $1 ORDER BY id_imagen",
    )
    .bind(id_noticia)
    .fetch_all(state.store.pool())
    .await?;
    Ok(Json(imagenes))
}

/// DELETE /noticias/:id/imagenes/:url - remove an image association by its
/// (article, url) pair. The url path segment arrives percent-decoded.
pub async fn quitar_imagen(
    State(state): State<AppState>,
    Path((id_noticia, url_imagen)): Path<(i32, String)>,
) -> Result<Json<Value>, ApiError> {
    let deleted = sqlx::query(
        "DELETE FROM noticias_imagenes WHERE id_noticia = $1 AND url_imagen = $2",
    )
    .bind(id_noticia)
    .bind(&url_imagen)
    .execute(state.store.pool())
    .await?;

    if deleted.rows_affected() == 0 {
        return Err(ApiError::not_found("Asociación de imagen no encontrada"));
    }

    Ok(Json(json!({
        "message": format!(
            "Imagen con URL {} desasociada de la noticia {} exitosamente",
            url_imagen, id_noticia
        )
    })))
}
