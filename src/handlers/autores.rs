use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::database::UpdateBuilder;
use crate::error::ApiError;
use crate::models::{Autor, AutorPublico, LoginAutor, RegisterAutor, UpdateAutor};

const CREDENCIALES_INVALIDAS: &str = "Credenciales inválidas";

/// POST /autores - register an author. The password is hashed before the
/// insert, and the response carries the public projection, never the hash.
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterAutor>,
) -> Result<(StatusCode, Json<AutorPublico>), ApiError> {
    let password = payload
        .password
        .ok_or_else(|| ApiError::validation("La contraseña es requerida"))?;

    let hashed = state.hasher.hash(password).await?;

    let sql = format!(
        "INSERT INTO autores (nombre_autor, biografia_autor, email_autor, password) \
         VALUES ($1, $2, $3, $4) RETURNING {}",
        AutorPublico::COLUMNS
    );
    let autor = sqlx::query_as::<_, AutorPublico>(&sql)
        .bind(&payload.nombre)
        .bind(&payload.biografia)
        .bind(&payload.correo_electronico)
        .bind(&hashed)
        .fetch_one(state.store.pool())
        .await?;

    Ok((StatusCode::CREATED, Json(autor)))
}

/// POST /login - verify credentials and return an identity confirmation.
///
/// Unknown email and wrong password answer with the identical 401 body, and
/// the unknown-email path still burns a bcrypt verify against a dummy hash
/// so the two cannot be told apart by timing either.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginAutor>,
) -> Result<Json<Value>, ApiError> {
    let (email, password) = match (payload.correo_electronico, payload.password) {
        (Some(e), Some(p)) => (e, p),
        _ => {
            return Err(ApiError::validation(
                "El correo electrónico y la contraseña son requeridos",
            ))
        }
    };

    let autor = sqlx::query_as::<_, Autor>("SELECT * FROM autores WHERE email_autor = $1")
        .bind(&email)
        .fetch_optional(state.store.pool())
        .await?;

    let autor = match autor {
        Some(a) => a,
        None => {
            state.hasher.burn_verify(password).await;
            return Err(ApiError::unauthorized(CREDENCIALES_INVALIDAS));
        }
    };

    if !state.hasher.verify(password, autor.password.clone()).await? {
        return Err(ApiError::unauthorized(CREDENCIALES_INVALIDAS));
    }

    Ok(Json(json!({
        "message": "Inicio de sesión exitoso",
        "autorId": autor.id_autor,
        "nombre": autor.nombre_autor
    })))
}

/// GET /autores - list all authors in the public projection
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<AutorPublico>>, ApiError> {
    let sql = format!(
        "SELECT {} FROM autores ORDER BY id_autor",
        AutorPublico::COLUMNS
    );
    let autores = sqlx::query_as::<_, AutorPublico>(&sql)
        .fetch_all(state.store.pool())
        .await?;
    Ok(Json(autores))
}

/// GET /autores/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AutorPublico>, ApiError> {
    let sql = format!(
        "SELECT {} FROM autores WHERE id_autor = $1",
        AutorPublico::COLUMNS
    );
    let autor = sqlx::query_as::<_, AutorPublico>(&sql)
        .bind(id)
        .fetch_optional(state.store.pool())
        .await?
        .ok_or_else(|| ApiError::not_found("Autor no encontrado"))?;
    Ok(Json(autor))
}

/// PUT /autores/:id - partial update; only supplied fields are applied, and
/// a supplied password is re-hashed before it reaches the builder.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAutor>,
) -> Result<Json<AutorPublico>, ApiError> {
    if payload.is_empty() {
        return Err(ApiError::validation(
            "No se proporcionaron campos para actualizar",
        ));
    }

    let mut update =
        UpdateBuilder::new("autores", "id_autor").returning(AutorPublico::COLUMNS);
    if let Some(nombre) = payload.nombre {
        update.set("nombre_autor", nombre);
    }
    if let Some(biografia) = payload.biografia {
        update.set("biografia_autor", biografia);
    }
    if let Some(correo) = payload.correo_electronico {
        update.set("email_autor", correo);
    }
    if let Some(password) = payload.password {
        let hashed = state.hasher.hash(password).await?;
        update.set("password", hashed);
    }

    let autor = update
        .fetch_optional::<AutorPublico>(id, state.store.pool())
        .await?
        .ok_or_else(|| ApiError::not_found("Autor no encontrado"))?;

    Ok(Json(autor))
}

/// DELETE /autores/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, ApiError> {
    let deleted =
        sqlx::query_scalar::<_, i32>("DELETE FROM autores WHERE id_autor = $1 RETURNING id_autor")
            .bind(id)
            .fetch_optional(state.store.pool())
            .await?;

    match deleted {
        Some(_) => Ok(Json(json!({
            "message": format!("Autor con ID {} eliminado exitosamente", id)
        }))),
        None => Err(ApiError::not_found("Autor no encontrado")),
    }
}
