use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in `noticias`. `estado` is a free-form editorial label, not a state
/// machine the API enforces.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Noticia {
    pub id_noticia: i32,
    pub titulo: String,
    pub subtitulo: Option<String>,
    pub contenido: String,
    pub id_seccion: i32,
    pub id_autor: i32,
    pub fuente_original: Option<String>,
    pub url_fuente: Option<String>,
    pub palabras_clave: Option<String>,
    pub es_destacada: bool,
    pub estado: String,
    pub fecha_creacion: DateTime<Utc>,
    pub fecha_actualizacion: DateTime<Utc>,
}

/// Create/replace body. PUT sends the same shape again: full-record replace,
/// nothing is merged. Nullable columns take Option, the rest are required.
#[derive(Debug, Deserialize)]
pub struct NoticiaPayload {
    pub titulo: String,
    pub subtitulo: Option<String>,
    pub contenido: String,
    pub id_seccion: i32,
    pub id_autor: i32,
    pub fuente_original: Option<String>,
    pub url_fuente: Option<String>,
    pub palabras_clave: Option<String>,
    pub es_destacada: bool,
    pub estado: String,
}
