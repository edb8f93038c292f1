use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in `noticias_imagenes`. The surrogate id exists at the store level
/// only; the delete route keys on (id_noticia, url_imagen).
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct NoticiaImagen {
    pub id_imagen: i32,
    pub id_noticia: i32,
    pub url_imagen: String,
    pub es_principal: bool,
}

/// Projection the image-list endpoint returns.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ImagenResumen {
    pub url_imagen: String,
    pub es_principal: bool,
}

/// Body for POST /noticias/:id/imagenes. `es_principal` defaults to false
/// when absent.
#[derive(Debug, Deserialize)]
pub struct NuevaImagen {
    pub url_imagen: Option<String>,
    pub es_principal: Option<bool>,
}
