use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in `etiquetas`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Etiqueta {
    pub id_etiqueta: i32,
    pub nombre_etiqueta: String,
    pub slug_etiqueta: String,
}

/// Create/replace body, same shape rules as `SeccionPayload`.
#[derive(Debug, Deserialize)]
pub struct EtiquetaPayload {
    pub nombre_etiqueta: Option<String>,
    pub slug_etiqueta: Option<String>,
}
