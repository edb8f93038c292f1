use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row in `secciones`. Field names are the wire contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Seccion {
    pub id_seccion: i32,
    pub nombre_seccion: String,
    pub slug_seccion: String,
}

/// Create/replace body. Both fields are required; they are optional here so
/// the handler can answer a missing field with a 400 instead of leaving the
/// rejection to the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct SeccionPayload {
    pub nombre_seccion: Option<String>,
    pub slug_seccion: Option<String>,
}
