use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row in `autores`, hash included. Deliberately not `Serialize`: the
/// hash can only leave through `AutorPublico`, never by accident.
#[derive(Debug, Clone, FromRow)]
pub struct Autor {
    pub id_autor: i32,
    pub nombre_autor: String,
    pub biografia_autor: Option<String>,
    pub email_autor: String,
    pub password: String,
    pub twitter_autor: Option<String>,
}

/// The non-secret projection every author-returning endpoint uses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AutorPublico {
    pub id_autor: i32,
    pub nombre_autor: String,
    pub biografia_autor: Option<String>,
    pub email_autor: String,
    pub twitter_autor: Option<String>,
}

impl AutorPublico {
    /// Column list matching this struct, for SELECT/RETURNING projections.
    pub const COLUMNS: &'static str =
        "id_autor, nombre_autor, biografia_autor, email_autor, twitter_autor";
}

/// Registration body. Only the password is checked by hand (400 when
/// absent); the other required fields go through the JSON extractor.
#[derive(Debug, Deserialize)]
pub struct RegisterAutor {
    pub nombre: String,
    pub biografia: Option<String>,
    pub correo_electronico: String,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginAutor {
    pub correo_electronico: Option<String>,
    pub password: Option<String>,
}

/// Patch body for PUT /autores/:id: only present fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateAutor {
    pub nombre: Option<String>,
    pub biografia: Option<String>,
    pub correo_electronico: Option<String>,
    pub password: Option<String>,
}

impl UpdateAutor {
    pub fn is_empty(&self) -> bool {
        self.nombre.is_none()
            && self.biografia.is_none()
            && self.correo_electronico.is_none()
            && self.password.is_none()
    }
}
