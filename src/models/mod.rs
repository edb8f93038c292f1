mod autor;
mod etiqueta;
mod imagen;
mod noticia;
mod seccion;

pub use autor::{Autor, AutorPublico, LoginAutor, RegisterAutor, UpdateAutor};
pub use etiqueta::{Etiqueta, EtiquetaPayload};
pub use imagen::{ImagenResumen, NoticiaImagen, NuevaImagen};
pub use noticia::{Noticia, NoticiaPayload};
pub use seccion::{Seccion, SeccionPayload};
