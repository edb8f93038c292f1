// One module per entity group. Each handler validates required fields,
// issues its queries, and maps rows to a response; failures convert to
// ApiError and stop at this boundary.
pub mod autores;
pub mod etiquetas;
pub mod noticias;
pub mod secciones;
