use sqlx::{postgres::PgRow, FromRow, PgPool};

/// Renders a parameterized partial UPDATE from statically named columns.
///
/// Only columns explicitly `set` end up in the SET list, so a patch-style
/// payload writes exactly the fields it carries. Column identifiers are
/// `&'static str` by construction; request data only ever flows into bind
/// parameters, never into the SQL text.
pub struct UpdateBuilder {
    table: &'static str,
    key_column: &'static str,
    returning: &'static str,
    columns: Vec<&'static str>,
    values: Vec<String>,
}

impl UpdateBuilder {
    pub fn new(table: &'static str, key_column: &'static str) -> Self {
        Self {
            table,
            key_column,
            returning: "*",
            columns: vec![],
            values: vec![],
        }
    }

    /// Replaces the `RETURNING *` projection with an explicit column list.
    pub fn returning(mut self, projection: &'static str) -> Self {
        self.returning = projection;
        self
    }

    pub fn set(&mut self, column: &'static str, value: impl Into<String>) -> &mut Self {
        self.columns.push(column);
        self.values.push(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Rendered UPDATE statement with `$n` placeholders. The key binds last.
    pub fn to_sql(&self) -> String {
        let assignments = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ${}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
            self.table,
            assignments,
            self.key_column,
            self.columns.len() + 1,
            self.returning
        )
    }

    /// Executes the update and maps the returned row. None when no row
    /// matched the key.
    pub async fn fetch_optional<T>(self, key: i32, pool: &PgPool) -> Result<Option<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = self.to_sql();
        let mut query = sqlx::query_as::<_, T>(&sql);
        for value in &self.values {
            query = query.bind(value);
        }
        query.bind(key).fetch_optional(pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_assignment() {
        let mut update = UpdateBuilder::new("autores", "id_autor").returning("id_autor, nombre_autor");
        update.set("nombre_autor", "Ana");
        assert_eq!(
            update.to_sql(),
            "UPDATE autores SET nombre_autor = $1 WHERE id_autor = $2 RETURNING id_autor, nombre_autor"
        );
    }

    #[test]
    fn placeholders_count_up_and_key_binds_last() {
        let mut update = UpdateBuilder::new("autores", "id_autor");
        update.set("nombre_autor", "Ana");
        update.set("email_autor", "ana@example.com");
        assert_eq!(
            update.to_sql(),
            "UPDATE autores SET nombre_autor = $1, email_autor = $2 WHERE id_autor = $3 RETURNING *"
        );
    }

    #[test]
    fn builder_with_no_assignments_reports_empty() {
        let update = UpdateBuilder::new("autores", "id_autor");
        assert!(update.is_empty());
        let mut update = UpdateBuilder::new("autores", "id_autor");
        update.set("password", "hash");
        assert!(!update.is_empty());
    }
}
