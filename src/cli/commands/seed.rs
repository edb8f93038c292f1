use anyhow::Context;

/// The six base sections of the site. Slugs that already exist are skipped.
const SECCIONES_BASE: &[(&str, &str)] = &[
    ("Nacionales", "nacionales"),
    ("Regionales", "regionales"),
    ("Deportes", "deportes"),
    ("Internacionales", "internacionales"),
    ("Cultura", "cultura"),
    ("Redes Sociales", "redes-sociales"),
];

pub async fn handle() -> anyhow::Result<()> {
    let store = super::store_from_env()?;

    let mut inserted = 0u64;
    for (nombre, slug) in SECCIONES_BASE {
        let result = sqlx::query(
            "INSERT INTO secciones (nombre_seccion, slug_seccion) VALUES ($1, $2) \
             ON CONFLICT (slug_seccion) DO NOTHING",
        )
        .bind(nombre)
        .bind(slug)
        .execute(store.pool())
        .await
        .with_context(|| format!("failed to seed section '{}'", slug))?;
        inserted += result.rows_affected();
    }

    println!(
        "Seeded {} of {} base sections ({} already present)",
        inserted,
        SECCIONES_BASE.len(),
        SECCIONES_BASE.len() as u64 - inserted
    );

    store.close().await;
    Ok(())
}
