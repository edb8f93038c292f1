//! Author registration, login, and partial updates. Needs a live database;
//! skips when /health reports the store unreachable.

mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn register(
    base_url: &str,
    client: &reqwest::Client,
    email: &str,
    password: &str,
) -> Result<Value> {
    let res = client
        .post(format!("{}/autores", base_url))
        .json(&json!({
            "nombre": "Ana Prueba",
            "biografia": "Redactora de pruebas",
            "correo_electronico": email,
            "password": password
        }))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "registration failed");
    Ok(res.json::<Value>().await?)
}

#[tokio::test]
async fn registration_response_never_contains_the_hash() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping registration_response_never_contains_the_hash: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();
    let email = format!("ana-{}@example.com", common::unique_suffix());

    let created = register(&server.base_url, &client, &email, "secreto123").await?;
    assert!(created.get("password").is_none());
    assert_eq!(created["email_autor"], email.as_str());
    let id = created["id_autor"].as_i64().expect("id_autor");

    // Neither does the list nor the single-get
    let res = client
        .get(format!("{}/autores", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    for autor in res.json::<Vec<Value>>().await? {
        assert!(autor.get("password").is_none());
    }

    let res = client
        .get(format!("{}/autores/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let fetched = res.json::<Value>().await?;
    assert!(fetched.get("password").is_none());
    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn login_accepts_good_credentials_and_rejects_bad_ones_identically() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!(
            "skipping login_accepts_good_credentials_and_rejects_bad_ones_identically: database unavailable"
        );
        return Ok(());
    }
    let client = reqwest::Client::new();
    let email = format!("login-{}@example.com", common::unique_suffix());

    let created = register(&server.base_url, &client, &email, "secreto123").await?;

    // Correct credentials
    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({ "correo_electronico": email, "password": "secreto123" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Inicio de sesión exitoso");
    assert_eq!(body["autorId"], created["id_autor"]);
    assert_eq!(body["nombre"], "Ana Prueba");

    // Wrong password and unknown email answer with the same body
    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({ "correo_electronico": email, "password": "incorrecta" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = res.json::<Value>().await?;

    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({
            "correo_electronico": format!("nadie-{}@example.com", common::unique_suffix()),
            "password": "incorrecta"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = res.json::<Value>().await?;

    assert_eq!(wrong_password, unknown_email);
    assert_eq!(wrong_password["message"], "Credenciales inválidas");
    Ok(())
}

#[tokio::test]
async fn password_only_update_changes_credentials_and_nothing_else() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!(
            "skipping password_only_update_changes_credentials_and_nothing_else: database unavailable"
        );
        return Ok(());
    }
    let client = reqwest::Client::new();
    let email = format!("rotacion-{}@example.com", common::unique_suffix());

    let created = register(&server.base_url, &client, &email, "antigua123").await?;
    let id = created["id_autor"].as_i64().expect("id_autor");

    let res = client
        .put(format!("{}/autores/{}", server.base_url, id))
        .json(&json!({ "password": "nueva456" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert!(updated.get("password").is_none());
    // Everything but the credential is untouched
    assert_eq!(updated, created);

    // Old password no longer works; the new one does
    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({ "correo_electronico": email, "password": "antigua123" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let res = client
        .post(format!("{}/login", server.base_url))
        .json(&json!({ "correo_electronico": email, "password": "nueva456" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn partial_update_applies_only_supplied_fields() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping partial_update_applies_only_supplied_fields: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();
    let email = format!("parcial-{}@example.com", common::unique_suffix());

    let created = register(&server.base_url, &client, &email, "secreto123").await?;
    let id = created["id_autor"].as_i64().expect("id_autor");

    let res = client
        .put(format!("{}/autores/{}", server.base_url, id))
        .json(&json!({ "biografia": "Editora jefa" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["biografia_autor"], "Editora jefa");
    assert_eq!(updated["nombre_autor"], created["nombre_autor"]);
    assert_eq!(updated["email_autor"], created["email_autor"]);
    Ok(())
}

#[tokio::test]
async fn updating_or_deleting_unknown_author_is_404() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping updating_or_deleting_unknown_author_is_404: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/autores/999999999", server.base_url))
        .json(&json!({ "nombre": "Nadie" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "Autor no encontrado");

    let res = client
        .delete(format!("{}/autores/999999999", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn author_delete_confirms_and_then_404s() -> Result<()> {
    let server = common::ensure_server().await?;
    if !common::db_available(server).await {
        eprintln!("skipping author_delete_confirms_and_then_404s: database unavailable");
        return Ok(());
    }
    let client = reqwest::Client::new();
    let email = format!("baja-{}@example.com", common::unique_suffix());

    let created = register(&server.base_url, &client, &email, "secreto123").await?;
    let id = created["id_autor"].as_i64().expect("id_autor");

    let res = client
        .delete(format!("{}/autores/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["message"].as_str().unwrap_or("").contains("eliminado"));

    let res = client
        .get(format!("{}/autores/{}", server.base_url, id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}
