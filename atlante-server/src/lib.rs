use anyhow::Context;
use axum::http::StatusCode;
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    /// Client HTTP condiviso per le chiamate verso la sorgente paesi esterna.
    pub http: reqwest::Client,
    /// Base URL della sorgente paesi, senza slash finale.
    pub countries_base_url: String,
}

impl AppState {
    pub fn new(pool: SqlitePool, countries_base_url: String) -> Self {
        Self {
            pool,
            http: reqwest::Client::new(),
            countries_base_url,
        }
    }
}

// Dato un percorso di file, restituisce un URL SQLite valido. Crea le directory genitrici se non esistono.
pub fn sqlite_url_for_path(p: &Path) -> anyhow::Result<String> {
    let abs = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };
    if let Some(parent) = abs.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create parent dirs for {:?}", parent))?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .open(&abs)
        .with_context(|| format!("create/open sqlite file {:?}", abs))?;
    let s = abs.to_string_lossy().replace('\\', "/");
    Ok(format!("sqlite:///{}", s))
}

/// Crea un DB URL SQLite leggendo la variabile d'ambiente DATABASE_URL.
/// Se non è impostata, usa "atlante.db" nella directory corrente.
pub fn build_sqlite_url() -> anyhow::Result<String> {
    let raw = std::env::var("DATABASE_URL").unwrap_or_else(|_| "atlante.db".to_string());
    if raw == "sqlite::memory:" {
        return Ok(raw);
    }
    // Rimuovi il prefisso "sqlite://" se presente, per ottenere il percorso del file.
    let path_part = if raw.starts_with("sqlite://") {
        raw.trim_start_matches("sqlite:///")
            .trim_start_matches("sqlite://")
            .to_string()
    } else {
        raw
    };
    sqlite_url_for_path(&PathBuf::from(path_part))
}

/// Base URL della sorgente paesi esterna, da COUNTRIES_API_URL o il default pubblico.
pub fn countries_base_url() -> String {
    std::env::var("COUNTRIES_API_URL")
        .unwrap_or_else(|_| "https://restcountries.com/v3.1".to_string())
}

/// Directory dei file statici del client, da STATIC_DIR o la build trunk del crate web.
pub fn static_dir() -> String {
    std::env::var("STATIC_DIR").unwrap_or_else(|_| "atlante-client-web/dist".to_string())
}

// Connect to the database and return a connection pool.
pub async fn connect_pool(db_url: &str) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePool::connect(db_url)
        .await
        .with_context(|| format!("connect to sqlite via {}", db_url))?;
    Ok(pool)
}

// Esegue le migrazioni del database. Crea le tabelle se non esistono.
pub async fn run_migrations(pool: &SqlitePool) -> anyhow::Result<()> {
    // Enable foreign keys (SQLite)
    sqlx::query("PRAGMA foreign_keys = ON;")
        .execute(pool)
        .await
        .context("enable foreign_keys")?;

    let stmts = [
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id    TEXT PRIMARY KEY,
            username   TEXT NOT NULL UNIQUE,
            email      TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL
        );"#,
        r#"
        CREATE TABLE IF NOT EXISTS wishlist_items (
            item_id      TEXT PRIMARY KEY,
            user_id      TEXT NOT NULL,
            country_code TEXT NOT NULL,
            country_name TEXT NOT NULL,
            rating       INTEGER NOT NULL DEFAULT 0,
            notes        TEXT NOT NULL DEFAULT '',
            added_at     TEXT NOT NULL,
            UNIQUE(user_id, country_code),
            FOREIGN KEY(user_id) REFERENCES users(user_id)
        );"#,
    ];
    // applica ogni statement di migrazione
    for s in &stmts {
        sqlx::query(s)
            .execute(pool)
            .await
            .with_context(|| format!("apply migration: {}", &s[..s.len().min(40)].replace('\n', " ")))?;
    }
    Ok(())
}

/// Inserisce l'utente demo con id fisso. INSERT OR IGNORE: rilanciare il server
/// su un DB già popolato non crea doppioni.
pub async fn seed_demo_user(pool: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query("INSERT OR IGNORE INTO users (user_id, username, email, created_at) VALUES (?, ?, ?, ?)")
        .bind(atlante_core::DEMO_USER_ID)
        .bind("demo")
        .bind("demo@atlante.local")
        .bind(atlante_core::now_timestamp())
        .execute(pool)
        .await
        .context("seed demo user")?;
    Ok(())
}

pub mod controllers;
pub mod countries;
pub mod routes;

/// Controlla lo stato di salute del database tentando di acquisire una connessione dal pool.
pub async fn health_with_pool(pool: &SqlitePool) -> StatusCode {
    match pool.acquire().await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}
