use atlante_core::{
    new_entity_id, now_timestamp, AddWishlistItemRequest, AddWishlistItemResponse,
    CreateUserRequest, CreateUserResponse, DeleteWishlistItemResponse, ListWishlistResponse,
    UpdateWishlistItemRequest, UpdateWishlistItemResponse, User, WishlistItem,
};
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use sqlx::{sqlite::SqliteRow, Row};
use std::sync::Arc;

use crate::AppState;

// Mappa un errore sqlx nella coppia (status, messaggio) della risposta HTTP:
// errori riportati dal database (vincoli violati, query rifiutate) -> 400,
// tutto il resto (pool, I/O, decodifica) -> 500.
fn db_error(e: sqlx::Error) -> (StatusCode, String) {
    match e {
        sqlx::Error::Database(db) => (StatusCode::BAD_REQUEST, format!("db error: {}", db.message())),
        other => (StatusCode::INTERNAL_SERVER_ERROR, format!("db error: {}", other)),
    }
}

// Ricostruisce una voce di wishlist da una riga SELECT con tutte le colonne.
fn item_from_row(row: &SqliteRow) -> Result<WishlistItem, sqlx::Error> {
    Ok(WishlistItem {
        item_id: row.try_get("item_id")?,
        user_id: row.try_get("user_id")?,
        country_code: row.try_get("country_code")?,
        country_name: row.try_get("country_name")?,
        rating: row.try_get("rating")?,
        notes: row.try_get("notes")?,
        added_at: row.try_get("added_at")?,
    })
}

/// Handler per GET /api/users/:id
pub async fn get_user(
    Extension(state): Extension<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let row = sqlx::query("SELECT user_id, username, email, created_at FROM users WHERE user_id = ?")
        .bind(&user_id)
        .fetch_optional(&state.pool)
        .await
        .map_err(db_error)?;
    let row = match row {
        Some(r) => r,
        // utente inesistente -> oggetto vuoto, non 404
        None => return Ok(Json(json!({}))),
    };
    let user = User {
        user_id: row.try_get("user_id").map_err(db_error)?,
        username: row.try_get("username").map_err(db_error)?,
        email: row.try_get("email").map_err(db_error)?,
        created_at: row.try_get("created_at").map_err(db_error)?,
    };
    let v = serde_json::to_value(&user)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, format!("serialize error: {}", e)))?;
    Ok(Json(v))
}

/// Handler per POST /api/users
pub async fn create_user(
    Extension(state): Extension<Arc<AppState>>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<CreateUserResponse>), (StatusCode, String)> {
    // genera id utente e timestamp lato server
    let user_id = new_entity_id();
    let created_at = now_timestamp();

    // inserisci; username o email duplicati violano UNIQUE e diventano 400
    sqlx::query("INSERT INTO users (user_id, username, email, created_at) VALUES (?, ?, ?, ?)")
        .bind(&user_id)
        .bind(&req.username)
        .bind(&req.email)
        .bind(&created_at)
        .execute(&state.pool)
        .await
        .map_err(db_error)?;

    /* creazione della risposta: contiene l'id generato */
    let user = User { user_id, username: req.username, email: req.email, created_at };
    Ok((StatusCode::CREATED, Json(CreateUserResponse { user })))
}

/// Handler per GET /api/wishlist/:user_id
pub async fn list_wishlist(
    Extension(state): Extension<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<ListWishlistResponse>, (StatusCode, String)> {
    // le voci più recenti prima
    let rows = sqlx::query(
        "SELECT item_id, user_id, country_code, country_name, rating, notes, added_at \
         FROM wishlist_items WHERE user_id = ? ORDER BY added_at DESC",
    )
    .bind(&user_id)
    .fetch_all(&state.pool)
    .await
    .map_err(db_error)?;

    let mut items = Vec::with_capacity(rows.len());
    for row in &rows {
        items.push(item_from_row(row).map_err(db_error)?);
    }
    Ok(Json(ListWishlistResponse { items }))
}

/// Handler per POST /api/wishlist/:user_id
pub async fn add_wishlist_item(
    Extension(state): Extension<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(req): Json<AddWishlistItemRequest>,
) -> Result<(StatusCode, Json<AddWishlistItemResponse>), (StatusCode, String)> {
    let item = WishlistItem {
        item_id: new_entity_id(),
        user_id,
        country_code: req.country_code,
        country_name: req.country_name,
        // default quando il client omette i campi
        rating: req.rating.unwrap_or(0),
        notes: req.notes.unwrap_or_default(),
        added_at: now_timestamp(),
    };

    // una seconda voce per la stessa coppia (utente, paese) viola UNIQUE -> 400
    sqlx::query(
        "INSERT INTO wishlist_items (item_id, user_id, country_code, country_name, rating, notes, added_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&item.item_id)
    .bind(&item.user_id)
    .bind(&item.country_code)
    .bind(&item.country_name)
    .bind(item.rating)
    .bind(&item.notes)
    .bind(&item.added_at)
    .execute(&state.pool)
    .await
    .map_err(db_error)?;

    Ok((StatusCode::CREATED, Json(AddWishlistItemResponse { item })))
}

/// Handler per PUT /api/wishlist/:user_id/:country_code
pub async fn update_wishlist_item(
    Extension(state): Extension<Arc<AppState>>,
    Path((user_id, country_code)): Path<(String, String)>,
    Json(req): Json<UpdateWishlistItemRequest>,
) -> Result<Json<UpdateWishlistItemResponse>, (StatusCode, String)> {
    // COALESCE: un campo assente (NULL nel bind) mantiene il valore salvato
    let res = sqlx::query(
        "UPDATE wishlist_items SET rating = COALESCE(?, rating), notes = COALESCE(?, notes) \
         WHERE user_id = ? AND country_code = ?",
    )
    .bind(req.rating)
    .bind(req.notes)
    .bind(&user_id)
    .bind(&country_code)
    .execute(&state.pool)
    .await
    .map_err(db_error)?;

    Ok(Json(UpdateWishlistItemResponse { updated: res.rows_affected() }))
}

/// Handler per DELETE /api/wishlist/:user_id/:country_code
pub async fn delete_wishlist_item(
    Extension(state): Extension<Arc<AppState>>,
    Path((user_id, country_code)): Path<(String, String)>,
) -> Result<Json<DeleteWishlistItemResponse>, (StatusCode, String)> {
    let res = sqlx::query("DELETE FROM wishlist_items WHERE user_id = ? AND country_code = ?")
        .bind(&user_id)
        .bind(&country_code)
        .execute(&state.pool)
        .await
        .map_err(db_error)?;

    // coppia inesistente -> deleted: 0, non un errore
    Ok(Json(DeleteWishlistItemResponse { deleted: res.rows_affected() }))
}
