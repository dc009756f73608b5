use anyhow::Result;
use atlante_core::{
    new_entity_id, AddWishlistItemRequest, CreateUserRequest, UpdateWishlistItemRequest,
    DEMO_USER_ID,
};
use atlante_server::{
    connect_pool, controllers, run_migrations, seed_demo_user, sqlite_url_for_path, AppState,
};
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use tempfile::TempDir;

// Prepara un DB su file temporaneo con schema e utente demo già pronti.
// Il TempDir va tenuto in vita dal chiamante, altrimenti il file sparisce.
async fn setup() -> Result<(TempDir, Arc<AppState>)> {
    let td = TempDir::new()?;
    let db_path = td.path().join("atlante.db");
    let url = sqlite_url_for_path(db_path.as_path())?;
    let pool = connect_pool(&url).await?;
    run_migrations(&pool).await?;
    seed_demo_user(&pool).await?;
    // la base url dei paesi non viene mai contattata in questi test
    let state = Arc::new(AppState::new(pool, "http://127.0.0.1:9".to_string()));
    Ok((td, state))
}

fn add_req(code: &str, name: &str) -> AddWishlistItemRequest {
    AddWishlistItemRequest {
        country_code: code.to_string(),
        country_name: name.to_string(),
        rating: None,
        notes: None,
    }
}

/*
    Obiettivo test: la stessa coppia (utente, paese) non può comparire due volte.
    Il secondo inserimento deve essere respinto dal vincolo UNIQUE con un 400.
*/
#[tokio::test]
async fn duplicate_country_for_same_user_is_rejected() -> Result<()> {
    let (_td, state) = setup().await?;

    controllers::add_wishlist_item(
        Extension(state.clone()),
        Path(DEMO_USER_ID.to_string()),
        Json(add_req("IT", "Italy")),
    )
    .await
    .expect("first insert succeeds");

    let err = controllers::add_wishlist_item(
        Extension(state.clone()),
        Path(DEMO_USER_ID.to_string()),
        Json(add_req("IT", "Italy")),
    )
    .await
    .err()
    .expect("second insert must fail");

    assert_eq!(err.0, StatusCode::BAD_REQUEST);
    assert!(err.1.contains("UNIQUE"), "unexpected message: {}", err.1);
    Ok(())
}

/*
    Obiettivo test: voto e note omessi alla creazione devono diventare 0 e stringa vuota.
*/
#[tokio::test]
async fn rating_and_notes_default_when_omitted() -> Result<()> {
    let (_td, state) = setup().await?;

    let (status, Json(resp)) = controllers::add_wishlist_item(
        Extension(state.clone()),
        Path(DEMO_USER_ID.to_string()),
        Json(add_req("JP", "Japan")),
    )
    .await
    .expect("insert succeeds");

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(resp.item.rating, 0);
    assert_eq!(resp.item.notes, "");

    // anche rileggendo dal DB, non solo nella risposta dell'insert
    let Json(list) = controllers::list_wishlist(Extension(state.clone()), Path(DEMO_USER_ID.to_string()))
        .await
        .expect("list succeeds");
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].rating, 0);
    assert_eq!(list.items[0].notes, "");
    Ok(())
}

/*
    Obiettivo test: cancellare una coppia (utente, paese) inesistente non è un errore,
    la risposta riporta zero righe cancellate.
*/
#[tokio::test]
async fn delete_missing_pair_reports_zero_rows() -> Result<()> {
    let (_td, state) = setup().await?;

    let Json(resp) = controllers::delete_wishlist_item(
        Extension(state.clone()),
        Path((DEMO_USER_ID.to_string(), "ZZ".to_string())),
    )
    .await
    .expect("delete of missing pair must not fail");

    assert_eq!(resp.deleted, 0);
    Ok(())
}

/*
    Obiettivo test: la wishlist torna ordinata per data di aggiunta, le più recenti prima.
    Le righe vengono inserite direttamente con timestamp espliciti per rendere
    l'ordine atteso indipendente dall'orologio.
*/
#[tokio::test]
async fn wishlist_is_ordered_most_recent_first() -> Result<()> {
    let (_td, state) = setup().await?;

    let rows = [
        ("NO", "Norway", "2026-08-01T10:00:00Z"),
        ("PT", "Portugal", "2026-08-02T10:00:00Z"),
        ("JP", "Japan", "2026-08-03T10:00:00Z"),
    ];
    for (code, name, ts) in rows {
        sqlx::query(
            "INSERT INTO wishlist_items (item_id, user_id, country_code, country_name, rating, notes, added_at) \
             VALUES (?, ?, ?, ?, 0, '', ?)",
        )
        .bind(new_entity_id())
        .bind(DEMO_USER_ID)
        .bind(code)
        .bind(name)
        .bind(ts)
        .execute(&state.pool)
        .await?;
    }

    let Json(list) = controllers::list_wishlist(Extension(state.clone()), Path(DEMO_USER_ID.to_string()))
        .await
        .expect("list succeeds");

    let codes: Vec<&str> = list.items.iter().map(|i| i.country_code.as_str()).collect();
    assert_eq!(codes, vec!["JP", "PT", "NO"]);
    Ok(())
}

/*
    Obiettivo test: GET di un utente inesistente risponde con l'oggetto vuoto, non con 404.
*/
#[tokio::test]
async fn get_missing_user_returns_empty_object() -> Result<()> {
    let (_td, state) = setup().await?;

    let Json(v) = controllers::get_user(
        Extension(state.clone()),
        Path("99999999-9999-4999-8999-999999999999".to_string()),
    )
    .await
    .expect("get_user must not fail");

    assert_eq!(v, serde_json::json!({}));
    Ok(())
}

/*
    Obiettivo test: giro completo come lo farebbe il client.
    POST utente -> POST voce wishlist -> GET con i default -> PUT voto/note ->
    GET che riflette la modifica -> DELETE -> GET vuota.
*/
#[tokio::test]
async fn wishlist_end_to_end() -> Result<()> {
    let (_td, state) = setup().await?;

    // POST /api/users
    let (status, Json(created)) = controllers::create_user(
        Extension(state.clone()),
        Json(CreateUserRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
        }),
    )
    .await
    .expect("create user succeeds");
    assert_eq!(status, StatusCode::CREATED);
    let user_id = created.user.user_id.clone();
    assert!(!user_id.is_empty(), "server must assign an id");

    // GET /api/users/:id rilegge l'utente appena creato
    let Json(fetched) = controllers::get_user(Extension(state.clone()), Path(user_id.clone()))
        .await
        .expect("get user succeeds");
    assert_eq!(fetched["username"], "alice");
    assert_eq!(fetched["userId"], user_id.as_str());

    // POST /api/wishlist/:user_id senza voto né note
    controllers::add_wishlist_item(
        Extension(state.clone()),
        Path(user_id.clone()),
        Json(add_req("GR", "Greece")),
    )
    .await
    .expect("add item succeeds");

    let Json(list) = controllers::list_wishlist(Extension(state.clone()), Path(user_id.clone()))
        .await
        .expect("list succeeds");
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].country_code, "GR");
    assert_eq!(list.items[0].rating, 0);
    assert_eq!(list.items[0].notes, "");

    // PUT /api/wishlist/:user_id/:country_code
    let Json(updated) = controllers::update_wishlist_item(
        Extension(state.clone()),
        Path((user_id.clone(), "GR".to_string())),
        Json(UpdateWishlistItemRequest {
            rating: Some(5),
            notes: Some("isole a settembre".to_string()),
        }),
    )
    .await
    .expect("update succeeds");
    assert_eq!(updated.updated, 1);

    let Json(list) = controllers::list_wishlist(Extension(state.clone()), Path(user_id.clone()))
        .await
        .expect("list succeeds");
    assert_eq!(list.items[0].rating, 5);
    assert_eq!(list.items[0].notes, "isole a settembre");

    // DELETE /api/wishlist/:user_id/:country_code
    let Json(deleted) = controllers::delete_wishlist_item(
        Extension(state.clone()),
        Path((user_id.clone(), "GR".to_string())),
    )
    .await
    .expect("delete succeeds");
    assert_eq!(deleted.deleted, 1);

    let Json(list) = controllers::list_wishlist(Extension(state.clone()), Path(user_id))
        .await
        .expect("list succeeds");
    assert!(list.items.is_empty());
    Ok(())
}

/*
    Obiettivo test: l'aggiornamento parziale (solo il voto) non deve toccare le note.
*/
#[tokio::test]
async fn partial_update_keeps_untouched_fields() -> Result<()> {
    let (_td, state) = setup().await?;

    controllers::add_wishlist_item(
        Extension(state.clone()),
        Path(DEMO_USER_ID.to_string()),
        Json(AddWishlistItemRequest {
            country_code: "IS".to_string(),
            country_name: "Iceland".to_string(),
            rating: Some(2),
            notes: Some("aurora boreale".to_string()),
        }),
    )
    .await
    .expect("insert succeeds");

    let Json(resp) = controllers::update_wishlist_item(
        Extension(state.clone()),
        Path((DEMO_USER_ID.to_string(), "IS".to_string())),
        Json(UpdateWishlistItemRequest { rating: Some(4), notes: None }),
    )
    .await
    .expect("update succeeds");
    assert_eq!(resp.updated, 1);

    let Json(list) = controllers::list_wishlist(Extension(state.clone()), Path(DEMO_USER_ID.to_string()))
        .await
        .expect("list succeeds");
    assert_eq!(list.items[0].rating, 4);
    assert_eq!(list.items[0].notes, "aurora boreale", "notes must survive a rating-only update");
    Ok(())
}
