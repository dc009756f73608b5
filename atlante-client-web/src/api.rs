//! Chiamate HTTP verso il server Atlante (stessa origine della pagina).

use atlante_core::{
    AddWishlistItemRequest, Country, ListWishlistResponse, UpdateWishlistItemRequest, WishlistItem,
};

// Origine del server: la pagina è servita dal server stesso, quindi basta
// window.location.origin. Il fallback serve solo quando si sviluppa il client da solo.
fn base_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://127.0.0.1:3000".to_string())
}

pub async fn fetch_countries() -> anyhow::Result<Vec<Country>> {
    let resp = reqwest::get(format!("{}/api/countries", base_url())).await?;
    Ok(resp.error_for_status()?.json().await?)
}

/// Ricerca per nome. Un 404 dal server significa "nessun risultato", non un errore.
pub async fn search_countries(name: &str) -> anyhow::Result<Vec<Country>> {
    let url = format!("{}/api/countries/search/{}", base_url(), urlencoding::encode(name));
    let resp = reqwest::get(url).await?;
    if !resp.status().is_success() {
        return Ok(Vec::new());
    }
    Ok(resp.json().await?)
}

/// Filtro per regione; come per la ricerca, 404 -> lista vuota.
pub async fn countries_by_region(region: &str) -> anyhow::Result<Vec<Country>> {
    let url = format!("{}/api/countries/region/{}", base_url(), urlencoding::encode(region));
    let resp = reqwest::get(url).await?;
    if !resp.status().is_success() {
        return Ok(Vec::new());
    }
    Ok(resp.json().await?)
}

pub async fn fetch_wishlist(user_id: &str) -> anyhow::Result<Vec<WishlistItem>> {
    let url = format!("{}/api/wishlist/{}", base_url(), user_id);
    let resp: ListWishlistResponse = reqwest::get(url).await?.error_for_status()?.json().await?;
    Ok(resp.items)
}

pub async fn add_wishlist_item(user_id: &str, req: &AddWishlistItemRequest) -> anyhow::Result<()> {
    let url = format!("{}/api/wishlist/{}", base_url(), user_id);
    reqwest::Client::new()
        .post(url)
        .json(req)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

pub async fn update_wishlist_item(
    user_id: &str,
    country_code: &str,
    rating: i64,
    notes: String,
) -> anyhow::Result<()> {
    let url = format!("{}/api/wishlist/{}/{}", base_url(), user_id, country_code);
    let req = UpdateWishlistItemRequest { rating: Some(rating), notes: Some(notes) };
    reqwest::Client::new()
        .put(url)
        .json(&req)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}

pub async fn delete_wishlist_item(user_id: &str, country_code: &str) -> anyhow::Result<()> {
    let url = format!("{}/api/wishlist/{}/{}", base_url(), user_id, country_code);
    reqwest::Client::new()
        .delete(url)
        .send()
        .await?
        .error_for_status()?;
    Ok(())
}
