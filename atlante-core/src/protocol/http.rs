use serde::{Deserialize, Serialize};

use crate::models::{User, WishlistItem};
/*
    http dto for http requests
*/
// Create user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserResponse {
    /// Utente creato, id generato dal server compreso.
    pub user: User,
}

// Wishlist listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListWishlistResponse {
    pub items: Vec<WishlistItem>,
}

// Add wishlist item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistItemRequest {
    pub country_code: String,
    pub country_name: String,
    /// Se assente il server usa 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    /// Se assente il server usa la stringa vuota.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWishlistItemResponse {
    pub item: WishlistItem,
}

// Update wishlist item (voto/note); i campi assenti mantengono il valore salvato
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWishlistItemRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWishlistItemResponse {
    /// Numero di righe aggiornate (0 se la coppia utente/paese non esiste).
    pub updated: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteWishlistItemResponse {
    /// Numero di righe cancellate; cancellare una coppia inesistente non è un errore.
    pub deleted: u64,
}
