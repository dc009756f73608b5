use serde::{Deserialize, Serialize};

/// Voce della wishlist persistita dal server: un paese salvato da un utente
/// con voto e note. Al più una voce per coppia (utente, paese).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub item_id: String,
    pub user_id: String,
    /// Codice ISO a due lettere del paese (es. "IT").
    pub country_code: String,
    pub country_name: String,
    pub rating: i64,
    pub notes: String,
    pub added_at: String, // RFC3339 UTC
}
