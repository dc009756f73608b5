use serde::{Deserialize, Serialize};

/// Utente esposto al client/server sul wire (non è un modello di DB).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub created_at: String, // RFC3339 UTC
}

/// Id fisso dell'utente demo inserito dal seed del server.
/// Il client lo usa per operare sulla wishlist senza un flusso di login.
pub const DEMO_USER_ID: &str = "00000000-0000-4000-8000-000000000001";
