//! atlante-core: tipi condivisi tra client e server (modelli, DTO HTTP, costanti).
//! Niente I/O o dipendenze non compatibili con WASM.

pub mod models;
pub mod protocol;
pub mod utils;

// Re-export utili per ridurre i percorsi nei crate client/server
pub use models::{
    country::{Country, CountryFlags, CountryName},
    user::{User, DEMO_USER_ID},
    wishlist::WishlistItem,
};
pub use protocol::http::{
    AddWishlistItemRequest, AddWishlistItemResponse, CreateUserRequest, CreateUserResponse,
    DeleteWishlistItemResponse, ListWishlistResponse, UpdateWishlistItemRequest,
    UpdateWishlistItemResponse,
};
pub use utils::{new_entity_id, now_timestamp};
