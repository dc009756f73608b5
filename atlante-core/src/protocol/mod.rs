pub mod http;

// Re-export comodi
pub use http::{
    AddWishlistItemRequest, AddWishlistItemResponse, CreateUserRequest, CreateUserResponse,
    DeleteWishlistItemResponse, ListWishlistResponse, UpdateWishlistItemRequest,
    UpdateWishlistItemResponse,
};
