pub mod country;
pub mod user;
pub mod wishlist;

// Re-export per comodità
pub use country::Country;
pub use user::User;
pub use wishlist::WishlistItem;
