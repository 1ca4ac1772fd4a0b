pub mod auth;
pub mod cart;
pub mod catalog;

pub use auth::{AuthResponse, LoginRequest};
pub use cart::{CartEntry, CartEntryPayload, CartItem, NamedRef};
pub use catalog::{EquipmentItem, ItemId, SelectItem};
