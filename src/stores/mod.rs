pub mod session_store;
pub mod cart_store;
pub mod toast_store;

pub use session_store::{SessionAction, SessionStatus, SessionStore};
pub use cart_store::{CartAction, CartStore};
pub use toast_store::{ToastAction, ToastKind, ToastMessage, ToastStore};
