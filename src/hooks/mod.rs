pub mod use_mounted;
pub mod use_location;
pub mod use_session;
pub mod session_context;
pub mod use_cart;
pub mod cart_context;
pub mod use_toast;

pub use use_mounted::use_mounted;
pub use use_location::{use_location, UseLocationHandle};
pub use use_session::{use_session, SessionHandle};
pub use session_context::{use_session_context, SessionContextProvider};
pub use use_cart::{use_cart, CartHandle};
pub use cart_context::{use_cart_context, CartProvider};
pub use use_toast::{use_toast, use_toast_store, ToastHandle};
