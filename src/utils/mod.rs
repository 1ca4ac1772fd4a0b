// Utils compartidos

pub mod delayed_action;
pub mod mount_guard;
pub mod navigation;

pub use delayed_action::DelayedAction;
pub use mount_guard::MountGuard;
pub use navigation::{current_path, push_path, replace_path, CART_PATH, HOME_PATH, LOGIN_PATH};
