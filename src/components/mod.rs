pub mod app;
pub mod cart_page;
pub mod confirm_button;
pub mod equipment_list;
pub mod header;
pub mod login_screen;
pub mod route_guard;
pub mod searchable_select;
pub mod shop_page;
pub mod toast;

pub use app::App;
pub use cart_page::CartPage;
pub use confirm_button::ConfirmButton;
pub use equipment_list::{EquipmentList, EquipmentRowView};
pub use header::Header;
pub use login_screen::LoginScreen;
pub use route_guard::RouteGuard;
pub use searchable_select::SearchableSelect;
pub use shop_page::ShopPage;
pub use toast::ToastProvider;
