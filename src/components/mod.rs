//! UI Components
//!
//! Leptos components and pages.

mod admin_page;
pub mod board_page;
pub mod character_card;
pub mod character_grid;
mod delete_confirm_button;
mod friends_page;
pub mod gauge;
mod header;
mod login_page;
mod modal;
mod notifications_page;
mod raid_status_board;
mod seasonal_effect;
mod toast;
mod todo_page;
mod todo_summary;

pub use admin_page::AdminPage;
pub use board_page::BoardPage;
pub use character_grid::{bind_reorder, CharacterGrid, DragGroup};
pub use delete_confirm_button::DeleteConfirmButton;
pub use friends_page::FriendsPage;
pub use header::Header;
pub use login_page::LoginPage;
pub use modal::Modal;
pub use notifications_page::NotificationsPage;
pub use raid_status_board::RaidStatusBoard;
pub use seasonal_effect::SeasonalEffectView;
pub use toast::ToastView;
pub use todo_page::TodoPage;
pub use todo_summary::TodoSummary;
