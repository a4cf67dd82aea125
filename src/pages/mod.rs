//! Pages
//!
//! Top-level views, one per route.

pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod equipment;
pub mod home;
pub mod knowledge;
pub mod marketplace;

pub use auth::Auth;
pub use chat::ChatPage;
pub use dashboard::Dashboard;
pub use equipment::Equipment;
pub use home::Home;
pub use knowledge::Knowledge;
pub use marketplace::Marketplace;
