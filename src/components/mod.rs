//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod cert;
pub mod chat_box;
pub mod footer;
pub mod header;
pub mod notification_bell;
pub mod skeleton;
pub mod toast;

pub use cert::{CertBadge, CertificateModal};
pub use chat_box::ChatBox;
pub use footer::Footer;
pub use header::Header;
pub use notification_bell::NotificationBell;
pub use skeleton::{CardSkeleton, ListSkeleton, Loading};
pub use toast::Toast;
