//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod footer;
pub mod header;
pub mod loading;
pub mod status_banner;

pub use footer::Footer;
pub use header::Header;
pub use loading::TypingIndicator;
pub use status_banner::{StatusBanner, SubmitStatus};
