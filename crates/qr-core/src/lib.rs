//! # qr-core
//!
//! Core domain models and business logic for qrgen.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod content;
pub mod ids;
pub mod item;
pub mod ports;

// Re-export commonly used types at the crate root
pub use content::{ContentKind, QrContent, QrPayload, WlanSecurity};
pub use ids::ItemId;
pub use item::SavedItem;
