//! Saved QR item records.
mod saved_item;

pub use saved_item::SavedItem;
