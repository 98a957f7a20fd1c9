//! Saved-item use cases.
//!
//! Each use case holds its ports as trait objects and exposes a single
//! `execute` method, so any shell (desktop, mobile, tests) drives the same
//! logic with its own infrastructure.
pub mod delete_item;
pub mod list_items;
pub mod rename_item;
pub mod render_qr_preview;
pub mod save_item;
pub mod update_item_content;

pub use delete_item::DeleteItem;
pub use list_items::ListItems;
pub use rename_item::RenameItem;
pub use render_qr_preview::RenderQrPreview;
pub use save_item::SaveItem;
pub use update_item_content::UpdateItemContent;
