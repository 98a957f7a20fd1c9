//! # qr-app
//!
//! Application layer for qrgen: the editor session state machine and the
//! saved-item use cases. Depends on `qr-core` ports only; infrastructure
//! (storage, image rendering) is injected as trait objects.
pub mod editor;
pub mod usecases;

pub use editor::EditorSession;

#[cfg(test)]
mod testing;
