//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations, keeping the core business logic
//! independent of storage backends, image libraries, and the host clock.
pub mod clock;
pub mod errors;
pub mod item_repository;
pub mod qr_renderer;

pub use clock::ClockPort;
pub use errors::ItemRepositoryError;
pub use item_repository::ItemRepositoryPort;
pub use qr_renderer::{QrImage, QrImageRendererPort};
