//! QR content model and payload encoding.
//!
//! Content is modeled at two distinct but related levels:
//!
//! - [`QrContent`] is the **full edit state**: a closed set of variants with
//!   all fields a given content type carries (plain text, URL, Wi-Fi
//!   credentials). This is what gets persisted and what the editor mutates.
//! - [`ContentKind`] is the **reduced selector view**: the variant shape with
//!   field values erased, used to drive a type picker without duplicating
//!   (and drifting from) the full state.
//!
//! The two are kept in sync through two total functions only:
//! [`QrContent::kind`] projects down, [`QrContent::default_for`] constructs a
//! complete fresh value when the selector moves to a different kind. No
//! partially-initialized variant is ever observable.
//!
//! A [`QrContent`] value has two string representations that must never be
//! conflated:
//!
//! - the **storage form** (`to_storage_json` / `from_storage_json`), a serde
//!   JSON document used by the persistence layer;
//! - the **payload form** ([`QrContent::to_payload`]), the literal string a
//!   QR image encodes. It is one-way; nothing in this crate parses it back.
mod kind;
mod model;
mod payload;
mod security;

pub use kind::ContentKind;
pub use model::QrContent;
pub use payload::QrPayload;
pub use security::WlanSecurity;

#[cfg(test)]
mod tests;
