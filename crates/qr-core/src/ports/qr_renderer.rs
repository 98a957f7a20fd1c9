use anyhow::Result;

use crate::content::QrPayload;

/// An opaque, already-encoded QR image as produced by the rendering
/// collaborator. The core knows nothing about pixel formats or
/// error-correction levels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    pub bytes: Vec<u8>,
    pub width_px: u32,
}

/// Renders a payload string into a scannable image.
///
/// `size_hint` is the desired edge length in pixels; implementations may
/// round it to whatever their matrix size allows.
pub trait QrImageRendererPort: Send + Sync {
    fn render(&self, payload: &QrPayload, size_hint: u32) -> Result<QrImage>;
}
