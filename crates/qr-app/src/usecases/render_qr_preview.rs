use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use qr_core::content::QrContent;
use qr_core::ports::{QrImage, QrImageRendererPort};

/// Use case for rendering the QR preview of some content.
///
/// Encodes the content into its payload string and hands it to the image
/// rendering collaborator; this is the only place the two meet.
pub struct RenderQrPreview {
    renderer: Arc<dyn QrImageRendererPort>,
}

impl RenderQrPreview {
    pub fn new(renderer: Arc<dyn QrImageRendererPort>) -> Self {
        Self { renderer }
    }

    pub fn execute(&self, content: &QrContent, size_hint: u32) -> Result<QrImage> {
        let payload = content.to_payload();
        debug!(
            kind = %content.kind(),
            payload_len = payload.as_str().len(),
            "rendering qr preview"
        );

        self.renderer
            .render(&payload, size_hint)
            .map_err(|e| anyhow::anyhow!("Failed to render qr image: {}", e))
    }
}
