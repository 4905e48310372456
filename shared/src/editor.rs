//! Contract for the external image-edit service.

use thiserror::Error;

/// Failure modes of a single edit call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("no API key is configured for the image service")]
    MissingApiKey,
    #[error("the image service returned no image data")]
    NoImage,
    #[error("request to the image service failed: {0}")]
    Http(String),
    #[error("image service error {status}: {message}")]
    Api { status: u16, message: String },
}

/// One natural-language edit of one image.
///
/// Takes a base64-encoded payload with its MIME type plus an instruction
/// and returns the base64 payload of the edited image. Implemented by the
/// Gemini client in the frontend and by scripted mocks in tests.
pub trait ImageEditor {
    async fn edit(
        &self,
        data: &str,
        mime_type: &str,
        instruction: &str,
    ) -> Result<String, EditError>;
}
