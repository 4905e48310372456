//! Gemini image-edit client.
//!
//! One request per transformation step: the input image as inline data plus
//! the step's instruction, answered with the edited image as inline data.

use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use shared::{EditError, ImageEditor};

const API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const IMAGE_MODEL: &str = "gemini-2.5-flash-image-preview";

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl RequestPart {
    fn inline(mime_type: &str, data: &str) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.to_string(),
                data: data.to_string(),
            }),
            text: None,
        }
    }

    fn text(text: &str) -> Self {
        Self {
            inline_data: None,
            text: Some(text.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: ResponseContent,
}

#[derive(Deserialize, Default)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    #[serde(default)]
    inline_data: Option<InlineData>,
}

/// Client for one generation run. Reconstructed per run, so the key is
/// checked before any step executes.
pub struct GeminiEditor {
    api_key: String,
}

impl GeminiEditor {
    pub fn new(api_key: Option<&str>) -> Result<Self, EditError> {
        match api_key {
            Some(key) if !key.is_empty() => Ok(Self {
                api_key: key.to_string(),
            }),
            _ => Err(EditError::MissingApiKey),
        }
    }
}

impl ImageEditor for GeminiEditor {
    async fn edit(
        &self,
        data: &str,
        mime_type: &str,
        instruction: &str,
    ) -> Result<String, EditError> {
        let url = format!(
            "{API_BASE_URL}/{IMAGE_MODEL}:generateContent?key={}",
            self.api_key
        );
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart::inline(mime_type, data),
                    RequestPart::text(instruction),
                ],
            }],
        };

        let response = Request::post(&url)
            .json(&body)
            .map_err(|e| EditError::Http(e.to_string()))?
            .send()
            .await
            .map_err(|e| EditError::Http(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(EditError::Api { status, message });
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| EditError::Http(format!("failed to parse response: {e}")))?;

        parsed
            .candidates
            .into_iter()
            .flat_map(|candidate| candidate.content.parts)
            .find_map(|part| part.inline_data.map(|inline| inline.data))
            .ok_or(EditError::NoImage)
    }
}
