use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use parley_types::ResponderKind;

use crate::templates::{FALLBACK_IMAGE_KEYWORD, IMAGE_MODEL_NAME, SAMPLE_IMAGES};
use crate::traits::{Reply, ReplyRequest, Responder};

const TRIGGER_PHRASES: [&str; 2] = ["generate image of", "generate image"];

/// Remove every ASCII case-insensitive occurrence of `phrase`.
fn remove_all(text: &str, phrase: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.to_ascii_lowercase().find(phrase) {
        out.push_str(&rest[..start]);
        rest = &rest[start + phrase.len()..];
    }
    out.push_str(rest);
    out
}

/// Simulated image generation backed by a fixed sample library
#[derive(Debug, Clone, Default)]
pub struct ImageResponder;

impl ImageResponder {
    /// Messages mentioning both "generate" and "image" ask for an image.
    pub fn is_image_request(message: &str) -> bool {
        let lower = message.to_lowercase();
        lower.contains("generate") && lower.contains("image")
    }

    /// Strip every trigger phrase (case-insensitive) and trim.
    pub fn extract_prompt(message: &str) -> String {
        TRIGGER_PHRASES
            .iter()
            .fold(message.to_string(), |text, phrase| remove_all(&text, phrase))
            .trim()
            .to_string()
    }

    pub fn image_for(prompt: &str) -> &'static str {
        let lower = prompt.to_lowercase();
        SAMPLE_IMAGES
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .or_else(|| SAMPLE_IMAGES.iter().find(|(k, _)| *k == FALLBACK_IMAGE_KEYWORD))
            .map(|(_, url)| *url)
            .unwrap_or_default()
    }

    fn render(prompt: &str, image_url: &str) -> String {
        format!(
            "# Generated Image: {prompt}\n\n\
             ![Generated: {prompt}]({image_url})\n\n\
             **Prompt:** {prompt}\n\
             **Model:** {model}\n\
             **Generated at:** {at}\n\n\
             This is a simulated image generation. No image model was called.",
            prompt = prompt,
            image_url = image_url,
            model = IMAGE_MODEL_NAME,
            at = Utc::now().to_rfc3339(),
        )
    }
}

#[async_trait]
impl Responder for ImageResponder {
    fn kind(&self) -> ResponderKind {
        ResponderKind::Image
    }

    async fn respond(&self, request: ReplyRequest) -> Result<Reply> {
        if !Self::is_image_request(&request.message) {
            return Ok(Reply::text(format!(
                "**Chat Response:** {}\n\nUse 'generate image' keyword to create images!",
                request.message
            )));
        }

        let prompt = Self::extract_prompt(&request.message);
        let image_url = Self::image_for(&prompt);
        tracing::debug!(prompt = %prompt, image_url = %image_url, "Simulated image generation");

        Ok(Reply::image(Self::render(&prompt, image_url), image_url, prompt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_image_request() {
        assert!(ImageResponder::is_image_request("Please GENERATE an IMAGE"));
        assert!(!ImageResponder::is_image_request("generate a poem"));
        assert!(!ImageResponder::is_image_request("describe this image"));
    }

    #[test]
    fn test_extract_prompt() {
        assert_eq!(ImageResponder::extract_prompt("generate image of a sunset"), "a sunset");
        assert_eq!(ImageResponder::extract_prompt("Generate Image of Mountains"), "Mountains");
        assert_eq!(ImageResponder::extract_prompt("generate image"), "");
        assert_eq!(ImageResponder::extract_prompt("please generate an image"), "please generate an image");
    }

    #[test]
    fn test_extract_prompt_strips_every_trigger() {
        assert_eq!(
            ImageResponder::extract_prompt("generate image of a city, GENERATE IMAGE of the sea"),
            "a city,  the sea"
        );
        assert_eq!(ImageResponder::extract_prompt("generate image generate image"), "");
    }

    #[test]
    fn test_image_for_keyword_and_fallback() {
        assert!(ImageResponder::image_for("Ocean waves").contains("photo-1505142468610"));
        assert!(ImageResponder::image_for("a cat").contains("photo-1557672172"));
    }
}
