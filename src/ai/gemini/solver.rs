use super::client::GeminiHttpClient;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, InlineData, Part,
};
use crate::ai::{parse_solutions, SolverService};
use crate::encode::EncodedImage;
use crate::models::Solution;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Solver backed by Gemini's `generateContent` vision endpoint.
///
/// Issues exactly one outbound request per [`SolverService::solve`] call:
/// the encoded image followed by the fixed tutoring instruction, with the
/// strict solution schema declared in the generation config.
pub struct GeminiSolverClient {
    http: GeminiHttpClient,
}

impl GeminiSolverClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }

    fn extract_text(response: &GenerateContentResponse) -> Option<String> {
        response.candidates.first().and_then(|c| {
            c.content.parts.iter().find_map(|p| match p {
                Part::Text { text } => Some(text.clone()),
                Part::InlineData { .. } => None,
            })
        })
    }
}

#[async_trait]
impl SolverService for GeminiSolverClient {
    async fn solve(&self, image: &EncodedImage) -> Result<Vec<Solution>> {
        tracing::debug!(
            "Solving exam image ({} base64 chars, {}) via Gemini model {}",
            image.data.len(),
            image.mime_type,
            self.http.model()
        );

        // Part order matters: image first, then the instruction.
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type.to_string(),
                            data: image.data.clone(),
                        },
                    },
                    Part::Text {
                        text: prompts::SOLVER_INSTRUCTION.to_string(),
                    },
                ],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(prompts::SOLVER_TEMPERATURE),
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(prompts::solution_schema()),
            }),
        };

        let response: GenerateContentResponse = self.http.generate_content(&request).await?;

        let text = Self::extract_text(&response)
            .ok_or_else(|| Error::AiProvider("No text in Gemini solver response".to_string()))?;

        let solutions = parse_solutions(&text)?;
        tracing::info!("Gemini solved {} question(s)", solutions.len());

        Ok(solutions)
    }
}
