//! AI service integration for solving exam questions
//!
//! Provides the solver interface to Gemini's generateContent API plus a mock
//! implementation for tests. The external call is abstracted behind
//! [`SolverService`] so it can be substituted without network access.

pub mod gemini;
pub mod mock;

pub use gemini::GeminiSolverClient;
pub use mock::MockSolverClient;

use crate::encode::EncodedImage;
use crate::models::Solution;
use crate::{Error, Result};
use async_trait::async_trait;

/// Turns one encoded image into one ordered list of solved questions via a
/// single call to an external model. No retries, no caching.
#[async_trait]
pub trait SolverService: Send + Sync {
    async fn solve(&self, image: &EncodedImage) -> Result<Vec<Solution>>;
}

/// Parse the model's response text into a solution list.
///
/// Trims surrounding whitespace, rejects empty output, then requires a JSON
/// array whose elements each carry the three string fields. Field contents
/// are not validated further.
pub fn parse_solutions(text: &str) -> Result<Vec<Solution>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyResponse);
    }

    serde_json::from_str(trimmed).map_err(|e| Error::MalformedResponse(e.to_string()))
}
