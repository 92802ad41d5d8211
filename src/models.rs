//! Data models and structures
//!
//! Defines the solved-question record returned by the model and the
//! environment-driven application configuration.

use serde::{Deserialize, Serialize};

/// One solved question as returned by the model.
///
/// All three fields are required by the declared response schema; extra keys
/// in the wire JSON are ignored, missing keys are a parse failure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Solution {
    pub question: String,
    pub answer: String,
    pub explanation: String,
}

pub const DEFAULT_SOLVER_MODEL: &str = "gemini-2.5-flash";

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub solver_model: String,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Config("GEMINI_API_KEY not set".to_string()))?,
            solver_model: std::env::var("SOLVER_MODEL")
                .unwrap_or_else(|_| DEFAULT_SOLVER_MODEL.to_string()),
        })
    }
}
