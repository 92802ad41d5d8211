//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror.
//! Every variant maps to a single user-facing message via
//! [`Error::user_message`], which is what the presentation layer shows.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no image selected")]
    NoImage,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("model response was not valid solution JSON: {0}")]
    MalformedResponse(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("AI provider error: {0}")]
    AiProvider(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Stable message suitable for showing directly to the user.
    ///
    /// Transport and API failures are deliberately collapsed into one generic
    /// message; the detailed cause still goes to the logs.
    pub fn user_message(&self) -> String {
        match self {
            Error::NoImage => "Please select an image first.".to_string(),
            Error::Io(_) => "The image could not be read.".to_string(),
            Error::UnsupportedFormat(got) => {
                format!("Unsupported image format ({got}). Use PNG, JPEG, or WebP.")
            }
            Error::EmptyResponse => "The AI returned no content. Please try again.".to_string(),
            Error::MalformedResponse(_) | Error::Serialization(_) => {
                "AI response format was invalid.".to_string()
            }
            Error::Http(_) | Error::AiProvider(_) => {
                "Failed to get a solution from the AI service.".to_string()
            }
            Error::Config(msg) => format!("Configuration error: {msg}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
