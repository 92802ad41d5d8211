//! exam-solver - solves photographed middle-school exam questions with Gemini
//!
//! Takes a photo of an exam sheet, sends it to Google's Gemini vision model
//! with a fixed tutoring prompt and a strict JSON response schema, and renders
//! one solved-question card per question found in the image.

pub mod ai;
pub mod app;
pub mod encode;
pub mod error;
pub mod models;
pub mod prompts;
pub mod render;

pub use error::{Error, Result};
