//! Fixed instruction prompt and response schema for the solver call.
//!
//! These are configuration data, not logic: the prompt lives in a data file
//! and the schema/temperature are named items so they can be versioned and
//! tested against fixture responses on their own.

use serde_json::{json, Value};

pub const SOLVER_INSTRUCTION: &str = include_str!("../data/prompts/solver_instruction.txt");

/// Low temperature to favor literal transcription over creative rephrasing.
pub const SOLVER_TEMPERATURE: f32 = 0.2;

/// Strict output schema: an array of objects, each requiring the three
/// string-typed solution fields.
pub fn solution_schema() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "question": {
                    "type": "STRING",
                    "description": "The original question text transcribed from the image"
                },
                "answer": {
                    "type": "STRING",
                    "description": "The correct answer to the question"
                },
                "explanation": {
                    "type": "STRING",
                    "description": "Detailed explanation and solution steps"
                }
            },
            "required": ["question", "answer", "explanation"]
        }
    })
}
