//! Terminal rendering of solved-question cards.

use crate::models::Solution;
use std::fmt::Write as _;

const RULE: &str = "────────────────────────────────────────";

/// Render the solution list as numbered cards, one per solved question.
pub fn render_solutions(solutions: &[Solution]) -> String {
    if solutions.is_empty() {
        return "No questions were detected in the image.\n".to_string();
    }

    let mut out = String::new();
    for (i, solution) in solutions.iter().enumerate() {
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "Question {}", i + 1);
        let _ = writeln!(out, "{}", RULE);
        let _ = writeln!(out, "{}\n", solution.question.trim_end());
        let _ = writeln!(out, "Answer: {}\n", solution.answer.trim_end());
        let _ = writeln!(out, "Explanation:");
        let _ = writeln!(out, "{}\n", solution.explanation.trim_end());
    }
    out
}
