//! Application orchestration: intake, solve, render.

use crate::ai::{GeminiSolverClient, SolverService};
use crate::encode::EncodedImage;
use crate::models::{Config, Solution};
use crate::render::render_solutions;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Options for one solve submission.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Path to the exam photo. `None` means the user submitted nothing.
    pub image: Option<PathBuf>,
    /// Emit the raw solution JSON array instead of rendered cards.
    pub json: bool,
    /// Also write the solution JSON to this path.
    pub output: Option<PathBuf>,
}

/// Coordinates image encoding, the solver call, and output rendering.
///
/// Holds the solver behind a trait object so tests can inject a mock.
pub struct App {
    solver: Box<dyn SolverService>,
}

impl App {
    /// Build an app from a concrete solver dependency.
    ///
    /// This is primarily useful for integration tests that need to inject
    /// [`crate::ai::MockSolverClient`].
    pub fn with_solver(solver: Box<dyn SolverService>) -> Self {
        Self { solver }
    }

    /// Construct an app from environment configuration (`Config::from_env`),
    /// optionally overriding the configured model.
    pub fn new(model_override: Option<String>) -> Result<Self> {
        let config = Config::from_env()?;
        let model = model_override.unwrap_or(config.solver_model);
        info!("Solver provider: Gemini (model: {})", model);

        Ok(Self::with_solver(Box::new(GeminiSolverClient::new(
            config.gemini_api_key,
            model,
        ))))
    }

    /// Encode the image at `path` and issue exactly one solver call.
    ///
    /// `None` fails with [`Error::NoImage`] before any encoding or network
    /// activity. The result is always complete: a full solution list or an
    /// error, never a partial list.
    pub async fn solve_image(&self, path: Option<&Path>) -> Result<Vec<Solution>> {
        let path = path.ok_or(Error::NoImage)?;

        info!("Encoding image: {}", path.display());
        let encoded = EncodedImage::from_path(path)?;

        info!("Submitting image to solver ({})", encoded.mime_type);
        self.solver.solve(&encoded).await
    }

    /// Run one submission end to end and return the text to present.
    pub async fn run(&self, options: &RunOptions) -> Result<String> {
        let solutions = self.solve_image(options.image.as_deref()).await?;
        info!("Received {} solved question(s)", solutions.len());

        if let Some(output_path) = &options.output {
            let json = serde_json::to_string_pretty(&solutions)?;
            fs::write(output_path, &json)?;
            info!("Saved solutions to {}", output_path.display());
        }

        if options.json {
            Ok(serde_json::to_string_pretty(&solutions)?)
        } else {
            Ok(render_solutions(&solutions))
        }
    }
}
