use anyhow::Result;
use clap::Parser;
use exam_solver::app::{App, RunOptions};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "exam-solver")]
#[command(about = "Solve a photographed exam sheet with Gemini")]
struct CliArgs {
    /// Path to the exam photo (PNG, JPEG, or WebP).
    #[arg(value_name = "IMAGE")]
    image: Option<PathBuf>,

    /// Print the raw solution JSON array instead of rendered cards.
    #[arg(long)]
    json: bool,

    /// Also write the solution JSON to this file.
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Override the solver model (default from SOLVER_MODEL or gemini-2.5-flash).
    #[arg(long, value_name = "MODEL")]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "exam_solver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = CliArgs::parse();

    let app = match App::new(args.model) {
        Ok(app) => app,
        Err(e) => {
            error!("Failed to initialize application: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    let options = RunOptions {
        image: args.image,
        json: args.json,
        output: args.output,
    };

    match app.run(&options).await {
        Ok(rendered) => {
            print!("{}", rendered);
            info!("Solve completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("Solve failed: {}", e);
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    }
}
