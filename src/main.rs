use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;

use pagesmith::image::{ImageLookup, NoImages, UnsplashClient, UnsplashConfig};
use pagesmith::llm::{LlmClient, LlmError, LlmTextGenerator};
use pagesmith::services::{page, training};
use pagesmith::{BusinessContext, EditorState, GenerationError, GenerationPipeline, HistoryManager, PipelineConfig};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("invalid JSON in {path}: {source}")]
    InvalidInput { path: String, source: serde_json::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error(transparent)]
    Llm(#[from] LlmError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

#[derive(Parser, Debug)]
#[command(name = "pagesmith", about = "Generate landing page sections from a business description")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the initial page and print the editor state as JSON.
    Generate {
        #[arg(long)]
        context: PathBuf,
        #[arg(long, default_value = "default")]
        template: String,
        /// Decorate sections with stock images (needs UNSPLASH_ACCESS_KEY).
        #[arg(long)]
        images: bool,
    },
    /// Print chatbot training entries for a saved page.
    Training {
        #[arg(long)]
        context: PathBuf,
        #[arg(long)]
        page: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Generate { context, template, images } => run_generate(&context, &template, images).await,
        Command::Training { context, page } => run_training(&context, &page),
    }
}

async fn run_generate(context: &Path, template: &str, images: bool) -> Result<(), CliError> {
    let ctx: BusinessContext = read_json(context)?;
    let pipeline = build_pipeline(images)?;

    let mut history = HistoryManager::new(EditorState::new(ctx.business_name.clone()));
    page::populate_page(&pipeline, &mut history, template, &ctx).await?;
    if images {
        page::enhance_page_images(&pipeline, &mut history, &ctx).await;
    }
    print_json(history.current_state())
}

fn run_training(context: &Path, page: &Path) -> Result<(), CliError> {
    let ctx: BusinessContext = read_json(context)?;
    let state: EditorState = read_json(page)?;
    print_json(&training::extract_training_entries(&ctx, &state.components))
}

fn build_pipeline(images: bool) -> Result<GenerationPipeline, CliError> {
    let config = PipelineConfig::from_env();
    let llm = LlmClient::from_env()?;
    tracing::info!(model = llm.model(), max_tokens = config.max_tokens, "llm client ready");
    let text = Arc::new(LlmTextGenerator::new(Arc::new(llm), config.max_tokens));

    let lookup: Arc<dyn ImageLookup> = if images { image_lookup() } else { Arc::new(NoImages) };
    let pipeline = GenerationPipeline::new(text, lookup);
    Ok(match config.cache_ttl {
        Some(ttl) => pipeline.with_cache(ttl),
        None => pipeline,
    })
}

fn image_lookup() -> Arc<dyn ImageLookup> {
    match UnsplashConfig::from_env().and_then(UnsplashClient::new) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::warn!(error = %e, "image backend unavailable, generating without images");
            Arc::new(NoImages)
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let display = path.display().to_string();
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Read { path: display.clone(), source })?;
    serde_json::from_str(&raw).map_err(|source| CliError::InvalidInput { path: display, source })
}

fn print_json(value: &impl serde::Serialize) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
