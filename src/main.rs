//! Workflow Builder CLI

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use workflow_builder::error::{BuilderError, FixSuggestion};
use workflow_builder::surface::{RenderSurface, TextSurface};
use workflow_builder::{replay, tui, workflow, NodeModel, NodeType, UiShell};

#[derive(Parser)]
#[command(name = "workflow-builder")]
#[command(about = "Visual node editor for composing agent workflow definitions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive editor (default)
    Open,

    /// Build a workflow from node types and print its JSON
    Generate {
        /// Node types in order (agent, groupchat, sequential, parallel)
        types: Vec<String>,

        /// Write the JSON to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fixed unix timestamp (ms) for the workflow id
        #[arg(long)]
        timestamp: Option<i64>,
    },

    /// Replay an action script (one action per line, `-` for stdin)
    Replay {
        /// Script file
        file: String,

        /// Print only the workflow JSON
        #[arg(long)]
        json_only: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load .env file (ignore if not present)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Open);

    // Keep the alternate screen clean while the editor is open
    let default_level = match command {
        Commands::Open => "warn",
        _ => "info",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result: anyhow::Result<()> = match command {
        Commands::Open => tui::run(),
        Commands::Generate {
            types,
            output,
            timestamp,
        } => generate(&types, output, timestamp).await.map_err(Into::into),
        Commands::Replay { file, json_only } => {
            replay_script(&file, json_only).await.map_err(Into::into)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        if let Some(suggestion) = e.fix_suggestion() {
            eprintln!("  {} {}", "Fix:".yellow(), suggestion);
        }
        std::process::exit(1);
    }
}

async fn generate(
    types: &[String],
    output: Option<PathBuf>,
    timestamp: Option<i64>,
) -> Result<(), BuilderError> {
    // Parse every tag before building anything
    let types = types
        .iter()
        .map(|t| t.parse::<NodeType>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut model = NodeModel::new();
    for node_type in types {
        model.add_node(node_type);
    }

    let doc = match timestamp {
        Some(millis) => workflow::generate_at(&model, millis),
        None => workflow::generate(&model),
    };
    let json = doc.to_pretty_json()?;

    match output {
        Some(path) => {
            tokio::fs::write(&path, format!("{}\n", json)).await?;
            info!(path = %path.display(), nodes = model.len(), "workflow written");
            println!(
                "{} Wrote {} to {}",
                "✓".green(),
                doc.workflow_id.cyan(),
                path.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

async fn replay_script(file: &str, json_only: bool) -> Result<(), BuilderError> {
    let script = if file == "-" {
        let mut buf = String::new();
        tokio::io::stdin().read_to_string(&mut buf).await?;
        buf
    } else {
        tokio::fs::read_to_string(file).await?
    };

    let mut shell = UiShell::new();
    let applied = replay::replay(&mut shell, &script)?;
    info!(file, applied, "script replayed");

    if json_only {
        // Scripts without a `generate` line still export the final canvas
        let doc = match shell.last_workflow() {
            Some(doc) => doc.clone(),
            None => workflow::generate(shell.model()),
        };
        println!("{}", doc.to_pretty_json()?);
        return Ok(());
    }

    let mut surface = TextSurface::new(std::io::stdout().lock());
    surface.show(&shell.document())
}
