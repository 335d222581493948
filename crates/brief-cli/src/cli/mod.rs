//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use brief_core::{config, logging};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "brief")]
#[command(version)]
#[command(about = "Project-brief concierge CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Extra system prompt appended to the built-in persona
    #[arg(long)]
    system_prompt: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Generate a project brief from a business idea
    Generate {
        /// The business idea to turn into a brief
        #[arg(short, long)]
        prompt: String,

        /// Override the model from config
        #[arg(short, long)]
        model: Option<String>,

        /// Print the raw response text without rendering
        #[arg(long)]
        raw: bool,
    },

    /// Render brief markup from a file (or stdin) to the terminal
    Render {
        /// Input file; reads stdin when omitted
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Send a consultation inquiry
    Inquire {
        /// Full name
        #[arg(long)]
        name: String,
        /// Contact email
        #[arg(long)]
        email: String,
        /// Contact phone (optional)
        #[arg(long)]
        phone: Option<String>,
        /// Service category
        #[arg(long)]
        category: String,
        /// Project details
        #[arg(long)]
        details: String,
        /// Print channel URLs instead of opening them
        #[arg(long)]
        dry_run: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Show the effective configuration
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let mut config = config::Config::load().context("load config")?;

    if let Some(sp) = cli.system_prompt.as_deref() {
        let trimmed = sp.trim();
        config.system_prompt = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    match cli.command {
        Commands::Generate { prompt, model, raw } => {
            if let Some(model) = model {
                config.model = model;
            }
            commands::generate::run(&prompt, &config, raw).await
        }
        Commands::Render { file } => commands::render::run(file.as_deref()),
        Commands::Inquire {
            name,
            email,
            phone,
            category,
            details,
            dry_run,
        } => {
            let inquiry = brief_core::inquiry::Inquiry {
                name,
                email,
                phone,
                category,
                details,
            };
            commands::inquire::run(&inquiry, &config.inquiry, dry_run)
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Show => commands::config::show(&config),
        },
    }
}
