use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use keysmith::export::ExportFormat;
use keysmith::generator::Strategy;
use keysmith::vocabulary::Complexity;

mod cmd;

#[derive(Parser)]
#[command(name = "keysmith")]
#[command(version, about = "Marketing keyword generator")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,

    /// Path to a config file. Defaults to keysmith.toml in the project directory.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate keywords for a product category
    Generate(GenerateArgs),
    /// Show the vocabulary eligible for a language and complexity
    Vocab {
        /// Language tag (es, en, pt). Shows every language if omitted.
        #[arg(short, long)]
        language: Option<String>,

        #[arg(short, long, value_enum, default_value = "advanced")]
        complexity: Complexity,
    },
    /// View or validate configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Args, Clone)]
pub struct GenerateArgs {
    /// Product category or base phrase, e.g. "zapatillas"
    pub base: String,

    /// Language tag (es, en, pt)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Number of keywords to generate
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Maximum words per keyword, base phrase included
    #[arg(short = 'w', long)]
    pub max_words: Option<usize>,

    #[arg(short, long, value_enum)]
    pub complexity: Option<Complexity>,

    #[arg(long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Output format. Guessed from --output's extension when omitted.
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Seed for reproducible local generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Market/country context for the remote strategy
    #[arg(long)]
    pub country: Option<String>,

    /// Review each batch and choose to accept or regenerate it
    #[arg(short, long)]
    pub interactive: bool,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Validate configuration and show any warnings
    Validate,
    /// Initialize a default keysmith.toml file
    Init,
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .with_env_var("KEYSMITH_LOG")
                .from_env_lossy(),
        )
        .try_init()
        .context("Failed to initialize logging")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Credentials for the remote strategy may live in a local .env file.
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose)?;

    let project_dir = match cli.project_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get current directory")?,
    };

    match &cli.command {
        Commands::Generate(args) => {
            cmd::cmd_generate(&project_dir, cli.config.as_deref(), args, cli.verbose)?;
        }
        Commands::Vocab {
            language,
            complexity,
        } => cmd::cmd_vocab(language.as_deref(), *complexity)?,
        Commands::Config { command } => {
            cmd::cmd_config(&project_dir, cli.config.as_deref(), command.clone())?
        }
    }

    Ok(())
}
