//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs, config::ConfigCommands, import::ImportArgs,
    template::TemplateArgs, verify::VerifyArgs,
};

#[derive(Parser)]
#[command(name = "clickup-importer")]
#[command(author, version, about = "Import tasks into ClickUp from a CSV file")]
#[command(
    long_about = "Reads a CSV file with one task per row and creates each task in a ClickUp list, reporting per-row success or failure."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Enable verbose output (debug logging and a per-row results table)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Connection options shared by commands that talk to ClickUp
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ApiArgs {
    /// Destination list ID (or CLICKUP_LIST_ID)
    #[arg(long, short = 'l')]
    pub list_id: Option<String>,

    /// ClickUp API token (or CLICKUP_API_TOKEN)
    #[arg(long)]
    pub api_token: Option<String>,

    /// API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Import tasks from a CSV file
    Import(ImportArgs),

    /// Print a CSV template with every recognized column
    Template(TemplateArgs),

    /// Check the API token and list ID without importing
    Verify(VerifyArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
