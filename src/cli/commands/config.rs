//! `clickup-importer config` command - Inspect configuration
//!
//! Values are read from the global file, the local `.clickup-importer.yaml`
//! and `CLICKUP_*` environment variables; command-line flags override all of them.

use clap::Subcommand;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::path::{Path, PathBuf};

use crate::core::config::{ENV_API_TOKEN, ENV_BASE_URL, ENV_LIST_ID, LOCAL_CONFIG_FILE};
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration (token masked)
    Show,

    /// Show paths to configuration files
    Path,
}

pub fn run(cmd: ConfigCommands) -> Result<()> {
    match cmd {
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_show() -> Result<()> {
    let config = Config::load();

    println!("{}", style("Effective Configuration").bold().underlined());
    println!();

    let timeout = config.timeout().as_secs().to_string();
    let subtask_mode = config.subtask_mode().to_string();
    print_config_value("api_token", config.masked_token().as_deref());
    print_config_value("list_id", config.list_id.as_deref());
    print_config_value("base_url", Some(config.base_url()));
    print_config_value("timeout_secs", Some(&timeout));
    print_config_value("subtask_mode", Some(&subtask_mode));

    println!();
    println!("{}", style("Config Sources (in priority order):").dim());
    println!("  1. Command-line flags");
    println!(
        "  2. Environment variables ({}, {}, {})",
        ENV_API_TOKEN, ENV_LIST_ID, ENV_BASE_URL
    );
    println!("  3. Local config ({})", LOCAL_CONFIG_FILE);
    println!("  4. Global config (~/.config/clickup-importer/config.yaml)");

    Ok(())
}

fn run_path() -> Result<()> {
    let global_path = Config::global_config_path()
        .ok_or_else(|| miette::miette!("Could not determine the user config directory"))?;
    let local_path = local_config_path()?;

    println!("{}", style("Configuration file paths:").bold());
    println!();
    print_path("Global:", &global_path);
    print_path("Local: ", &local_path);

    Ok(())
}

fn local_config_path() -> Result<PathBuf> {
    Ok(std::env::current_dir()
        .into_diagnostic()?
        .join(LOCAL_CONFIG_FILE))
}

fn print_path(label: &str, path: &Path) {
    println!("  {} {}", style(label).cyan(), path.display());
    if path.exists() {
        println!("         {}", style("(exists)").green());
    } else {
        println!("         {}", style("(not created)").dim());
    }
}

fn print_config_value(key: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("  {}: {}", style(key).cyan(), style(v).yellow());
    } else {
        println!("  {}: {}", style(key).cyan(), style("(not set)").dim());
    }
}
