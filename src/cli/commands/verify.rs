//! `clickup-importer verify` command - Pre-flight check of token and list

use console::style;
use miette::Result;

use crate::cli::helpers::api_settings;
use crate::cli::ApiArgs;
use crate::core::config::mask_secret;
use crate::core::{ClickUpClient, Config};

#[derive(clap::Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub api: ApiArgs,
}

pub fn run(args: VerifyArgs) -> Result<()> {
    let config = Config::load();
    let settings = api_settings(&args.api, &config)?;
    let token = mask_secret(&settings.api_token);

    let client = ClickUpClient::new(settings)?;
    let list_name = client.verify_access()?;

    println!(
        "{} Token {} accepted",
        style("✓").green(),
        style(token).dim()
    );
    println!(
        "{} List {} found: {}",
        style("✓").green(),
        style(client.list_id()).cyan(),
        style(list_name).bold()
    );

    Ok(())
}
