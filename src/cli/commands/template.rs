//! `clickup-importer template` command - Print a starter CSV

use console::style;
use miette::{IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;

use crate::import::template::render_template;

#[derive(clap::Args, Debug)]
pub struct TemplateArgs {
    /// Write the template to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: TemplateArgs) -> Result<()> {
    let template = render_template().into_diagnostic()?;

    match args.output {
        Some(path) => {
            fs::write(&path, &template).into_diagnostic()?;
            println!(
                "{} Template written to {}",
                style("✓").green(),
                style(path.display()).yellow()
            );
        }
        None => {
            print!("{}", template);
            // Hint goes to stderr so redirected output stays a clean CSV
            eprintln!();
            eprintln!(
                "{} Template generated. Redirect to file: clickup-importer template > tasks.csv",
                style("→").blue()
            );
        }
    }

    Ok(())
}
