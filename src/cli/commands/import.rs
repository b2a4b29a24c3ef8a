//! `clickup-importer import` command - Create ClickUp tasks from a CSV file

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::import_options;
use crate::cli::{ApiArgs, GlobalOpts};
use crate::core::config::SubtaskMode;
use crate::core::Config;
use crate::import::{print_row_progress, render_details, render_summary, run_import, ResultsWriter};

#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// CSV file with one task per row (must have a `name` column)
    pub csv_file: PathBuf,

    #[command(flatten)]
    pub api: ApiArgs,

    /// Map and report every row without calling the API
    #[arg(long)]
    pub dry_run: bool,

    /// Write per-row results (original columns plus status) to this CSV file
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// How subtasks are created
    #[arg(long, value_enum)]
    pub subtask_mode: Option<SubtaskMode>,
}

pub fn run(args: ImportArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let options = import_options(
        args.csv_file,
        &args.api,
        &config,
        args.dry_run,
        global.verbose,
        args.output,
        args.subtask_mode,
    )?;

    println!(
        "{} Importing tasks from {} to list {}{}",
        style("→").blue(),
        style(options.csv_file.display()).yellow(),
        style(&options.list_id).cyan(),
        if options.dry_run {
            style(" (dry run)").dim().to_string()
        } else {
            String::new()
        }
    );
    println!();

    // An unwritable output path is fatal, but only before any task exists
    let results_writer = options
        .output
        .as_deref()
        .map(ResultsWriter::create)
        .transpose()?;

    let dry_run = options.dry_run;
    let result = run_import(&options, |row| print_row_progress(row, dry_run))?;

    println!();
    print!("{}", render_summary(&result));

    if options.verbose && !result.rows().is_empty() {
        println!();
        println!("{}", render_details(&result));
    }

    if let Some(writer) = results_writer {
        let path = writer.path().to_path_buf();
        println!();
        match writer.write(&result) {
            Ok(()) => println!(
                "{} Results written to {}",
                style("✓").green(),
                style(path.display()).yellow()
            ),
            Err(e) => eprintln!("{} {}", style("✗").red(), e),
        }
    }

    Ok(())
}
