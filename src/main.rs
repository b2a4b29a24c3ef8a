use clap::Parser;
use clickup_importer::cli::{Cli, Commands};
use clickup_importer::core::logging::{init_logging, LogConfig};
use miette::Result;

fn main() -> Result<()> {
    // Terminate quietly on a closed pipe (`| head`) instead of panicking
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;
    init_logging(&LogConfig::from_verbose(global.verbose));

    match cli.command {
        Commands::Import(args) => clickup_importer::cli::commands::import::run(args, &global),
        Commands::Template(args) => clickup_importer::cli::commands::template::run(args),
        Commands::Verify(args) => clickup_importer::cli::commands::verify::run(args),
        Commands::Config(cmd) => clickup_importer::cli::commands::config::run(cmd),
        Commands::Completions(args) => clickup_importer::cli::commands::completions::run(args),
    }
}
