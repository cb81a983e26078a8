use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use traystencil::cli::{Cli, Commands};
use traystencil::commands;

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "traystencil=debug",
        _ => "traystencil=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Init => commands::init::run(&cli),
        Commands::Generate {
            source,
            dest,
            settings,
        } => commands::generate::run(source, dest, settings),
        Commands::Build {
            dry_run,
            only,
            force,
        } => commands::build::run(&cli, *dry_run, only.clone(), *force),
        Commands::Check => commands::check::run(&cli),
        Commands::Inspect { source, settings } => commands::inspect::run(source, settings),
        Commands::Rename { old_key, new_key } => commands::rename::run(&cli, old_key, new_key),
    }
}
