use clap::Parser;
use dtok::cli::{Cli, Commands};
use dtok::output::Printer;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let printer = if cli.quiet {
        Printer::quiet()
    } else {
        Printer::new()
    };

    match cli.command {
        Commands::Build(args) => dtok::cli::build::run(args, &printer)?,
        Commands::Validate(args) => dtok::cli::validate::run(args, &printer)?,
        Commands::CheckContrast(args) => {
            dtok::cli::contrast::run(args, &printer)?;
        }
        Commands::Completions(args) => dtok::cli::completions::run(args)?,
    }

    Ok(())
}

/// `RUST_LOG` wins; otherwise `-v` raises the default level from `warn`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dtok={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
