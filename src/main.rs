use clap::{error::ErrorKind, Parser};
use pipescores::{run, Cli, Config, EXIT_USAGE};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let summary = run(&config);
    if let Err(e) = summary.report(&mut std::io::stdout(), &mut std::io::stderr()) {
        eprintln!("error: {}", e);
    }

    ExitCode::from(summary.exit_code())
}
