use std::process::ExitCode;

use clap::Parser;

use stockkeep_cli::Cli;

fn main() -> ExitCode {
    stockkeep_observability::init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match stockkeep_cli::run(cli, &mut stdout) {
        Ok(outcome) => outcome.exit_code(),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
