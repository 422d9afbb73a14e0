use clap::Parser;
use ferrous_dig_domain::DomainError;
use std::process::ExitCode;
use tracing::debug;

mod args;
mod bootstrap;
mod di;
mod output;

use args::Cli;
use output::Report;

/// Exit status for invocations rejected before any query is sent.
const USAGE_EXIT_CODE: u8 = 2;
const FAILURE_EXIT_CODE: u8 = 1;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // the only place a failure reaches stderr outside of tracing
            eprintln!("{}", failure_message(&e));
            ExitCode::from(exit_status(&e))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.cli_overrides())?;

    bootstrap::init_logging(&config);

    let services = di::LookupServices::new(&config);
    let request = cli.lookup_request();

    let outcome = match services.lookup.execute(&request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!(error = %e, query = %request.target, "Lookup failed");
            return Err(e.into());
        }
    };

    debug!(
        server = %outcome.server,
        bootstrapped = outcome.bootstrapped,
        "Printing reply"
    );
    print!("{}", Report(&outcome.message));
    Ok(())
}

fn failure_message(error: &anyhow::Error) -> String {
    format!("ferrous-dig: {:#}", error)
}

fn exit_status(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<DomainError>() {
        Some(e) if e.is_argument_error() => USAGE_EXIT_CODE,
        _ => FAILURE_EXIT_CODE,
    }
}
