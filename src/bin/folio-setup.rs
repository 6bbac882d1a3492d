use std::{env, io, process::ExitCode};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio::setup::{self, SetupError, Summary, SystemRunner};

/// Only a missing manifest fails the process; everything else was already
/// reported on the status lines.
fn exit_status(result: &Result<Summary, SetupError>) -> u8 {
    match result {
        Ok(summary) => {
            tracing::debug!(?summary, "setup finished");
            0
        }
        Err(SetupError::MissingManifest(_)) => 1,
    }
}

fn main() -> anyhow::Result<ExitCode> {
    // Status lines own stdout, so diagnostics go to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("folio=warn".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let root = env::current_dir()?;
    let result = setup::run(&root, &SystemRunner, io::stdout().lock());

    Ok(ExitCode::from(exit_status(&result)))
}
