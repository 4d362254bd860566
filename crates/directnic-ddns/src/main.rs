// # directnic-ddns
//
// One-shot dynamic-DNS updater for Directnic-style endpoints.
//
// This binary is a thin integration layer:
// 1. Installing the tracing subscriber
// 2. Loading `directnic_ddns.toml` from the search directories
//    (working directory, then /etc)
// 3. Wiring the HTTP address source and update target into the pipeline
// 4. Running the pipeline once and mapping the outcome to an exit code
//
// All workflow logic lives in directnic-core; the HTTP plumbing lives in
// directnic-http. There are no CLI flags: the settings file is the only
// configuration surface.

use std::process::ExitCode;

use anyhow::Result;
use tracing::error;
use tracing_subscriber::EnvFilter;

use directnic_core::config;
use directnic_core::pipeline::UpdatePipeline;
use directnic_core::Settings;
use directnic_http::{DirectnicTarget, HttpAddressSource};

/// Exit codes for the different termination scenarios
///
/// A rejected update exits cleanly: it is reported in the logs but, like
/// every run that got past address resolution, the process still reaches
/// its completion line.
#[derive(Debug, Clone, Copy)]
enum UpdaterExitCode {
    /// Run completed
    Clean = 0,
    /// Settings file missing or invalid
    ConfigError = 1,
    /// Runtime failure (address resolution, runtime setup)
    RuntimeError = 2,
}

impl From<UpdaterExitCode> for ExitCode {
    fn from(code: UpdaterExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(e) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("Failed to set tracing subscriber: {e}");
        return UpdaterExitCode::RuntimeError.into();
    }

    // Settings are read before the runtime exists; a config failure
    // therefore never opens a network connection.
    let settings = match config::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!("{e}");
            return UpdaterExitCode::ConfigError.into();
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            error!("failed to create tokio runtime: {e}");
            return UpdaterExitCode::RuntimeError.into();
        }
    };

    match rt.block_on(run(settings)) {
        Ok(()) => UpdaterExitCode::Clean.into(),
        Err(_) => UpdaterExitCode::RuntimeError.into(),
    }
}

/// Run one update pass with the HTTP implementations wired in.
///
/// Failures are already logged by the pipeline; the caller only maps the
/// result to an exit code.
async fn run(settings: Settings) -> Result<()> {
    let source = HttpAddressSource::new();
    let target = DirectnicTarget::new(settings.update_url);

    let (pipeline, _events) = UpdatePipeline::new(Box::new(source), Box::new(target));
    pipeline.run().await?;

    Ok(())
}
