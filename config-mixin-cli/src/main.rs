//! CLI entrypoint for `merge-config`.

use std::process::ExitCode;

use clap::Parser;
use config_mixin_cli::cli::Args;
use config_mixin_cli::error::CliError;
use config_mixin_cli::settings::MergeSettings;
use config_mixin_cli::{logging, run, run_rejected};

fn main() -> ExitCode {
    let parsed = match Args::try_parse() {
        Err(err) if !err.use_stderr() => err.exit(),
        other => other,
    };
    let overrides = parsed.as_ref().map(Args::overrides).unwrap_or_default();
    let (settings, problem) = MergeSettings::resolve_or_fallback(&overrides);
    logging::init(settings.verbose);

    match invoke(&parsed, &settings, problem) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "merge-config failed");
            ExitCode::FAILURE
        }
    }
}

/// Settings failures are fatal only when `--strict` was given; a rejected
/// argument list is fatal only in strict mode.
fn invoke(
    parsed: &Result<Args, clap::Error>,
    settings: &MergeSettings,
    problem: Option<CliError>,
) -> Result<(), CliError> {
    if let Some(err) = problem {
        if settings.strict {
            return Err(err);
        }
        tracing::warn!(error = %err, "ignoring unusable environment settings");
    }
    let stdout = std::io::stdout().lock();
    match parsed {
        Ok(args) => run(args, settings, stdout),
        Err(err) if settings.strict => err.exit(),
        Err(err) => run_rejected(err, settings, stdout),
    }
}
