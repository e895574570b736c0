//! Check a port stats report before restart

use std::io;
use std::path::Path;

use anyhow::Context;
use log::{error, warn};

use portgate::adapters::{FileReport, TextReport};
use portgate::config::Config;
use portgate::core::ports::ReportSource;
use portgate::core::services::{PortCheck, check_source};
use portgate::error::CheckError;
use portgate::output::{CheckReport, OutputMode, USAGE_MESSAGE};

/// Argument value that reads the report from stdin
const STDIN_ARG: &str = "-";

/// Check one port and render the verdict
///
/// Returns `true` only when the restart is allowed. A missing argument,
/// input and config failures are rendered like a blocked verdict and
/// return `false`.
pub fn check(
    stats_file: Option<&str>,
    config: Option<&Path>,
    mode: OutputMode,
) -> anyhow::Result<bool> {
    let report = match stats_file.map(|file| run_check(file, config)) {
        None => {
            warn!("no stats file given");
            CheckReport::failure(USAGE_MESSAGE)
        },
        Some(Ok(check)) => CheckReport::from(&check),
        Some(Err(err)) => {
            error!("{err}");
            CheckReport::from(&err)
        },
    };

    report.write(mode, &mut io::stdout().lock()).context("failed to write check result")?;
    Ok(report.can_restart)
}

fn run_check(stats_file: &str, config: Option<&Path>) -> Result<PortCheck, CheckError> {
    // A missing report must win over a broken config.
    let source: Box<dyn ReportSource> = if stats_file == STDIN_ARG {
        Box::new(TextReport::stdin()?)
    } else {
        Box::new(FileReport::open(stats_file)?)
    };

    let config = Config::load(config)?;
    check_source(source.as_ref(), &config.policy)
}
