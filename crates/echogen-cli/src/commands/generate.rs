//! The default action: generate a feature slice.
//!
//! Responsibility: translate CLI arguments into a `ScaffoldService` call and
//! display the resulting report. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use echogen_adapters::LocalFilesystem;
use echogen_core::application::{FileOutcome, FileStatus, GenerationReport, ScaffoldService};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the generate action.
///
/// Per-file write failures are printed as warnings but do not change the exit
/// status; only validation and fatal directory failures surface as `Err`.
#[instrument(skip_all, fields(feature = %args.feature_name()))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let base_dir = resolve_base_dir(&args, &config);
    debug!(base_dir = ?base_dir, "Base directory resolved");

    let mut service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    if let Some(dir) = base_dir {
        service = service.with_base_dir(dir);
    }

    let feature = args.feature_name();

    if args.dry_run {
        return dry_run(&service, feature, &output);
    }

    if let Some(filename) = args.only.as_deref() {
        let outcome = service.generate_one(feature, filename)?;
        return show_outcome(&outcome, &output);
    }

    let report = service.generate_all(feature)?;
    show_report(&report, &output)
}

/// `--dir` wins over `generate.output_dir`; neither means the working
/// directory.
fn resolve_base_dir(args: &GenerateArgs, config: &AppConfig) -> Option<PathBuf> {
    args.dir
        .clone()
        .or_else(|| config.generate.output_dir.clone())
}

#[derive(Serialize)]
struct Plan<'a> {
    feature: &'a str,
    dry_run: bool,
    paths: Vec<PathBuf>,
}

fn dry_run(service: &ScaffoldService, feature: &str, output: &OutputManager) -> CliResult<()> {
    let paths = service.plan(feature)?;

    if output.format() == OutputFormat::Json {
        return output.json(&Plan {
            feature,
            dry_run: true,
            paths,
        });
    }

    output.info(&format!("Dry run: would write {} files", paths.len()))?;
    for path in &paths {
        output.print(&format!("  {}", path.display()))?;
    }
    Ok(())
}

fn show_outcome(outcome: &FileOutcome, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(outcome);
    }

    match &outcome.status {
        FileStatus::Written => output.success(&format!("Wrote {}", outcome.path.display()))?,
        FileStatus::Failed { reason } => {
            output.warning(&format!("{}: {reason}", outcome.path.display()))?
        }
    }
    Ok(())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(report);
    }

    for failed in report.failed() {
        if let FileStatus::Failed { reason } = &failed.status {
            output.warning(&format!("{}: {reason}", failed.path.display()))?;
        }
    }

    let written = report.written().count();
    let total = report.files.len();
    if report.is_complete() {
        output.success(&format!(
            "Feature '{}' generated in {}",
            report.feature,
            report.directory.display()
        ))?;
    } else {
        output.warning(&format!(
            "Feature '{}': {written} of {total} files written to {}",
            report.feature,
            report.directory.display()
        ))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(dir: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            feature: Some("order".into()),
            dry_run: false,
            only: None,
            dir: dir.map(PathBuf::from),
        }
    }

    #[test]
    fn flag_dir_wins_over_config() {
        let mut config = AppConfig::default();
        config.generate.output_dir = Some(PathBuf::from("from-config"));

        assert_eq!(
            resolve_base_dir(&args(Some("from-flag")), &config),
            Some(PathBuf::from("from-flag"))
        );
    }

    #[test]
    fn config_dir_used_without_flag() {
        let mut config = AppConfig::default();
        config.generate.output_dir = Some(PathBuf::from("from-config"));

        assert_eq!(
            resolve_base_dir(&args(None), &config),
            Some(PathBuf::from("from-config"))
        );
    }

    #[test]
    fn no_dir_means_working_directory() {
        assert_eq!(resolve_base_dir(&args(None), &AppConfig::default()), None);
    }
}
