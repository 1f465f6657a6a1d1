mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use spdx_sq::adapters::outbound::console::StderrProgressReporter;
use spdx_sq::adapters::outbound::filesystem::FileSystemReader;
use spdx_sq::application::dto::QueryRequest;
use spdx_sq::application::factories::{PresenterFactory, PresenterType};
use spdx_sq::application::use_cases::RunQueryUseCase;
use spdx_sq::ports::outbound::{ProgressReporter, SbomLocator};
use spdx_sq::shared::error::{ExitCode, SqError};
use spdx_sq::shared::Result;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let args = match Args::try_parse_args() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also arrive here, on stdout
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    let cwd = std::env::current_dir()?;

    let progress_reporter = if args.quiet {
        StderrProgressReporter::quiet()
    } else {
        StderrProgressReporter::new()
    };

    // Settings: explicit file must exist, discovered file is optional
    let (settings, settings_dir) = match &args.settings {
        Some(path) => (
            config::load_config_from_path(path)?,
            path.parent().map(Path::to_path_buf).unwrap_or_default(),
        ),
        None => match config::discover_config(&cwd)? {
            Some(settings) => {
                progress_reporter.report(&format!(
                    "📄 Auto-discovered settings file: {}",
                    config::CONFIG_FILENAME
                ));
                (settings, cwd.clone())
            }
            None => (ConfigFile::default(), cwd.clone()),
        },
    };

    let locator = FileSystemReader::new();
    let sbom_path = resolve_sbom_path(
        &args,
        &settings,
        &settings_dir,
        &cwd,
        &locator,
        &progress_reporter,
    )?;

    if let Some(output) = &args.output {
        if same_file(output, &sbom_path) {
            return Err(SqError::Validation {
                message: format!(
                    "Output file {} would overwrite the SBOM being queried",
                    output.display()
                ),
            }
            .into());
        }
    }

    let (query, explicit_limit) = args.command.query();
    let limit = explicit_limit.or(settings.limit);
    let color = use_color(&args, &settings);
    tracing::debug!(%query, ?limit, color, sbom = %sbom_path.display(), "running query");

    let use_case = RunQueryUseCase::new(FileSystemReader::new(), progress_reporter);
    let response = use_case.execute(QueryRequest::new(sbom_path, query, limit, color))?;

    if response.has_content() {
        let presenter = PresenterFactory::create(PresenterType::for_output(args.output));
        presenter.present(&response.content)?;
    }

    Ok(())
}

/// SBOM precedence: `--config`, then the settings `sbom` key, then discovery
fn resolve_sbom_path(
    args: &Args,
    settings: &ConfigFile,
    settings_dir: &Path,
    cwd: &Path,
    locator: &impl SbomLocator,
    progress_reporter: &impl ProgressReporter,
) -> Result<PathBuf> {
    if let Some(path) = &args.sbom {
        return locator.validate(path);
    }

    if let Some(path) = &settings.sbom {
        return locator.validate(&settings_dir.join(path));
    }

    progress_reporter.report(&format!(
        "🔍 No SBOM file given; searching {} for an SPDX JSON document",
        cwd.display()
    ));
    locator.discover(cwd)
}

/// `--no-color` wins, then the settings file, then terminal detection
fn use_color(args: &Args, settings: &ConfigFile) -> bool {
    if args.no_color || args.output.is_some() {
        return false;
    }
    if let Some(color) = settings.color {
        return color;
    }
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    const SPDX: &str = r#"{"SPDXID": "SPDXRef-DOCUMENT", "spdxVersion": "SPDX-2.3"}"#;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_resolve_sbom_prefers_cli_path() {
        let dir = TempDir::new().unwrap();
        let cli_path = dir.path().join("cli.spdx.json");
        let settings_path = dir.path().join("settings.spdx.json");
        fs::write(&cli_path, SPDX).unwrap();
        fs::write(&settings_path, SPDX).unwrap();

        let cli_arg = cli_path.to_string_lossy().to_string();
        let args = parse(&["sq", "-c", &cli_arg, "meta"]);
        let settings = ConfigFile {
            sbom: Some(settings_path.clone()),
            ..Default::default()
        };

        let resolved = resolve_sbom_path(
            &args,
            &settings,
            dir.path(),
            dir.path(),
            &FileSystemReader::new(),
            &StderrProgressReporter::quiet(),
        )
        .unwrap();
        assert_eq!(resolved, cli_path);
    }

    #[test]
    fn test_resolve_sbom_uses_settings_relative_to_settings_dir() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("boms")).unwrap();
        fs::write(dir.path().join("boms/app.spdx.json"), SPDX).unwrap();

        let args = parse(&["sq", "meta"]);
        let settings = ConfigFile {
            sbom: Some(PathBuf::from("boms/app.spdx.json")),
            ..Default::default()
        };

        let resolved = resolve_sbom_path(
            &args,
            &settings,
            dir.path(),
            Path::new("/nonexistent"),
            &FileSystemReader::new(),
            &StderrProgressReporter::quiet(),
        )
        .unwrap();
        assert_eq!(resolved, dir.path().join("boms/app.spdx.json"));
    }

    #[test]
    fn test_resolve_sbom_falls_back_to_discovery() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.json"), "{}").unwrap();
        fs::write(dir.path().join("sbom.json"), SPDX).unwrap();

        let args = parse(&["sq", "files"]);
        let resolved = resolve_sbom_path(
            &args,
            &ConfigFile::default(),
            dir.path(),
            dir.path(),
            &FileSystemReader::new(),
            &StderrProgressReporter::quiet(),
        )
        .unwrap();
        assert_eq!(resolved, dir.path().join("sbom.json"));
    }

    #[test]
    fn test_use_color_no_color_flag_wins() {
        let args = parse(&["sq", "--no-color", "meta"]);
        let settings = ConfigFile {
            color: Some(true),
            ..Default::default()
        };
        assert!(!use_color(&args, &settings));
    }

    #[test]
    fn test_use_color_settings_override() {
        let args = parse(&["sq", "meta"]);
        let settings = ConfigFile {
            color: Some(true),
            ..Default::default()
        };
        assert!(use_color(&args, &settings));
    }

    #[test]
    fn test_use_color_disabled_for_file_output() {
        let args = parse(&["sq", "-o", "report.txt", "meta"]);
        let settings = ConfigFile {
            color: Some(true),
            ..Default::default()
        };
        assert!(!use_color(&args, &settings));
    }

    #[test]
    fn test_same_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.json");
        fs::write(&path, SPDX).unwrap();

        assert!(same_file(&path, &dir.path().join(".").join("a.json")));
        assert!(!same_file(&path, &dir.path().join("missing.json")));
    }
}
