use clap::Parser;
use sdkver_flutter::FlutterProject;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Print the Flutter and Dart SDK versions a project targets, as JSON.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Flutter project directory
    #[arg(default_value = ".")]
    project_dir: PathBuf,

    /// Print the report on a single line
    #[arg(long)]
    compact: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    tracing::debug!("Resolving SDK versions in {}", cli.project_dir.display());

    let project = FlutterProject::from_dir(&cli.project_dir);
    let report = project.sdk_versions()?;

    let output = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["sdkver"]);
        assert_eq!(cli.project_dir, PathBuf::from("."));
        assert!(!cli.compact);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_args() {
        let cli = Cli::parse_from(["sdkver", "app", "--compact", "--log-level", "debug"]);
        assert_eq!(cli.project_dir, PathBuf::from("app"));
        assert!(cli.compact);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_run_on_empty_directory() {
        let temp_dir = tempfile::tempdir().unwrap();

        let cli = Cli::parse_from([
            OsStr::new("sdkver"),
            temp_dir.path().as_os_str(),
            OsStr::new("--compact"),
        ]);
        let output = run(&cli).unwrap();
        assert_eq!(output, r#"{"FlutterSDKVersions":[],"DartSDKVersions":[]}"#);
    }

    #[test]
    fn test_run_reports_errors() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("pubspec.yaml"), "environment: [\n").unwrap();

        let cli = Cli::parse_from([OsStr::new("sdkver"), temp_dir.path().as_os_str()]);
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("pubspec.yaml"));
    }
}
