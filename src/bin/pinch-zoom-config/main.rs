mod report;
mod watcher;

use clap::{Parser, Subcommand};
use pinch_zoom_options::loader::{self, LoadError};
use pinch_zoom_options::{Options, OptionsError, ResolvedOptions, load_file};
use report::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use watcher::OptionsWatcher;

/// Check and resolve option files for the pan/zoom image viewer.
#[derive(Parser, Debug)]
#[command(name = "pinch-zoom-config", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate option files and report advisories
    Check {
        #[arg(required = true, value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
    /// Print the effective options after applying defaults
    Resolve {
        /// Options file (.json or .ron); defaults to the per-user file when it exists
        path: Option<PathBuf>,
        /// Override a key using its wire name, e.g. --set wheel=false
        #[arg(long = "set", value_name = "KEY=VALUE")]
        overrides: Vec<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Print the defaults applied to absent keys
    Defaults {
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
    /// Re-check an options file every time it changes
    Watch {
        /// Options file; defaults to the per-user file
        path: Option<PathBuf>,
    },
}

/// Errors that end a command early.
#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error("failed to watch options file: {0}")]
    Watch(#[from] notify::Error),
    #[error("no options file given and no configuration directory is available")]
    NoDefaultPath,
}

fn run(command: Command) -> Result<ExitCode, CliError> {
    match command {
        Command::Check { paths } => {
            let failures = paths.iter().filter(|path| !report::check(path)).count();
            if failures > 0 {
                log::error!("{failures} of {} file(s) failed", paths.len());
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Resolve {
            path,
            overrides,
            format,
        } => {
            let base = match path {
                Some(path) => load_file(&path)?,
                None => match loader::default_path() {
                    Some(path) if path.exists() => {
                        log::info!("Using {}", path.display());
                        load_file(&path)?
                    }
                    _ => Options::default(),
                },
            };

            let options = base.layer(Options::from_overrides(&overrides)?);
            report::warn_advisories("resolved options", &options);
            println!("{}", format.render(&options.resolve())?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Defaults { format } => {
            println!("{}", format.render(&ResolvedOptions::default())?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Watch { path } => {
            let path = path
                .or_else(loader::default_path)
                .ok_or(CliError::NoDefaultPath)?;
            let watcher = OptionsWatcher::new(&path)?;

            if path.exists() {
                report::check(&path);
            }
            while watcher.wait_for_change() {
                report::check(&path);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
