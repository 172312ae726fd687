//! Reading option files from disk.

use crate::options::Options;
use crate::validate::OptionsError;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory under the platform config dir holding the per-user options file.
pub const CONFIG_DIR_NAME: &str = "pinch-zoom";

/// Base name of the per-user options file.
pub const CONFIG_FILE_STEM: &str = "options";

/// Errors that can occur when loading an options file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unsupported options file {}, expected a .json or .ron extension", path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("{}: {source}", path.display())]
    Invalid {
        path: PathBuf,
        source: OptionsError,
    },
}

/// Encodings an options file can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Ron,
}

impl Format {
    /// Picks the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Format::Json),
            "ron" => Some(Format::Ron),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Ron => "ron",
        }
    }

    /// Parses and validates `input` in this format.
    pub fn parse(self, input: &str) -> Result<Options, OptionsError> {
        match self {
            Format::Json => Options::from_json(input),
            Format::Ron => Options::from_ron(input),
        }
    }
}

/// Loads and validates an options file, choosing the format by extension.
pub fn load_file(path: &Path) -> Result<Options, LoadError> {
    let format = Format::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let contents = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let options = format.parse(&contents).map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "loaded {} option(s) from {}",
        options.set_keys().len(),
        path.display()
    );
    Ok(options)
}

/// Returns the per-user options file: `options.ron` in the config directory,
/// or `options.json` when only that one exists.
pub fn default_path() -> Option<PathBuf> {
    let dir = dirs::config_dir()?.join(CONFIG_DIR_NAME);
    Some(pick_in_dir(&dir))
}

fn pick_in_dir(dir: &Path) -> PathBuf {
    let ron = dir.join(format!("{CONFIG_FILE_STEM}.{}", Format::Ron.extension()));
    let json = dir.join(format!("{CONFIG_FILE_STEM}.{}", Format::Json.extension()));
    if !ron.exists() && json.exists() {
        json
    } else {
        ron
    }
}
