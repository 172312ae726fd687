//! Output shared by the subcommands.

use clap::ValueEnum;
use pinch_zoom_options::{Options, OptionsError, ResolvedOptions, load_file};
use std::path::Path;

/// Encoding for printed option sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Ron,
}

impl OutputFormat {
    pub fn render(self, resolved: &ResolvedOptions) -> Result<String, OptionsError> {
        match self {
            OutputFormat::Json => resolved.to_json_pretty(),
            OutputFormat::Ron => resolved.to_ron_pretty(),
        }
    }
}

/// Logs every advisory for `options`, prefixed with where they came from.
pub fn warn_advisories(origin: &str, options: &Options) {
    for advisory in options.advisories() {
        log::warn!("{origin}: {advisory}");
    }
}

/// Loads and validates one file, reporting the outcome. Returns whether it passed.
pub fn check(path: &Path) -> bool {
    match load_file(path) {
        Ok(options) => {
            warn_advisories(&path.display().to_string(), &options);

            let keys = options.set_keys();
            if keys.is_empty() {
                println!("ok: {} (no options set)", path.display());
            } else {
                println!("ok: {} ({})", path.display(), keys.join(", "));
            }

            let resolved = options.resolve();
            if resolved.background_rgba().is_none() {
                log::info!(
                    "{}: backgroundColor `{}` is passed through undecoded",
                    path.display(),
                    resolved.background_color
                );
            }
            true
        }
        Err(err) => {
            log::error!("{err}");
            false
        }
    }
}
