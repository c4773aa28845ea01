//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so log lines go to a file. The filter comes
//! from `RUST_LOG` and defaults to `info`.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Build the level filter from `RUST_LOG`-style `directives`.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Open `path` for appending, creating its directory if needed.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber writing plain text to `path`.
///
/// Fails if the file cannot be opened or a subscriber is already set.
pub fn init_logging(path: &Path) -> Result<()> {
    let file = open_log_file(path)?;
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref());

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_file = %path.display(),
        "Logging initialized"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_defaults_to_info() {
        assert_eq!(build_filter(None).to_string(), "info");
        assert_eq!(build_filter(Some("  ")).to_string(), "info");
    }

    #[test]
    fn test_build_filter_uses_directives() {
        assert_eq!(build_filter(Some("triagem=debug")).to_string(), "triagem=debug");
    }

    #[test]
    fn test_open_log_file_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("triagem.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }
}
