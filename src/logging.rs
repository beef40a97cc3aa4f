//! Diagnostic logging to a file.
//!
//! The terminal belongs to the UI, so log output never goes to stdout or stderr. When a log file
//! is requested, events are written to it through a non-blocking appender; otherwise no
//! subscriber is installed and every `tracing` macro is a no-op. `RUST_LOG` overrides the
//! default `folio=debug` filter.

use crate::error::Result;
use std::fs;
use std::io;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "folio=debug";

/// Installs the global subscriber writing to `path`, if one is given.
///
/// The returned guard flushes buffered events when dropped and must be held until exit.
///
/// # Errors
///
/// Returns an error if `path` has no file name, its directory cannot be created, or a global
/// subscriber is already installed.
pub fn init(path: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = path else {
        return Ok(None);
    };

    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("log path {} has no file name", path.display()),
        )
    })?;
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(io::Error::other)?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(guard))
}

#[cfg(test)]
mod tests {
    use super::init;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_path_installs_nothing() {
        assert!(init(None).unwrap().is_none());
    }

    #[test]
    fn test_writes_to_requested_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("folio.log");

        let guard = init(Some(&path)).unwrap();
        assert!(guard.is_some());
        tracing::info!("hello from the test");
        drop(guard);

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("logging started"), "{contents}");
    }
}
