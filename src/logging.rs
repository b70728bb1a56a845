use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file.
pub const LOG_ENV_VAR: &str = "NEWSBIAS_LOG";

const DEFAULT_FILTER: &str = "info";

/// Install the file subscriber if `NEWSBIAS_LOG` is set.
///
/// Nothing is ever written to stdout or stderr while the TUI runs. Returns
/// the file actually written to; `RUST_LOG` filters as usual.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var_os(LOG_ENV_VAR)?;
    let path = instance_log_path(Path::new(&base), unix_now(), std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot open log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(log = %path.display(), "logging to file");
    Some(path)
}

/// `{base}.{unix_secs}.{pid}`, one file per running instance.
fn instance_log_path(base: &Path, unix_secs: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{unix_secs}.{pid}"));
    PathBuf::from(name)
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
