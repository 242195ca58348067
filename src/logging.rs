// Conditional logging macros - only active in debug builds

use chrono::Local;
use env_logger::{Builder, Env, Target};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{}};
}

#[cfg(debug_assertions)]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        log::info!($($arg)*);
    };
}

#[cfg(not(debug_assertions))]
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {{}};
}

const LOG_DIR: &str = "word-guess";
const LOG_FILE: &str = "word-guess.log";

#[must_use]
pub fn get_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(LOG_DIR).join(LOG_FILE))
}

fn open_log_file(path: &Path) -> std::io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize env_logger, honouring `RUST_LOG` (default `info`).
///
/// Records go to the log file so the console and TUI stay clean. When the
/// file cannot be opened, records go to stderr unless `allow_stderr` is
/// false (the TUI owns the terminal). Returns the log file path in use.
pub fn init_logging(allow_stderr: bool) -> Option<PathBuf> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} [{}] {}: {}",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    let path = get_log_path();
    let file = path.as_ref().and_then(|p| open_log_file(p).ok());
    let used_path = match file {
        Some(file) => {
            builder.target(Target::Pipe(Box::new(file)));
            path
        }
        None if allow_stderr => {
            builder.target(Target::Stderr);
            builder.filter_level(log::LevelFilter::Warn);
            None
        }
        None => {
            builder.filter_level(log::LevelFilter::Off);
            None
        }
    };

    // Already initialized (tests, repeated calls) is not an error.
    let _ = builder.try_init();
    used_path
}
