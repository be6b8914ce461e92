//! Log output sinks.
//!
//! The access and error streams write to stdout/stderr by default, or to
//! append-only files. Sinks are fixed at startup; nothing about logging is
//! reconfigurable at runtime.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

static SINKS: OnceLock<Sinks> = OnceLock::new();

/// Where one log stream ends up.
enum Sink {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl Sink {
    fn for_path(path: Option<&str>, fallback: Self) -> io::Result<Self> {
        match path {
            Some(p) => Ok(Self::File(Mutex::new(open_append(p)?))),
            None => Ok(fallback),
        }
    }

    fn write_line(&self, line: &str) {
        match self {
            Self::Stdout => println!("{line}"),
            Self::Stderr => eprintln!("{line}"),
            Self::File(file) => {
                if let Ok(mut f) = file.lock() {
                    let _ = writeln!(f, "{line}");
                }
            }
        }
    }
}

/// The process-wide pair of log sinks.
pub struct Sinks {
    access: Sink,
    error: Sink,
}

impl Sinks {
    /// Write a line to the access stream.
    pub fn access(&self, line: &str) {
        self.access.write_line(line);
    }

    /// Write a line to the error stream.
    pub fn error(&self, line: &str) {
        self.error.write_line(line);
    }
}

/// Open a log file for appending, creating parent directories as needed.
fn open_append(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global sinks.
///
/// Called once at startup; a second call fails. Returns an error when a log
/// file cannot be opened.
pub fn init(access_log_file: Option<&str>, error_log_file: Option<&str>) -> io::Result<()> {
    let sinks = Sinks {
        access: Sink::for_path(access_log_file, Sink::Stdout)?,
        error: Sink::for_path(error_log_file, Sink::Stderr)?,
    };

    SINKS
        .set(sinks)
        .map_err(|_| io::Error::new(io::ErrorKind::AlreadyExists, "logger already initialized"))
}

/// The installed sinks, if [`init`] has run.
pub fn get() -> Option<&'static Sinks> {
    SINKS.get()
}
