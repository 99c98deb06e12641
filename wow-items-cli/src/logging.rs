//! Logger setup for the CLI.
//!
//! Normal output goes through `log::info!` so `--quiet` can silence it and
//! `--logfile` can capture it. Warnings and errors go to stderr, everything
//! else to stdout.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};

use env_logger::{Builder, Logger, Target};
use log::{Level, LevelFilter, Log, Metadata, Record};

type SharedLog = Arc<Mutex<strip_ansi_escapes::Writer<File>>>;

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes to one console stream and mirrors everything, minus ANSI escapes,
/// into the shared log file.
struct TeeWriter {
    stream: Stream,
    file: SharedLog,
}

impl TeeWriter {
    fn console(&self) -> Box<dyn Write> {
        match self.stream {
            Stream::Stdout => Box::new(io::stdout()),
            Stream::Stderr => Box::new(io::stderr()),
        }
    }
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console().write_all(buf)?;
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console().flush()?;
        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        file.flush()
    }
}

/// Dispatches each record to the stdout or stderr logger by level.
struct SplitLogger {
    out: Logger,
    err: Logger,
}

impl Log for SplitLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if routes_to_stderr(metadata.level()) {
            self.err.enabled(metadata)
        } else {
            self.out.enabled(metadata)
        }
    }

    fn log(&self, record: &Record) {
        if routes_to_stderr(record.level()) {
            self.err.log(record);
        } else {
            self.out.log(record);
        }
    }

    fn flush(&self) {
        self.out.flush();
        self.err.flush();
    }
}

fn routes_to_stderr(level: Level) -> bool {
    level <= Level::Warn
}

fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

fn builder(quiet: bool, verbose: bool, stream: Stream, file: Option<&SharedLog>) -> Builder {
    let mut builder = Builder::new();
    builder.filter_level(level_for(quiet, verbose));
    builder.parse_default_env();

    if verbose {
        builder.format_timestamp_millis();
    } else {
        builder.format(|buf, record| match record.level() {
            Level::Error => writeln!(buf, "error: {}", record.args()),
            Level::Warn => writeln!(buf, "warning: {}", record.args()),
            _ => writeln!(buf, "{}", record.args()),
        });
    }

    match (file, stream) {
        (Some(file), _) => {
            builder.target(Target::Pipe(Box::new(TeeWriter {
                stream,
                file: Arc::clone(file),
            })));
        }
        (None, Stream::Stdout) => {
            builder.target(Target::Stdout);
        }
        (None, Stream::Stderr) => {
            builder.target(Target::Stderr);
        }
    }

    builder
}

/// Install the global logger. `RUST_LOG` still overrides the level.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let file = match logfile {
        Some(path) => Some(Arc::new(Mutex::new(strip_ansi_escapes::Writer::new(
            File::create(path)?,
        )))),
        None => None,
    };

    let out = builder(quiet, verbose, Stream::Stdout, file.as_ref()).build();
    let err = builder(quiet, verbose, Stream::Stderr, file.as_ref()).build();
    let max_level = out.filter().max(err.filter());

    log::set_boxed_logger(Box::new(SplitLogger { out, err })).map_err(io::Error::other)?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_flags() {
        assert_eq!(level_for(false, false), LevelFilter::Info);
        assert_eq!(level_for(true, false), LevelFilter::Warn);
        assert_eq!(level_for(false, true), LevelFilter::Debug);
        assert_eq!(level_for(true, true), LevelFilter::Debug);
    }

    #[test]
    fn test_warnings_and_errors_go_to_stderr() {
        assert!(routes_to_stderr(Level::Error));
        assert!(routes_to_stderr(Level::Warn));
        assert!(!routes_to_stderr(Level::Info));
        assert!(!routes_to_stderr(Level::Debug));
        assert!(!routes_to_stderr(Level::Trace));
    }

    #[test]
    fn test_tee_writer_mirrors_without_ansi() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("run.log");
        let file: SharedLog = Arc::new(Mutex::new(strip_ansi_escapes::Writer::new(
            File::create(&path).unwrap(),
        )));
        let mut writer = TeeWriter {
            stream: Stream::Stderr,
            file: Arc::clone(&file),
        };

        writer.write_all(b"\x1b[31merror:\x1b[0m boom\n").unwrap();
        writer.flush().unwrap();
        drop(writer);
        drop(file);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "error: boom\n");
    }
}
