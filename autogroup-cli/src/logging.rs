//! Logger setup for the CLI.
//!
//! Command output goes through `log::info!`, so `--quiet` hides it and
//! `--verbose` adds debug messages with timestamps. `RUST_LOG` overrides
//! the level chosen by the flags.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Writes log lines to stdout and, optionally, to a file without ANSI codes.
struct TeeWriter {
    file: Option<File>,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        if let Some(file) = &mut self.file {
            file.write_all(&strip_ansi_escapes::strip(buf))?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        if let Some(file) = &mut self.file {
            file.flush()?;
        }
        Ok(())
    }
}

pub(crate) fn init_logger(quiet: bool, verbose: bool, logfile: Option<&Path>) -> io::Result<()> {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = logfile.map(File::create).transpose()?;

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Pipe(Box::new(TeeWriter { file })))
        .format(move |buf, record| {
            if verbose {
                let timestamp = buf.timestamp_millis();
                write!(buf, "{} {:<5} ", timestamp, record.level())?;
            } else {
                match record.level() {
                    Level::Error => write!(
                        buf,
                        "{} ",
                        "error:".if_supports_color(Stdout, |t| t.red())
                    )?,
                    Level::Warn => write!(
                        buf,
                        "{} ",
                        "warning:".if_supports_color(Stdout, |t| t.yellow())
                    )?,
                    _ => {}
                }
            }
            writeln!(buf, "{}", record.args())
        });
    builder.init();
    Ok(())
}

/// Print an empty line through the logger so it respects `--quiet`.
pub(crate) fn log_blank() {
    log::info!("");
}
