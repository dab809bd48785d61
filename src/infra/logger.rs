use crate::domain::models::ScanSummary;
use crossterm::{
    ExecutableCommand,
    style::{Color, ResetColor, SetForegroundColor},
};
use env_logger::Builder;
use log::Level;
use std::io::{self, Write};
use std::path::Path;

pub const LOG_LEVEL_ENV: &str = "PATTERN_MANIFEST_LOG_LEVEL";

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = env_logger::Env::default().filter_or(LOG_LEVEL_ENV, level_for(verbosity));

    Builder::from_env(env)
        .format(|buf, record| {
            let level_color = match record.level() {
                Level::Error => "31", // Red
                Level::Warn => "33",  // Yellow
                Level::Info => "32",  // Green
                Level::Debug => "36", // Cyan
                Level::Trace => "35", // Magenta
            };

            writeln!(
                buf,
                "\x1B[{}m[{}]\x1B[0m [{}] {}",
                level_color,
                record.level(),
                buf.timestamp(),
                record.args()
            )
        })
        .format_timestamp_secs()
        .try_init()
}

/// Completion line on stderr, so stdout stays clean for `--stdout` output.
pub fn print_summary(summary: &ScanSummary, output_file: &Path) -> io::Result<()> {
    let mut stderr = io::stderr();

    stderr.execute(SetForegroundColor(Color::Green))?;
    write!(stderr, "✓ Listed {} files", summary.listed)?;
    stderr.execute(ResetColor)?;
    writeln!(
        stderr,
        " into {} ({} entries scanned)",
        output_file.display(),
        summary.scanned
    )?;

    if summary.skipped > 0 {
        stderr.execute(SetForegroundColor(Color::Yellow))?;
        writeln!(stderr, "⚠ Skipped {} unreadable entries", summary.skipped)?;
        stderr.execute(ResetColor)?;
    }

    Ok(())
}
