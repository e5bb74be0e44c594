// Mon Feb 02 2026 - Alex

use colored::Colorize;
use log::{Level, LevelFilter};
use std::io::Write;

pub struct LoggingUtils;

impl LoggingUtils {
    /// Installs the process logger. Respects RUST_LOG when set, otherwise
    /// the level derived from `-v` counts.
    pub fn init(verbosity: usize, use_color: bool) {
        let level = Self::level_from_verbosity(verbosity);
        let mut builder = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(level.as_str()),
        );
        builder.format(move |buf, record| {
            let level = if use_color {
                match record.level() {
                    Level::Error => "ERROR".red().bold().to_string(),
                    Level::Warn => "WARN ".yellow().to_string(),
                    Level::Info => "INFO ".green().to_string(),
                    Level::Debug => "DEBUG".blue().to_string(),
                    Level::Trace => "TRACE".dimmed().to_string(),
                }
            } else {
                format!("{:5}", record.level())
            };
            writeln!(buf, "[{}] {}", level, record.args())
        });
        let _ = builder.try_init();
    }

    pub fn level_from_verbosity(verbosity: usize) -> LevelFilter {
        match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_verbosity() {
        assert_eq!(LoggingUtils::level_from_verbosity(0), LevelFilter::Warn);
        assert_eq!(LoggingUtils::level_from_verbosity(2), LevelFilter::Debug);
        assert_eq!(LoggingUtils::level_from_verbosity(9), LevelFilter::Trace);
    }
}
