// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Bridge from the [`log`] crate facade.
//!
//! `log` levels map onto splitlog levels as follows:
//!
//! | `log`   | splitlog  |
//! |---------|-----------|
//! | `Error` | `Error`   |
//! | `Warn`  | `Warn`    |
//! | `Info`  | `Info`    |
//! | `Debug` | `Verbose` |
//! | `Trace` | `Debug`   |

use std::borrow::Cow;

use crate::Level;
use crate::Logger;
use crate::default_logger;
use crate::location::CallerLocation;

impl From<log::Level> for Level {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => Level::Error,
            log::Level::Warn => Level::Warn,
            log::Level::Info => Level::Info,
            log::Level::Debug => Level::Verbose,
            log::Level::Trace => Level::Debug,
        }
    }
}

struct LogCrateLogger(());

impl log::Log for LogCrateLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        log::Log::enabled(default_logger(), metadata)
    }

    fn log(&self, record: &log::Record) {
        log::Log::log(default_logger(), record);
    }

    fn flush(&self) {
        log::Log::flush(default_logger());
    }
}

/// Set up the log crate global logger.
///
/// This function calls [`log::set_logger`] so that all records from the `log` crate are
/// forwarded to splitlog's default logger, and sets the global maximum level to `Trace` so
/// that the thresholds alone decide what is written.
///
/// # Errors
///
/// Return an error if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// splitlog::bridge::try_setup_log_crate().unwrap();
/// log::info!("routed by splitlog");
/// ```
pub fn try_setup_log_crate() -> Result<(), log::SetLoggerError> {
    static LOGGER: LogCrateLogger = LogCrateLogger(());
    log::set_logger(&LOGGER)?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// Set up the log crate global logger.
///
/// # Panics
///
/// Panic if the log crate global logger has already been set.
///
/// # Examples
///
/// ```
/// splitlog::bridge::setup_log_crate();
/// log::warn!("routed by splitlog");
/// ```
pub fn setup_log_crate() {
    try_setup_log_crate().expect(
        "splitlog::bridge::setup_log_crate must be called before the log crate global logger initialized",
    )
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        self.destination(metadata.level().into()).is_some()
    }

    fn log(&self, record: &log::Record) {
        let file: Option<Cow<'static, str>> = match (record.file_static(), record.file()) {
            (Some(file), _) => Some(Cow::Borrowed(file)),
            (None, Some(file)) => Some(Cow::Owned(file.to_owned())),
            (None, None) => None,
        };
        let location =
            file.map(|file| CallerLocation::new(file, record.line().map_or(1, i64::from)));

        self.print_at(record.level().into(), location.as_ref(), *record.args());
    }

    fn flush(&self) {
        Logger::flush(self);
    }
}

#[cfg(test)]
mod tests {
    use log::Log;

    use super::*;
    use crate::append::Testing;
    use crate::time::DateParts;
    use crate::time::FixedClock;

    fn capture() -> (Logger, Testing, Testing) {
        let (stdout, stderr) = (Testing::default(), Testing::default());
        let logger = crate::builder()
            .stdout(stdout.clone())
            .stderr(stderr.clone())
            .out_level(Level::Debug)
            .clock(FixedClock::new(DateParts {
                month: 2,
                day: 29,
                hour: 8,
                minute: 30,
                second: 0,
            }))
            .build();
        (logger, stdout, stderr)
    }

    #[test]
    fn test_level_mapping() {
        assert_eq!(Level::from(log::Level::Error), Level::Error);
        assert_eq!(Level::from(log::Level::Debug), Level::Verbose);
        assert_eq!(Level::from(log::Level::Trace), Level::Debug);
    }

    #[test]
    fn test_log_record_is_routed() {
        let (logger, stdout, stderr) = capture();

        logger.log(
            &log::Record::builder()
                .args(format_args!("disk at {}%", 91))
                .level(log::Level::Error)
                .file_static(Some("src/disk/monitor.rs"))
                .line(Some(77))
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .args(format_args!("tick"))
                .level(log::Level::Trace)
                .file(Some("src/clock.rs"))
                .line(Some(5))
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .args(format_args!("nowhere"))
                .level(log::Level::Info)
                .build(),
        );

        assert_eq!(
            stderr.contents(),
            "E0229 08:30:00 monitor.rs:77] disk at 91%\n"
        );
        assert_eq!(
            stdout.contents(),
            "D0229 08:30:00 clock.rs:5] tick\nI0229 08:30:00 ???:1] nowhere\n"
        );
    }

    #[test]
    fn test_enabled_follows_thresholds() {
        let (logger, _, _) = capture();
        let metadata = |level| log::Metadata::builder().level(level).build();

        assert!(logger.enabled(&metadata(log::Level::Error)));
        assert!(!logger.enabled(&metadata(log::Level::Warn)));
        assert!(logger.enabled(&metadata(log::Level::Trace)));

        logger.set_out_level(Level::Info);
        assert!(!logger.enabled(&metadata(log::Level::Trace)));
    }
}
