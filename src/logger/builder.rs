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

use std::time::Duration;

use crate::Level;
use crate::Logger;
use crate::append::Sink;
use crate::append::Stderr;
use crate::append::Stdout;
use crate::fatal::DEFAULT_FLUSH_TIMEOUT;
use crate::fatal::ProcessExit;
use crate::fatal::Terminate;
use crate::layout::HeaderLayout;
use crate::location::Resolve;
use crate::location::TrackCaller;
use crate::logger::set_default_logger;
use crate::router::Router;
use crate::threshold::Thresholds;
use crate::time::Clock;
use crate::time::SystemClock;
use crate::trap::DefaultTrap;
use crate::trap::Trap;

/// Create a new [`LoggerBuilder`] with the default configuration.
///
/// Defaults: `diff = Warn`, `err = Error`, `out = Info`, real standard streams, system clock,
/// compiler-tracked caller locations, a 10 second fatal flush timeout, and
/// [`std::process::exit`] as the terminator.
///
/// # Examples
///
/// ```
/// use splitlog::Level;
///
/// let logger = splitlog::builder().out_level(Level::Debug).build();
/// logger.debugf(format_args!("visible on stdout"));
/// ```
pub fn builder() -> LoggerBuilder {
    LoggerBuilder {
        diff: Level::Warn.code(),
        err: Level::Error.code(),
        out: Level::Info.code(),
        flush_timeout: DEFAULT_FLUSH_TIMEOUT,
        max_line_len: None,
        stdout: Box::new(Stdout::default()),
        stderr: Box::new(Stderr::default()),
        clock: Box::new(SystemClock::default()),
        resolver: Box::new(TrackCaller::default()),
        terminator: Box::new(ProcessExit::default()),
        trap: Box::new(DefaultTrap::default()),
    }
}

/// A builder for configuring a [`Logger`] and optionally installing it as the default.
///
/// # Examples
///
/// ```
/// use splitlog::Level;
///
/// splitlog::builder()
///     .thresholds(Level::Error, Level::Crit, Level::Verbose)
///     .apply();
///
/// splitlog::verbosef(format_args!("goes to stdout"));
/// ```
#[must_use = "call `apply` to set the default logger or `build` to construct a logger instance"]
#[derive(Debug)]
pub struct LoggerBuilder {
    diff: i32,
    err: i32,
    out: i32,
    flush_timeout: Duration,
    max_line_len: Option<usize>,
    stdout: Box<dyn Sink>,
    stderr: Box<dyn Sink>,
    clock: Box<dyn Clock>,
    resolver: Box<dyn Resolve>,
    terminator: Box<dyn Terminate>,
    trap: Box<dyn Trap>,
}

impl LoggerBuilder {
    /// Set the initial diff threshold.
    pub fn diff_level(mut self, level: impl Into<i32>) -> Self {
        self.diff = level.into();
        self
    }

    /// Set the initial err threshold.
    pub fn err_level(mut self, level: impl Into<i32>) -> Self {
        self.err = level.into();
        self
    }

    /// Set the initial out threshold.
    pub fn out_level(mut self, level: impl Into<i32>) -> Self {
        self.out = level.into();
        self
    }

    /// Set all three initial thresholds at once.
    pub fn thresholds(
        self,
        diff: impl Into<i32>,
        err: impl Into<i32>,
        out: impl Into<i32>,
    ) -> Self {
        self.diff_level(diff).err_level(err).out_level(out)
    }

    /// Set how long the fatal sequence waits for the flush. Default to 10 seconds.
    pub fn flush_timeout(mut self, timeout: Duration) -> Self {
        self.flush_timeout = timeout;
        self
    }

    /// Cap every record at `max` bytes of header and body; longer bodies are cut. Records are
    /// not capped by default.
    ///
    /// The header is never cut and the trailing newline is not counted.
    pub fn max_line_len(mut self, max: usize) -> Self {
        self.max_line_len = Some(max);
        self
    }

    /// Replace the standard output sink.
    pub fn stdout(mut self, sink: impl Sink) -> Self {
        self.stdout = Box::new(sink);
        self
    }

    /// Replace the standard error sink.
    pub fn stderr(mut self, sink: impl Sink) -> Self {
        self.stderr = Box::new(sink);
        self
    }

    /// Replace the clock used for header timestamps.
    pub fn clock(mut self, clock: impl Into<Box<dyn Clock>>) -> Self {
        self.clock = clock.into();
        self
    }

    /// Replace the caller location resolver.
    pub fn resolver(mut self, resolver: impl Into<Box<dyn Resolve>>) -> Self {
        self.resolver = resolver.into();
        self
    }

    /// Replace what ends the process after a fatal record.
    pub fn terminator(mut self, terminator: impl Into<Box<dyn Terminate>>) -> Self {
        self.terminator = terminator.into();
        self
    }

    /// Replace the handler of write and flush errors.
    pub fn trap(mut self, trap: impl Into<Box<dyn Trap>>) -> Self {
        self.trap = trap.into();
        self
    }

    /// Build the [`Logger`].
    pub fn build(self) -> Logger {
        Logger::new(
            Thresholds::new(self.diff, self.err, self.out),
            HeaderLayout::new(self.clock, self.resolver),
            Router::new(self.stdout, self.stderr, self.trap),
            self.terminator,
            self.flush_timeout,
            self.max_line_len,
        )
    }

    /// Install the built logger as the default logger.
    ///
    /// This should be called early in the execution of a Rust program. The default logger is
    /// created with default settings on first use, after which this fails.
    ///
    /// # Errors
    ///
    /// Return the logger back if a default logger has already been set or used.
    pub fn try_apply(self) -> Result<(), Logger> {
        set_default_logger(self.build())
    }

    /// Install the built logger as the default logger.
    ///
    /// # Panics
    ///
    /// Panic if the default logger has already been set or used.
    pub fn apply(self) {
        self.try_apply()
            .expect("LoggerBuilder::apply must be called before the default logger is used");
    }
}
