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

use std::fmt;
use std::fmt::Write;
use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use crate::Level;
use crate::fatal;
use crate::fatal::Terminate;
use crate::layout::HeaderLayout;
use crate::location::CallerLocation;
use crate::operand;
use crate::operand::Operand;
use crate::record::Record;
use crate::record::Terminator;
use crate::router::Destination;
use crate::router::Router;
use crate::router::select_destination;
use crate::threshold::Thresholds;

/// A leveled logger routing records to standard output or standard error.
///
/// A logger owns the thresholds, the write lock, both sinks, the header layout and the
/// terminator used by the fatal sequence. Build one with [`builder`](crate::builder), or use
/// the process-wide [`default_logger`](crate::default_logger) through the crate-level
/// functions.
///
/// Every emission method is `#[track_caller]`: the header names the line that called it.
#[derive(Debug)]
pub struct Logger {
    thresholds: Thresholds,
    layout: HeaderLayout,
    router: Arc<Router>,
    terminator: Box<dyn Terminate>,
    flush_timeout: Duration,
    max_line_len: Option<usize>,
}

impl Default for Logger {
    fn default() -> Self {
        crate::builder().build()
    }
}

impl Logger {
    pub(super) fn new(
        thresholds: Thresholds,
        layout: HeaderLayout,
        router: Router,
        terminator: Box<dyn Terminate>,
        flush_timeout: Duration,
        max_line_len: Option<usize>,
    ) -> Self {
        Self {
            thresholds,
            layout,
            router: Arc::new(router),
            terminator,
            flush_timeout,
            max_line_len,
        }
    }

    /// The thresholds consulted by this logger.
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn set_diff_level(&self, level: impl Into<i32>) {
        self.thresholds.set_diff_level(level);
    }

    pub fn set_err_level(&self, level: impl Into<i32>) {
        self.thresholds.set_err_level(level);
    }

    pub fn set_out_level(&self, level: impl Into<i32>) {
        self.thresholds.set_out_level(level);
    }

    pub fn diff_level(&self) -> i32 {
        self.thresholds.diff_level()
    }

    pub fn err_level(&self) -> i32 {
        self.thresholds.err_level()
    }

    pub fn out_level(&self) -> i32 {
        self.thresholds.out_level()
    }

    /// Where a record at `level` would go under the current thresholds.
    pub fn destination(&self, level: Level) -> Option<Destination> {
        if level == Level::None {
            return None;
        }
        let (diff, err, out) = self.thresholds.snapshot();
        select_destination(level, diff, err, out)
    }

    /// Flush both streams.
    pub fn flush(&self) {
        self.router.flush();
    }

    /// Emit the operands concatenated, with a space between adjacent operands that are not
    /// strings.
    ///
    /// A newline is appended unless the body already ends with one.
    #[track_caller]
    pub fn print(&self, level: Level, args: &[&dyn Operand]) {
        let header = self.layout.format(level, Location::caller());
        let body = operand::concat(args);
        self.output(Record::new(level, header, body, Terminator::IfMissing));
    }

    /// Emit preformatted arguments, usually built with [`format_args!`].
    ///
    /// A newline is appended unless the body already ends with one.
    #[track_caller]
    pub fn printf(&self, level: Level, args: fmt::Arguments<'_>) {
        let header = self.layout.format(level, Location::caller());
        let mut body = String::new();
        let _ = body.write_fmt(args);
        self.output(Record::new(level, header, body, Terminator::IfMissing));
    }

    /// Emit the operands separated by spaces, always followed by a newline.
    #[track_caller]
    pub fn println(&self, level: Level, args: &[&dyn Operand]) {
        let header = self.layout.format(level, Location::caller());
        let body = operand::join(args);
        self.output(Record::new(level, header, body, Terminator::Always));
    }

    /// Emit a record whose location was resolved elsewhere, such as by another facade.
    pub fn print_at(
        &self,
        level: Level,
        location: Option<&CallerLocation>,
        args: fmt::Arguments<'_>,
    ) {
        let header = self.layout.format_at(level, location);
        let mut body = String::new();
        let _ = body.write_fmt(args);
        self.output(Record::new(level, header, body, Terminator::IfMissing));
    }

    fn output(&self, mut record: Record) {
        let Some(destination) = self.destination(record.level()) else {
            return;
        };
        if let Some(max) = self.max_line_len {
            record.truncate(max);
        }

        let guard = self.router.write(destination, &record);
        if record.level() != Level::Fatal {
            return;
        }

        self.router.write_bytes(Destination::Stderr, &fatal::stacks(false));
        drop(guard);

        let router = self.router.clone();
        if !fatal::timeout_flush(move || router.flush(), self.flush_timeout) {
            let warning = fatal::flush_timeout_warning(self.flush_timeout);
            self.router.write_bytes(Destination::Stderr, warning.as_bytes());
        }
        self.terminator.terminate(fatal::FATAL_EXIT_CODE)
    }
}

macro_rules! level_methods {
    ($($level:ident => $print:ident, $printf:ident, $println:ident;)*) => {
        impl Logger {
            $(
                #[doc = concat!("Print-style emission at [`Level::", stringify!($level), "`].")]
                #[track_caller]
                pub fn $print(&self, args: &[&dyn Operand]) {
                    self.print(Level::$level, args)
                }

                #[doc = concat!("Printf-style emission at [`Level::", stringify!($level), "`].")]
                #[track_caller]
                pub fn $printf(&self, args: fmt::Arguments<'_>) {
                    self.printf(Level::$level, args)
                }

                #[doc = concat!("Println-style emission at [`Level::", stringify!($level), "`].")]
                #[track_caller]
                pub fn $println(&self, args: &[&dyn Operand]) {
                    self.println(Level::$level, args)
                }
            )*
        }
    };
}

level_methods! {
    Fatal => fatal, fatalf, fatalln;
    Crit => crit, critf, critln;
    Error => error, errorf, errorln;
    Warn => warn, warnf, warnln;
    Notice => notice, noticef, noticeln;
    Info => info, infof, infoln;
    Verbose => verbose, verbosef, verboseln;
    Debug => debug, debugf, debugln;
}
