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

//! The process-wide default logger and the functions operating on it.

use std::fmt;
use std::sync::OnceLock;

use crate::Level;
use crate::Logger;
use crate::Operand;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Return the default logger, creating it with default settings on first use.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::default)
}

/// Install `logger` as the default logger.
///
/// # Errors
///
/// Return the logger back if a default logger has already been set or used.
pub fn set_default_logger(logger: Logger) -> Result<(), Logger> {
    DEFAULT_LOGGER.set(logger)
}

/// Set the diff threshold of the default logger.
pub fn set_diff_level(level: impl Into<i32>) {
    default_logger().set_diff_level(level);
}

/// Set the err threshold of the default logger.
pub fn set_err_level(level: impl Into<i32>) {
    default_logger().set_err_level(level);
}

/// Set the out threshold of the default logger.
pub fn set_out_level(level: impl Into<i32>) {
    default_logger().set_out_level(level);
}

/// Flush standard output and standard error through the default logger.
pub fn flush() {
    default_logger().flush();
}

/// Print-style emission at `level` through the default logger.
#[track_caller]
pub fn print(level: Level, args: &[&dyn Operand]) {
    default_logger().print(level, args);
}

/// Printf-style emission at `level` through the default logger.
#[track_caller]
pub fn printf(level: Level, args: fmt::Arguments<'_>) {
    default_logger().printf(level, args);
}

/// Println-style emission at `level` through the default logger.
#[track_caller]
pub fn println(level: Level, args: &[&dyn Operand]) {
    default_logger().println(level, args);
}

macro_rules! level_functions {
    ($($level:ident => $print:ident, $printf:ident, $println:ident;)*) => {
        $(
            #[doc = concat!("Print-style emission at [`Level::", stringify!($level), "`] through the default logger.")]
            #[track_caller]
            pub fn $print(args: &[&dyn Operand]) {
                default_logger().print(Level::$level, args);
            }

            #[doc = concat!("Printf-style emission at [`Level::", stringify!($level), "`] through the default logger.")]
            #[track_caller]
            pub fn $printf(args: fmt::Arguments<'_>) {
                default_logger().printf(Level::$level, args);
            }

            #[doc = concat!("Println-style emission at [`Level::", stringify!($level), "`] through the default logger.")]
            #[track_caller]
            pub fn $println(args: &[&dyn Operand]) {
                default_logger().println(Level::$level, args);
            }
        )*
    };
}

level_functions! {
    Fatal => fatal, fatalf, fatalln;
    Crit => crit, critf, critln;
    Error => error, errorf, errorln;
    Warn => warn, warnf, warnln;
    Notice => notice, noticef, noticeln;
    Info => info, infof, infoln;
    Verbose => verbose, verbosef, verboseln;
    Debug => debug, debugf, debugln;
}
