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

//! Emission macros.
//!
//! Each macro takes an optional `logger: <expr>,` prefix to emit through a specific
//! [`Logger`](crate::Logger) instead of the default one.

/// Printf-style emission at a given level.
///
/// # Examples
///
/// ```
/// use splitlog::Level;
///
/// splitlog::logf!(Level::Notice, "{} replicas ready", 3);
///
/// let logger = splitlog::builder().build();
/// splitlog::logf!(logger: logger, Level::Info, "hello {}", "world");
/// ```
#[macro_export]
macro_rules! logf {
    (logger: $logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.printf($level, ::std::format_args!($($arg)+))
    };
    ($level:expr, $($arg:tt)+) => {
        $crate::printf($level, ::std::format_args!($($arg)+))
    };
}

/// Print-style emission at a given level: operands are concatenated, with a space between
/// adjacent operands that are not strings.
///
/// # Examples
///
/// ```
/// use splitlog::Level;
///
/// let answer = 42;
/// splitlog::log_print!(Level::Info, "answer=", answer);
/// ```
#[macro_export]
macro_rules! log_print {
    (logger: $logger:expr, $level:expr, $($arg:expr),+ $(,)?) => {
        $logger.print($level, &[$(&$arg as &dyn $crate::Operand),+])
    };
    ($level:expr, $($arg:expr),+ $(,)?) => {
        $crate::print($level, &[$(&$arg as &dyn $crate::Operand),+])
    };
}

/// Println-style emission at a given level: operands are separated by spaces and a newline
/// always follows.
///
/// # Examples
///
/// ```
/// use splitlog::Level;
///
/// splitlog::logln!(Level::Info, "took", 12, "ms");
/// ```
#[macro_export]
macro_rules! logln {
    (logger: $logger:expr, $level:expr $(, $arg:expr)* $(,)?) => {
        $logger.println($level, &[$(&$arg as &dyn $crate::Operand),*])
    };
    ($level:expr $(, $arg:expr)* $(,)?) => {
        $crate::println($level, &[$(&$arg as &dyn $crate::Operand),*])
    };
}

/// Printf-style emission at [`Level::Fatal`](crate::Level::Fatal); the process exits with
/// status 255 once the record is written.
#[macro_export]
macro_rules! fatalf {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::logf!(logger: $logger, $crate::Level::Fatal, $($arg)+) };
    ($($arg:tt)+) => { $crate::logf!($crate::Level::Fatal, $($arg)+) };
}

/// Printf-style emission at [`Level::Crit`](crate::Level::Crit).
#[macro_export]
macro_rules! critf {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::logf!(logger: $logger, $crate::Level::Crit, $($arg)+) };
    ($($arg:tt)+) => { $crate::logf!($crate::Level::Crit, $($arg)+) };
}

/// Printf-style emission at [`Level::Error`](crate::Level::Error).
#[macro_export]
macro_rules! errorf {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::logf!(logger: $logger, $crate::Level::Error, $($arg)+) };
    ($($arg:tt)+) => { $crate::logf!($crate::Level::Error, $($arg)+) };
}

/// Printf-style emission at [`Level::Warn`](crate::Level::Warn).
#[macro_export]
macro_rules! warnf {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::logf!(logger: $logger, $crate::Level::Warn, $($arg)+) };
    ($($arg:tt)+) => { $crate::logf!($crate::Level::Warn, $($arg)+) };
}

/// Printf-style emission at [`Level::Notice`](crate::Level::Notice).
#[macro_export]
macro_rules! noticef {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::logf!(logger: $logger, $crate::Level::Notice, $($arg)+) };
    ($($arg:tt)+) => { $crate::logf!($crate::Level::Notice, $($arg)+) };
}

/// Printf-style emission at [`Level::Info`](crate::Level::Info).
#[macro_export]
macro_rules! infof {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::logf!(logger: $logger, $crate::Level::Info, $($arg)+) };
    ($($arg:tt)+) => { $crate::logf!($crate::Level::Info, $($arg)+) };
}

/// Printf-style emission at [`Level::Verbose`](crate::Level::Verbose).
#[macro_export]
macro_rules! verbosef {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::logf!(logger: $logger, $crate::Level::Verbose, $($arg)+) };
    ($($arg:tt)+) => { $crate::logf!($crate::Level::Verbose, $($arg)+) };
}

/// Printf-style emission at [`Level::Debug`](crate::Level::Debug).
#[macro_export]
macro_rules! debugf {
    (logger: $logger:expr, $($arg:tt)+) => { $crate::logf!(logger: $logger, $crate::Level::Debug, $($arg)+) };
    ($($arg:tt)+) => { $crate::logf!($crate::Level::Debug, $($arg)+) };
}
