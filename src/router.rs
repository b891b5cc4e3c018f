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

//! Destination selection and serialized writes.

use std::fmt;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use crate::Level;
use crate::append::Sink;
use crate::record::Record;
use crate::trap::Trap;

/// One of the two standard streams a record may be written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Standard error.
    Stderr,
    /// Standard output.
    Stdout,
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stderr => f.pad("stderr"),
            Destination::Stdout => f.pad("stdout"),
        }
    }
}

/// Pick the destination for a record at `level` given the `diff`, `err` and `out` thresholds.
///
/// 1. At or above both `diff` and `err` in severity: standard error.
/// 2. Otherwise, less severe than `diff` but at or above `out`: standard output.
/// 3. Otherwise the record is dropped.
///
/// A record at or above `diff` but below `err` matches neither branch and is dropped.
///
/// # Examples
///
/// ```
/// use splitlog::Level;
/// use splitlog::router::Destination;
/// use splitlog::router::select_destination;
///
/// let (diff, err, out) = (Level::Warn.code(), Level::Error.code(), Level::Info.code());
/// assert_eq!(select_destination(Level::Crit, diff, err, out), Some(Destination::Stderr));
/// assert_eq!(select_destination(Level::Info, diff, err, out), Some(Destination::Stdout));
/// assert_eq!(select_destination(Level::Warn, diff, err, out), None);
/// assert_eq!(select_destination(Level::Debug, diff, err, out), None);
/// ```
pub fn select_destination(level: Level, diff: i32, err: i32, out: i32) -> Option<Destination> {
    let s = level.code();
    if s <= diff && s <= err {
        Some(Destination::Stderr)
    } else if s > diff && s <= out {
        Some(Destination::Stdout)
    } else {
        None
    }
}

/// Owns both sinks and the lock serializing every write to them.
#[derive(Debug)]
pub(crate) struct Router {
    lock: Mutex<()>,
    stdout: Box<dyn Sink>,
    stderr: Box<dyn Sink>,
    trap: Box<dyn Trap>,
}

impl Router {
    pub(crate) fn new(stdout: Box<dyn Sink>, stderr: Box<dyn Sink>, trap: Box<dyn Trap>) -> Self {
        Self {
            lock: Mutex::new(()),
            stdout,
            stderr,
            trap,
        }
    }

    /// Write `record` to `destination` and return the still held write lock.
    pub(crate) fn write(&self, destination: Destination, record: &Record) -> MutexGuard<'_, ()> {
        let guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.write_bytes(destination, &record.to_bytes());
        guard
    }

    /// Write raw bytes without taking the lock.
    pub(crate) fn write_bytes(&self, destination: Destination, bytes: &[u8]) {
        if let Err(err) = self.sink(destination).write_all(bytes) {
            self.trap.trap(
                &err.with_context("action", "write")
                    .with_context("destination", destination),
            );
        }
    }

    /// Flush both streams. Does not take the write lock.
    pub(crate) fn flush(&self) {
        for destination in [Destination::Stdout, Destination::Stderr] {
            if let Err(err) = self.sink(destination).flush() {
                self.trap.trap(
                    &err.with_context("action", "flush")
                        .with_context("destination", destination),
                );
            }
        }
    }

    fn sink(&self, destination: Destination) -> &dyn Sink {
        match destination {
            Destination::Stderr => self.stderr.as_ref(),
            Destination::Stdout => self.stdout.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    // Reference model written in terms of the three outcomes rather than an if-chain.
    fn expected(s: i32, diff: i32, err: i32, out: i32) -> Option<Destination> {
        let within_diff = s <= diff;
        match (within_diff, s <= err, s <= out) {
            (true, true, _) => Some(Destination::Stderr),
            (true, false, _) => None,
            (false, _, true) => Some(Destination::Stdout),
            (false, _, false) => None,
        }
    }

    #[test]
    fn test_exhaustive_against_model() {
        // codes one past each end cover the out-of-range thresholds
        for level in Level::ALL {
            for diff in -1..=9 {
                for err in -1..=9 {
                    for out in -1..=9 {
                        assert_eq!(
                            select_destination(level, diff, err, out),
                            expected(level.code(), diff, err, out),
                            "level={level} diff={diff} err={err} out={out}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_drop_gap() {
        // within diff, less severe than err
        let (diff, err, out) = (Level::Info.code(), Level::Error.code(), Level::Debug.code());
        assert_eq!(select_destination(Level::Warn, diff, err, out), None);
        assert_eq!(select_destination(Level::Info, diff, err, out), None);
        assert_eq!(
            select_destination(Level::Error, diff, err, out),
            Some(Destination::Stderr)
        );
        assert_eq!(
            select_destination(Level::Verbose, diff, err, out),
            Some(Destination::Stdout)
        );
    }

    #[test]
    fn test_random_thresholds() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let level = Level::ALL[rng.random_range(0..Level::ALL.len())];
            let diff = rng.random_range(-100..100);
            let err = rng.random_range(-100..100);
            let out = rng.random_range(-100..100);
            let got = select_destination(level, diff, err, out);
            assert_eq!(got, expected(level.code(), diff, err, out));
            if level.code() <= diff && level.code() > err {
                assert_eq!(got, None);
            }
        }
    }

    #[test]
    fn test_none_thresholds() {
        let none = Level::None.code();
        for level in Level::ALL {
            assert_eq!(select_destination(level, none, none, none), None);
        }
    }

    #[test]
    fn test_destination_display() {
        assert_eq!(Destination::Stderr.to_string(), "stderr");
        assert_eq!(Destination::Stdout.to_string(), "stdout");
    }
}
