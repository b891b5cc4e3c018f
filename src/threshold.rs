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

//! The three routing thresholds.

use std::sync::atomic::AtomicI32;
use std::sync::atomic::Ordering;

use crate::Level;

/// The diff, err and out thresholds consulted for every record.
///
/// Values are stored as raw level codes. Setters perform no validation: an out-of-range code
/// simply always or never matches, depending on the comparison it takes part in.
///
/// Loads and stores are lock-free. A record in flight may observe either the old or the new
/// value of a threshold that is being changed concurrently.
#[derive(Debug)]
pub struct Thresholds {
    diff: AtomicI32,
    err: AtomicI32,
    out: AtomicI32,
}

impl Default for Thresholds {
    /// `diff = Warn`, `err = Error`, `out = Info`.
    fn default() -> Self {
        Self::new(Level::Warn, Level::Error, Level::Info)
    }
}

impl Thresholds {
    /// Create thresholds with the given initial values.
    pub fn new(diff: impl Into<i32>, err: impl Into<i32>, out: impl Into<i32>) -> Self {
        Self {
            diff: AtomicI32::new(diff.into()),
            err: AtomicI32::new(err.into()),
            out: AtomicI32::new(out.into()),
        }
    }

    /// Set the boundary between the stderr branch and the stdout branch.
    pub fn set_diff_level(&self, level: impl Into<i32>) {
        self.diff.store(level.into(), Ordering::Relaxed);
    }

    /// Set the least severe level that may reach stderr.
    pub fn set_err_level(&self, level: impl Into<i32>) {
        self.err.store(level.into(), Ordering::Relaxed);
    }

    /// Set the least severe level that may reach stdout.
    pub fn set_out_level(&self, level: impl Into<i32>) {
        self.out.store(level.into(), Ordering::Relaxed);
    }

    pub fn diff_level(&self) -> i32 {
        self.diff.load(Ordering::Relaxed)
    }

    pub fn err_level(&self) -> i32 {
        self.err.load(Ordering::Relaxed)
    }

    pub fn out_level(&self) -> i32 {
        self.out.load(Ordering::Relaxed)
    }

    /// Load all three thresholds as `(diff, err, out)`.
    pub fn snapshot(&self) -> (i32, i32, i32) {
        (self.diff_level(), self.err_level(), self.out_level())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn test_defaults() {
        let thresholds = Thresholds::default();
        assert_eq!(
            thresholds.snapshot(),
            (Level::Warn.code(), Level::Error.code(), Level::Info.code())
        );
    }

    #[test]
    fn test_set_then_get() {
        let thresholds = Thresholds::default();
        for level in Level::ALL {
            thresholds.set_out_level(level);
            assert_eq!(thresholds.out_level(), level.code());
            thresholds.set_err_level(level);
            assert_eq!(thresholds.err_level(), level.code());
            thresholds.set_diff_level(level);
            assert_eq!(thresholds.diff_level(), level.code());
        }
    }

    #[test]
    fn test_out_of_range_values_are_kept() {
        let thresholds = Thresholds::default();
        thresholds.set_out_level(42);
        thresholds.set_err_level(-3);
        assert_eq!(thresholds.out_level(), 42);
        assert_eq!(thresholds.err_level(), -3);
    }

    #[test]
    fn test_visible_across_threads() {
        let thresholds = Arc::new(Thresholds::default());
        let writer = {
            let thresholds = thresholds.clone();
            std::thread::spawn(move || thresholds.set_out_level(Level::Debug))
        };
        writer.join().unwrap();
        assert_eq!(thresholds.out_level(), Level::Debug.code());
    }
}
