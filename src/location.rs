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

//! Caller location discovery.
//!
//! Every emission entry point is `#[track_caller]`, so the [`Location`] handed to a resolver
//! is always the user's call site no matter how many wrappers sit in between.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// A resolved source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerLocation {
    /// Source file path, as reported by the compiler or the bridged facade.
    pub file: Cow<'static, str>,
    /// Line number. Signed so that bogus values from foreign sources can be represented.
    pub line: i64,
}

impl CallerLocation {
    /// Create a location from a file and a line.
    pub fn new(file: impl Into<Cow<'static, str>>, line: i64) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

/// Resolve the tracked caller into the location shown in headers.
///
/// Returning `None` makes the header fall back to `???:1`.
pub trait Resolve: fmt::Debug + Send + Sync + 'static {
    /// Resolve the location of the caller.
    fn resolve(&self, caller: &'static Location<'static>) -> Option<CallerLocation>;
}

impl<T: Resolve> From<T> for Box<dyn Resolve> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// The default resolver, reporting the compiler-tracked call site.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct TrackCaller {}

impl Resolve for TrackCaller {
    fn resolve(&self, caller: &'static Location<'static>) -> Option<CallerLocation> {
        Some(CallerLocation::new(caller.file(), i64::from(caller.line())))
    }
}

/// A resolver that never resolves, so every header reads `???:1`.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct Unresolved {}

impl Resolve for Unresolved {
    fn resolve(&self, _: &'static Location<'static>) -> Option<CallerLocation> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_caller_reports_this_file() {
        let location = TrackCaller::default().resolve(Location::caller()).unwrap();
        assert!(location.file.ends_with("location.rs"), "{}", location.file);
        assert!(location.line > 0);
    }

    #[test]
    fn test_unresolved() {
        assert_eq!(Unresolved::default().resolve(Location::caller()), None);
    }
}
