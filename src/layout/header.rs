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

use std::fmt::Write;
use std::panic::Location;

use crate::Level;
use crate::location::CallerLocation;
use crate::location::Resolve;
use crate::location::TrackCaller;
use crate::time::Clock;
use crate::time::DateParts;
use crate::time::SystemClock;

/// A layout that renders the fixed-width record header.
///
/// Output format:
///
/// ```text
/// W0503 14:05:09 server.rs:42] connection reset
/// I0503 14:05:10 main.rs:17] listening on 0.0.0.0:8080
/// ```
///
/// The header ends with `"] "`; the body follows directly.
///
/// # Examples
///
/// ```
/// use splitlog::layout::HeaderLayout;
///
/// let layout = HeaderLayout::default();
/// ```
#[derive(Debug)]
pub struct HeaderLayout {
    clock: Box<dyn Clock>,
    resolver: Box<dyn Resolve>,
}

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            clock: Box::new(SystemClock::default()),
            resolver: Box::new(TrackCaller::default()),
        }
    }
}

impl HeaderLayout {
    /// Create a layout reading time from `clock` and locations from `resolver`.
    pub fn new(clock: impl Into<Box<dyn Clock>>, resolver: impl Into<Box<dyn Resolve>>) -> Self {
        Self {
            clock: clock.into(),
            resolver: resolver.into(),
        }
    }

    /// Render the header for a record emitted at `caller`.
    pub fn format(&self, level: Level, caller: &'static Location<'static>) -> String {
        let location = self.resolver.resolve(caller);
        format_header(level, &self.clock.now(), location.as_ref())
    }

    /// Render the header for a record whose location is already known.
    pub fn format_at(&self, level: Level, location: Option<&CallerLocation>) -> String {
        format_header(level, &self.clock.now(), location)
    }
}

/// Render `<L><MM><DD> <hh>:<mm>:<ss> <file>:<line>] `.
///
/// The file is reduced to its last path segment. Without a location the header reads
/// `???:1`; negative lines are shown as `0`.
pub fn format_header(level: Level, now: &DateParts, location: Option<&CallerLocation>) -> String {
    let (file, line) = match location {
        Some(location) => (basename(&location.file), location.line.max(0)),
        None => ("???", 1),
    };

    let mut header = String::with_capacity(24 + file.len());
    // SAFETY: write to a string always succeeds
    write!(
        &mut header,
        "{}{:02}{:02} {:02}:{:02}:{:02} {file}:{line}] ",
        level.as_char(),
        now.month,
        now.day,
        now.hour,
        now.minute,
        now.second,
    )
    .unwrap();
    header
}

fn basename(path: &str) -> &str {
    match path.rfind(['/', '\\']) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::Unresolved;
    use crate::time::FixedClock;

    const MAY_3RD: DateParts = DateParts {
        month: 5,
        day: 3,
        hour: 14,
        minute: 5,
        second: 9,
    };

    #[test]
    fn test_header_shape() {
        let location = CallerLocation::new("/a/b/server.rs", 42);
        let header = format_header(Level::Warn, &MAY_3RD, Some(&location));
        assert_eq!(header, "W0503 14:05:09 server.rs:42] ");
    }

    #[test]
    fn test_header_zero_pads_every_field() {
        let now = DateParts {
            month: 1,
            day: 2,
            hour: 3,
            minute: 4,
            second: 5,
        };
        let location = CallerLocation::new("lib.rs", 7);
        let header = format_header(Level::Debug, &now, Some(&location));
        assert_eq!(header, "D0102 03:04:05 lib.rs:7] ");
    }

    #[test]
    fn test_unresolved_location_falls_back() {
        let header = format_header(Level::Error, &MAY_3RD, None);
        assert_eq!(header, "E0503 14:05:09 ???:1] ");

        let layout = HeaderLayout::new(FixedClock::new(MAY_3RD), Unresolved::default());
        assert_eq!(
            layout.format(Level::Info, Location::caller()),
            "I0503 14:05:09 ???:1] "
        );
    }

    #[test]
    fn test_negative_line_is_clamped() {
        let location = CallerLocation::new("src/main.rs", -12);
        let header = format_header(Level::Notice, &MAY_3RD, Some(&location));
        assert_eq!(header, "N0503 14:05:09 main.rs:0] ");
    }

    #[test]
    fn test_basename() {
        assert_eq!(basename("/a/b/server.rs"), "server.rs");
        assert_eq!(basename("server.rs"), "server.rs");
        assert_eq!(basename(r"src\bin\tool.rs"), "tool.rs");
        assert_eq!(basename("dir/"), "");
    }

    #[test]
    fn test_layout_uses_tracked_caller() {
        let layout = HeaderLayout::new(FixedClock::new(MAY_3RD), TrackCaller::default());
        let line = line!() + 1;
        let header = layout.format(Level::Crit, Location::caller());
        assert_eq!(header, format!("C0503 14:05:09 header.rs:{line}] "));
    }
}
