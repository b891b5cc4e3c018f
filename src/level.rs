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

//! Severity levels.

use std::fmt;
use std::str::FromStr;

use crate::Error;

/// The severity of a log message.
///
/// Levels are ordered from most to least severe; a smaller [`code`](Level::code) is more
/// severe:
///
/// ```text
/// Fatal < Crit < Error < Warn < Notice < Info < Verbose < Debug
/// ```
///
/// [`Level::None`] is a sentinel used only as a threshold value. It compares below every real
/// level and is never emitted.
#[repr(i32)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Matches nothing when used as a threshold.
    None = 0,
    /// Unrecoverable; the process exits after the record is written.
    Fatal = 1,
    /// Critical conditions.
    Crit = 2,
    /// Error conditions.
    Error = 3,
    /// Warning conditions.
    Warn = 4,
    /// Normal but significant conditions.
    Notice = 5,
    /// Informational messages.
    Info = 6,
    /// Chatty informational messages.
    Verbose = 7,
    /// Debug-level messages.
    Debug = 8,
}

const LEVEL_CHARS: &[u8; 9] = b" FCEWNIVD";

impl Level {
    /// Every level that may be emitted, most severe first.
    pub const ALL: [Level; 8] = [
        Level::Fatal,
        Level::Crit,
        Level::Error,
        Level::Warn,
        Level::Notice,
        Level::Info,
        Level::Verbose,
        Level::Debug,
    ];

    /// The numeric code of this level.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Map a numeric code back to a level, if it is in range.
    pub const fn from_code(code: i32) -> Option<Level> {
        match code {
            0 => Some(Level::None),
            1 => Some(Level::Fatal),
            2 => Some(Level::Crit),
            3 => Some(Level::Error),
            4 => Some(Level::Warn),
            5 => Some(Level::Notice),
            6 => Some(Level::Info),
            7 => Some(Level::Verbose),
            8 => Some(Level::Debug),
            _ => None,
        }
    }

    /// The single character that leads a record header.
    pub const fn as_char(self) -> char {
        LEVEL_CHARS[self as usize] as char
    }

    /// The human readable name of this level.
    ///
    /// This returns the same string as the `fmt::Display` implementation.
    pub const fn name(self) -> &'static str {
        match self {
            Level::None => "NONE",
            Level::Fatal => "FATAL",
            Level::Crit => "CRITICAL",
            Level::Error => "ERROR",
            Level::Warn => "WARNING",
            Level::Notice => "NOTICE",
            Level::Info => "INFO",
            Level::Verbose => "VERBOSE",
            Level::Debug => "DEBUG",
        }
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> i32 {
        level.code()
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Level {
    type Err = Error;

    /// Parse a level from its name, a short alias, or its header character.
    fn from_str(s: &str) -> Result<Level, Self::Err> {
        for (names, level) in [
            (&["none"][..], Level::None),
            (&["fatal", "f"][..], Level::Fatal),
            (&["critical", "crit", "c"][..], Level::Crit),
            (&["error", "e"][..], Level::Error),
            (&["warning", "warn", "w"][..], Level::Warn),
            (&["notice", "n"][..], Level::Notice),
            (&["info", "i"][..], Level::Info),
            (&["verbose", "v"][..], Level::Verbose),
            (&["debug", "d"][..], Level::Debug),
        ] {
            if names.iter().any(|name| s.eq_ignore_ascii_case(name)) {
                return Ok(level);
            }
        }

        Err(Error::new(format!("malformed level: {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_codes() {
        for pair in Level::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should be more severe than {}", pair[0], pair[1]);
            assert_eq!(pair[0].code() + 1, pair[1].code());
        }
        assert!(Level::None < Level::Fatal);
    }

    #[test]
    fn test_chars_and_names() {
        let chars: String = Level::ALL.iter().map(|l| l.as_char()).collect();
        assert_eq!(chars, "FCEWNIVD");
        assert_eq!(Level::Crit.name(), "CRITICAL");
        assert_eq!(Level::Warn.to_string(), "WARNING");
        assert_eq!(format!("{:>8}", Level::Info), "    INFO");
    }

    #[test]
    fn test_code_round_trip() {
        for level in Level::ALL {
            assert_eq!(Level::from_code(level.code()), Some(level));
        }
        assert_eq!(Level::from_code(0), Some(Level::None));
        assert_eq!(Level::from_code(9), None);
        assert_eq!(Level::from_code(-1), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("warning".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("Crit".parse::<Level>().unwrap(), Level::Crit);
        assert_eq!("v".parse::<Level>().unwrap(), Level::Verbose);
        let err = "loud".parse::<Level>().unwrap_err();
        assert_eq!(err.to_string(), r#"malformed level: "loud""#);
    }
}
