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

//! The ephemeral log record.

use crate::Level;

/// Whether a newline is appended after the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminator {
    /// Append a newline unless the body already ends with one (print and printf styles).
    IfMissing,
    /// Always append a newline (println style).
    Always,
}

/// A log record: level, rendered header, rendered body and line termination.
///
/// Records are built per emission and consumed immediately by the router.
#[derive(Debug, Clone)]
pub struct Record {
    level: Level,
    header: String,
    body: String,
    terminator: Terminator,
}

impl Record {
    /// Assemble a record from its parts.
    pub fn new(level: Level, header: String, body: String, terminator: Terminator) -> Self {
        Self {
            level,
            header,
            body,
            terminator,
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn terminator(&self) -> Terminator {
        self.terminator
    }

    /// Cut the body so that header and body together take at most `max` bytes.
    ///
    /// The header is kept whole and the body is cut at a character boundary.
    pub fn truncate(&mut self, max: usize) {
        let room = max.saturating_sub(self.header.len());
        if self.body.len() <= room {
            return;
        }
        let mut end = room;
        while !self.body.is_char_boundary(end) {
            end -= 1;
        }
        self.body.truncate(end);
    }

    /// Whether a newline goes after the body.
    pub fn needs_newline(&self) -> bool {
        match self.terminator {
            Terminator::Always => true,
            Terminator::IfMissing => !self.body.ends_with('\n'),
        }
    }

    /// The exact bytes written to the destination.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.header.len() + self.body.len() + 1);
        bytes.extend_from_slice(self.header.as_bytes());
        bytes.extend_from_slice(self.body.as_bytes());
        if self.needs_newline() {
            bytes.push(b'\n');
        }
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(body: &str, terminator: Terminator) -> Record {
        Record::new(
            Level::Info,
            "I0101 00:00:00 a.rs:1] ".to_string(),
            body.to_string(),
            terminator,
        )
    }

    #[test]
    fn test_if_missing_adds_single_newline() {
        assert_eq!(
            record("hello", Terminator::IfMissing).to_bytes(),
            b"I0101 00:00:00 a.rs:1] hello\n"
        );
        assert_eq!(
            record("hello\n", Terminator::IfMissing).to_bytes(),
            b"I0101 00:00:00 a.rs:1] hello\n"
        );
    }

    #[test]
    fn test_truncate_body() {
        let mut long = record("0123456789", Terminator::IfMissing);
        long.truncate(27);
        assert_eq!(long.body(), "0123");
        assert_eq!(long.to_bytes(), b"I0101 00:00:00 a.rs:1] 0123\n");

        let mut short = record("ok", Terminator::IfMissing);
        short.truncate(27);
        assert_eq!(short.body(), "ok");

        let mut header_only = record("gone", Terminator::Always);
        header_only.truncate(4);
        assert_eq!(header_only.header(), "I0101 00:00:00 a.rs:1] ");
        assert_eq!(header_only.body(), "");
    }

    #[test]
    fn test_truncate_keeps_char_boundary() {
        let mut record = record("añb", Terminator::IfMissing);
        // the cut would land inside `ñ`
        record.truncate(25);
        assert_eq!(record.body(), "a");
    }

    #[test]
    fn test_always_adds_newline() {
        assert_eq!(
            record("hello\n", Terminator::Always).to_bytes(),
            b"I0101 00:00:00 a.rs:1] hello\n\n"
        );
        assert_eq!(
            record("", Terminator::Always).to_bytes(),
            b"I0101 00:00:00 a.rs:1] \n"
        );
    }
}
