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

//! Wall clock abstraction for record headers.
//!
//! The clock is backed by either `jiff` (default) or `chrono` depending on the enabled
//! features. Headers only need calendar fields in local time, so both backends reduce to
//! [`DateParts`].

use std::fmt;

/// The calendar fields rendered into a record header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParts {
    /// Month of the year, `1..=12`.
    pub month: u8,
    /// Day of the month, `1..=31`.
    pub day: u8,
    /// Hour of the day, `0..=23`.
    pub hour: u8,
    /// Minute of the hour, `0..=59`.
    pub minute: u8,
    /// Second of the minute, `0..=59`.
    pub second: u8,
}

/// A source of the current local time.
pub trait Clock: fmt::Debug + Send + Sync + 'static {
    /// Read the current time.
    fn now(&self) -> DateParts;
}

impl<T: Clock> From<T> for Box<dyn Clock> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// A clock reading the system wall clock in the system timezone.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct SystemClock {}

impl Clock for SystemClock {
    fn now(&self) -> DateParts {
        local_now()
    }
}

/// A clock that always reports the same instant.
///
/// # Examples
///
/// ```
/// use splitlog::time::DateParts;
/// use splitlog::time::FixedClock;
///
/// let clock = FixedClock::new(DateParts {
///     month: 5,
///     day: 3,
///     hour: 14,
///     minute: 5,
///     second: 9,
/// });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateParts,
}

impl FixedClock {
    /// Create a clock stuck at `now`.
    pub fn new(now: DateParts) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateParts {
        self.now
    }
}

#[cfg(feature = "jiff")]
mod jiff_impl {
    use super::DateParts;

    impl From<&jiff::Zoned> for DateParts {
        fn from(zoned: &jiff::Zoned) -> Self {
            DateParts {
                month: zoned.month() as u8,
                day: zoned.day() as u8,
                hour: zoned.hour() as u8,
                minute: zoned.minute() as u8,
                second: zoned.second() as u8,
            }
        }
    }

    pub(super) fn local_now() -> DateParts {
        DateParts::from(&jiff::Zoned::now())
    }
}

#[cfg(feature = "chrono")]
mod chrono_impl {
    use chrono::Datelike;
    use chrono::Timelike;

    use super::DateParts;

    impl<Tz: chrono::TimeZone> From<&chrono::DateTime<Tz>> for DateParts {
        fn from(dt: &chrono::DateTime<Tz>) -> Self {
            DateParts {
                month: dt.month() as u8,
                day: dt.day() as u8,
                hour: dt.hour() as u8,
                minute: dt.minute() as u8,
                second: dt.second() as u8,
            }
        }
    }

    #[allow(dead_code)]
    pub(super) fn local_now() -> DateParts {
        DateParts::from(&chrono::Local::now())
    }
}

#[cfg(feature = "jiff")]
use jiff_impl::local_now;

#[cfg(all(feature = "chrono", not(feature = "jiff")))]
use chrono_impl::local_now;

#[cfg(not(any(feature = "jiff", feature = "chrono")))]
compile_error!("At least one of 'jiff' or 'chrono' features must be enabled");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let parts = DateParts {
            month: 12,
            day: 31,
            hour: 23,
            minute: 59,
            second: 58,
        };
        let clock = FixedClock::new(parts);
        assert_eq!(clock.now(), parts);
        assert_eq!(clock.now(), parts);
    }

    #[test]
    fn test_system_clock_in_range() {
        let now = SystemClock::default().now();
        assert!((1..=12).contains(&now.month));
        assert!((1..=31).contains(&now.day));
        assert!(now.hour < 24);
        assert!(now.minute < 60);
        assert!(now.second < 61);
    }

    #[cfg(feature = "jiff")]
    #[test]
    fn test_parts_from_zoned() {
        use std::str::FromStr;

        let zoned = jiff::Zoned::from_str("2024-08-10T17:12:52+08[+08]").unwrap();
        assert_eq!(
            DateParts::from(&zoned),
            DateParts {
                month: 8,
                day: 10,
                hour: 17,
                minute: 12,
                second: 52,
            }
        );
    }
}
