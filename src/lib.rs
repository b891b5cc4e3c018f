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

//! Splitlog is a leveled logger that routes every record to standard output or standard
//! error, decided by three thresholds.
//!
//! # Overview
//!
//! Records carry one of eight levels, from [`Level::Fatal`] down to [`Level::Debug`]. Each
//! record starts with a compact header:
//!
//! ```text
//! W0503 14:05:09 server.rs:42] connection reset
//! ```
//!
//! The destination is picked with the `diff`, `err` and `out` thresholds (defaults `Warn`,
//! `Error` and `Info`):
//!
//! 1. a record at least as severe as both `diff` and `err` goes to standard error;
//! 2. otherwise a record less severe than `diff` but at least as severe as `out` goes to
//!    standard output;
//! 3. anything else is dropped.
//!
//! A fatal record that is written dumps the calling thread's stack to standard error,
//! flushes both streams for at most 10 seconds and exits the process with status 255.
//!
//! # Examples
//!
//! Log through the default logger:
//!
//! ```
//! use splitlog::Level;
//!
//! splitlog::set_out_level(Level::Verbose);
//!
//! splitlog::errorf!("failed to open {}", "config.toml");
//! splitlog::infoln(&[&"listening on", &8080]);
//! splitlog::verbose(&[&"cache=", &"warm"]);
//! ```
//!
//! Or build an instance of your own:
//!
//! ```
//! use splitlog::Level;
//! use splitlog::append::Testing;
//!
//! let stderr = Testing::default();
//! let logger = splitlog::builder()
//!     .thresholds(Level::Notice, Level::Notice, Level::Debug)
//!     .stderr(stderr.clone())
//!     .build();
//!
//! splitlog::noticef!(logger: logger, "{} nodes joined", 3);
//! assert!(stderr.contents().ends_with("] 3 nodes joined\n"));
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod append;
pub mod bridge;
pub mod fatal;
pub mod layout;
pub mod location;
pub mod record;
pub mod router;
pub mod threshold;
pub mod time;

mod error;
pub use self::error::Error;

mod level;
pub use self::level::Level;

mod trap;
pub use self::trap::DefaultTrap;
pub use self::trap::Trap;

mod operand;
pub use self::operand::Operand;

mod logger;
pub use self::logger::*;

mod macros;
