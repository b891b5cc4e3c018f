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

//! The fatal sequence: stack capture, bounded flush and process termination.

use std::backtrace::Backtrace;
use std::fmt;
use std::io::Write;
use std::time::Duration;

/// The exit status of a process terminated by a fatal record.
pub const FATAL_EXIT_CODE: i32 = 255;

/// How long the fatal sequence waits for the flush before giving up on it.
pub const DEFAULT_FLUSH_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_CAPTURE_ATTEMPTS: usize = 5;

/// Ends the process once a fatal record has been written and flushed.
pub trait Terminate: fmt::Debug + Send + Sync + 'static {
    /// Terminate with the given exit status. Never returns.
    fn terminate(&self, code: i32) -> !;
}

impl<T: Terminate> From<T> for Box<dyn Terminate> {
    fn from(value: T) -> Self {
        Box::new(value)
    }
}

/// The default terminator, calling [`std::process::exit`].
///
/// No destructors or cleanup handlers run.
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct ProcessExit {}

impl Terminate for ProcessExit {
    fn terminate(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}

/// A terminator that unwinds the calling thread with an [`Exited`] payload instead of ending
/// the process.
///
/// Meant for test suites that need to observe the fatal sequence up to termination. The
/// panic hook is not invoked.
///
/// # Examples
///
/// ```
/// use std::panic;
///
/// use splitlog::fatal::Exited;
/// use splitlog::fatal::Unwind;
///
/// let logger = splitlog::builder()
///     .stderr(splitlog::append::Testing::default())
///     .terminator(Unwind::default())
///     .build();
///
/// let payload = panic::catch_unwind(panic::AssertUnwindSafe(|| {
///     logger.fatalf(format_args!("bye"));
/// }))
/// .unwrap_err();
/// assert_eq!(payload.downcast_ref::<Exited>(), Some(&Exited(255)));
/// ```
#[derive(Debug, Default, Clone, Copy)]
#[non_exhaustive]
pub struct Unwind {}

/// The unwind payload carried by [`Unwind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exited(pub i32);

impl Terminate for Unwind {
    fn terminate(&self, code: i32) -> ! {
        std::panic::resume_unwind(Box::new(Exited(code)))
    }
}

/// Capture a stack trace of the calling thread.
///
/// The trace is rendered into a fixed buffer that starts at 10000 bytes (100000 when `all` is
/// set) and doubles up to five times until the trace fits. If it never fits, the truncated
/// contents of the last buffer are returned.
///
/// The standard library can only walk the calling thread, so `all` changes the starting
/// buffer size but the trace still covers the calling thread alone.
pub fn stacks(all: bool) -> Vec<u8> {
    stacks_with(initial_capacity(all), capture_into)
}

fn initial_capacity(all: bool) -> usize {
    if all { 100_000 } else { 10_000 }
}

/// Grow a buffer from `initial` bytes until `capture` leaves room to spare.
fn stacks_with(initial: usize, mut capture: impl FnMut(&mut [u8]) -> usize) -> Vec<u8> {
    let mut n = initial;
    let mut trace = Vec::new();
    for _ in 0..MAX_CAPTURE_ATTEMPTS {
        trace = vec![0; n];
        let written = capture(&mut trace);
        if written < trace.len() {
            trace.truncate(written);
            return trace;
        }
        n *= 2;
    }
    trace
}

/// Render the calling thread's trace into `buf`, returning the number of bytes written.
fn capture_into(buf: &mut [u8]) -> usize {
    let capacity = buf.len();
    let mut cursor = &mut buf[..];
    let thread = std::thread::current();
    let name = thread.name().unwrap_or("<unnamed>");
    // a full buffer surfaces as WriteZero; the partial trace is kept
    let _ = writeln!(cursor, "thread '{name}' ({:?}):", thread.id())
        .and_then(|_| write!(cursor, "{}", Backtrace::force_capture()));
    capacity - cursor.len()
}

/// Run `flush` on a separate thread and wait at most `timeout` for it.
///
/// Returns whether the flush completed in time. A flush that overruns is left running.
pub(crate) fn timeout_flush<F>(flush: F, timeout: Duration) -> bool
where
    F: FnOnce() + Send + 'static,
{
    let (done, finished) = crossbeam_channel::bounded(1);
    let spawned = std::thread::Builder::new()
        .name("splitlog-flush".to_string())
        .spawn(move || {
            flush();
            let _ = done.send(());
        });
    if spawned.is_err() {
        return false;
    }

    crossbeam_channel::select! {
        recv(finished) -> _ => true,
        recv(crossbeam_channel::after(timeout)) -> _ => false,
    }
}

pub(crate) fn flush_timeout_warning(timeout: Duration) -> String {
    format!("splitlog: flush took longer than {timeout:?}\n")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::Ordering;
    use std::time::Instant;

    use super::*;

    #[test]
    fn test_stacks_names_current_thread() {
        let trace = std::thread::Builder::new()
            .name("stack-capture".to_string())
            .spawn(|| stacks(false))
            .unwrap()
            .join()
            .unwrap();
        let trace = String::from_utf8_lossy(&trace);
        assert!(trace.starts_with("thread 'stack-capture'"), "{trace}");
        assert!(trace.len() < 10_000 * 32);
    }

    #[test]
    fn test_stacks_buffer_doubles() {
        let mut sizes = vec![];
        let trace = stacks_with(initial_capacity(false), |buf| {
            sizes.push(buf.len());
            if buf.len() < 80_000 {
                return buf.len();
            }
            buf[..5].copy_from_slice(b"trace");
            5
        });
        assert_eq!(sizes, [10_000, 20_000, 40_000, 80_000]);
        assert_eq!(trace, b"trace");
    }

    #[test]
    fn test_stacks_all_starts_larger() {
        assert_eq!(initial_capacity(false), 10_000);
        assert_eq!(initial_capacity(true), 100_000);

        let mut sizes = vec![];
        stacks_with(initial_capacity(true), |buf| {
            sizes.push(buf.len());
            0
        });
        assert_eq!(sizes, [100_000]);
    }

    #[test]
    fn test_stacks_gives_up_after_five_attempts() {
        let mut sizes = vec![];
        let trace = stacks_with(initial_capacity(false), |buf| {
            sizes.push(buf.len());
            buf.fill(b'x');
            buf.len()
        });
        assert_eq!(sizes, [10_000, 20_000, 40_000, 80_000, 160_000]);
        assert_eq!(trace.len(), 160_000);
        assert!(trace.iter().all(|b| *b == b'x'));
    }

    #[test]
    fn test_capture_truncates_to_buffer() {
        let mut buf = vec![0; 8];
        assert_eq!(capture_into(&mut buf), 8);
        assert_eq!(&buf, b"thread '");
    }

    #[test]
    fn test_flush_completes() {
        let flushed = Arc::new(AtomicBool::new(false));
        let completed = {
            let flushed = flushed.clone();
            timeout_flush(
                move || flushed.store(true, Ordering::SeqCst),
                Duration::from_secs(10),
            )
        };
        assert!(completed);
        assert!(flushed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_flush_times_out() {
        let start = Instant::now();
        let completed = timeout_flush(
            || std::thread::sleep(Duration::from_secs(60)),
            Duration::from_millis(50),
        );
        assert!(!completed);
        assert!(start.elapsed() < Duration::from_secs(30));
    }

    #[test]
    fn test_timeout_warning() {
        assert_eq!(
            flush_timeout_warning(DEFAULT_FLUSH_TIMEOUT),
            "splitlog: flush took longer than 10s\n"
        );
    }

    #[test]
    fn test_unwind_terminator() {
        fn exit() {
            Unwind::default().terminate(FATAL_EXIT_CODE)
        }

        let payload = std::panic::catch_unwind(exit).unwrap_err();
        assert_eq!(payload.downcast_ref::<Exited>(), Some(&Exited(255)));
    }
}
