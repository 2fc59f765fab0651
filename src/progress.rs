// src/progress.rs

//! Defines a trait for observing the progress of long-running operations.
//!
//! The core stays usable headlessly: the walker and combiner accept an
//! optional reporter and otherwise run silently, so automated tests and
//! library callers never need a terminal attached. During the scan phase the
//! total is unknown (directory sizes are not known upfront); `set_length` is
//! only called once the selection is complete.

#[cfg(feature = "progress")]
use indicatif::{ProgressBar, ProgressStyle};

/// A sink for per-unit-of-work progress: the current path being processed
/// and a running completed/total count.
pub trait ProgressReporter: Send + Sync {
    /// Sets the total number of items to process, once known.
    fn set_length(&self, len: u64);
    /// Sets the number of items completed so far.
    fn set_position(&self, pos: u64);
    /// Names the path currently being processed.
    fn set_message(&self, msg: String);
    /// Finishes the progress reporting.
    fn finish(&self);
    /// Finishes the progress reporting with a final message.
    fn finish_with_message(&self, msg: String);
}

/// A `ProgressReporter` that does nothing.
///
/// Used in non-interactive environments where a progress bar is not wanted.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_length(&self, _len: u64) {}
    fn set_position(&self, _pos: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self) {}
    fn finish_with_message(&self, _msg: String) {}
}

/// An implementation of `ProgressReporter` using the `indicatif` crate.
#[cfg(feature = "progress")]
#[derive(Clone)]
pub struct IndicatifProgress {
    bar: ProgressBar,
}

#[cfg(feature = "progress")]
impl IndicatifProgress {
    /// Creates a new progress bar with a default style.
    pub fn new() -> Self {
        let pb = ProgressBar::new(0);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )
                .unwrap()
                .progress_chars("#>-"),
        );
        Self { bar: pb }
    }
}

#[cfg(feature = "progress")]
impl Default for IndicatifProgress {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "progress")]
impl ProgressReporter for IndicatifProgress {
    fn set_length(&self, len: u64) {
        self.bar.set_length(len);
    }

    fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    fn set_message(&self, msg: String) {
        self.bar.set_message(msg);
    }

    fn finish(&self) {
        self.bar.finish();
    }

    fn finish_with_message(&self, msg: String) {
        self.bar.finish_with_message(msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingProgress {
        messages: Mutex<Vec<String>>,
    }

    impl ProgressReporter for RecordingProgress {
        fn set_length(&self, _len: u64) {}
        fn set_position(&self, _pos: u64) {}
        fn set_message(&self, msg: String) {
            self.messages.lock().unwrap().push(msg);
        }
        fn finish(&self) {}
        fn finish_with_message(&self, msg: String) {
            self.messages.lock().unwrap().push(msg);
        }
    }

    #[test]
    fn test_custom_reporter_receives_messages() {
        let reporter = RecordingProgress {
            messages: Mutex::new(Vec::new()),
        };
        reporter.set_message("src/main.rs".to_string());
        reporter.finish_with_message("done".to_string());
        let messages = reporter.messages.lock().unwrap();
        assert_eq!(messages.as_slice(), ["src/main.rs", "done"]);
    }
}
