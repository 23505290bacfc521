//! Request statistics tracking.
//!
//! Thread-safe counters for scrape outcomes, shared by every request handler.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, RequestError};

/// Thread-safe processing statistics tracker.
///
/// Tracks successful scrapes, validation rejections, and scrape failures per
/// `ErrorType` using atomic counters, so it can be shared across tasks behind an
/// `Arc` without locking. All counters start at zero.
pub struct ProcessingStats {
    succeeded: AtomicUsize,
    validation_failures: AtomicUsize,
    errors: HashMap<ErrorType, AtomicUsize>,
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessingStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        ProcessingStats {
            succeeded: AtomicUsize::new(0),
            validation_failures: AtomicUsize::new(0),
            errors,
        }
    }

    /// Records a scrape that produced a record.
    pub fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a failed request under the matching counter.
    pub fn record_failure(&self, error: &RequestError) {
        match error.error_type() {
            None => {
                self.validation_failures.fetch_add(1, Ordering::Relaxed);
            }
            Some(error_type) => self.increment_error(error_type),
        }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in ProcessingStats initialization.",
                error
            );
        }
    }

    /// Get the count for an error type.
    ///
    /// Returns 0 if the error type is not in the map (should never happen if properly initialized).
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Successful scrapes.
    pub fn succeeded(&self) -> usize {
        self.succeeded.load(Ordering::SeqCst)
    }

    /// Requests rejected for a missing URL.
    pub fn validation_failures(&self) -> usize {
        self.validation_failures.load(Ordering::SeqCst)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Every request seen so far, whatever its outcome.
    pub fn total_requests(&self) -> usize {
        self.succeeded() + self.validation_failures() + self.total_errors()
    }
}
