//! Navigation error type.

use derive_more::{Display, Error};
use tracing::instrument;

/// A history target pointed past the end of the recorded moves.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("History index {} out of range (len {}) at {}:{}", index, len, file, line)]
pub struct NavigationError {
    /// Requested move index.
    pub index: usize,
    /// History length at the time of the request.
    pub len: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl NavigationError {
    /// Creates a new navigation error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(index: usize, len: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            index,
            len,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
