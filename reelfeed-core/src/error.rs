//! Errors raised by the feed driver.

use thiserror::Error;

/// Failures surfaced by the async feed driver.
///
/// The scheduler itself never fails: missing handles and empty operands are
/// absorbed where they occur.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// The driver task has exited, after unmount or a panic.
    #[error("feed driver has stopped")]
    Closed,
}
