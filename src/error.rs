// Error types for the end-to-end suite

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving a scenario
#[derive(Debug, Error)]
pub enum Error {
    /// A precondition the current step relies on does not hold
    ///
    /// Raised before an interaction is attempted, when the page is not in
    /// the state the step assumes (no media element, missing slider, not
    /// logged in). Scenario-fatal: later steps would act on the wrong state.
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// An observed value did not match the expected one
    #[error("assertion failed: {what}: expected {expected}, got {actual}")]
    Assertion {
        what: String,
        expected: String,
        actual: String,
    },

    /// The polled element never showed up in the DOM
    #[error("'{what}' never appeared within {waited_ms}ms")]
    NeverAppeared { what: String, waited_ms: u64 },

    /// The element was present, but the polled condition never became true
    ///
    /// Carries the last observed state so the failure message says what the
    /// page actually showed, not just that it timed out.
    #[error("'{what}' not satisfied within {waited_ms}ms (last observed: {last})")]
    NeverSatisfied {
        what: String,
        waited_ms: u64,
        last: String,
    },

    /// An awaited browser event (download, popup) never fired
    #[error("no {event} event captured within {waited_ms}ms")]
    EventTimeout { event: &'static str, waited_ms: u64 },

    /// Suite configuration problem (missing or malformed NAVIDROME_E2E_* variable)
    #[error("configuration error: {0}")]
    Config(String),

    /// Error reported by the underlying browser driver
    #[error(transparent)]
    Driver(#[from] playwright_rs::Error),
}

impl Error {
    /// Shorthand for a [`Error::Precondition`] with a formatted message.
    pub fn precondition(message: impl Into<String>) -> Self {
        Error::Precondition(message.into())
    }

    /// Shorthand for an [`Error::Assertion`] comparing two displayable values.
    pub fn assertion(
        what: impl Into<String>,
        expected: impl std::fmt::Display,
        actual: impl std::fmt::Display,
    ) -> Self {
        Error::Assertion {
            what: what.into(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// True for the failure classes that indicate a timing problem rather
    /// than a wrong value: the page may be slow, the data is not wrong.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Error::NeverAppeared { .. }
                | Error::NeverSatisfied { .. }
                | Error::EventTimeout { .. }
                | Error::Driver(playwright_rs::Error::Timeout(_))
                | Error::Driver(playwright_rs::Error::NavigationTimeout { .. })
                | Error::Driver(playwright_rs::Error::AssertionTimeout(_))
        )
    }
}
