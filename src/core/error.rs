use thiserror::Error;

/// Errors produced when reading run-length encoded text.
///
/// Malformed input is terminal for the call that finds it; the codec never
/// guesses a recovery. Both variants carry enough context to point at the
/// offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RleError {
    /// A character appeared at a position where a run count was expected.
    #[error("malformed encoding: {found:?} at byte {position} is not attached to a run count")]
    MalformedEncoding { position: usize, found: char },

    /// An encoded token's count did not parse as a non-negative integer.
    #[error("malformed encoding: token {token:?} has an unreadable run count")]
    MalformedCount { token: String },
}
