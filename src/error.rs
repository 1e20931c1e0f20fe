// Typed errors with thiserror. Surface meaningful messages to JS.
// A broken carousel degrades to a static one; nothing here should take the page down.

use thiserror::Error;

/// Carousel error types.
#[derive(Error, Debug)]
pub enum CarouselError {
    #[error("Container not found: {selector}")]
    MissingContainer { selector: String },

    #[error("Card element {index} has no data-card-id attribute")]
    MissingCardId { index: usize },

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Animation unavailable: {0}")]
    AnimationUnavailable(String),

    #[error("Engine already destroyed")]
    Destroyed,

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CarouselError {
    fn from(err: serde_json::Error) -> Self {
        CarouselError::Serialization(err.to_string())
    }
}
