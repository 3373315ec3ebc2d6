use super::{InvalidUserAgent, UserAgent, parse::classify_user_agent};
use std::sync::Arc;

/// Classifier of `User-Agent` (header) values.
///
/// The classifier only holds configuration: it can be shared freely
/// (and across threads), as every call to [`classify`] works on its own state.
///
/// [`classify`]: UserAgentClassifier::classify
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserAgentClassifier {
    max_length: Option<usize>,
}

impl UserAgentClassifier {
    /// Create a new [`UserAgentClassifier`] with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_length: None }
    }

    /// Only classify the first `max_length` bytes of a header.
    ///
    /// Headers in the wild rarely exceed a couple of hundred characters;
    /// a limit bounds the work done for hostile input. Headers that
    /// would be cut within a multi-byte character are left unclassified.
    /// By default there is no limit.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Only classify the first `max_length` bytes of a header.
    ///
    /// See [`Self::with_max_length`].
    pub fn set_max_length(&mut self, max_length: usize) -> &mut Self {
        self.max_length = Some(max_length);
        self
    }

    /// returns the configured maximum header length, if any.
    #[must_use]
    pub const fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    /// Classify a `User-Agent` (header) value.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUserAgent`] if the header is exactly `-`.
    pub fn classify(&self, header: impl Into<Arc<str>>) -> Result<UserAgent, InvalidUserAgent> {
        classify_user_agent(header.into(), self.max_length)
    }
}

/// Classify a `User-Agent` (header) value using the default [`UserAgentClassifier`].
///
/// # Errors
///
/// Returns [`InvalidUserAgent`] if the header is exactly `-`.
pub fn classify(header: impl Into<Arc<str>>) -> Result<UserAgent, InvalidUserAgent> {
    UserAgentClassifier::new().classify(header)
}
