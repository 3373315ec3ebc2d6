use std::{error, fmt};

/// The header could not be classified at all.
///
/// Only returned for the header `-`, the placeholder that access logs
/// write when no `User-Agent` was sent. Any other input, however
/// malformed, classifies to a (possibly empty) [`UserAgent`].
///
/// [`UserAgent`]: crate::UserAgent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct InvalidUserAgent;

impl InvalidUserAgent {
    pub(crate) const fn new() -> Self {
        Self
    }
}

impl fmt::Display for InvalidUserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid user agent: \"-\"")
    }
}

impl error::Error for InvalidUserAgent {}

/// Returned when a string does not name a known [`OsFamily`].
///
/// [`OsFamily`]: crate::OsFamily
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOsFamily(String);

impl UnknownOsFamily {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The rejected name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownOsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid os family: {}", self.0)
    }
}

impl error::Error for UnknownOsFamily {}
