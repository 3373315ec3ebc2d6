use super::{InvalidUserAgent, UnknownOsFamily, UserAgentClassifier};
use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

/// User Agent (UA) classification.
///
/// Every field is optional: a field that is `None` means the header
/// carried no evidence for it, which is a valid outcome and not an error.
/// Versions are kept as the literal text found in the header
/// (e.g. a minor version `02` stays `02`).
///
/// See [the module level documentation](crate) for more information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAgent {
    pub(super) header: Arc<str>,
    pub(super) os_family: Option<OsFamily>,
    pub(super) os_version: Option<String>,
    pub(super) os_token: Option<String>,
    pub(super) browser_name: Option<String>,
    pub(super) browser_version: Option<String>,
    pub(super) browser_major: Option<String>,
    pub(super) browser_minor: Option<String>,
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)
    }
}

impl UserAgent {
    /// Classify a `User-Agent` (header) value using the default [`UserAgentClassifier`].
    ///
    /// # Errors
    ///
    /// Returns [`InvalidUserAgent`] if the header is exactly `-`.
    pub fn new(header: impl Into<Arc<str>>) -> Result<Self, InvalidUserAgent> {
        UserAgentClassifier::new().classify(header)
    }

    /// A [`UserAgent`] for which nothing is known.
    pub(super) fn unclassified(header: Arc<str>) -> Self {
        Self {
            header,
            os_family: None,
            os_version: None,
            os_token: None,
            browser_name: None,
            browser_version: None,
            browser_major: None,
            browser_minor: None,
        }
    }

    /// returns the `User-Agent` (header) value used by the [`UserAgent`].
    #[must_use]
    pub fn header_str(&self) -> &str {
        &self.header
    }

    /// returns the [`OsFamily`] of the [`UserAgent`], if known.
    #[must_use]
    pub fn os_family(&self) -> Option<OsFamily> {
        self.os_family
    }

    /// returns the operating system version label, if known.
    ///
    /// This is a label rather than a number, e.g. `XP`, `OS X 10.6`,
    /// `iPhone iOS 4.1` or `Android 2.2`.
    #[must_use]
    pub fn os_version(&self) -> Option<&str> {
        self.os_version.as_deref()
    }

    /// returns the raw property which identified the operating system, if any.
    ///
    /// Only recorded for Windows, Macintosh and Linux properties.
    #[must_use]
    pub fn os_token(&self) -> Option<&str> {
        self.os_token.as_deref()
    }

    /// returns the browser name, if known.
    ///
    /// One of `Firefox`, `Chrome`, `Safari`, `Opera`, `MSIE`, `Mozilla`,
    /// or the name of any other product found in the header (e.g. `NetNewsWire`).
    #[must_use]
    pub fn browser_name(&self) -> Option<&str> {
        self.browser_name.as_deref()
    }

    /// returns the full browser version text, if known.
    #[must_use]
    pub fn browser_version(&self) -> Option<&str> {
        self.browser_version.as_deref()
    }

    /// returns the browser major version, if known.
    #[must_use]
    pub fn browser_major(&self) -> Option<&str> {
        self.browser_major.as_deref()
    }

    /// returns the browser minor version, if known.
    #[must_use]
    pub fn browser_minor(&self) -> Option<&str> {
        self.browser_minor.as_deref()
    }
}

impl FromStr for UserAgent {
    type Err = InvalidUserAgent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Operating system family of the [`UserAgent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    /// Microsoft Windows (desktop, server and CE)
    Windows,
    /// Windows Phone
    WindowsPhone,
    /// Apple Macintosh, both classic MacOS and OS X
    Macintosh,
    /// Linux, including Android and Chrome OS
    Linux,
    /// iOS (iPhone, iPod, iPad)
    IOS,
    /// Solaris / SunOS
    SunOS,
    /// FreeBSD
    FreeBSD,
    /// OpenBSD
    OpenBSD,
    /// NetBSD
    NetBSD,
}

impl OsFamily {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::WindowsPhone => "Windows Phone",
            Self::Macintosh => "Macintosh",
            Self::Linux => "Linux",
            Self::IOS => "iOS",
            Self::SunOS => "SunOS",
            Self::FreeBSD => "FreeBSD",
            Self::OpenBSD => "OpenBSD",
            Self::NetBSD => "NetBSD",
        }
    }

    /// The BSD family for a `Free`, `Open` or `Net` prefix.
    pub(super) fn bsd(flavour: &str) -> Option<Self> {
        match flavour {
            "Free" => Some(Self::FreeBSD),
            "Open" => Some(Self::OpenBSD),
            "Net" => Some(Self::NetBSD),
            _ => None,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OsFamily {
    type Err = UnknownOsFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        [
            Self::Windows,
            Self::WindowsPhone,
            Self::Macintosh,
            Self::Linux,
            Self::IOS,
            Self::SunOS,
            Self::FreeBSD,
            Self::OpenBSD,
            Self::NetBSD,
        ]
        .into_iter()
        .find(|family| family.as_str().eq_ignore_ascii_case(name))
        .ok_or_else(|| UnknownOsFamily::new(s))
    }
}

impl Serialize for OsFamily {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OsFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse::<Self>().map_err(serde::de::Error::custom)
    }
}
