use super::browser::{BrowserFields, GECKO, MOZILLA, SAFARI, scan_products};
use super::platform::scan_properties;
use super::tokenize::tokenize;
use super::{InvalidUserAgent, OsFamily, UserAgent};
use std::sync::Arc;

/// Header value used (e.g. by access logs) to denote an absent User-Agent.
const ABSENT_USER_AGENT: &str = "-";

/// Operating system fields as accumulated during a single classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct OsFields {
    pub(super) family: Option<OsFamily>,
    pub(super) version: Option<String>,
    pub(super) token: Option<String>,
}

/// Working state of a single classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Classification {
    pub(super) browser: BrowserFields,
    pub(super) os: OsFields,
    /// Last `Android x.y` label seen, refined by a later `Mobile` or `Tablet` property.
    pub(super) android_label: Option<String>,
}

impl Classification {
    fn into_user_agent(self, header: Arc<str>) -> UserAgent {
        UserAgent {
            header,
            os_family: self.os.family,
            os_version: self.os.version,
            os_token: self.os.token,
            browser_name: self.browser.name,
            browser_version: self.browser.version,
            browser_major: self.browser.major,
            browser_minor: self.browser.minor,
        }
    }
}

/// classify the http user agent string and return a [`UserAgent`],
/// containing whatever could be found, leaving the other fields unset.
///
/// # Remarks
///
/// The classification is heuristic: it aims at the common (and historic)
/// desktop and mobile browsers, not at a complete user agent database.
pub(super) fn classify_user_agent(
    header: Arc<str>,
    max_length: Option<usize>,
) -> Result<UserAgent, InvalidUserAgent> {
    if header.as_ref() == ABSENT_USER_AGENT {
        tracing::debug!("user agent header is absent (-): refuse classification");
        return Err(InvalidUserAgent::new());
    }

    let Some(ua) = truncate(&header, max_length) else {
        tracing::debug!(
            header.len = header.len(),
            max_length,
            "user agent header cannot be truncated on a char boundary: leave unclassified"
        );
        return Ok(UserAgent::unclassified(header));
    };
    if ua.len() < header.len() {
        tracing::debug!(
            header.len = header.len(),
            max_length,
            "user agent header truncated before classification"
        );
    }

    let tokens = tokenize(ua);
    let scan = scan_products(&tokens.products);

    let mut state = Classification {
        browser: scan.browser,
        ..Default::default()
    };
    scan_properties(&tokens.properties, &mut state);

    if state.browser.is(GECKO) {
        state.browser.name = Some(MOZILLA.to_owned());
    }
    if state.browser.is(SAFARI)
        && let Some(release) = scan.version_hint
    {
        // `Version/` carries the actual Safari release, the product only its WebKit build
        state.browser.set_major_minor(&release);
        state.browser.version = Some(release);
    }

    let ua = state.into_user_agent(header);
    tracing::trace!(
        os.family = ?ua.os_family,
        os.version = ?ua.os_version,
        browser.name = ?ua.browser_name,
        browser.version = ?ua.browser_version,
        "user agent classified"
    );
    Ok(ua)
}

fn truncate(header: &str, max_length: Option<usize>) -> Option<&str> {
    match max_length {
        Some(max_length) if header.len() > max_length => header.get(..max_length),
        _ => Some(header),
    }
}
