//! Browser identity and version from the product tokens.
//!
//! Product tokens are scanned in input order. Firefox, Chrome and Opera
//! commit the decision and end the scan. Any other product (Safari
//! included) is only a provisional answer that later tokens may replace.

use super::tables::{SAFARI_2_MIN_BUILD, canonical_product_name};
use super::tokenize::ProductToken;
use super::version::{dotted_major_minor, leading_decimal, major_minor, prefix_chars};

pub(super) const FIREFOX: &str = "Firefox";
pub(super) const CHROME: &str = "Chrome";
pub(super) const SAFARI: &str = "Safari";
pub(super) const OPERA: &str = "Opera";
pub(super) const GECKO: &str = "Gecko";
pub(super) const MOZILLA: &str = "Mozilla";
pub(super) const MSIE: &str = "MSIE";
/// `Version/x.y`: the release of a Safari-like browser.
pub(super) const VERSION: &str = "Version";

/// Browser fields as accumulated during a single classification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct BrowserFields {
    pub(super) name: Option<String>,
    pub(super) version: Option<String>,
    pub(super) major: Option<String>,
    pub(super) minor: Option<String>,
}

impl BrowserFields {
    pub(super) fn is(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    fn identify(&mut self, name: &str, version: &str) {
        self.name = Some(name.to_owned());
        self.version = Some(version.to_owned());
    }

    /// Identify the browser by `name`, splitting `version` on its dots.
    pub(super) fn identify_dotted(&mut self, name: &str, version: &str) {
        self.identify(name, version);
        (self.major, self.minor) = dotted_major_minor(version);
    }

    /// Set major and minor from the first `major.minor` pair in `version`,
    /// leaving both untouched when there is none.
    pub(super) fn set_major_minor(&mut self, version: &str) -> bool {
        match major_minor(version) {
            Some((major, minor)) => {
                self.major = Some(major);
                self.minor = Some(minor);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Decision {
    #[default]
    Undecided,
    /// A later product token may still replace this browser.
    Overridable(BrowserFields),
    /// Final: remaining product tokens are ignored.
    Exclusive(BrowserFields),
}

impl Decision {
    fn is_exclusive(&self) -> bool {
        matches!(self, Self::Exclusive(_))
    }

    fn into_fields(self) -> BrowserFields {
        match self {
            Self::Undecided => BrowserFields::default(),
            Self::Overridable(fields) | Self::Exclusive(fields) => fields,
        }
    }

    fn advance(self, product: &ProductToken) -> Self {
        let version = product.version.as_str();
        let mut fields = self.into_fields();
        match canonical_product_name(&product.name) {
            FIREFOX => {
                fields.identify(FIREFOX, version);
                let (major, minor) = firefox_major_minor(version);
                fields.major = Some(major);
                fields.minor = Some(minor);
                Self::Exclusive(fields)
            }
            name @ (CHROME | OPERA) => {
                fields.identify(name, version);
                fields.set_major_minor(version);
                Self::Exclusive(fields)
            }
            SAFARI => {
                fields.identify(SAFARI, version);
                fields.major = Some(safari_generation(version).to_owned());
                Self::Overridable(fields)
            }
            // rendering engine: only named, it has no browser version
            GECKO => {
                fields.identify(GECKO, version);
                Self::Overridable(fields)
            }
            name => {
                fields.identify(name, version);
                if let Some(first) = version.chars().next() {
                    fields.major = Some(first.to_string());
                }
                Self::Overridable(fields)
            }
        }
    }
}

/// Outcome of the product token scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct ProductScan {
    pub(super) browser: BrowserFields,
    /// Raw version of the last `Version/` token seen before the scan ended.
    pub(super) version_hint: Option<String>,
}

pub(super) fn scan_products(products: &[ProductToken]) -> ProductScan {
    let mut decision = Decision::Undecided;
    let mut version_hint = None;

    for product in products {
        if decision.is_exclusive() {
            break;
        }
        if product.name == VERSION {
            version_hint = Some(product.version.clone());
            continue;
        }
        decision = decision.advance(product);
        tracing::trace!(
            product.name = %product.name,
            product.version = %product.version,
            exclusive = decision.is_exclusive(),
            "user agent product token applied to browser decision"
        );
    }

    ProductScan {
        browser: decision.into_fields(),
        version_hint,
    }
}

/// Firefox versions are `major.minor[...]`; anything else is cut
/// at three characters, the remainder (minus one dot) being the minor.
fn firefox_major_minor(version: &str) -> (String, String) {
    if let Some(pair) = major_minor(version) {
        return pair;
    }
    let major = prefix_chars(version, 3);
    let minor = version
        .strip_prefix(major)
        .unwrap_or_default()
        .replacen('.', "", 1);
    (major.to_owned(), minor)
}

/// Safari only advertised its WebKit build: builds below 400 are Safari 1.
fn safari_generation(build: &str) -> &'static str {
    if leading_decimal(prefix_chars(build, 3)) < SAFARI_2_MIN_BUILD {
        "1"
    } else {
        "2"
    }
}
