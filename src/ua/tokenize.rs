//! Splitting a raw User-Agent into product and property tokens.

use super::tables::{OPERA_SPACED_VERSION, PARENTHESISED, PROPERTY_SEPARATOR};
use std::borrow::Cow;

/// A `name/version` fragment of the User-Agent, e.g. `Firefox/1.5.0.1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct ProductToken {
    pub(super) name: String,
    pub(super) version: String,
}

impl ProductToken {
    /// Split a whitespace delimited run on its first `/`.
    fn from_run(run: &str) -> Option<Self> {
        let (name, version) = run.split_once('/')?;
        Some(Self {
            name: name.to_owned(),
            version: version.to_owned(),
        })
    }
}

/// Product and property tokens of a single User-Agent, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct Tokens {
    pub(super) products: Vec<ProductToken>,
    pub(super) properties: Vec<String>,
}

pub(super) fn tokenize(ua: &str) -> Tokens {
    Tokens {
        products: product_tokens(ua),
        properties: property_tokens(ua),
    }
}

/// Rewrite Opera's ad-hoc `Opera 9.64` into the common `Opera/9.64` shape.
fn normalize_opera(ua: &str) -> Cow<'_, str> {
    OPERA_SPACED_VERSION.replace_all(ua, "Opera/${1}")
}

fn product_tokens(ua: &str) -> Vec<ProductToken> {
    normalize_opera(ua)
        .split_whitespace()
        .filter_map(ProductToken::from_run)
        .collect()
}

fn property_tokens(ua: &str) -> Vec<String> {
    let detail = parenthesised_detail(ua);
    PROPERTY_SEPARATOR
        .split(&detail)
        .filter(|property| !property.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

/// Approximate the parenthesised detail of the User-Agent.
///
/// Every word found outside of the outermost parentheses is subtracted from
/// the full string by literal substring removal, after which the remaining
/// parentheses are dropped. A word that happens to occur outside *and* inside
/// the parentheses is therefore also removed from the detail: this keeps
/// compatibility with the established classification of known samples, but
/// is a candidate for replacement by structural span extraction.
fn parenthesised_detail(ua: &str) -> String {
    let outside = PARENTHESISED.replace_all(ua, "");
    let detail = outside
        .split_whitespace()
        .fold(ua.to_owned(), |detail, word| detail.replace(word, ""));
    detail.replace(['(', ')'], "").trim().to_owned()
}
