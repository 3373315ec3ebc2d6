//! Fixed lookup tables and the patterns shared by the cascades.
//!
//! Adding a signature should be a change to the data in here,
//! not to the cascade code that consumes it.

use regex::Regex;
use std::sync::LazyLock;

/// `Windows NT <version>` to marketing name.
///
/// Versions not listed here are reported as `NT <version>`.
pub(super) const WINDOWS_NT_VERSIONS: &[(&str, &str)] = &[
    ("5", "2000"),
    ("5.0", "2000"),
    ("5.1", "XP"),
    ("5.2", "XP 64/Server 2003"),
    ("5.2 x64", "XP 64/Server 2003"),
    ("6.0", "Vista/Server 2008"),
    ("6.1", "7/Server 2008 R2"),
    ("6.2", "8"),
];

/// Legacy Windows releases advertised as `Windows 95`, `Windows 98` or `Windows ME`.
pub(super) const WINDOWS_LEGACY_CODES: &[&str] = &["95", "98", "ME"];

/// Device words that identify iOS when they lead a property.
pub(super) const IOS_DEVICES: &[&str] = &["iPod", "iPhone", "iPad"];

/// Properties that mark the form factor of an Android device.
pub(super) const ANDROID_FORM_FACTORS: &[&str] = &["Mobile", "Tablet"];

/// Product names which are aliases of another product.
pub(super) const PRODUCT_ALIASES: &[(&str, &str)] = &[("Iceweasel", "Firefox")];

/// Safari build numbers below this are Safari 1.x, at or above Safari 2.x.
pub(super) const SAFARI_2_MIN_BUILD: f64 = 400.0;

/// Resolve a `Windows NT` version to its marketing name.
pub(super) fn windows_nt_label(version: &str) -> String {
    WINDOWS_NT_VERSIONS
        .iter()
        .find_map(|(nt, label)| (*nt == version).then(|| (*label).to_owned()))
        .unwrap_or_else(|| format!("NT {version}"))
}

/// Resolve a product alias to the product it stands for.
pub(super) fn canonical_product_name(name: &str) -> &str {
    PRODUCT_ALIASES
        .iter()
        .find_map(|(alias, canonical)| (*alias == name).then_some(*canonical))
        .unwrap_or(name)
}

macro_rules! static_regex {
    ($($(#[$meta:meta])* $name:ident = $pattern:literal;)+) => {
        $(
            $(#[$meta])*
            #[expect(clippy::expect_used, reason = "static pattern")]
            pub(super) static $name: LazyLock<Regex> =
                LazyLock::new(|| Regex::new($pattern).expect("valid static regex pattern"));
        )+
    };
}

static_regex! {
    /// `Opera 9.64` style product, rewritten to `Opera/9.64`.
    OPERA_SPACED_VERSION = r"Opera\s(\d)";
    /// A parenthesised span, greedy within a line.
    PARENTHESISED = r"\((.*)\)";
    /// Separator between properties.
    PROPERTY_SEPARATOR = r";\s+";
    /// First `major.minor` pair found anywhere in a version string.
    MAJOR_MINOR = r"(\d+)\.(\d+)";
    /// Leading decimal number.
    LEADING_DECIMAL = r"^[+-]?\d+(?:\.\d+)?";
    /// Version number following `OS X`, using either `.` or `_` as separator.
    MAC_OS_X_VERSION = r"OS X\s*?(\d+[._]\d+)";
    /// iOS version advertised by iPhones.
    CPU_IPHONE_OS = r"^CPU iPhone OS (\d+[._]\d+)";
    /// The BSD flavours we recognise.
    BSD_FLAVOUR = r"(Free|Open|Net)BSD";
    /// Compact `WinNT4.0` notation.
    WIN_NT_COMPACT = r"WinNT\d+";
    /// Version part of the compact `WinNT4.0` notation.
    WIN_NT_COMPACT_VERSION = r"WinNT(\d+(?:\.\d+)?)";
    /// Compact `Win98` notation.
    WIN_LEGACY_COMPACT = r"Win(95|98|ME)";
    /// Android with a `major.minor` version.
    ANDROID_VERSION = r"^Android (\d+\.\d+)";
}
