//! Operating system (and some browser) evidence from the property tokens.
//!
//! Every property is offered to every rule, in the order of [`PROPERTY_RULES`].
//! A property can match more than one rule, in which case later rules
//! overwrite what earlier ones decided.

use super::OsFamily;
use super::browser::{FIREFOX, MSIE, OPERA};
use super::parse::Classification;
use super::tables::{
    ANDROID_FORM_FACTORS, ANDROID_VERSION, BSD_FLAVOUR, CPU_IPHONE_OS, IOS_DEVICES,
    MAC_OS_X_VERSION, WIN_LEGACY_COMPACT, WIN_NT_COMPACT, WIN_NT_COMPACT_VERSION,
    WINDOWS_LEGACY_CODES, windows_nt_label,
};
use super::version::prefix_chars;

/// A rule returns `true` if it matched (and thus possibly changed) the classification.
type PropertyRule = fn(&str, &mut Classification) -> bool;

const PROPERTY_RULES: &[(&str, PropertyRule)] = &[
    ("windows", windows),
    ("ios_device", ios_device),
    ("macintosh", macintosh),
    ("mac_os_x", mac_os_x),
    ("cpu_iphone_os", cpu_iphone_os),
    ("powerpc", powerpc),
    ("linux", linux),
    ("msie", msie),
    ("ie", ie),
    ("sunos", sunos),
    ("bsd", bsd),
    ("windows_compact", windows_compact),
    ("chrome_os", chrome_os),
    ("android", android),
    ("android_form_factor", android_form_factor),
    ("gecko_revision", gecko_revision),
];

pub(super) fn scan_properties(properties: &[String], state: &mut Classification) {
    for property in properties.iter().map(String::as_str) {
        for &(rule, apply) in PROPERTY_RULES {
            if apply(property, state) {
                tracing::trace!(rule, property, "user agent property rule matched");
            }
        }
    }
}

fn windows(property: &str, state: &mut Classification) -> bool {
    if !property.starts_with("Win") {
        return false;
    }
    let os = &mut state.os;
    os.family = Some(OsFamily::Windows);
    os.token = Some(property.to_owned());

    let Some((head, tail)) = property.split_once(' ') else {
        return true;
    };
    if head == "Windows" && tail.starts_with("Phone") {
        os.family = Some(OsFamily::WindowsPhone);
        os.version = tail.split_once(' ').map(|(_, version)| version.to_owned());
    } else if tail.starts_with("NT") {
        os.version = Some(match tail.split_once(' ') {
            Some((_, version)) if !version.is_empty() => windows_nt_label(version),
            _ => "NT".to_owned(),
        });
    } else if WINDOWS_LEGACY_CODES
        .iter()
        .any(|code| tail.starts_with(code))
    {
        os.version = Some(prefix_chars(tail, 2).to_owned());
    }
    true
}

fn ios_device(property: &str, state: &mut Classification) -> bool {
    let Some(device) = IOS_DEVICES
        .iter()
        .find(|device| property.starts_with(*device))
    else {
        return false;
    };
    state.os.family = Some(OsFamily::IOS);
    state.os.version = Some((*device).to_owned());
    true
}

fn macintosh(property: &str, state: &mut Classification) -> bool {
    if property != "Macintosh" {
        return false;
    }
    state.os.family = Some(OsFamily::Macintosh);
    state.os.token = Some(property.to_owned());
    true
}

fn mac_os_x(property: &str, state: &mut Classification) -> bool {
    if !property.contains("OS X") {
        return false;
    }
    let number = MAC_OS_X_VERSION
        .captures(property)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace('_', "."));

    let os = &mut state.os;
    if os.family == Some(OsFamily::IOS) {
        // `like Mac OS X`: only a version refines iOS
        if number.is_some() {
            os.version = number;
        }
    } else {
        os.family = Some(OsFamily::Macintosh);
        os.version = Some(match number {
            Some(number) => format!("OS X {number}"),
            None => "OS X".to_owned(),
        });
        os.token = Some(property.to_owned());
    }
    true
}

fn cpu_iphone_os(property: &str, state: &mut Classification) -> bool {
    let Some(number) = CPU_IPHONE_OS
        .captures(property)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace('_', "."))
    else {
        return false;
    };
    let os = &mut state.os;
    os.version = Some(match os.version.take() {
        Some(device) => format!("{device} iOS {number}"),
        None => format!("iOS {number}"),
    });
    true
}

fn powerpc(property: &str, state: &mut Classification) -> bool {
    if !(property.contains("PPC") || property.contains("PowerPC")) {
        return false;
    }
    let os = &mut state.os;
    os.family.get_or_insert(OsFamily::Macintosh);
    os.version.get_or_insert_with(|| "MacOS".to_owned());
    true
}

fn linux(property: &str, state: &mut Classification) -> bool {
    if !property.contains("Linux") {
        return false;
    }
    state.os.family = Some(OsFamily::Linux);
    state.os.token = Some(property.to_owned());
    true
}

/// `MSIE 6.0`, unless an Opera product already identified the browser
/// (Opera used to mask as MSIE).
fn msie(property: &str, state: &mut Classification) -> bool {
    if !property.starts_with("MSIE") || state.browser.is(OPERA) {
        return false;
    }
    let version = property.replace("MSIE ", "");
    state.browser.identify_dotted(MSIE, version.trim_start());
    true
}

/// `IE 11.0` as found in some embedded browsers.
fn ie(property: &str, state: &mut Classification) -> bool {
    if !property
        .strip_prefix("IE")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
    {
        return false;
    }
    let version = property.replace("IE ", "");
    state.browser.identify_dotted(MSIE, version.trim_start());
    true
}

fn sunos(property: &str, state: &mut Classification) -> bool {
    if !property.starts_with("SunOS") {
        return false;
    }
    state.os.family = Some(OsFamily::SunOS);
    state.os.version = Some(property.replace("SunOS ", "").trim_start().to_owned());
    true
}

fn bsd(property: &str, state: &mut Classification) -> bool {
    let Some(family) = BSD_FLAVOUR
        .captures(property)
        .and_then(|caps| caps.get(1))
        .and_then(|m| OsFamily::bsd(m.as_str()))
    else {
        return false;
    };
    state.os.family = Some(family);
    true
}

/// `WinNT4.0`, `Win98` and `Windows CE`.
fn windows_compact(property: &str, state: &mut Classification) -> bool {
    if !property.starts_with("Win") {
        return false;
    }
    let version = if WIN_NT_COMPACT.is_match(property) {
        match WIN_NT_COMPACT_VERSION
            .captures(property)
            .and_then(|caps| caps.get(1))
        {
            Some(number) => format!("NT {}", number.as_str()),
            None => "NT".to_owned(),
        }
    } else if let Some(code) = WIN_LEGACY_COMPACT
        .captures(property)
        .and_then(|caps| caps.get(1))
    {
        code.as_str().to_owned()
    } else if property.contains("Windows CE") {
        "CE".to_owned()
    } else {
        return false;
    };
    state.os.family = Some(OsFamily::Windows);
    state.os.version = Some(version);
    true
}

fn chrome_os(property: &str, state: &mut Classification) -> bool {
    if !property.starts_with("CrOS") {
        return false;
    }
    state.os.family = Some(OsFamily::Linux);
    state.os.version = Some("Chrome OS".to_owned());
    true
}

fn android(property: &str, state: &mut Classification) -> bool {
    let label = match ANDROID_VERSION
        .captures(property)
        .and_then(|caps| caps.get(1))
    {
        Some(number) => format!("Android {}", number.as_str()),
        None if property.starts_with("Android") => "Android".to_owned(),
        None => return false,
    };
    state.os.family = Some(OsFamily::Linux);
    state.os.version = Some(label.clone());
    state.android_label = Some(label);
    true
}

/// A lone `Mobile` or `Tablet` property following an Android property.
fn android_form_factor(property: &str, state: &mut Classification) -> bool {
    if !ANDROID_FORM_FACTORS.contains(&property) {
        return false;
    }
    let Some(label) = state
        .android_label
        .as_deref()
        .filter(|label| label.starts_with("Android"))
    else {
        return false;
    };
    state.os.version = Some(format!("{label} {property}"));
    state.os.family = Some(OsFamily::Linux);
    true
}

/// Gecko's `rv:` revision, never overriding an identified Firefox version.
fn gecko_revision(property: &str, state: &mut Classification) -> bool {
    let Some(revision) = property.strip_prefix("rv:") else {
        return false;
    };
    if state.browser.is(FIREFOX) {
        return false;
    }
    let browser = &mut state.browser;
    browser.version = Some(revision.to_owned());
    if !browser.set_major_minor(revision) {
        browser.major = Some(revision.to_owned());
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ua::browser::BrowserFields;

    fn scan(properties: &[&str]) -> Classification {
        scan_with(properties, BrowserFields::default())
    }

    fn scan_with(properties: &[&str], browser: BrowserFields) -> Classification {
        let properties: Vec<String> = properties.iter().map(|p| (*p).to_owned()).collect();
        let mut state = Classification {
            browser,
            ..Default::default()
        };
        scan_properties(&properties, &mut state);
        state
    }

    fn named(name: &str) -> BrowserFields {
        BrowserFields {
            name: Some(name.to_owned()),
            ..Default::default()
        }
    }

    fn assert_os(properties: &[&str], family: Option<OsFamily>, version: Option<&str>) {
        let state = scan(properties);
        assert_eq!(state.os.family, family, "properties: {properties:?}");
        assert_eq!(
            state.os.version.as_deref(),
            version,
            "properties: {properties:?}"
        );
    }

    #[test]
    fn test_windows_nt() {
        for (property, version) in [
            ("Windows NT 5", "2000"),
            ("Windows NT 5.0", "2000"),
            ("Windows NT 5.1", "XP"),
            ("Windows NT 5.2", "XP 64/Server 2003"),
            ("Windows NT 5.2 x64", "XP 64/Server 2003"),
            ("Windows NT 6.0", "Vista/Server 2008"),
            ("Windows NT 6.1", "7/Server 2008 R2"),
            ("Windows NT 6.2", "8"),
            ("Windows NT 6.3", "NT 6.3"),
            ("Windows NT 10.0", "NT 10.0"),
            ("Windows NT 4.0", "NT 4.0"),
            ("Windows NT", "NT"),
        ] {
            assert_os(&[property], Some(OsFamily::Windows), Some(version));
        }
    }

    #[test]
    fn test_windows_records_token() {
        let state = scan(&["Windows", "U", "Windows NT 5.1"]);
        assert_eq!(state.os.token.as_deref(), Some("Windows NT 5.1"));
    }

    #[test]
    fn test_windows_phone() {
        assert_os(
            &["Windows Phone OS 7.5"],
            Some(OsFamily::WindowsPhone),
            Some("OS 7.5"),
        );
        assert_os(&["Windows Phone 8.0"], Some(OsFamily::WindowsPhone), Some("8.0"));
        assert_os(&["Windows Phone"], Some(OsFamily::WindowsPhone), None);
    }

    #[test]
    fn test_windows_legacy() {
        assert_os(&["Windows 98"], Some(OsFamily::Windows), Some("98"));
        assert_os(&["Windows 98; Win 9x 4.90"], Some(OsFamily::Windows), Some("98"));
        assert_os(&["Windows 95"], Some(OsFamily::Windows), Some("95"));
        assert_os(&["Windows ME"], Some(OsFamily::Windows), Some("ME"));
        assert_os(&["Win98"], Some(OsFamily::Windows), Some("98"));
        assert_os(&["Win95"], Some(OsFamily::Windows), Some("95"));
        assert_os(&["Windows CE"], Some(OsFamily::Windows), Some("CE"));
        assert_os(&["WinNT4.0"], Some(OsFamily::Windows), Some("NT 4.0"));
        assert_os(&["WinNT"], Some(OsFamily::Windows), None);
        assert_os(&["Win64", "x64"], Some(OsFamily::Windows), None);
    }

    #[test]
    fn test_ios() {
        assert_os(&["iPhone"], Some(OsFamily::IOS), Some("iPhone"));
        assert_os(&["iPod touch"], Some(OsFamily::IOS), Some("iPod"));
        assert_os(
            &["iPhone", "U", "CPU iPhone OS 4_1 like Mac OS X", "en-us"],
            Some(OsFamily::IOS),
            Some("iPhone iOS 4.1"),
        );
        assert_os(
            &["CPU iPhone OS 3_0 like Mac OS X"],
            Some(OsFamily::Macintosh),
            Some("OS X iOS 3.0"),
        );
        assert_os(
            &["iPad", "CPU OS 10_3 like Mac OS X 10_3"],
            Some(OsFamily::IOS),
            Some("10.3"),
        );
    }

    #[test]
    fn test_macintosh() {
        assert_os(&["Macintosh"], Some(OsFamily::Macintosh), None);
        assert_os(
            &["Macintosh", "Intel Mac OS X"],
            Some(OsFamily::Macintosh),
            Some("OS X"),
        );
        assert_os(
            &["Macintosh", "Intel Mac OS X 10_6_4"],
            Some(OsFamily::Macintosh),
            Some("OS X 10.6"),
        );
        assert_os(
            &["Macintosh", "Intel Mac OS X 10.15"],
            Some(OsFamily::Macintosh),
            Some("OS X 10.15"),
        );
        assert_os(
            &["Macintosh", "PPC Mac OS X Mach-O"],
            Some(OsFamily::Macintosh),
            Some("OS X"),
        );
        assert_os(&["Macintosh", "PPC"], Some(OsFamily::Macintosh), Some("MacOS"));
        assert_os(&["PowerPC"], Some(OsFamily::Macintosh), Some("MacOS"));
    }

    #[test]
    fn test_powerpc_keeps_existing_os() {
        assert_os(&["Linux PPC"], Some(OsFamily::Linux), Some("MacOS"));
        assert_os(&["Windows NT 5.1", "PPC"], Some(OsFamily::Windows), Some("XP"));
    }

    #[test]
    fn test_linux_family() {
        assert_os(&["X11", "Linux x86_64"], Some(OsFamily::Linux), None);
        assert_os(&["CrOS x86_64 14541.0.0"], Some(OsFamily::Linux), Some("Chrome OS"));
        assert_os(
            &["Linux", "U", "Android 2.2", "en-us"],
            Some(OsFamily::Linux),
            Some("Android 2.2"),
        );
        assert_os(&["Android"], Some(OsFamily::Linux), Some("Android"));
        assert_os(&["Android 4.4.2"], Some(OsFamily::Linux), Some("Android 4.4"));
    }

    #[test]
    fn test_android_form_factor() {
        assert_os(
            &["Android 4.4", "Mobile", "rv:41.0"],
            Some(OsFamily::Linux),
            Some("Android 4.4 Mobile"),
        );
        assert_os(
            &["Android", "Tablet"],
            Some(OsFamily::Linux),
            Some("Android Tablet"),
        );
        // no android evidence in this classification
        assert_os(&["Mobile"], None, None);
        assert_os(&["X11", "Tablet"], None, None);
    }

    #[test]
    fn test_unix_families() {
        assert_os(&["X11", "SunOS sun4u"], Some(OsFamily::SunOS), Some("sun4u"));
        assert_os(&["X11", "FreeBSD amd64"], Some(OsFamily::FreeBSD), None);
        assert_os(&["X11", "U", "OpenBSD i386"], Some(OsFamily::OpenBSD), None);
        assert_os(&["NetBSD"], Some(OsFamily::NetBSD), None);
    }

    #[test]
    fn test_msie() {
        let state = scan(&["compatible", "MSIE 6.0", "Windows NT 5.1", "SV1"]);
        assert_eq!(state.browser.name.as_deref(), Some("MSIE"));
        assert_eq!(state.browser.version.as_deref(), Some("6.0"));
        assert_eq!(state.browser.major.as_deref(), Some("6"));
        assert_eq!(state.browser.minor.as_deref(), Some("0"));

        let state = scan(&["compatible", "MSIE 7.0b"]);
        assert_eq!(state.browser.minor.as_deref(), Some("0b"));
    }

    #[test]
    fn test_msie_is_ignored_for_opera() {
        let state = scan_with(&["compatible", "MSIE 6.0"], named("Opera"));
        assert_eq!(state.browser.name.as_deref(), Some("Opera"));
        assert_eq!(state.browser.major, None);
    }

    #[test]
    fn test_ie() {
        let state = scan(&["IE 11.0", "Windows Phone 8.1"]);
        assert_eq!(state.browser.name.as_deref(), Some("MSIE"));
        assert_eq!(state.browser.major.as_deref(), Some("11"));
        assert_eq!(state.browser.minor.as_deref(), Some("0"));

        let state = scan(&["IEMobile 9.0"]);
        assert_eq!(state.browser.name, None);
    }

    #[test]
    fn test_gecko_revision() {
        let state = scan_with(&["X11", "rv:1.9.2"], named("Gecko"));
        assert_eq!(state.browser.version.as_deref(), Some("1.9.2"));
        assert_eq!(state.browser.major.as_deref(), Some("1"));
        assert_eq!(state.browser.minor.as_deref(), Some("9"));

        let state = scan_with(&["rv:11"], named("Gecko"));
        assert_eq!(state.browser.major.as_deref(), Some("11"));
        assert_eq!(state.browser.minor, None);
    }

    #[test]
    fn test_gecko_revision_never_overrides_firefox() {
        let mut firefox = named("Firefox");
        firefox.major = Some("1".to_owned());
        firefox.minor = Some("5".to_owned());
        let state = scan_with(&["rv:1.8.0.1"], firefox.clone());
        assert_eq!(state.browser, firefox);
    }

    #[test]
    fn test_unmatched_properties() {
        assert_os(&["U", "en-US", "compatible", "KHTML, like Gecko"], None, None);
    }
}
