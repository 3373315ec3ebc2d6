//! User Agent (UA) classifier.
//!
//! This crate classifies `User-Agent` (header) values ([`classify`], [`UserAgent::new`])
//! into a browser (name, version, major and minor version) and an operating system
//! (family and version label), using a fixed set of heuristics.
//!
//! ```
//! use ua_classifier::{OsFamily, classify};
//!
//! let ua = classify("Mozilla/4.0 (compatible; MSIE 6.0; Windows NT 5.1; SV1)").unwrap();
//! assert_eq!(ua.browser_name(), Some("MSIE"));
//! assert_eq!(ua.browser_major(), Some("6"));
//! assert_eq!(ua.os_family(), Some(OsFamily::Windows));
//! assert_eq!(ua.os_version(), Some("XP"));
//! ```
//!
//! The classification can be configured (e.g. to limit the length of
//! the header that is taken into consideration) using a [`UserAgentClassifier`].
//!
//! # Remarks
//!
//! We classify well known desktop and mobile browsers, we do not aim to classify all User Agents:
//!
//! - _Firefox_ (and _Iceweasel_), _Chrome_ and _Opera_ are identified by their product token,
//!   ignoring any product that follows;
//! - _Safari_ is identified by its product token, with its release taken from
//!   the `Version/x.y` token when present and derived from the WebKit build otherwise;
//! - _Internet Explorer_ is identified by its `MSIE` property, reported as `MSIE`;
//! - any other product is reported with its own name (e.g. `NetNewsWire`), and
//!   the `Gecko` engine without a more specific product is reported as `Mozilla`.
//!
//! The [`OsFamily`] recognised are Windows, Windows Phone, Macintosh, Linux (including
//! Android and Chrome OS), iOS, SunOS and the BSD flavours. The operating system
//! version is a label rather than a number (e.g. `XP`, `OS X 10.6` or `iPhone iOS 4.1`).
//!
//! Versions are kept as the text found in the header: a minor version `02` stays `02`.
//! Only the header `-` is refused ([`InvalidUserAgent`]): any other input
//! classifies, leaving the fields for which no evidence was found unset.
//!
//! Classification is traced using [`tracing`] at the `debug` and `trace` levels.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod ua;
pub use ua::*;
