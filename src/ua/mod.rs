mod error;
pub use error::{InvalidUserAgent, UnknownOsFamily};

mod info;
pub use info::{OsFamily, UserAgent};

mod classifier;
pub use classifier::{UserAgentClassifier, classify};

mod browser;
mod parse;
mod platform;
mod tables;
mod tokenize;
mod version;
