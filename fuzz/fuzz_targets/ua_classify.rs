#![no_main]

use libfuzzer_sys::fuzz_target;
use ua_classifier::{UserAgentClassifier, classify};

fuzz_target!(|input: String| {
    let _ = classify(input.as_str());
    let _ = UserAgentClassifier::new()
        .with_max_length(input.len() / 2)
        .classify(input);
});
