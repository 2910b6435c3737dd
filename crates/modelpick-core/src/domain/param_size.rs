//! Parameter-count extraction from repository identifiers.

use regex::Regex;
use std::sync::LazyLock;

/// Patterns tried in priority order against the lower-cased id.
///
/// Group 1 is the number, group 2 the unit letter.
static PARAM_PATTERNS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        // "7b-instruct", "0.5b", "125m": unit not followed by another word character
        Regex::new(r"(\d+(?:\.\d+)?)([bm])(?:[^a-z0-9]|$)").expect("valid param pattern"),
        // "llama-7bchat": billions right after a separator, but not "4bit"
        Regex::new(r"(?:^|[-_/])(\d+(?:\.\d+)?)(b)(?:[^i]|$)").expect("valid param pattern"),
    ]
});

/// Extract a parameter-count label such as `7B` or `0.5B` from a model id.
///
/// Only a number immediately followed by `B` or `M` counts. A bare version
/// number such as the `1.5` in `phi-1.5` yields `None` rather than a guess.
pub fn extract_param_size(model_id: &str) -> Option<String> {
    let lower = model_id.to_lowercase();

    PARAM_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(&lower))
        .map(|caps| format!("{}{}", &caps[1], caps[2].to_uppercase()))
}
