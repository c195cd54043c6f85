use regex::Regex;
use std::sync::LazyLock;

use super::{LanguageProfile, SourceLayout};
use crate::types::Language;

pub const FALLBACK_CLASS: &str = "Main";

/// `javac` requires the file to be named after its public class, so each run
/// gets its own directory that doubles as the classpath.
pub const PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Java,
    file_extension: "java",
    layout: SourceLayout::ClassDirectory {
        prefix: "java",
        fallback_class: FALLBACK_CLASS,
    },
    compile_command: Some(&["javac", "{source}"]),
    run_command: &["java", "-cp", "{dir}", "{class}"],
    wraps_entry_point: false,
};

static PUBLIC_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"public\s+class\s+(\w+)").unwrap());

/// Name of the first `public class`, or `fallback` when there is none.
pub fn class_name<'a>(code: &'a str, fallback: &'a str) -> &'a str {
    PUBLIC_CLASS
        .captures(code)
        .and_then(|captures| captures.get(1))
        .map_or(fallback, |name| name.as_str())
}
