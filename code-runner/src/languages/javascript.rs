//! JavaScript profile and the auto-wrap heuristic shared with TypeScript
//!
//! When a script is given stdin, practice problems are usually written as a
//! single function (`function twoSum(nums, target) { .. }`) and the input as
//! `nums = [2,7,11,15], target = 9`. Auto-wrap appends a call to that function
//! with the right-hand sides as arguments and prints the result. This is a
//! text heuristic, not a parser: it finds the first `function <name>(` and
//! splits the input on top-level commas that start a new `name =` segment.

use regex::Regex;
use std::sync::LazyLock;

use super::{LanguageProfile, SourceLayout};
use crate::types::Language;

pub const PROFILE: LanguageProfile = LanguageProfile {
    language: Language::JavaScript,
    file_extension: "js",
    layout: SourceLayout::File,
    compile_command: None,
    run_command: &["node", "{source}"],
    wraps_entry_point: true,
};

static FUNCTION_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+([A-Za-z_$][\w$]*)\s*\(").unwrap());

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*[A-Za-z_$][\w$]*\s*=\s*(.+)$").unwrap());

static ASSIGNMENT_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[A-Za-z_$][\w$]*\s*=").unwrap());

/// Name of the first `function <name>(` declaration in `code`.
pub fn entry_point(code: &str) -> Option<&str> {
    FUNCTION_DECLARATION
        .captures(code)
        .and_then(|captures| captures.get(1))
        .map(|name| name.as_str())
}

/// Turn `a = 2, b = [1, 2]` into `["2", "[1, 2]"]`.
///
/// Segments without a `name =` prefix are dropped, unless no segment has one,
/// in which case the whole trimmed input is a single argument.
pub fn parse_arguments(input: &str) -> Vec<String> {
    let args: Vec<String> = split_segments(input)
        .into_iter()
        .filter_map(|segment| {
            ASSIGNMENT
                .captures(segment)
                .map(|captures| captures[1].trim().to_string())
        })
        .collect();

    if args.is_empty() && !input.trim().is_empty() {
        return vec![input.trim().to_string()];
    }
    args
}

/// Append a call of the script's entry point. `None` means the script has no
/// function declaration and runs unmodified.
pub fn wrap_entry_point(code: &str, input: &str) -> Option<String> {
    let function = entry_point(code)?;
    let args = parse_arguments(input).join(", ");

    Some(format!(
        r#"
{code}

// Auto-generated test runner
const __result__ = {function}({args});
console.log(typeof __result__ === 'object' ? JSON.stringify(__result__) : String(__result__));
"#
    ))
}

// Split on commas that are outside brackets and quotes and are followed by
// another `name =` segment.
fn split_segments(input: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (idx, ch) in input.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == open {
                quote = None;
            }
            continue;
        }

        match ch {
            '"' | '\'' | '`' => quote = Some(ch),
            '[' | '(' | '{' => depth += 1,
            ']' | ')' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 && starts_assignment(&input[idx + 1..]) => {
                segments.push(&input[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }

    segments.push(&input[start..]);
    segments
}

fn starts_assignment(rest: &str) -> bool {
    match ASSIGNMENT_START.find(rest) {
        // `x == y` is a comparison, not a new segment
        Some(m) => !rest[m.end()..].starts_with('='),
        None => false,
    }
}
