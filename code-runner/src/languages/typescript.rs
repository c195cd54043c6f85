use super::{LanguageProfile, SourceLayout};
use crate::types::Language;

/// TypeScript runs through `tsx`, which strips types on the fly, so there is
/// no separate build stage and auto-wrap works exactly as for JavaScript.
pub const PROFILE: LanguageProfile = LanguageProfile {
    language: Language::TypeScript,
    file_extension: "ts",
    layout: SourceLayout::File,
    compile_command: None,
    run_command: &["tsx", "{source}"],
    wraps_entry_point: true,
};
