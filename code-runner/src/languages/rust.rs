use super::{LanguageProfile, SourceLayout};
use crate::types::Language;

pub const PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Rust,
    file_extension: "rs",
    layout: SourceLayout::File,
    compile_command: Some(&["rustc", "{source}", "-o", "{artifact}"]),
    run_command: &["{artifact}"],
    wraps_entry_point: false,
};
