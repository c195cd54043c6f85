use super::{LanguageProfile, SourceLayout};
use crate::types::Language;

#[cfg(windows)]
const RUN: super::CommandTemplate = &["python", "{source}"];
#[cfg(not(windows))]
const RUN: super::CommandTemplate = &["python3", "{source}"];

pub const PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Python,
    file_extension: "py",
    layout: SourceLayout::File,
    compile_command: None,
    run_command: RUN,
    // stdin is handed to the program verbatim
    wraps_entry_point: false,
};
