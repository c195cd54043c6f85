use super::{LanguageProfile, SourceLayout};
use crate::types::Language;

/// `go run` compiles and executes in one call, so compile errors surface as a
/// failed run rather than through the build stage.
pub const PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Go,
    file_extension: "go",
    layout: SourceLayout::File,
    compile_command: None,
    run_command: &["go", "run", "{source}"],
    wraps_entry_point: false,
};
