use super::{CommandTemplate, LanguageProfile, SourceLayout};
use crate::types::Language;

// MinGW builds would otherwise need libstdc++/winpthread DLLs next to the binary.
#[cfg(windows)]
const COMPILE: CommandTemplate = &[
    "g++",
    "{source}",
    "-o",
    "{artifact}",
    "-std=c++17",
    "-static-libgcc",
    "-static-libstdc++",
    "-Wl,-Bstatic",
    "-lstdc++",
    "-lpthread",
    "-Wl,-Bdynamic",
];

#[cfg(not(windows))]
const COMPILE: CommandTemplate = &[
    "g++",
    "{source}",
    "-o",
    "{artifact}",
    "-std=c++17",
    "-static-libgcc",
    "-static-libstdc++",
];

pub const PROFILE: LanguageProfile = LanguageProfile {
    language: Language::Cpp,
    file_extension: "cpp",
    layout: SourceLayout::File,
    compile_command: Some(COMPILE),
    run_command: &["{artifact}"],
    wraps_entry_point: false,
};
