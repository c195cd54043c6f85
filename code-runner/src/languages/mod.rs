//! Per-language execution profiles
//!
//! Every supported language is described by a static [`LanguageProfile`]: how
//! its source is laid out on disk, whether it has a separate build step, and
//! the command templates for building and running it. The build and run
//! stages in [`crate::executor`] only ever interpret these records.

pub mod cpp;
pub mod go;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust;
pub mod typescript;

use std::borrow::Cow;
use std::ffi::OsString;

use crate::{context::ExecutionContext, error::Error, process::CommandLine, types::Language};

/// A command line whose tokens may be one of the placeholders
/// `{source}`, `{artifact}`, `{dir}` or `{class}`.
pub type CommandTemplate = &'static [&'static str];

/// How the source file is placed in the temp directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceLayout {
    /// `<temp>/code_<id>.<ext>`
    File,
    /// `<temp>/<prefix>_<id>/<Class>.<ext>`, for toolchains that derive the
    /// artifact name from the declared class.
    ClassDirectory {
        prefix: &'static str,
        fallback_class: &'static str,
    },
}

#[derive(Debug)]
pub struct LanguageProfile {
    pub language: Language,
    pub file_extension: &'static str,
    pub layout: SourceLayout,
    /// Present only for languages with a separate build stage
    pub compile_command: Option<CommandTemplate>,
    pub run_command: CommandTemplate,
    /// Whether stdin may be turned into a synthesized call of the user's function
    pub wraps_entry_point: bool,
}

impl LanguageProfile {
    pub fn needs_compilation(&self) -> bool {
        self.compile_command.is_some()
    }

    /// Whether the run stage launches the build artifact rather than a toolchain binary.
    pub fn runs_artifact(&self) -> bool {
        self.run_command.first() == Some(&"{artifact}")
    }

    /// Toolchain binaries named by the templates.
    pub fn required_tools(&self) -> Vec<&'static str> {
        let mut tools = Vec::new();
        for template in self.compile_command.iter().chain([&self.run_command]) {
            if let Some(program) = template.first() {
                if !is_placeholder(program) && !tools.contains(program) {
                    tools.push(*program);
                }
            }
        }
        tools
    }

    /// Whether every required tool can be found on `PATH`.
    pub fn is_available(&self) -> bool {
        self.required_tools()
            .iter()
            .all(|tool| which::which(tool).is_ok())
    }

    /// Source text as it should be written to disk.
    pub fn prepare_source<'a>(&self, code: &'a str, input: &str) -> Cow<'a, str> {
        if self.wraps_entry_point && !input.is_empty() {
            if let Some(wrapped) = javascript::wrap_entry_point(code, input) {
                return Cow::Owned(wrapped);
            }
        }
        Cow::Borrowed(code)
    }

    pub fn compile_command_line(&self, context: &ExecutionContext) -> Option<CommandLine> {
        self.compile_command
            .map(|template| render(template, context))
    }

    pub fn run_command_line(&self, context: &ExecutionContext) -> CommandLine {
        render(self.run_command, context)
    }
}

/// Look up the profile for a wire identifier.
pub fn resolve(identifier: &str) -> Result<&'static LanguageProfile, Error> {
    let language: Language = identifier.parse()?;
    Ok(profile(language))
}

pub fn profile(language: Language) -> &'static LanguageProfile {
    match language {
        Language::JavaScript => &javascript::PROFILE,
        Language::TypeScript => &typescript::PROFILE,
        Language::Python => &python::PROFILE,
        Language::Cpp => &cpp::PROFILE,
        Language::Java => &java::PROFILE,
        Language::Go => &go::PROFILE,
        Language::Rust => &rust::PROFILE,
    }
}

fn is_placeholder(token: &str) -> bool {
    token.starts_with('{') && token.ends_with('}')
}

fn render(template: CommandTemplate, context: &ExecutionContext) -> CommandLine {
    let mut tokens = template.iter().map(|token| -> OsString {
        match *token {
            "{source}" => context.source_path().into(),
            "{artifact}" => context.artifact_path().into(),
            "{dir}" => context.work_dir().into(),
            "{class}" => context.class_name().unwrap_or_default().into(),
            other => other.into(),
        }
    });

    let program = tokens.next().unwrap_or_default();
    CommandLine::new(program, tokens.collect())
}

#[cfg(test)]
pub(crate) fn skip_if_not_available(tools: &[&str]) -> bool {
    let missing: Vec<_> = tools
        .iter()
        .filter(|tool| which::which(tool).is_err())
        .map(|s| (*s).to_string())
        .collect();

    if !missing.is_empty() {
        eprintln!("Skipping test: {} not available", missing.join(", "));
        return true;
    }
    false
}
