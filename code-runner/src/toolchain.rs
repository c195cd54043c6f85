//! Native toolchain discovery
//!
//! Compilers installed outside the default search path (a MinGW or Homebrew
//! prefix, for example) are found once through a `which` lookup of a known
//! compiler binary. Its directory is prepended to `PATH` for every child the
//! engine starts, so that the linker and runtime libraries next to it resolve.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

static TOOLCHAIN: OnceLock<Toolchain> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct Toolchain {
    bin_dir: Option<PathBuf>,
    path_env: Option<OsString>,
}

impl Toolchain {
    /// The process-wide toolchain, resolved on first use from `compiler`.
    ///
    /// Later calls return the cached value whatever compiler they name.
    pub fn global(compiler: &str) -> &'static Toolchain {
        TOOLCHAIN.get_or_init(|| Toolchain::discover(compiler))
    }

    /// Locate `compiler` and derive the `PATH` children should run with.
    pub fn discover(compiler: &str) -> Toolchain {
        let bin_dir = match which::which(compiler) {
            Ok(path) => path.parent().map(Path::to_path_buf),
            Err(e) => {
                warn!("Native compiler {} not found, using inherited PATH: {}", compiler, e);
                None
            }
        };

        let path_env = bin_dir
            .as_deref()
            .and_then(|dir| augmented_path(dir, std::env::var_os("PATH")));

        debug!("Toolchain bin dir: {:?}", bin_dir);
        Toolchain { bin_dir, path_env }
    }

    pub fn bin_dir(&self) -> Option<&Path> {
        self.bin_dir.as_deref()
    }

    /// Value to set as `PATH` on child processes, or `None` to inherit as is.
    pub fn path_env(&self) -> Option<&OsString> {
        self.path_env.as_ref()
    }
}

/// `dir` followed by the entries of `current`, unless `dir` is already there.
fn augmented_path(dir: &Path, current: Option<OsString>) -> Option<OsString> {
    let mut entries: Vec<PathBuf> = current
        .as_deref()
        .map(|paths| std::env::split_paths(paths).collect())
        .unwrap_or_default();

    if entries.iter().any(|entry| entry == dir) {
        return None;
    }

    entries.insert(0, dir.to_path_buf());
    match std::env::join_paths(entries) {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("Cannot add {} to PATH: {}", dir.display(), e);
            None
        }
    }
}
