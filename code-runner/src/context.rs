use std::path::{Path, PathBuf};
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::{
    error::Error,
    languages::{java, LanguageProfile, SourceLayout},
};

/// Per-invocation scratch state
///
/// Owns every path one execution writes to. All of them are derived from a
/// fresh identifier, so concurrent executions sharing a temp root never touch
/// each other's files. Dropping the context removes them.
#[derive(Debug)]
pub struct ExecutionContext {
    id: String,
    source_path: PathBuf,
    artifact_path: PathBuf,
    /// Directory created for this run, removed as a whole on drop
    class_dir: Option<PathBuf>,
    class_name: Option<String>,
    start_time: Option<Instant>,
}

impl ExecutionContext {
    /// Derive the paths for `profile` under `temp_root`. Nothing is written yet.
    pub fn new(temp_root: &Path, profile: &LanguageProfile, code: &str) -> Self {
        let id = unique_id();

        match profile.layout {
            SourceLayout::File => Self {
                source_path: temp_root.join(format!("code_{}.{}", id, profile.file_extension)),
                artifact_path: temp_root
                    .join(format!("code_{}{}", id, std::env::consts::EXE_SUFFIX)),
                class_dir: None,
                class_name: None,
                start_time: None,
                id,
            },
            SourceLayout::ClassDirectory {
                prefix,
                fallback_class,
            } => {
                let class = java::class_name(code, fallback_class).to_string();
                let dir = temp_root.join(format!("{}_{}", prefix, id));
                Self {
                    source_path: dir.join(format!("{}.{}", class, profile.file_extension)),
                    artifact_path: dir.join(format!("{}.class", class)),
                    class_dir: Some(dir),
                    class_name: Some(class),
                    start_time: None,
                    id,
                }
            }
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Directory holding the source: the class directory, or the temp root.
    pub fn work_dir(&self) -> &Path {
        self.class_dir
            .as_deref()
            .or_else(|| self.source_path.parent())
            .unwrap_or_else(|| Path::new("."))
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    /// Write `source` to the source path, creating the class directory first
    /// when the layout needs one.
    pub async fn materialize(&self, source: &str) -> Result<(), Error> {
        if let Some(dir) = &self.class_dir {
            fs::create_dir_all(dir).await.map_err(Error::Materialization)?;
        }

        fs::write(&self.source_path, source)
            .await
            .map_err(Error::Materialization)?;

        debug!("Materialized source at {}", self.source_path.display());
        Ok(())
    }

    pub fn mark_started(&mut self) -> Instant {
        *self.start_time.insert(Instant::now())
    }

    pub fn start_time(&self) -> Option<Instant> {
        self.start_time
    }

    /// Remove all artifacts. Failures are logged and otherwise ignored; calling
    /// this more than once is harmless.
    pub fn cleanup(&self) {
        if let Some(dir) = &self.class_dir {
            remove(dir, std::fs::remove_dir_all(dir));
            return;
        }

        remove(&self.source_path, std::fs::remove_file(&self.source_path));
        remove(&self.artifact_path, std::fs::remove_file(&self.artifact_path));
        // rustc on Windows leaves debug info next to the binary
        if cfg!(windows) {
            let pdb = self.artifact_path.with_extension("pdb");
            remove(&pdb, std::fs::remove_file(&pdb));
        }
    }
}

impl Drop for ExecutionContext {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn remove(path: &Path, result: std::io::Result<()>) {
    match result {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
            warn!("Failed to clean up {}: {}", path.display(), e);
        }
        _ => {}
    }
}

/// Millisecond timestamp plus a random suffix.
fn unique_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}_{}", millis, &suffix[..12])
}
