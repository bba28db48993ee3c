use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::error;

/// Returns the regular file in `dir` with the newest modification time.
///
/// Only direct children are considered. A missing directory, a path that is
/// not a directory, or one without regular files gives `None`. Scan failures
/// are logged and also give `None`.
///
/// When two files share the newest timestamp the lexicographically greatest
/// file name wins, so the answer does not depend on enumeration order.
pub fn latest_file(dir: &Path) -> Option<PathBuf> {
    match scan_latest(dir) {
        Ok(latest) => latest,
        Err(e) => {
            error!("Error scanning screenshots in {}: {}", dir.display(), e);
            None
        }
    }
}

/// Runs [`latest_file`] on the blocking pool.
pub async fn resolve_latest(dir: PathBuf) -> Option<PathBuf> {
    match tokio::task::spawn_blocking(move || latest_file(&dir)).await {
        Ok(latest) => latest,
        Err(e) => {
            error!("Screenshot scan task failed: {}", e);
            None
        }
    }
}

fn scan_latest(dir: &Path) -> io::Result<Option<PathBuf>> {
    if !dir.is_dir() {
        return Ok(None);
    }

    let mut latest: Option<(SystemTime, OsString, PathBuf)> = None;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        // Follows symlinks. Entries removed mid-scan and dangling links are skipped.
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
            Err(e) => return Err(e),
        };

        if !metadata.is_file() {
            continue;
        }

        let modified = metadata.modified()?;
        let name = entry.file_name();

        let newer = match &latest {
            None => true,
            Some((best_time, best_name, _)) => (modified, &name) > (*best_time, best_name),
        };

        if newer {
            latest = Some((modified, name, path));
        }
    }

    Ok(latest.map(|(_, _, path)| path))
}
