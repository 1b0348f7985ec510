use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Generated paths that collide with the bundled template.
pub fn conflict_paths(project_dir: &Path) -> Vec<PathBuf> {
    vec![
        project_dir.join("pages"),
        project_dir.join("src").join("pages"),
        project_dir.join("src").join("app").join("page.tsx"),
    ]
}

pub fn run(project_dir: &Path) -> Result<(), Box<dyn Error>> {
    log::info!("Cleaning up any conflicting files...");
    for path in conflict_paths(project_dir) {
        if remove_if_present(&path)? {
            log::debug!("Removed {}", path.display());
        }
    }
    Ok(())
}

/// Remove a file or directory tree. Missing paths are not an error.
fn remove_if_present(path: &Path) -> Result<bool, Box<dyn Error>> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(format!("Failed to inspect {}: {}", path.display(), err).into()),
    };

    let removed = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|err| format!("Failed to remove {}: {}", path.display(), err))?;
    Ok(true)
}
