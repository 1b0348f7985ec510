use std::error::Error;
use std::fs;
use std::path::Path;

const TAILWIND_CONFIG: &str = include_str!("../../../bootstrap/tailwind.config.js");
const GLOBALS_CSS: &str = include_str!("../../../bootstrap/globals.css");

/// Project-relative path and fixed contents of each style file.
const STYLE_FILES: [(&str, &str); 2] = [
    ("tailwind.config.js", TAILWIND_CONFIG),
    ("src/app/globals.css", GLOBALS_CSS),
];

pub fn run(project_dir: &Path) -> Result<(), Box<dyn Error>> {
    log::info!("Verifying Tailwind CSS configuration...");
    for (relative, contents) in STYLE_FILES {
        let path = project_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, contents)
            .map_err(|err| format!("Failed to write {}: {}", path.display(), err))?;
        log::debug!("Wrote {}", path.display());
    }
    Ok(())
}
