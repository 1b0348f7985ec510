use super::Assets;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Copy the bundled template over the project, then replace its README.
pub fn run(project_dir: &Path, assets: &Assets) -> Result<(), Box<dyn Error>> {
    log::info!("Copying ONTONIM template...");
    if !assets.template_dir.is_dir() {
        return Err(format!(
            "Template directory {} does not exist",
            assets.template_dir.display()
        )
        .into());
    }
    copy_dir_recursive(&assets.template_dir, project_dir)?;

    log::info!("Writing custom README.md...");
    install_readme(&assets.readme, project_dir)?;
    Ok(())
}

/// Returns `false` when there is no bundled README to install.
fn install_readme(readme: &Path, project_dir: &Path) -> Result<bool, Box<dyn Error>> {
    if !readme.is_file() {
        log::warn!("custom README.md not found, skipping README update.");
        return Ok(false);
    }

    let target = project_dir.join("README.md");
    fs::copy(readme, &target).map_err(|err| {
        format!(
            "Failed to copy {} -> {}: {}",
            readme.display(),
            target.display(),
            err
        )
    })?;
    Ok(true)
}

/// Merge `src` into `dest`. Same-named files are overwritten.
fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(dest)
        .map_err(|err| format!("Failed to create directory {}: {}", dest.display(), err))?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());

        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&src_path, &dest_path)?;
        } else {
            fs::copy(&src_path, &dest_path).map_err(|err| {
                format!(
                    "Failed to copy {} -> {}: {}",
                    src_path.display(),
                    dest_path.display(),
                    err
                )
            })?;
        }
    }

    Ok(())
}
