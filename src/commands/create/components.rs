use super::{Invocation, Runner, PACKAGE_MANAGER};
use std::error::Error;
use std::path::Path;

const SHADCN: &str = "shadcn@latest";

/// shadcn/ui components added to every project, in order.
pub const COMPONENTS: [&str; 13] = [
    "button",
    "input",
    "dropdown-menu",
    "table",
    "card",
    "dialog",
    "alert-dialog",
    "avatar",
    "badge",
    "form",
    "label",
    "skeleton",
    "sheet",
];

fn init_invocation(project_dir: &Path) -> Invocation {
    Invocation::new(PACKAGE_MANAGER, &["dlx", SHADCN, "init", "-y"], project_dir)
}

fn add_invocation(project_dir: &Path, component: &str) -> Invocation {
    Invocation::new(PACKAGE_MANAGER, &["dlx", SHADCN, "add", component], project_dir)
}

/// Initialise shadcn/ui and add each component.
///
/// A failed `init` aborts. A failed `add` is logged and the next component is
/// tried; the names that failed are returned.
pub fn run(
    runner: &mut dyn Runner,
    project_dir: &Path,
) -> Result<Vec<&'static str>, Box<dyn Error>> {
    log::info!("Setting up shadcn/ui...");
    runner.run(&init_invocation(project_dir))?;

    log::info!("Adding shadcn components...");
    let mut failed = Vec::new();
    for component in COMPONENTS {
        if let Err(err) = runner.run(&add_invocation(project_dir, component)) {
            log::warn!("Issue adding {}: {}", component, err);
            failed.push(component);
        }
    }

    if !failed.is_empty() {
        log::warn!(
            "{} of {} components were not added: {}",
            failed.len(),
            COMPONENTS.len(),
            failed.join(", ")
        );
    }
    Ok(failed)
}
