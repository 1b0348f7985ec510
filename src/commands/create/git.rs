use super::{Invocation, Runner};
use std::error::Error;
use std::path::Path;

const COMMIT_MESSAGE: &str = "Initial commit: ONTONIM boilerplate";

/// Create the repository and commit everything. Stops at the first failure.
pub fn run(runner: &mut dyn Runner, project_dir: &Path) -> Result<(), Box<dyn Error>> {
    log::info!("Initializing git...");
    runner.run(&Invocation::new("git", &["init"], project_dir))?;
    runner.run(&Invocation::new("git", &["add", "."], project_dir))?;
    runner.run(&Invocation::new(
        "git",
        &["commit", "-m", COMMIT_MESSAGE],
        project_dir,
    ))?;
    Ok(())
}
