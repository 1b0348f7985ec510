use super::{Invocation, Runner, PACKAGE_MANAGER};
use std::error::Error;
use std::path::Path;

pub fn run(runner: &mut dyn Runner, project_dir: &Path) -> Result<(), Box<dyn Error>> {
    log::info!("Initializing Prisma...");
    runner.run(&Invocation::new(
        PACKAGE_MANAGER,
        &["dlx", "prisma", "init"],
        project_dir,
    ))
}

#[cfg(test)]
mod tests {
    use super::super::testing::RecordingRunner;
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn runs_prisma_init_in_the_project() {
        let mut runner = RecordingRunner::new();
        run(&mut runner, Path::new("/work/demo")).unwrap();
        assert_eq!(runner.command_lines(), vec!["pnpm dlx prisma init"]);
        assert_eq!(runner.calls[0].cwd, PathBuf::from("/work/demo"));
    }

    #[test]
    fn failure_propagates() {
        let mut runner = RecordingRunner::failing_on(&["pnpm dlx prisma init"]);
        assert!(run(&mut runner, Path::new("/work/demo")).is_err());
    }
}
