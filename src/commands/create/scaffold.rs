use super::{Invocation, Runner, PACKAGE_MANAGER};
use std::error::Error;
use std::path::{Path, PathBuf};

/// TypeScript, Tailwind, ESLint, App Router, `src/` layout, `@/*` alias, pnpm.
const NEXT_APP_FLAGS: [&str; 8] = [
    "--ts",
    "--tailwind",
    "--eslint",
    "--app",
    "--src-dir",
    "--import-alias",
    "@/*",
    "--use-pnpm",
];

pub fn invocation(cwd: &Path, project_name: &str) -> Invocation {
    let mut args = vec!["create", "next-app", project_name];
    args.extend(NEXT_APP_FLAGS);
    Invocation::new(PACKAGE_MANAGER, &args, cwd)
}

/// Generate the Next.js project and return its root.
pub fn run(
    runner: &mut dyn Runner,
    cwd: &Path,
    project_name: &str,
) -> Result<PathBuf, Box<dyn Error>> {
    log::info!("Creating Next.js app with Tailwind CSS...");
    runner.run(&invocation(cwd, project_name))?;
    Ok(cwd.join(project_name))
}
