mod components;
mod conflicts;
mod deps;
mod dev_server;
mod git;
mod prisma;
mod prompt;
mod scaffold;
mod styles;
mod template;
#[cfg(test)]
mod testing;

use colored::Colorize;
use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub use prompt::{MissingProjectName, Prompter};

/// Package manager used for every Node command the pipeline issues.
pub const PACKAGE_MANAGER: &str = "pnpm";

const ASSETS_ENV: &str = "ONTONIM_ASSETS_DIR";
const ASSETS_DIR: &str = "assets";
const TEMPLATE_DIR: &str = "professional-template";
const README_FILE: &str = "README.md";

/// One external command, run in an explicit working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl Invocation {
    pub fn new(program: &str, args: &[&str], cwd: &Path) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|arg| arg.to_string()).collect(),
            cwd: cwd.to_path_buf(),
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || "*\"'$".contains(c)) {
                write!(f, " {:?}", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// An external command exited unsuccessfully.
#[derive(Debug)]
pub struct CommandFailed {
    pub command: String,
    /// `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl fmt::Display for CommandFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{} exited with exit status: {}", self.command, code),
            None => write!(f, "{} was terminated by a signal", self.command),
        }
    }
}

impl Error for CommandFailed {}

/// Executes the pipeline's external commands.
pub trait Runner {
    fn run(&mut self, invocation: &Invocation) -> Result<(), Box<dyn Error>>;
}

/// Runs commands for real, blocking until each one exits.
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<(), Box<dyn Error>> {
        run_cmd(invocation)
    }
}

/// Run an external command with inherited stdio. Fails on non-zero exit.
pub fn run_cmd(invocation: &Invocation) -> Result<(), Box<dyn Error>> {
    log::debug!("Running: {} (in {})", invocation, invocation.cwd.display());
    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .current_dir(&invocation.cwd)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|err| format!("failed to start {}: {}", invocation.program, err))?;

    if !status.success() {
        return Err(Box::new(CommandFailed {
            command: invocation.to_string(),
            code: status.code(),
        }));
    }
    Ok(())
}

/// Bundled, read-only inputs copied into every generated project.
#[derive(Debug, Clone)]
pub struct Assets {
    pub template_dir: PathBuf,
    pub readme: PathBuf,
}

impl Assets {
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            template_dir: dir.join(TEMPLATE_DIR),
            readme: dir.join(README_FILE),
        }
    }

    /// `ONTONIM_ASSETS_DIR`, then `assets/` beside the executable, then the
    /// crate's own `assets/`.
    pub fn resolve() -> Self {
        if let Some(dir) = std::env::var_os(ASSETS_ENV).filter(|dir| !dir.is_empty()) {
            log::debug!("Using assets from {}", ASSETS_ENV);
            return Self::in_dir(Path::new(&dir));
        }

        let beside_exe = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(ASSETS_DIR)))
            .filter(|dir| dir.is_dir());
        let dir = beside_exe
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(ASSETS_DIR));
        log::debug!("Using assets from {}", dir.display());
        Self::in_dir(&dir)
    }
}

/// Interactive entry point: real prompts, real commands, current directory.
pub fn run() -> Result<(), Box<dyn Error>> {
    let cwd = std::env::current_dir()?;
    let assets = Assets::resolve();
    let mut prompter = prompt::DialoguerPrompter::default();
    provision(&mut prompter, &mut SystemRunner, &cwd, &assets)
}

/// Collect the request and run every provisioning stage in order.
///
/// The new project lands in `cwd/<project name>`; that path is handed to each
/// stage and the process working directory is never changed.
pub fn provision(
    prompter: &mut dyn Prompter,
    runner: &mut dyn Runner,
    cwd: &Path,
    assets: &Assets,
) -> Result<(), Box<dyn Error>> {
    print_banner();
    let request = prompt::collect_request(prompter)?;
    log::debug!("Provisioning request: {:?}", request);

    let project_dir = scaffold::run(runner, cwd, &request.project_name)?;
    conflicts::run(&project_dir)?;
    template::run(&project_dir, assets)?;
    styles::run(&project_dir)?;
    components::run(runner, &project_dir)?;
    deps::run(runner, &project_dir, &request)?;
    if request.add_prisma {
        prisma::run(runner, &project_dir)?;
    }
    git::run(runner, &project_dir)?;

    dev_server::run(prompter, runner, &project_dir, &request.project_name)?;
    Ok(())
}

fn print_banner() {
    println!("\nONTONIM CLI v{}\n", env!("CARGO_PKG_VERSION"));
    println!(
        "{}",
        "Creating Next.js App with App Router + Tailwind CSS + TypeScript"
            .green()
            .bold()
    );
}
