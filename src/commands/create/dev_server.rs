use super::{Invocation, Prompter, Runner, PACKAGE_MANAGER};
use colored::Colorize;
use std::error::Error;
use std::path::Path;

/// Print next steps and optionally run `pnpm dev` until it exits.
///
/// Returns whether the dev server was started.
pub fn run(
    prompter: &mut dyn Prompter,
    runner: &mut dyn Runner,
    project_dir: &Path,
    project_name: &str,
) -> Result<bool, Box<dyn Error>> {
    print_next_steps(project_name);

    let start = prompter
        .confirm("Would you like to start the development server now?", true)?
        .unwrap_or(false);
    if !start {
        return Ok(false);
    }

    log::info!("Starting development server...");
    runner.run(&Invocation::new(PACKAGE_MANAGER, &["dev"], project_dir))?;
    Ok(true)
}

fn print_next_steps(project_name: &str) {
    println!(
        "\n{}\n",
        "Project setup complete! Tailwind CSS configured successfully."
            .green()
            .bold()
    );
    println!("{}", "Next steps:".bold());
    println!("1. cd {}", project_name);
    println!("2. {} dev", PACKAGE_MANAGER);
}
