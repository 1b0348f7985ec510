use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};
use std::error::Error;
use std::fmt;
use std::io;

/// Answers gathered before any external command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisioningRequest {
    pub project_name: String,
    pub add_auth: bool,
    pub add_prisma: bool,
}

/// No usable project name was given.
#[derive(Debug)]
pub struct MissingProjectName;

impl fmt::Display for MissingProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Project name is required!")
    }
}

impl Error for MissingProjectName {}

/// Interactive questions asked of the user.
pub trait Prompter {
    /// Free-text answer; `None` when the user cancelled the prompt.
    fn text(
        &mut self,
        prompt: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<Option<String>, Box<dyn Error>>;

    /// Yes/no answer; `None` when the user cancelled the prompt.
    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, Box<dyn Error>>;
}

#[derive(Default)]
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl Prompter for DialoguerPrompter {
    fn text(
        &mut self,
        prompt: &str,
        validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<Option<String>, Box<dyn Error>> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .validate_with(|input: &String| validate(input.as_str()))
            .interact_text();

        match answer {
            Ok(value) => Ok(Some(value)),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, Box<dyn Error>> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(default)
            .interact_opt();

        match answer {
            Ok(confirmed) => Ok(confirmed),
            Err(dialoguer::Error::IO(err)) if err.kind() == io::ErrorKind::Interrupted => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Ask for the project name and feature flags.
///
/// A cancelled or blank name fails with [`MissingProjectName`] before the
/// feature questions are asked. A cancelled feature question leaves that flag
/// and every later one off.
pub fn collect_request(prompter: &mut dyn Prompter) -> Result<ProvisioningRequest, Box<dyn Error>> {
    let name = prompter.text("Project name:", &validate_project_name)?;
    let project_name = match name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => return Err(Box::new(MissingProjectName)),
    };

    let (add_auth, add_prisma) = match prompter.confirm("Add NextAuth.js?", true)? {
        Some(add_auth) => {
            let add_prisma = prompter.confirm("Add Prisma ORM?", false)?;
            (add_auth, add_prisma.unwrap_or(false))
        }
        None => (false, false),
    };

    Ok(ProvisioningRequest {
        project_name,
        add_auth,
        add_prisma,
    })
}

fn validate_project_name(input: &str) -> Result<(), String> {
    if input.trim().is_empty() {
        return Err("Project name is required".to_string());
    }
    Ok(())
}
