//! Test doubles for the prompt provider and the command runner.

use super::{Assets, CommandFailed, Invocation, Prompter, Runner};
use std::collections::VecDeque;
use std::error::Error;
use std::fs;
use std::path::Path;

/// Records every invocation and fails the ones matching a predicate.
pub struct RecordingRunner {
    pub calls: Vec<Invocation>,
    fails: Box<dyn Fn(&str) -> bool>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::failing_when(|_| false)
    }

    pub fn failing_on(lines: &[&str]) -> Self {
        let lines: Vec<String> = lines.iter().map(|line| line.to_string()).collect();
        Self::failing_when(move |line| lines.iter().any(|l| l == line))
    }

    pub fn failing_when(fails: impl Fn(&str) -> bool + 'static) -> Self {
        Self {
            calls: Vec::new(),
            fails: Box::new(fails),
        }
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls.iter().map(Invocation::to_string).collect()
    }
}

impl Runner for RecordingRunner {
    fn run(&mut self, invocation: &Invocation) -> Result<(), Box<dyn Error>> {
        self.calls.push(invocation.clone());
        let line = invocation.to_string();
        if (self.fails)(&line) {
            return Err(Box::new(CommandFailed {
                command: line,
                code: Some(1),
            }));
        }
        Ok(())
    }
}

/// Answers prompts from a script; confirms fall back to their default.
pub struct ScriptedPrompter {
    name: Option<String>,
    confirms: VecDeque<bool>,
    cancel_confirm: Option<usize>,
    confirms_asked: usize,
    pub prompts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(name: Option<&str>, confirms: &[bool]) -> Self {
        Self {
            name: name.map(str::to_string),
            confirms: confirms.iter().copied().collect(),
            cancel_confirm: None,
            confirms_asked: 0,
            prompts: Vec::new(),
        }
    }

    /// Cancel the confirm at zero-based position `index`, as Ctrl-C would.
    pub fn cancelling_confirm(mut self, index: usize) -> Self {
        self.cancel_confirm = Some(index);
        self
    }
}

impl Prompter for ScriptedPrompter {
    fn text(
        &mut self,
        prompt: &str,
        _validate: &dyn Fn(&str) -> Result<(), String>,
    ) -> Result<Option<String>, Box<dyn Error>> {
        self.prompts.push(prompt.to_string());
        Ok(self.name.take())
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> Result<Option<bool>, Box<dyn Error>> {
        self.prompts.push(prompt.to_string());
        let position = self.confirms_asked;
        self.confirms_asked += 1;
        let scripted = self.confirms.pop_front().unwrap_or(default);
        if self.cancel_confirm == Some(position) {
            return Ok(None);
        }
        Ok(Some(scripted))
    }
}

/// Lay out a minimal asset bundle under `dir`.
pub fn fake_assets(dir: &Path) -> Assets {
    let assets = Assets::in_dir(dir);
    let app = assets.template_dir.join("src").join("app");
    fs::create_dir_all(&app).unwrap();
    fs::write(app.join("page.tsx"), "export default function Page() {}\n").unwrap();
    fs::write(&assets.readme, "# Bundled README\n").unwrap();
    assets
}
