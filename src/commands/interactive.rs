//! Interactive menu: pick a directory, then loop over generate / dry run / revert / exit

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use super::{generate, revert};
use crate::barrel::{revert_index, scan_exports, writer::render_index, INDEX_FILE};
use crate::config::Config;
use crate::error::BarrelError;
use crate::output::{self, Level};
use crate::prompt::{parse_choice, DialoguerPrompter, Prompter};
use crate::select::{prompt_directory, FallbackSelector};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Generate,
    DryRun,
    Revert,
    Exit,
}

impl Action {
    pub const MENU: [Action; 4] = [Action::Generate, Action::DryRun, Action::Revert, Action::Exit];

    fn label(self) -> String {
        match self {
            Action::Generate => "Generate barrel file".to_string(),
            Action::DryRun => "Dry run (preview only)".to_string(),
            Action::Revert => format!("Revert to previous {}", INDEX_FILE),
            Action::Exit => "Exit".to_string(),
        }
    }

    fn level(self) -> Level {
        match self {
            Action::Generate | Action::DryRun => Level::Write,
            Action::Revert => Level::Revert,
            Action::Exit => Level::Exit,
        }
    }

    pub fn from_choice(input: &str) -> Result<Action, BarrelError> {
        parse_choice(input, Self::MENU.len())
            .map(|i| Self::MENU[i])
            .ok_or_else(|| BarrelError::InvalidChoice(input.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    AwaitingAction,
    Running(Action),
    Exited,
}

/// Entry point for the no-arguments mode
pub fn run(config: &Config) -> Result<()> {
    let prompter = DialoguerPrompter::new();
    let selector = FallbackSelector::detect(config.finder());
    let root = std::env::current_dir().context("Failed to determine current directory")?;

    let dir = prompt_directory(&selector, &prompter, &root, &config.selector.exclude)?;
    Session::new(dir, &prompter).run()
}

/// Menu loop bound to one selected directory
pub struct Session<'a> {
    dir: PathBuf,
    prompter: &'a dyn Prompter,
}

impl<'a> Session<'a> {
    pub fn new(dir: PathBuf, prompter: &'a dyn Prompter) -> Self {
        Self { dir, prompter }
    }

    pub fn run(&self) -> Result<()> {
        let mut state = State::AwaitingAction;
        while state != State::Exited {
            state = self.step(state)?;
        }
        Ok(())
    }

    /// Advance the menu by one transition
    pub fn step(&self, state: State) -> Result<State> {
        match state {
            State::AwaitingAction => Ok(State::Running(self.prompt_action()?)),
            State::Running(Action::Generate) => {
                self.generate()?;
                Ok(State::AwaitingAction)
            }
            State::Running(Action::DryRun) => {
                self.dry_run()?;
                Ok(State::AwaitingAction)
            }
            State::Running(Action::Revert) => {
                self.revert()?;
                Ok(State::AwaitingAction)
            }
            State::Running(Action::Exit) => {
                output::log(Level::Exit, "Exiting. Goodbye!");
                Ok(State::Exited)
            }
            State::Exited => Ok(State::Exited),
        }
    }

    fn prompt_action(&self) -> Result<Action> {
        output::log(Level::Prompt, "Choose an action:");
        for (i, action) in Action::MENU.iter().enumerate() {
            let level = action.level();
            println!(
                "{}",
                format!("  {}. {} {}", i + 1, level.emoji(), action.label()).color(level.color())
            );
        }

        loop {
            let input = self.prompter.input(&format!(
                "{} Enter choice [1-{}]",
                Level::Input.emoji(),
                Action::MENU.len()
            ))?;

            match Action::from_choice(&input) {
                Ok(action) => return Ok(action),
                Err(e) => output::log(Level::Error, &e.to_string()),
            }
        }
    }

    /// Scan the directory; failures are reported and end only this action
    fn scan(&self) -> Option<Vec<String>> {
        match scan_exports(&self.dir) {
            Ok(lines) if lines.is_empty() => {
                generate::warn_nothing_to_export();
                None
            }
            Ok(lines) => Some(lines),
            Err(e) => {
                output::log(Level::Error, &format!("{:#}", e));
                None
            }
        }
    }

    fn generate(&self) -> Result<()> {
        let Some(lines) = self.scan() else {
            return Ok(());
        };

        output::preview(&render_index(&lines));
        if self
            .prompter
            .confirm(&format!("Write this to {}?", INDEX_FILE))?
        {
            generate::write(&self.dir, &lines, false)?;
        }

        Ok(())
    }

    fn dry_run(&self) -> Result<()> {
        let Some(lines) = self.scan() else {
            return Ok(());
        };

        generate::write(&self.dir, &lines, true)
    }

    fn revert(&self) -> Result<()> {
        let question = format!(
            "Are you sure you want to revert {} from backup?",
            INDEX_FILE
        );
        if self.prompter.confirm(&question)? {
            revert::report(&revert_index(&self.dir)?);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barrel::BACKUP_FILE;
    use crate::prompt::scripted::ScriptedPrompter;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn package(files: &[&str]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for name in files {
            fs::write(temp.path().join(name), "").unwrap();
        }
        temp
    }

    fn read_index(dir: &Path) -> String {
        fs::read_to_string(dir.join(INDEX_FILE)).unwrap()
    }

    #[test]
    fn test_from_choice() {
        assert_eq!(Action::from_choice("1").unwrap(), Action::Generate);
        assert_eq!(Action::from_choice("2 ").unwrap(), Action::DryRun);
        assert_eq!(Action::from_choice("3").unwrap(), Action::Revert);
        assert_eq!(Action::from_choice("4").unwrap(), Action::Exit);
        assert!(matches!(
            Action::from_choice("5"),
            Err(BarrelError::InvalidChoice(c)) if c == "5"
        ));
    }

    #[test]
    fn test_exit_immediately() {
        let temp = package(&["a.ts"]);
        let prompter = ScriptedPrompter::new(&["4"]);
        Session::new(temp.path().to_path_buf(), &prompter)
            .run()
            .unwrap();
        assert!(!temp.path().join(INDEX_FILE).exists());
    }

    #[test]
    fn test_invalid_choice_keeps_prompting() {
        let temp = package(&["a.ts"]);
        let prompter = ScriptedPrompter::new(&["9", "menu", "4"]);
        Session::new(temp.path().to_path_buf(), &prompter)
            .run()
            .unwrap();
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_generate_confirmed_writes_index() {
        let temp = package(&["a.ts"]);
        let prompter = ScriptedPrompter::new(&["1", "y", "4"]);
        Session::new(temp.path().to_path_buf(), &prompter)
            .run()
            .unwrap();
        assert_eq!(read_index(temp.path()), "export * from './a';\n");
    }

    #[test]
    fn test_generate_declined_has_no_side_effect() {
        let temp = package(&["a.ts"]);
        let prompter = ScriptedPrompter::new(&["1", "n", "4"]);
        Session::new(temp.path().to_path_buf(), &prompter)
            .run()
            .unwrap();
        assert!(!temp.path().join(INDEX_FILE).exists());
    }

    #[test]
    fn test_generate_with_nothing_to_export_skips_confirmation() {
        let temp = package(&["types.d.ts"]);
        let prompter = ScriptedPrompter::new(&["1", "4"]);
        Session::new(temp.path().to_path_buf(), &prompter)
            .run()
            .unwrap();
        assert!(!temp.path().join(INDEX_FILE).exists());
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp = package(&["a.ts", "b.ts"]);
        let prompter = ScriptedPrompter::new(&["2", "4"]);
        Session::new(temp.path().to_path_buf(), &prompter)
            .run()
            .unwrap();
        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 2);
    }

    #[test]
    fn test_generate_then_revert() {
        let temp = package(&["a.ts"]);
        fs::write(temp.path().join(INDEX_FILE), "export { A } from './a'\n").unwrap();

        let prompter = ScriptedPrompter::new(&["1", "yes", "3", "y", "4"]);
        Session::new(temp.path().to_path_buf(), &prompter)
            .run()
            .unwrap();

        assert_eq!(read_index(temp.path()), "export { A } from './a'\n");
        assert!(temp.path().join(BACKUP_FILE).exists());
    }

    #[test]
    fn test_revert_without_backup_continues() {
        let temp = package(&["a.ts"]);
        let prompter = ScriptedPrompter::new(&["3", "y", "1", "y", "4"]);
        Session::new(temp.path().to_path_buf(), &prompter)
            .run()
            .unwrap();
        assert_eq!(read_index(temp.path()), "export * from './a';\n");
    }

    #[test]
    fn test_revert_declined() {
        let temp = package(&["a.ts"]);
        fs::write(temp.path().join(INDEX_FILE), "current\n").unwrap();
        fs::write(temp.path().join(BACKUP_FILE), "old\n").unwrap();

        let prompter = ScriptedPrompter::new(&["3", "n", "4"]);
        Session::new(temp.path().to_path_buf(), &prompter)
            .run()
            .unwrap();
        assert_eq!(read_index(temp.path()), "current\n");
    }

    #[test]
    fn test_vanished_directory_is_reported_not_fatal() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("gone");
        let prompter = ScriptedPrompter::new(&["2", "1", "4"]);
        Session::new(dir, &prompter).run().unwrap();
        assert_eq!(prompter.remaining(), 0);
    }

    #[test]
    fn test_step_transitions() {
        let temp = package(&[]);
        let prompter = ScriptedPrompter::new(&["2"]);
        let session = Session::new(temp.path().to_path_buf(), &prompter);

        assert_eq!(
            session.step(State::AwaitingAction).unwrap(),
            State::Running(Action::DryRun)
        );
        assert_eq!(
            session.step(State::Running(Action::DryRun)).unwrap(),
            State::AwaitingAction
        );
        assert_eq!(
            session.step(State::Running(Action::Exit)).unwrap(),
            State::Exited
        );
    }
}
