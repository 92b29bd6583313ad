use anyhow::Result;
use colored::Colorize;

use super::PathSelector;
use crate::output::{self, Level};
use crate::prompt::{parse_choice, Prompter};

/// Built-in selector: case-insensitive substring search, then pick by number
#[derive(Debug, Default, Clone, Copy)]
pub struct PromptSelector;

impl PathSelector for PromptSelector {
    fn select(&self, options: &[String], prompter: &dyn Prompter) -> Result<Option<String>> {
        output::log(
            Level::Search,
            "Fuzzy search: type part of the directory name and press Enter.",
        );

        loop {
            let query = prompter.input(&format!("{} Search", Level::Search.emoji()))?;
            let matches = filter_options(options, &query);

            if matches.is_empty() {
                output::log(Level::Warn, "No matches found. Try again.");
                continue;
            }

            for (i, m) in matches.iter().enumerate() {
                println!("{}", format!("  {}. {}", i + 1, m).yellow());
            }

            let choice = prompter.input(&format!(
                "{} Select [1-{}] or new search",
                Level::Input.emoji(),
                matches.len()
            ))?;

            if let Some(index) = parse_choice(&choice, matches.len()) {
                return Ok(Some(matches[index].to_string()));
            }
        }
    }
}

/// Options containing the query, ignoring case; an empty query matches everything
pub fn filter_options<'a>(options: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    options
        .iter()
        .filter(|o| o.to_lowercase().contains(&query))
        .map(String::as_str)
        .collect()
}
