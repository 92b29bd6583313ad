mod barrel;
mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;
mod prompt;
mod safety;
mod select;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::Config;
use error::BarrelError;
use output::Level;
use std::path::{Component, Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(err) = run(cli) {
        if let Some(user_error) = err.downcast_ref::<BarrelError>() {
            output::log(Level::Error, &user_error.to_string());
            std::process::exit(1);
        }
        return Err(err);
    }

    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    if cli.is_interactive() {
        let config = Config::load().context("Failed to load config")?;
        return commands::interactive::run(&config);
    }

    let dir = resolve_target(cli.dir.as_deref())?;

    if cli.revert {
        commands::revert::run(&dir)
    } else {
        commands::generate::run(&dir, cli.dry_run)
    }
}

/// Make the --dir argument absolute and check that it is a directory
fn resolve_target(dir: Option<&Path>) -> Result<PathBuf> {
    let dir = dir.ok_or(BarrelError::MissingDirArgument)?;

    let dir = if dir.is_absolute() {
        normalize(dir)
    } else {
        normalize(
            &std::env::current_dir()
                .context("Failed to determine current directory")?
                .join(dir),
        )
    };

    if !dir.is_dir() {
        return Err(BarrelError::DirectoryNotFound(dir).into());
    }

    Ok(dir)
}

/// Drop `.` and resolve `..` lexically, without touching the filesystem
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}
