use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "barrelctl")]
#[command(about = "Generate a TypeScript barrel file (index.ts) for a directory")]
#[command(version)]
pub struct Cli {
    /// Target directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Dry run (no changes written)
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Revert to previous index.ts
    #[arg(short, long)]
    pub revert: bool,

    /// Increase output verbosity
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Interactive mode runs when none of the action flags are given
    pub fn is_interactive(&self) -> bool {
        self.dir.is_none() && !self.dry_run && !self.revert
    }
}
