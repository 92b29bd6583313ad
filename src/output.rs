//! User-facing terminal output: one emoji and one color per message level

use colored::{Color, Colorize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warn,
    Error,
    Prompt,
    Input,
    Dir,
    Write,
    Revert,
    Exit,
    Search,
}

impl Level {
    pub fn emoji(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warn => "⚠️",
            Level::Error => "❌",
            Level::Prompt => "👉",
            Level::Input => "⌨️",
            Level::Dir => "📁",
            Level::Write => "✍️",
            Level::Revert => "⏪",
            Level::Exit => "🚪",
            Level::Search => "🔍",
        }
    }

    pub fn color(self) -> Color {
        match self {
            Level::Info => Color::Blue,
            Level::Success | Level::Write => Color::Green,
            Level::Warn | Level::Dir | Level::Revert => Color::Yellow,
            Level::Error | Level::Exit => Color::Red,
            Level::Prompt => Color::Magenta,
            Level::Input | Level::Search => Color::Cyan,
        }
    }
}

/// Format a message with the level's emoji prefix and color
pub fn format_line(level: Level, msg: &str) -> String {
    format!("{} {}", level.emoji(), msg)
        .color(level.color())
        .to_string()
}

/// Print a message; errors go to stderr, everything else to stdout
pub fn log(level: Level, msg: &str) {
    let line = format_line(level, msg);
    if level == Level::Error {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

/// Print barrel content for preview
pub fn preview(content: &str) {
    println!("{}", content.trim_end_matches('\n').cyan());
}
