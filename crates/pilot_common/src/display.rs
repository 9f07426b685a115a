//! Terminal output helpers for consistent styling.
//!
//! The two palettes survive from the original desktop themes: "light"
//! assumes a light terminal background, "dark" brightens everything up.

use owo_colors::{AnsiColors, OwoColorize};

/// Unicode symbols
pub mod symbols {
    pub const PROMPT: &str = "›";
    pub const DIR_TAG: &str = "<DIR>";
}

/// Horizontal rule
pub const HR: &str =
    "──────────────────────────────────────────────────────────────────────────────";

/// Message classes, each themed independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageClass {
    CommandEcho,
    Info,
    Success,
    Error,
    History,
}

/// Active display palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

pub const THEME_NAMES: &[&str] = &["light", "dark"];

impl Theme {
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn color(&self, class: MessageClass) -> AnsiColors {
        match (self, class) {
            (Theme::Light, MessageClass::CommandEcho) => AnsiColors::Blue,
            (Theme::Dark, MessageClass::CommandEcho) => AnsiColors::BrightBlue,
            (Theme::Light, MessageClass::Info) => AnsiColors::Default,
            (Theme::Dark, MessageClass::Info) => AnsiColors::BrightWhite,
            (Theme::Light, MessageClass::Success) => AnsiColors::Green,
            (Theme::Dark, MessageClass::Success) => AnsiColors::BrightGreen,
            (Theme::Light, MessageClass::Error) => AnsiColors::Red,
            (Theme::Dark, MessageClass::Error) => AnsiColors::BrightRed,
            (Theme::Light, MessageClass::History) => AnsiColors::Magenta,
            (Theme::Dark, MessageClass::History) => AnsiColors::BrightMagenta,
        }
    }

    /// Print a message line in the class color, prefixing echoes and
    /// history entries the way the log pane used to.
    pub fn print(&self, class: MessageClass, message: &str) {
        let prefix = match class {
            MessageClass::CommandEcho => ">>> ",
            MessageClass::History => "HIST: ",
            _ => "",
        };
        for line in message.lines() {
            println!("{}{}", prefix, line.color(self.color(class)));
        }
        if message.is_empty() {
            println!();
        }
    }
}

/// Print a styled header with version.
pub fn print_header(name: &str, version: &str) {
    println!();
    println!("{} v{}", name.bold(), version);
    println!("{}", HR.dimmed());
}

/// Status-bar style summary line shown above each prompt.
pub fn print_status_line(engine: &str, cwd: &std::path::Path) {
    let cwd_display = truncate_left(&cwd.display().to_string(), 45);
    println!(
        "{}",
        format!("Engine: {}  |  Dir: {}", engine, cwd_display).dimmed()
    );
}

/// Keep the tail of long paths, `...`-prefixed, like the old status bar.
fn truncate_left(text: &str, max: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max {
        return text.to_string();
    }
    let tail: String = chars[chars.len() - (max - 3)..].iter().collect();
    format!("...{}", tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_names_round_trip() {
        for name in THEME_NAMES {
            assert_eq!(Theme::from_name(name).unwrap().name(), *name);
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn long_paths_keep_their_tail() {
        let long = "/very/long/path/that/exceeds/the/status/bar/width/limit/by/a/lot";
        let short = truncate_left(long, 45);
        assert!(short.starts_with("..."));
        assert!(short.ends_with("by/a/lot"));
        assert_eq!(short.chars().count(), 45);
    }

    #[test]
    fn short_paths_are_untouched() {
        assert_eq!(truncate_left("/home/user", 45), "/home/user");
    }
}
