//! CLI argument definitions
//!
//! Global CLI options and merging them over the preference file.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Preferences;

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "code-in-folder")]
#[command(
    about = "Create a dated project folder from a title and open it in your editor",
    version
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Read preferences from this file instead of the default locations
    #[arg(long, global = true, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Base directory for new folders (a leading ~ is expanded)
    #[arg(short, long, global = true, value_name = "DIR")]
    pub(crate) base_path: Option<String>,

    /// Editor program to open the folder with (e.g. code, positron, cursor)
    #[arg(short, long, global = true, value_name = "PROGRAM")]
    pub(crate) program: Option<String>,

    /// Open a terminal preset instead of an editor (kitty, alacritty, wezterm, gnome-terminal, konsole, foot, custom)
    #[arg(short, long, global = true, value_name = "PRESET")]
    pub(crate) terminal: Option<String>,

    /// Command for the custom terminal preset, with a {path} placeholder
    #[arg(long, global = true, value_name = "COMMAND")]
    pub(crate) terminal_command: Option<String>,

    /// Do not add a YEAR segment
    #[arg(long, global = true)]
    pub(crate) no_year: bool,

    /// Do not add a MM-DD segment
    #[arg(long, global = true)]
    pub(crate) no_month_day: bool,

    /// Use the title as typed instead of lowercase snake_case
    #[arg(long, global = true)]
    pub(crate) no_sanitize: bool,

    /// Do not limit the title to 10 words / 50 characters
    #[arg(long, global = true)]
    pub(crate) no_truncate: bool,

    /// Date used for the dated segments (YYYYMMDD or YYYY-MM-DD, default today)
    #[arg(short, long, global = true, value_name = "DATE")]
    pub(crate) date: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Apply explicitly given flags over file preferences (CLI wins)
    pub(crate) fn with_overrides(&self, mut prefs: Preferences) -> Preferences {
        if let Some(ref base_path) = self.base_path {
            prefs.base_path = base_path.clone();
        }
        if let Some(ref program) = self.program {
            prefs.program_name = program.clone();
        }
        if self.terminal.is_some() {
            prefs.terminal_preset = self.terminal.clone();
        }
        if self.terminal_command.is_some() {
            prefs.custom_terminal_command = self.terminal_command.clone();
        }

        // Boolean flags can only switch a preference off
        if self.no_year {
            prefs.add_year_to_path = false;
        }
        if self.no_month_day {
            prefs.add_month_day_to_path = false;
        }
        if self.no_sanitize {
            prefs.sanitize_path_name = false;
        }
        if self.no_truncate {
            prefs.truncate_path_name = false;
        }

        prefs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("code-in-folder").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_flags_keep_preferences() {
        let cli = parse(&["check"]);
        let prefs = Preferences {
            base_path: "/srv".to_string(),
            ..Preferences::default()
        };
        assert_eq!(cli.with_overrides(prefs.clone()), prefs);
    }

    #[test]
    fn flags_override_preferences() {
        let cli = parse(&[
            "new",
            "demo",
            "--base-path",
            "/tmp/x",
            "-p",
            "cursor",
            "--no-year",
            "--no-sanitize",
        ]);
        let prefs = cli.with_overrides(Preferences::default());
        assert_eq!(prefs.base_path, "/tmp/x");
        assert_eq!(prefs.program_name, "cursor");
        assert!(!prefs.add_year_to_path);
        assert!(prefs.add_month_day_to_path);
        assert!(!prefs.sanitize_path_name);
        assert!(prefs.truncate_path_name);
    }

    #[test]
    fn terminal_flags_override() {
        let cli = parse(&["preview", "--terminal", "custom", "--terminal-command", "foot -D {path}"]);
        let prefs = cli.with_overrides(Preferences::default());
        assert_eq!(prefs.terminal_preset.as_deref(), Some("custom"));
        assert_eq!(prefs.custom_terminal_command.as_deref(), Some("foot -D {path}"));
    }

    #[test]
    fn new_requires_title() {
        assert!(Cli::try_parse_from(["code-in-folder", "new"]).is_err());
    }

    #[test]
    fn global_flags_after_title() {
        let cli = parse(&["new", "My", "Project", "--json", "--date", "2025-01-02"]);
        assert!(cli.json);
        assert_eq!(cli.date.as_deref(), Some("2025-01-02"));
        assert_eq!(cli.command.title().as_deref(), Some("My Project"));
    }
}
