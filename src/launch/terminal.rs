//! Terminal presets and `{path}` command templates

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::consts::PATH_PLACEHOLDER;
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TerminalPreset {
    Kitty,
    Alacritty,
    Wezterm,
    GnomeTerminal,
    Konsole,
    Foot,
    /// Use `customTerminalCommand`
    Custom,
}

impl TerminalPreset {
    pub(crate) const ALL: [TerminalPreset; 7] = [
        TerminalPreset::Kitty,
        TerminalPreset::Alacritty,
        TerminalPreset::Wezterm,
        TerminalPreset::GnomeTerminal,
        TerminalPreset::Konsole,
        TerminalPreset::Foot,
        TerminalPreset::Custom,
    ];

    pub(crate) fn name(self) -> &'static str {
        match self {
            TerminalPreset::Kitty => "kitty",
            TerminalPreset::Alacritty => "alacritty",
            TerminalPreset::Wezterm => "wezterm",
            TerminalPreset::GnomeTerminal => "gnome-terminal",
            TerminalPreset::Konsole => "konsole",
            TerminalPreset::Foot => "foot",
            TerminalPreset::Custom => "custom",
        }
    }

    fn builtin_template(self) -> Option<&'static str> {
        match self {
            TerminalPreset::Kitty => Some("kitty --directory {path}"),
            TerminalPreset::Alacritty => Some("alacritty --working-directory {path}"),
            TerminalPreset::Wezterm => Some("wezterm start --cwd {path}"),
            TerminalPreset::GnomeTerminal => Some("gnome-terminal --working-directory={path}"),
            TerminalPreset::Konsole => Some("konsole --workdir {path}"),
            TerminalPreset::Foot => Some("foot --working-directory={path}"),
            TerminalPreset::Custom => None,
        }
    }

    /// Command template for this preset, validated to contain `{path}`
    pub(crate) fn template(self, custom: Option<&str>) -> Result<String, ConfigError> {
        let template = match self.builtin_template() {
            Some(builtin) => builtin.to_string(),
            None => custom
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .ok_or(ConfigError::MissingCustomCommand)?
                .to_string(),
        };
        if !template.contains(PATH_PLACEHOLDER) {
            return Err(ConfigError::MissingPathPlaceholder { template });
        }
        Ok(template)
    }
}

impl fmt::Display for TerminalPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TerminalPreset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownTerminalPreset {
                name: s.trim().to_string(),
            })
    }
}

/// Replace every `{path}` in `template` with the folder as one shell token
pub(crate) fn render_command(template: &str, path: &Path) -> String {
    template.replace(PATH_PLACEHOLDER, &quote_path(path))
}

// Double-quoted so paths with spaces stay one word; escape what sh still expands inside quotes
fn quote_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let mut quoted = String::with_capacity(raw.len() + 2);
    quoted.push('"');
    for c in raw.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
