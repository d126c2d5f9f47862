use std::path::Path;
use std::process::{Command, Stdio};

use crate::core::validate_program_name;
use crate::error::{ConfigError, LaunchError};

use super::terminal::{TerminalPreset, render_command};

/// What opens the created folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LaunchTarget {
    /// Editor executable run with the folder as its only argument
    Editor { program: String },
    /// Shell command template with `{path}` placeholders
    Terminal {
        preset: TerminalPreset,
        template: String,
    },
}

impl LaunchTarget {
    /// Validate the configured launcher
    pub(crate) fn new(
        program: &str,
        terminal_preset: Option<&str>,
        custom_terminal_command: Option<&str>,
    ) -> Result<Self, ConfigError> {
        match terminal_preset.map(str::trim).filter(|p| !p.is_empty()) {
            Some(name) => {
                let preset: TerminalPreset = name.parse()?;
                let template = preset.template(custom_terminal_command)?;
                Ok(LaunchTarget::Terminal { preset, template })
            }
            None => {
                validate_program_name(program)?;
                Ok(LaunchTarget::Editor {
                    program: program.trim().to_string(),
                })
            }
        }
    }

    /// Executable named in logs and launch errors
    pub(crate) fn program(&self) -> &str {
        match self {
            LaunchTarget::Editor { program } => program,
            LaunchTarget::Terminal { template, .. } => {
                template.split_whitespace().next().unwrap_or_default()
            }
        }
    }

    /// Make sure the executable exists before anything is spawned.
    ///
    /// Explicit paths are left to the spawn so a non-executable file reports
    /// permission denied rather than not found. Terminal templates are resolved
    /// by the shell, which also handles builtins, quoting and assignments.
    pub(crate) fn locate(&self) -> Result<(), LaunchError> {
        let LaunchTarget::Editor { program } = self else {
            return Ok(());
        };
        if program.contains(std::path::is_separator) {
            return Ok(());
        }
        match which::which(program) {
            Ok(found) => {
                tracing::debug!(%program, found = %found.display(), "program found on PATH");
                Ok(())
            }
            Err(_) => Err(LaunchError::NotFound {
                program: program.clone(),
            }),
        }
    }

    /// Start the launcher for `folder` without waiting for it to exit
    pub(crate) fn launch(&self, folder: &Path) -> Result<(), LaunchError> {
        self.locate()?;

        let mut cmd = match self {
            LaunchTarget::Editor { program } => {
                let mut cmd = Command::new(program);
                cmd.arg(folder);
                cmd
            }
            LaunchTarget::Terminal { preset, template } => {
                tracing::debug!(%preset, "opening terminal");
                shell_command(&render_command(template, folder))
            }
        };

        let child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| LaunchError::from_io(self.program(), e))?;
        tracing::debug!(pid = child.id(), program = self.program(), "launched");
        Ok(())
    }
}

#[cfg(unix)]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(line);
    cmd
}

#[cfg(not(unix))]
fn shell_command(line: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(line);
    cmd
}
