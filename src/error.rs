use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Please enter a project title")]
    EmptyTitle,

    #[error("Title must contain at least one valid character")]
    InvalidTitleAfterSanitization,

    #[error("Title \"{title}\" would leave the base directory")]
    TitleEscapesBase { title: String },

    #[error("{0}")]
    InvalidConfig(#[from] ConfigError),

    #[error(
        "Cannot write to base directory or its parent: {}. Please check the path and permissions in settings.",
        path.display()
    )]
    PathNotWritable { path: PathBuf },

    #[error("Cannot create directory {}: {source}. Check base path in settings.", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Launch(#[from] LaunchError),

    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },
}

impl AppError {
    /// Short heading shown above the message when reporting the failure
    pub(crate) fn title(&self) -> &'static str {
        match self {
            AppError::EmptyTitle | AppError::InvalidDate { .. } => "Error",
            AppError::InvalidTitleAfterSanitization | AppError::TitleEscapesBase { .. } => {
                "Invalid Title"
            }
            AppError::InvalidConfig(_) => "Invalid Editor Configuration",
            AppError::PathNotWritable { .. } => "Invalid Base Path",
            AppError::DirectoryCreate { .. } => "Error Creating Folder",
            AppError::Launch(_) => "Error Opening Editor",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum ConfigError {
    #[error("Editor program name cannot be empty")]
    EmptyProgram,

    #[error(
        "Editor program name contains invalid characters. Use only letters, numbers, hyphens, underscores, and forward slashes."
    )]
    ForbiddenCharacters,

    #[error("Editor program name should be a single command (e.g., 'code', not 'code --new-window')")]
    MultipleWords,

    #[error("Unknown terminal preset \"{name}\"")]
    UnknownTerminalPreset { name: String },

    #[error("Terminal preset \"custom\" requires customTerminalCommand to be set")]
    MissingCustomCommand,

    #[error("Terminal command \"{template}\" must contain a {{path}} placeholder")]
    MissingPathPlaceholder { template: String },
}

#[derive(Debug, Error)]
pub(crate) enum LaunchError {
    #[error(
        "Command '{program}' not found. Please install it or update the Editor Program Name in settings."
    )]
    NotFound { program: String },

    #[error("Permission denied when running '{program}'. Check file permissions.")]
    PermissionDenied { program: String },

    #[error("Failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl LaunchError {
    /// Classify a spawn failure by its OS error kind
    pub(crate) fn from_io(program: &str, err: std::io::Error) -> Self {
        let program = program.to_string();
        match err.kind() {
            std::io::ErrorKind::NotFound => LaunchError::NotFound { program },
            std::io::ErrorKind::PermissionDenied => LaunchError::PermissionDenied { program },
            _ => LaunchError::Spawn {
                program,
                source: err,
            },
        }
    }
}
