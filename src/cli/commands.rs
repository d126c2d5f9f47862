//! CLI subcommand definitions

use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Create the folder for TITLE and open it
    New {
        /// Project title (words are joined with spaces)
        #[arg(required = true, value_name = "TITLE")]
        title: Vec<String>,
    },
    /// Show the folder that would be created, without creating it
    Preview {
        /// Project title; omitted shows a [TITLE] placeholder
        #[arg(value_name = "TITLE")]
        title: Vec<String>,
    },
    /// Report problems with the current configuration
    Check,
}

impl Commands {
    /// Title words joined back into one string, if any were given
    pub(crate) fn title(&self) -> Option<String> {
        match self {
            Commands::New { title } | Commands::Preview { title } if !title.is_empty() => {
                Some(title.join(" "))
            }
            _ => None,
        }
    }
}
