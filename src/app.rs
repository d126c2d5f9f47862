//! Per-invocation pipeline and user-facing reporting
//!
//! `new` runs validating -> creating_directory -> launching; the first failure
//! ends the invocation and is reported once. A folder created before a failed
//! launch is left in place.

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{Local, NaiveDate};

use crate::cli::{Cli, Commands};
use crate::config::Preferences;
use crate::consts::TITLE_PLACEHOLDER;
use crate::core::{ResolvedPath, expand_tilde, process_title, validate_base_path};
use crate::error::AppError;
use crate::launch::LaunchTarget;
use crate::utils::parse_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Validating,
    CreatingDirectory,
    Launching,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Validating => "validating",
            Stage::CreatingDirectory => "creating_directory",
            Stage::Launching => "launching",
        })
    }
}

/// Everything `new` needs once validation has passed
#[derive(Debug)]
pub(crate) struct Plan {
    pub(crate) title: String,
    pub(crate) processed_title: String,
    pub(crate) resolved: ResolvedPath,
    pub(crate) target: LaunchTarget,
}

impl Plan {
    /// Validate the title and configuration; nothing on disk is touched
    pub(crate) fn prepare(
        prefs: &Preferences,
        title: &str,
        today: NaiveDate,
    ) -> Result<Self, AppError> {
        tracing::debug!(stage = %Stage::Validating, title);
        let processed_title = processed_title(prefs, title)?;
        let target = prefs.launch_target()?;

        let base = expand_tilde(&prefs.base_path);
        validate_base_path(&base)?;
        let resolved = ResolvedPath::resolve(base, prefs.layout(), &processed_title, today)?;

        Ok(Self {
            title: title.to_string(),
            processed_title,
            resolved,
            target,
        })
    }

    /// Create the folder, then open it
    pub(crate) fn execute(&self, json: bool) -> Result<PathBuf, AppError> {
        tracing::debug!(stage = %Stage::CreatingDirectory);
        let path = self.resolved.create()?;
        self.report_created(&path, json);

        tracing::debug!(stage = %Stage::Launching, program = self.target.program());
        self.target.launch(&path)?;
        Ok(path)
    }

    fn report_created(&self, path: &Path, json: bool) {
        if json {
            let value = serde_json::json!({
                "path": path.to_string_lossy(),
                "title": self.title,
                "processedTitle": self.processed_title,
                "segments": self.resolved.segments(),
                "program": self.target.program(),
            });
            println!("{value:#}");
            return;
        }
        if self.processed_title != self.title {
            eprintln!("Folder Created: Created as: {}", self.processed_title);
        } else {
            eprintln!("Folder Created: Created {}", path.display());
        }
        println!("{}", path.display());
    }
}

fn processed_title(prefs: &Preferences, title: &str) -> Result<String, AppError> {
    if title.trim().is_empty() {
        return Err(AppError::EmptyTitle);
    }
    let processed = process_title(title, prefs.title_options());
    if processed.is_empty() {
        return Err(AppError::InvalidTitleAfterSanitization);
    }
    Ok(processed)
}

pub(crate) fn run(cli: &Cli, prefs: &Preferences) -> Result<ExitCode, AppError> {
    let today = match cli.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => Local::now().date_naive(),
    };

    match &cli.command {
        Commands::New { .. } => {
            let title = cli.command.title().unwrap_or_default();
            let plan = Plan::prepare(prefs, &title, today)?;
            plan.execute(cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Preview { .. } => {
            handle_preview(prefs, cli.command.title().as_deref(), today, cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check => {
            let issues = collect_issues(prefs);
            if issues.is_empty() {
                println!("Configuration OK");
                return Ok(ExitCode::SUCCESS);
            }
            for issue in &issues {
                report_error(issue);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_preview(
    prefs: &Preferences,
    title: Option<&str>,
    today: NaiveDate,
    json: bool,
) -> Result<(), AppError> {
    let segment = match title {
        Some(title) => processed_title(prefs, title)?,
        None => TITLE_PLACEHOLDER.to_string(),
    };
    let shown = ResolvedPath::resolve(
        PathBuf::from(&prefs.base_path),
        prefs.layout(),
        &segment,
        today,
    )?;

    if json {
        let expanded = ResolvedPath::resolve(
            expand_tilde(&prefs.base_path),
            prefs.layout(),
            &segment,
            today,
        )?;
        let value = serde_json::json!({
            "base": expanded.base().to_string_lossy(),
            "display": shown.to_path_buf().to_string_lossy(),
            "path": expanded.to_path_buf().to_string_lossy(),
            "segments": shown.segments(),
        });
        println!("{value:#}");
    } else {
        println!("{}", shown.to_path_buf().display());
    }
    Ok(())
}

/// Every configuration problem `new` would run into, in pipeline order
pub(crate) fn collect_issues(prefs: &Preferences) -> Vec<AppError> {
    let mut issues = Vec::new();
    match prefs.launch_target() {
        Ok(target) => {
            if let Err(e) = target.locate() {
                issues.push(e.into());
            }
        }
        Err(e) => issues.push(e.into()),
    }
    if let Err(e) = validate_base_path(&expand_tilde(&prefs.base_path)) {
        issues.push(e);
    }
    issues
}

pub(crate) fn report_error(err: &AppError) {
    tracing::debug!(error = ?err, "invocation failed");
    eprintln!("{}: {err}", err.title());
}
