use std::fs;
use std::path::{Component, Path, PathBuf};

use chrono::NaiveDate;

use crate::consts::{MONTH_DAY_SEGMENT_FORMAT, YEAR_SEGMENT_FORMAT};
use crate::error::AppError;

/// Which dated segments go between the base directory and the title
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct FolderLayout {
    pub(crate) add_year: bool,
    pub(crate) add_month_day: bool,
}

/// Target folder as `[base, year?, month-day?, title]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedPath {
    base: PathBuf,
    segments: Vec<String>,
}

impl ResolvedPath {
    /// Assemble the segments for `title` under `base`, dated by `today`.
    ///
    /// `title` must already be processed and non-empty.
    pub(crate) fn resolve(
        base: PathBuf,
        layout: FolderLayout,
        title: &str,
        today: NaiveDate,
    ) -> Result<Self, AppError> {
        ensure_relative(title)?;

        let mut segments = Vec::with_capacity(3);
        if layout.add_year {
            segments.push(today.format(YEAR_SEGMENT_FORMAT).to_string());
        }
        if layout.add_month_day {
            segments.push(today.format(MONTH_DAY_SEGMENT_FORMAT).to_string());
        }
        segments.push(title.to_string());

        Ok(Self { base, segments })
    }

    pub(crate) fn base(&self) -> &Path {
        &self.base
    }

    /// Segments below the base, title last
    pub(crate) fn segments(&self) -> &[String] {
        &self.segments
    }

    pub(crate) fn to_path_buf(&self) -> PathBuf {
        let mut path = self.base.clone();
        path.extend(&self.segments);
        path
    }

    /// Create every missing directory along the path; existing ones are fine
    pub(crate) fn create(&self) -> Result<PathBuf, AppError> {
        let path = self.to_path_buf();
        fs::create_dir_all(&path).map_err(|source| AppError::DirectoryCreate {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "directory ready");
        Ok(path)
    }
}

// Unsanitized titles are used verbatim and must stay below the base directory
fn ensure_relative(title: &str) -> Result<(), AppError> {
    let escapes = Path::new(title)
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if escapes {
        return Err(AppError::TitleEscapesBase {
            title: title.to_string(),
        });
    }
    Ok(())
}
