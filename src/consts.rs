/// Standard date format accepted by `--date`: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the year path segment: "2025"
pub(crate) const YEAR_SEGMENT_FORMAT: &str = "%Y";

/// Format of the month-day path segment: "01-15"
pub(crate) const MONTH_DAY_SEGMENT_FORMAT: &str = "%m-%d";

/// Maximum number of underscore-delimited words kept when truncating
pub(crate) const MAX_TITLE_WORDS: usize = 10;

/// Maximum number of characters kept when truncating
pub(crate) const MAX_TITLE_CHARS: usize = 50;

/// Characters that must never appear in a program name
pub(crate) const FORBIDDEN_PROGRAM_CHARS: &[char] = &[
    ';', '&', '|', '`', '$', '(', ')', '{', '}', '[', ']', '<', '>', '*', '?', '~', '!', '#',
    '\n', '\r',
];

/// Placeholder substituted with the created folder in terminal templates
pub(crate) const PATH_PLACEHOLDER: &str = "{path}";

/// Title segment shown by `preview` when no title is given
pub(crate) const TITLE_PLACEHOLDER: &str = "[TITLE]";

pub(crate) const DEFAULT_BASE_PATH: &str = "~/playground";
pub(crate) const DEFAULT_PROGRAM: &str = "code";
