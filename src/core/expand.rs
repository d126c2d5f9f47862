use std::path::{Path, PathBuf};

/// Replace a leading `~` with the current user's home directory
pub(crate) fn expand_tilde(path: &str) -> PathBuf {
    expand_tilde_with(path, dirs::home_dir().as_deref())
}

pub(crate) fn expand_tilde_with(path: &str, home: Option<&Path>) -> PathBuf {
    let (Some(rest), Some(home)) = (path.strip_prefix('~'), home) else {
        return PathBuf::from(path);
    };
    // "~/a" and "~a" both land under home; a bare "~" is home itself
    let rest = rest.trim_start_matches(['/', '\\']);
    if rest.is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    }
}
