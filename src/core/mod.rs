//! Pure pipeline pieces: path expansion, title processing, validation and
//! folder resolution.

pub(crate) mod expand;
pub(crate) mod folder;
pub(crate) mod title;
pub(crate) mod validate;

pub(crate) use expand::expand_tilde;
pub(crate) use folder::{FolderLayout, ResolvedPath};
pub(crate) use title::{TitleOptions, process_title};
pub(crate) use validate::{validate_base_path, validate_program_name};
