//! Opening the created folder in an editor or terminal

pub(crate) mod launcher;
pub(crate) mod terminal;

pub(crate) use launcher::LaunchTarget;
