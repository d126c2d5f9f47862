pub(crate) mod date;
pub(crate) mod logging;

pub(crate) use date::parse_date;
