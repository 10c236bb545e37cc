pub(crate) mod date;
pub(crate) mod fs;
pub(crate) mod lenient;
pub(crate) mod logging;

pub(crate) use date::{date_stamp, parse_date, resolve_stamp};
pub(crate) use fs::{copy_file, ensure_dir, read_or_empty, write_file};
pub(crate) use lenient::lenient_string;
pub(crate) use logging::init_logging;
