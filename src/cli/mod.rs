pub(crate) mod args;
pub(crate) mod commands;

pub(crate) use args::{Cli, CoverArgs, GenerateArgs, PublishArgs, ReleasesArgs};
pub(crate) use commands::Commands;
