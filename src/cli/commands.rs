//! CLI subcommand definitions

use clap::Subcommand;

use super::args::{CoverArgs, GenerateArgs, PublishArgs, ReleasesArgs};

/// Main CLI commands
#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Generate today's demo and readme (default)
    Generate(GenerateArgs),
    /// Render the geometric cover image for a date
    Cover(CoverArgs),
    /// Copy a release into the pages tree and rebuild the catalog
    Publish(PublishArgs),
    /// List or search published releases
    Releases(ReleasesArgs),
}
