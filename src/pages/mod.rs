//! Static pages tree: per-release aliases, manifest and catalog
//!
//! Layout under the pages root:
//! `releases/date/<DATE>/`, `releases/seq/<SEQ>/`, `latest/`,
//! `releases/manifest.json` and the catalog `index.html`.

mod catalog;
mod manifest;
mod publish;
mod search;

pub(crate) use manifest::{Manifest, ManifestEntry};
pub(crate) use publish::{PublishRequest, parse_seq, publish};
pub(crate) use search::search_ranked;
