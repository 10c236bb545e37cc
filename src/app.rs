use std::path::PathBuf;

use crate::cli::{Cli, CoverArgs, GenerateArgs, PublishArgs, ReleasesArgs};
use crate::consts::{
    DEFAULT_COMMITS_PATH, DEFAULT_INSPIRATIONS_PATH, DEFAULT_OUT_DIR, DEFAULT_PAGES_ROOT,
    DEFAULT_SYSTEM_PROMPT_PATH,
};
use crate::error::AppError;
use crate::generate::{ChatCompletion, GeneratorSettings, PromptInputs, generate};
use crate::output::{ReleaseSummary, print_releases_table, releases_json, summary_json};
use crate::pages::{Manifest, PublishRequest, parse_seq, publish, search_ranked};
use crate::release::{Release, write_cover, write_release};
use crate::utils::{date_stamp, parse_date, resolve_stamp};

fn path_or(value: &Option<PathBuf>, default: &str) -> PathBuf {
    value.clone().unwrap_or_else(|| PathBuf::from(default))
}

/// Generate one release: load context, call the model (or fall back),
/// sanitize, write both artifacts, print the summary.
pub(crate) fn handle_generate(
    args: &GenerateArgs,
    settings: &GeneratorSettings,
) -> Result<ReleaseSummary, AppError> {
    let stamp = resolve_stamp(args.date.as_deref())?;
    let out_dir = path_or(&args.out_dir, DEFAULT_OUT_DIR);

    let inputs = PromptInputs::load(
        &path_or(&args.commits, DEFAULT_COMMITS_PATH),
        &path_or(&args.inspirations, DEFAULT_INSPIRATIONS_PATH),
        &path_or(&args.system_prompt, DEFAULT_SYSTEM_PROMPT_PATH),
    );

    let client = settings.client();
    let result = generate(
        client.as_ref().map(|c| c as &dyn ChatCompletion),
        &settings.model,
        &inputs,
    );

    let release = Release::from_generation(result);
    write_release(&out_dir, &stamp, &release)?;

    let summary = ReleaseSummary {
        date: stamp,
        title: release.title,
    };
    println!("{}", summary_json(&summary)?);
    Ok(summary)
}

pub(crate) fn handle_cover(args: &CoverArgs) -> Result<(), AppError> {
    let stamp = date_stamp(parse_date(&args.date)?);
    let path = write_cover(&path_or(&args.out_dir, DEFAULT_OUT_DIR), &stamp)?;
    println!("{}", path.display());
    Ok(())
}

pub(crate) fn handle_publish(args: &PublishArgs) -> Result<(), AppError> {
    let request = PublishRequest {
        stamp: date_stamp(parse_date(&args.date)?),
        seq: parse_seq(&args.seq)?,
        title: args.title.clone(),
        dist: path_or(&args.dist, DEFAULT_OUT_DIR),
        pages_root: path_or(&args.pages_root, DEFAULT_PAGES_ROOT),
    };

    let outcome = publish(&request)?;
    tracing::debug!(
        desc = %outcome.entry.desc,
        cover = outcome.cover_copied,
        "manifest updated"
    );
    println!("Pages updated for {} seq {}", request.stamp, request.seq);
    Ok(())
}

pub(crate) fn handle_releases(args: &ReleasesArgs, cli: &Cli) -> Result<(), AppError> {
    let pages_root = path_or(&args.pages_root, DEFAULT_PAGES_ROOT);
    if !Manifest::path(&pages_root).is_file() && !cli.json {
        println!("No releases found.");
        return Ok(());
    }

    let manifest = Manifest::load(&pages_root);
    let hits = search_ranked(&manifest.entries, args.query.as_deref().unwrap_or(""));

    if cli.json {
        println!("{}", releases_json(&hits)?);
    } else if hits.is_empty() {
        println!("No releases match.");
    } else {
        print_releases_table(&hits, cli.use_color());
    }
    Ok(())
}
