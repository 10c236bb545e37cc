/// Date stamp format used in artifact filenames: "20250816"
pub(crate) const STAMP_FORMAT: &str = "%Y%m%d";

pub(crate) const DEFAULT_MODEL: &str = "gpt-4o";

pub(crate) const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Global timeout for the completion request, in seconds
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 120;

pub(crate) const DEFAULT_OUT_DIR: &str = "dist";
pub(crate) const DEFAULT_COMMITS_PATH: &str = "tmp/commits.txt";
pub(crate) const DEFAULT_INSPIRATIONS_PATH: &str = "tmp/inspirations.txt";
pub(crate) const DEFAULT_SYSTEM_PROMPT_PATH: &str = "prompts/system.md";
pub(crate) const DEFAULT_PAGES_ROOT: &str = "gh-pages";

pub(crate) const ENV_API_KEY: &str = "OPENAI_API_KEY";
pub(crate) const ENV_MODEL: &str = "OPENAI_MODEL";
pub(crate) const ENV_ENDPOINT: &str = "OPENAI_API_URL";

/// Title used when a generated title is missing or blank
pub(crate) const UNTITLED: &str = "Untitled";

pub(crate) const TITLE_MAX_CHARS: usize = 80;
