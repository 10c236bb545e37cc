use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors: these abort the run with a non-zero exit status.
#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid sequence number \"{input}\" (expected a positive integer)")]
    InvalidSeq { input: String },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Missing release artifact: {}", path.display())]
    MissingArtifact { path: PathBuf },

    #[error("Failed to serialize {what}: {source}")]
    Serialize {
        what: &'static str,
        source: serde_json::Error,
    },

    #[error("Failed to render {}: {source}", path.display())]
    Render {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("{0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Remote generation failures. Always recovered by substituting the fallback.
#[derive(Debug, Error)]
pub(crate) enum GenerateError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("API error: {status} {body}")]
    Status { status: u16, body: String },

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("malformed completion response: {0}")]
    Envelope(serde_json::Error),

    #[error("malformed payload JSON: {0}")]
    Payload(serde_json::Error),

    #[error("payload is not a JSON object")]
    NotAnObject,
}

impl From<ureq::Error> for GenerateError {
    fn from(e: ureq::Error) -> Self {
        GenerateError::Transport(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_seq() {
        let e = AppError::InvalidSeq {
            input: "x1".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid sequence number "x1" (expected a positive integer)"#
        );
    }

    #[test]
    fn app_error_display_missing_artifact() {
        let e = AppError::MissingArtifact {
            path: PathBuf::from("dist/demo-20250816.html"),
        };
        assert_eq!(
            e.to_string(),
            "Missing release artifact: dist/demo-20250816.html"
        );
    }

    #[test]
    fn app_error_display_write_includes_path() {
        let e = AppError::Write {
            path: PathBuf::from("dist/readme-20250816.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = e.to_string();
        assert!(msg.starts_with("Failed to write dist/readme-20250816.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn generate_error_status() {
        let e = GenerateError::Status {
            status: 429,
            body: "rate limited".to_string(),
        };
        assert_eq!(e.to_string(), "API error: 429 rate limited");
    }

    #[test]
    fn generate_error_not_an_object() {
        assert_eq!(
            GenerateError::NotAnObject.to_string(),
            "payload is not a JSON object"
        );
    }

    #[test]
    fn app_error_from_config_error() {
        let cfg = ConfigError::Read {
            path: PathBuf::from("/nope/config.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        let app: AppError = cfg.into();
        assert!(app.to_string().starts_with("Failed to read config /nope/config.toml"));
    }
}
