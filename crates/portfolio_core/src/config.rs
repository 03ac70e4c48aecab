//! Site configuration.
//!
//! # Responsibility
//! - Load the seed project list and UI knobs from JSON.
//! - Provide defaults for every field so an empty object is a valid config.
//!
//! # Invariants
//! - Filter tags always start with `"all"`.
//! - Without a `projects` entry the store starts with the two seed projects.

use crate::model::project::ProjectDraft;
use crate::notify::toast::{ToastTiming, DEFAULT_DISPLAY_MS, DEFAULT_EXIT_ANIMATION_MS};
use crate::render::container::FILTER_ALL;
use crate::viewport::Viewport;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Configuration load failure.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Portfolio page configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PortfolioConfig {
    /// Projects loaded into the store at startup, ids `1..=n`.
    pub projects: Vec<ProjectDraft>,
    /// Tags offered as filter buttons, after the implicit `"all"`.
    pub filter_tags: Vec<String>,
    pub toast_display_ms: u64,
    pub toast_exit_animation_ms: u64,
    pub viewport_width: u32,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            projects: default_seed_projects(),
            filter_tags: vec![
                "python".to_string(),
                "javascript".to_string(),
                "django".to_string(),
            ],
            toast_display_ms: DEFAULT_DISPLAY_MS,
            toast_exit_animation_ms: DEFAULT_EXIT_ANIMATION_MS,
            viewport_width: Viewport::default().width,
        }
    }
}

/// Projects shown when no config overrides `projects`.
pub fn default_seed_projects() -> Vec<ProjectDraft> {
    vec![
        ProjectDraft::new(
            "EduSync (CLG ERP)",
            "A full-featured College ERP platform built with Python and Django. Features include \
             user authentication (OTP Verification), Attendance management, and an admin dashboard.",
        )
        .with_image("/static/images/erp.png")
        .with_technologies_text("Python, Django, JavaScript, PostgreSQL, HTML, CSS")
        .with_github("https://github.com/Anujpandey12345/my_college_erp")
        .with_live("https://myerp-8shi.onrender.com"),
        ProjectDraft::new(
            "Authentication",
            "Built a powerful authentication system using Django authentication which provides \
             top-level security.",
        )
        .with_image("/static/images/auth.png")
        .with_technologies_text("Python, Django, SQLite")
        .with_github("https://github.com/Anujpandey12345/Authentication_site")
        .with_live(""),
    ]
}

impl PortfolioConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// Filter buttons in display order: `"all"` first, then configured tags
    /// lowercased with blanks and duplicates removed.
    pub fn filter_tokens(&self) -> Vec<String> {
        let mut tokens = vec![FILTER_ALL.to_string()];
        for tag in &self.filter_tags {
            let normalized = tag.trim().to_lowercase();
            if !normalized.is_empty() && !tokens.contains(&normalized) {
                tokens.push(normalized);
            }
        }
        tokens
    }

    pub fn toast_timing(&self) -> ToastTiming {
        ToastTiming {
            display_ms: self.toast_display_ms,
            exit_animation_ms: self.toast_exit_animation_ms,
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, PortfolioConfig};

    #[test]
    fn empty_object_yields_defaults() {
        let config = PortfolioConfig::from_json_str("{}").expect("empty config parses");
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(config.projects.len(), 2);
        assert_eq!(
            config.filter_tokens(),
            vec!["all", "python", "javascript", "django"]
        );
    }

    #[test]
    fn filter_tokens_dedupe_and_skip_blank() {
        let config = PortfolioConfig {
            filter_tags: vec!["Rust".into(), " ".into(), "rust".into(), "ALL".into()],
            ..PortfolioConfig::default()
        };
        assert_eq!(config.filter_tokens(), vec!["all", "rust"]);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = PortfolioConfig::from_json_str(r#"{"colour":"red"}"#)
            .expect_err("unknown fields must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
