//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered into cards.
//! - Normalize caller input (technology text, optional links, image fallback).
//!
//! # Invariants
//! - `technologies` holds trimmed, non-empty tokens in input order.
//! - Duplicate technology tokens are preserved.
//! - Empty link strings are stored as `None`.

use serde::{Deserialize, Deserializer, Serialize};

/// Store-assigned project identifier.
pub type ProjectId = u32;

const PLACEHOLDER_IMAGE_BASE: &str = "https://via.placeholder.com/400x250/6366f1/ffffff?text=";

/// Canonical portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Image URL; a title-derived placeholder when the caller gave none.
    pub image: String,
    pub technologies: Vec<String>,
    /// Source-code link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Live-demo link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live: Option<String>,
}

impl Project {
    /// Applies a shallow merge: fields absent from `patch` are preserved.
    ///
    /// The id is never touched.
    pub fn apply_patch(&mut self, patch: &ProjectPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(image) = &patch.image {
            self.image = image.clone();
        }
        if let Some(technologies) = &patch.technologies {
            self.technologies = clean_technologies(technologies.iter().map(String::as_str));
        }
        if let Some(github) = &patch.github {
            self.github = normalize_link(github);
        }
        if let Some(live) = &patch.live {
            self.live = normalize_link(live);
        }
    }

    /// Lowercased technology text used for tag filtering.
    ///
    /// Tokens are concatenated without a separator, the same text a reader
    /// gets from the adjacent tag elements of a rendered card.
    pub fn technology_text(&self) -> String {
        self.technologies.concat().to_lowercase()
    }
}

/// Caller-supplied fields for a new project.
///
/// The store trusts this input: required-field checks belong to the form
/// layer (`crate::form::project_form`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Accepts either a list or one comma-separated string.
    #[serde(default, deserialize_with = "deserialize_technologies")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Sets technologies from comma-separated form text.
    pub fn with_technologies_text(mut self, text: &str) -> Self {
        self.technologies = parse_technologies(text);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn with_github(mut self, github: impl Into<String>) -> Self {
        self.github = Some(github.into());
        self
    }

    pub fn with_live(mut self, live: impl Into<String>) -> Self {
        self.live = Some(live.into());
        self
    }

    /// Builds the stored record under `id`.
    ///
    /// # Invariants
    /// - Blank image falls back to `placeholder_image_url(title)`.
    /// - Technology tokens are trimmed; empty ones are dropped.
    /// - Blank links become `None`.
    pub fn into_project(self, id: ProjectId) -> Project {
        let image = match self.image.as_deref().map(str::trim) {
            Some(image) if !image.is_empty() => image.to_string(),
            _ => placeholder_image_url(&self.title),
        };

        Project {
            id,
            technologies: clean_technologies(self.technologies.iter().map(String::as_str)),
            github: self.github.as_deref().and_then(normalize_link),
            live: self.live.as_deref().and_then(normalize_link),
            image,
            title: self.title,
            description: self.description,
        }
    }
}

/// Partial update payload; `None` means "keep the current value".
///
/// `Some("")` for `github`/`live` clears the link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub technologies: Option<Vec<String>>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub live: Option<String>,
}

impl ProjectPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Returns whether the patch carries no field at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Splits comma-separated technology text into trimmed, non-empty tokens.
pub fn parse_technologies(text: &str) -> Vec<String> {
    clean_technologies(text.split(','))
}

/// Placeholder image URL derived from a project title.
pub fn placeholder_image_url(title: &str) -> String {
    format!(
        "{PLACEHOLDER_IMAGE_BASE}{}",
        urlencoding::encode(title.trim())
    )
}

fn clean_technologies<'a>(tokens: impl Iterator<Item = &'a str>) -> Vec<String> {
    tokens
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_link(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TechnologiesInput {
    Text(String),
    List(Vec<String>),
}

fn deserialize_technologies<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match TechnologiesInput::deserialize(deserializer)? {
        TechnologiesInput::Text(text) => parse_technologies(&text),
        TechnologiesInput::List(list) => clean_technologies(list.iter().map(String::as_str)),
    })
}
