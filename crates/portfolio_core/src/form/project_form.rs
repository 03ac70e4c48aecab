//! "Add project" form.

use crate::form::{finish, FieldError, FormValidationError};
use crate::model::project::{parse_technologies, ProjectDraft};

/// Raw values of the add-project form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    pub image: String,
    /// Comma-separated technology names.
    pub technologies: String,
    pub github: String,
    pub live: String,
}

impl ProjectForm {
    /// Checks required fields.
    ///
    /// # Errors
    /// - `title` empty after trim: "Project title is required".
    /// - `description` empty after trim: "Project description is required".
    pub fn validate(&self) -> Result<(), FormValidationError> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push(FieldError {
                field: "title",
                message: "Project title is required".to_string(),
            });
        }
        if self.description.trim().is_empty() {
            errors.push(FieldError {
                field: "description",
                message: "Project description is required".to_string(),
            });
        }
        finish(errors)
    }

    /// Validates and builds a store draft from the current field values.
    pub fn to_draft(&self) -> Result<ProjectDraft, FormValidationError> {
        self.validate()?;
        Ok(ProjectDraft {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image: non_blank(&self.image),
            technologies: parse_technologies(&self.technologies),
            github: non_blank(&self.github),
            live: non_blank(&self.live),
        })
    }

    /// Clears every field; done after a successful save.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
