//! Admin and contact form input with required-field validation.
//!
//! DESIGN
//! ======
//! Forms hold raw submitted text so a failed submission can be re-rendered
//! exactly as typed. Validation only checks presence (plus the loose email
//! shape on the contact form); a field that is blank after trimming counts as
//! missing. Conversion into a draft happens only after validation passes.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::{BlogDraft, ProjectDraft};

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S+@\S+$").expect("static email pattern"));

// =============================================================================
// FIELD ERRORS
// =============================================================================

/// Inline validation messages keyed by form field name, in field order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: Vec<(&'static str, &'static str)>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: &'static str) {
        self.entries.push((field, message));
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, message)| *message)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }
}

fn require(errors: &mut FieldErrors, field: &'static str, value: &str, message: &'static str) {
    if value.trim().is_empty() {
        errors.push(field, message);
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Split a comma-separated technology list, dropping blank entries.
#[must_use]
pub fn parse_technologies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

// =============================================================================
// PROJECT FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectForm {
    pub title: String,
    pub description: String,
    /// Comma separated.
    pub technologies: String,
    pub github_url: String,
    pub demo_url: String,
}

impl ProjectForm {
    /// Assign a submitted text field by its form name. Unknown names are ignored.
    pub fn set(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "description" => self.description = value,
            "technologies" => self.technologies = value,
            "githubUrl" => self.github_url = value,
            "demoUrl" => self.demo_url = value,
            _ => {}
        }
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "title", &self.title, "Title is required");
        require(&mut errors, "description", &self.description, "Description is required");
        require(&mut errors, "technologies", &self.technologies, "Technologies are required");
        errors
    }

    #[must_use]
    pub fn into_draft(self, image_url: String) -> ProjectDraft {
        ProjectDraft {
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
            image_url,
            github_url: optional(&self.github_url),
            demo_url: optional(&self.demo_url),
            technologies: parse_technologies(&self.technologies),
        }
    }
}

// =============================================================================
// BLOG FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlogForm {
    pub title: String,
    pub excerpt: String,
    pub content: String,
}

impl BlogForm {
    pub fn set(&mut self, name: &str, value: String) {
        match name {
            "title" => self.title = value,
            "excerpt" => self.excerpt = value,
            "content" => self.content = value,
            _ => {}
        }
    }

    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "title", &self.title, "Title is required");
        require(&mut errors, "excerpt", &self.excerpt, "Excerpt is required");
        require(&mut errors, "content", &self.content, "Content is required");
        errors
    }

    #[must_use]
    pub fn into_draft(self, image_url: String) -> BlogDraft {
        BlogDraft {
            title: self.title.trim().to_owned(),
            content: self.content,
            excerpt: self.excerpt.trim().to_owned(),
            image_url,
        }
    }
}

// =============================================================================
// CONTACT FORM
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        require(&mut errors, "name", &self.name, "Name is required");
        if self.email.trim().is_empty() {
            errors.push("email", "Email is required");
        } else if !EMAIL_PATTERN.is_match(self.email.trim()) {
            errors.push("email", "Invalid email address");
        }
        require(&mut errors, "subject", &self.subject, "Subject is required");
        require(&mut errors, "message", &self.message, "Message is required");
        errors
    }
}

/// A form's input together with the inline errors from its last submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState<F> {
    pub form: F,
    pub errors: FieldErrors,
}

impl<F: Default> FormState<F> {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

impl<F> FormState<F> {
    #[must_use]
    pub fn rejected(form: F, errors: FieldErrors) -> Self {
        Self { form, errors }
    }
}
