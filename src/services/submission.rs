//! Admin form submission: validate, upload the image, write one record.
//!
//! DESIGN
//! ======
//! Steps run strictly in order and stop at the first failure:
//!
//! 1. Required-field validation. Failures re-render the form with inline
//!    errors.
//! 2. Image presence. A missing image re-renders with an error notice.
//! 3. Image upload, then exactly one `Repository::add`. Either failing
//!    re-renders with the failure notice; nothing is retried.
//!
//! Steps 1 and 2 never touch the media host or the store.

use client::model::{BlogPost, Project};
use client::state::forms::{BlogForm, FieldErrors, FormState, ProjectForm};
use client::state::notice::Notice;
use tracing::{error, info};

use crate::media::{ImageFile, MediaHost};
use crate::repo::{Record, Repository};

/// An admin form that produces one record when submitted.
pub trait SubmissionForm: Sized {
    type Record: Record;

    const ADDED: Notice;
    const FAILED: Notice;
    const IMAGE_MISSING: Notice;

    /// Assign one submitted text field by its form name.
    fn set_field(&mut self, name: &str, value: String);

    fn validate(&self) -> FieldErrors;

    fn into_draft(self, image_url: String) -> <Self::Record as Record>::Draft;
}

impl SubmissionForm for ProjectForm {
    type Record = Project;

    const ADDED: Notice = Notice::ProjectAdded;
    const FAILED: Notice = Notice::ProjectFailed;
    const IMAGE_MISSING: Notice = Notice::ProjectImageMissing;

    fn set_field(&mut self, name: &str, value: String) {
        self.set(name, value);
    }

    fn validate(&self) -> FieldErrors {
        ProjectForm::validate(self)
    }

    fn into_draft(self, image_url: String) -> <Project as Record>::Draft {
        ProjectForm::into_draft(self, image_url)
    }
}

impl SubmissionForm for BlogForm {
    type Record = BlogPost;

    const ADDED: Notice = Notice::BlogAdded;
    const FAILED: Notice = Notice::BlogFailed;
    const IMAGE_MISSING: Notice = Notice::BlogImageMissing;

    fn set_field(&mut self, name: &str, value: String) {
        self.set(name, value);
    }

    fn validate(&self) -> FieldErrors {
        BlogForm::validate(self)
    }

    fn into_draft(self, image_url: String) -> <BlogPost as Record>::Draft {
        BlogForm::into_draft(self, image_url)
    }
}

/// Result of one submission.
#[derive(Debug, PartialEq, Eq)]
pub enum Submission<F> {
    /// Written. Redirect with the notice so the form comes back empty.
    Added { id: String, notice: Notice },
    /// Nothing written. Re-render the form as submitted.
    Rejected { state: FormState<F>, notice: Option<Notice> },
}

/// Run one admin form submission end to end.
pub async fn submit<F>(
    repo: &Repository<F::Record>,
    media: &dyn MediaHost,
    form: F,
    image: Option<ImageFile>,
) -> Submission<F>
where
    F: SubmissionForm + Clone,
{
    let collection = repo.collection();

    let errors = form.validate();
    if !errors.is_empty() {
        info!(%collection, fields = errors.len(), "submission rejected by validation");
        return Submission::Rejected { state: FormState::rejected(form, errors), notice: None };
    }

    let Some(image) = image else {
        return Submission::Rejected { state: FormState::rejected(form, FieldErrors::new()), notice: Some(F::IMAGE_MISSING) };
    };

    let failed = |form: F| Submission::Rejected { state: FormState::rejected(form, FieldErrors::new()), notice: Some(F::FAILED) };

    let image_url = match media.upload(image).await {
        Ok(url) => url,
        Err(e) => {
            error!(%collection, error = %e, "image upload failed");
            return failed(form);
        }
    };

    match repo.add(form.clone().into_draft(image_url)).await {
        Ok(id) => Submission::Added { id, notice: F::ADDED },
        Err(e) => {
            error!(%collection, error = %e, "record write failed");
            failed(form)
        }
    }
}

#[cfg(test)]
#[path = "submission_test.rs"]
mod tests;
