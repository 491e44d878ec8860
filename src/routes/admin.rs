//! Admin routes: dashboard and the two add forms.
//!
//! DESIGN
//! ======
//! Forms post `multipart/form-data` back to their own path. A successful
//! submission redirects (post/redirect/get) with the success notice in the
//! flash cookie, so a reload never submits twice and the form comes back
//! empty. Every rejected submission re-renders the form with its input.

use axum::extract::{Multipart, State};
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use client::document::render_document;
use client::pages::add_blog::AddBlog;
use client::pages::add_project::AddProject;
use client::pages::admin_layout::{AdminLayout, AdminNav};
use client::pages::dashboard::Dashboard;
use client::state::forms::{BlogForm, FormState, ProjectForm};
use client::state::notice::Notice;
use client::state::theme::Theme;
use leptos::prelude::*;

use crate::media::ImageFile;
use crate::routes::session;
use crate::services::submission::{self, Submission, SubmissionForm};
use crate::state::AppState;

/// Name of the file input on both admin forms.
pub const IMAGE_FIELD: &str = "image";

fn admin_title(active: AdminNav) -> String {
    format!("Admin | {}", active.label())
}

// =============================================================================
// PAGES
// =============================================================================

/// `GET /admin`: overview of both collections.
pub async fn dashboard(State(state): State<AppState>, jar: CookieJar) -> Response {
    let theme = session::theme(&jar);
    let (jar, notice) = session::take_notice(jar);
    let projects = state.projects.snapshot();
    let blogs = state.blogs.snapshot();
    let html = render_document(&admin_title(AdminNav::Dashboard), theme, move || {
        view! {
            <AdminLayout active=AdminNav::Dashboard theme=theme notice=notice>
                <Dashboard projects=projects blogs=blogs/>
            </AdminLayout>
        }
    });
    (jar, Html(html)).into_response()
}

fn render_project_form(theme: Theme, form: FormState<ProjectForm>, notice: Option<Notice>) -> String {
    render_document(&admin_title(AdminNav::AddProject), theme, move || {
        view! {
            <AdminLayout active=AdminNav::AddProject theme=theme notice=notice>
                <AddProject state=form/>
            </AdminLayout>
        }
    })
}

fn render_blog_form(theme: Theme, form: FormState<BlogForm>, notice: Option<Notice>) -> String {
    render_document(&admin_title(AdminNav::AddBlog), theme, move || {
        view! {
            <AdminLayout active=AdminNav::AddBlog theme=theme notice=notice>
                <AddBlog state=form/>
            </AdminLayout>
        }
    })
}

/// `GET /admin/add-project`
pub async fn add_project_page(jar: CookieJar) -> Response {
    let theme = session::theme(&jar);
    let (jar, notice) = session::take_notice(jar);
    (jar, Html(render_project_form(theme, FormState::empty(), notice))).into_response()
}

/// `GET /admin/add-blog`
pub async fn add_blog_page(jar: CookieJar) -> Response {
    let theme = session::theme(&jar);
    let (jar, notice) = session::take_notice(jar);
    (jar, Html(render_blog_form(theme, FormState::empty(), notice))).into_response()
}

// =============================================================================
// SUBMISSIONS
// =============================================================================

/// `POST /admin/add-project`
pub async fn add_project(State(state): State<AppState>, jar: CookieJar, multipart: Multipart) -> Response {
    let (form, image) = match read_submission::<ProjectForm>(multipart).await {
        Ok(parsed) => parsed,
        Err(e) => return e.into_response(),
    };
    let theme = session::theme(&jar);
    let outcome = submission::submit(&state.projects, state.media.as_ref(), form, image).await;
    respond(jar, AdminNav::AddProject, outcome, |form, notice| render_project_form(theme, form, notice))
}

/// `POST /admin/add-blog`
pub async fn add_blog(State(state): State<AppState>, jar: CookieJar, multipart: Multipart) -> Response {
    let (form, image) = match read_submission::<BlogForm>(multipart).await {
        Ok(parsed) => parsed,
        Err(e) => return e.into_response(),
    };
    let theme = session::theme(&jar);
    let outcome = submission::submit(&state.blogs, state.media.as_ref(), form, image).await;
    respond(jar, AdminNav::AddBlog, outcome, |form, notice| render_blog_form(theme, form, notice))
}

fn respond<F>(
    jar: CookieJar,
    page: AdminNav,
    outcome: Submission<F>,
    render: impl FnOnce(FormState<F>, Option<Notice>) -> String,
) -> Response {
    match outcome {
        Submission::Added { notice, .. } => {
            let jar = session::with_notice(jar, notice);
            (jar, Redirect::to(page.href())).into_response()
        }
        Submission::Rejected { state, notice } => {
            let status = if state.errors.is_empty() { StatusCode::OK } else { StatusCode::UNPROCESSABLE_ENTITY };
            (status, Html(render(state, notice))).into_response()
        }
    }
}

/// Collect text fields into the form and the file input into an image.
///
/// An empty file input (no name or no bytes) counts as no image.
async fn read_submission<F>(mut multipart: Multipart) -> Result<(F, Option<ImageFile>), MultipartError>
where
    F: SubmissionForm + Default,
{
    let mut form = F::default();
    let mut image = None;
    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_owned();
            let content_type = field.content_type().map(str::to_owned);
            let bytes = field.bytes().await?;
            if !file_name.is_empty() && !bytes.is_empty() {
                image = Some(ImageFile { file_name, content_type, bytes: bytes.to_vec() });
            }
        } else {
            let value = field.text().await?;
            form.set_field(&name, value);
        }
    }
    Ok((form, image))
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
