//! Public site routes: home page, contact form, theme toggle.

use axum::Form;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use client::content::OWNER_NAME;
use client::document::render_document;
use client::pages::home::{HomePage, HomeProps};
use client::state::forms::{ContactForm, FieldErrors, FormState};
use client::state::notice::Notice;
use client::state::theme::Theme;
use leptos::prelude::*;
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::error;

use crate::routes::session;
use crate::state::AppState;

fn home_title() -> String {
    format!("{OWNER_NAME} | Portfolio")
}

/// Render the home page from the current snapshots.
pub(crate) fn render_home(state: &AppState, theme: Theme, contact: FormState<ContactForm>, notice: Option<Notice>) -> String {
    let props = HomeProps {
        theme,
        projects: state.projects.snapshot(),
        blogs: state.blogs.snapshot(),
        contact,
        notice,
        year: OffsetDateTime::now_utc().year(),
    };
    render_document(&home_title(), theme, move || view! { <HomePage props=props/> })
}

/// `GET /`: the portfolio.
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> Response {
    let theme = session::theme(&jar);
    let (jar, notice) = session::take_notice(jar);
    let html = render_home(&state, theme, FormState::empty(), notice);
    (jar, Html(html)).into_response()
}

/// `POST /contact`: validate and deliver a contact message.
pub async fn contact(State(state): State<AppState>, jar: CookieJar, Form(form): Form<ContactForm>) -> Response {
    let theme = session::theme(&jar);

    let errors = form.validate();
    if !errors.is_empty() {
        let html = render_home(&state, theme, FormState::rejected(form, errors), None);
        return (StatusCode::UNPROCESSABLE_ENTITY, Html(html)).into_response();
    }

    match state.contact.deliver(&form).await {
        Ok(()) => {
            let jar = session::with_notice(jar, Notice::ContactSent);
            (jar, Redirect::to("/#contact")).into_response()
        }
        Err(e) => {
            error!(error = %e, "contact delivery failed");
            let state_form = FormState::rejected(form, FieldErrors::new());
            let html = render_home(&state, theme, state_form, Some(Notice::ContactFailed));
            (StatusCode::BAD_GATEWAY, Html(html)).into_response()
        }
    }
}

#[derive(Deserialize)]
pub struct ThemeToggleForm {
    return_to: Option<String>,
}

/// `POST /theme`: flip the session theme and go back.
pub async fn toggle_theme(jar: CookieJar, Form(body): Form<ThemeToggleForm>) -> Response {
    let next = session::theme(&jar).toggle();
    let jar = session::with_theme(jar, next);
    let target = session::safe_return_path(body.return_to.as_deref()).to_owned();
    (jar, Redirect::to(&target)).into_response()
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
