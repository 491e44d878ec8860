//! Browser-session cookies: theme preference and one-shot notices.
//!
//! Both cookies are session cookies (no `Max-Age`), so the theme lasts only
//! as long as the browser session. The notice cookie is cleared by the first
//! page that renders it.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::state::notice::Notice;
use client::state::theme::Theme;
use time::Duration;

pub const THEME_COOKIE: &str = "folio_theme";
pub const NOTICE_COOKIE: &str = "folio_toast";

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// The session's theme; unknown or missing values resolve to light.
#[must_use]
pub fn theme(jar: &CookieJar) -> Theme {
    Theme::parse(jar.get(THEME_COOKIE).map(Cookie::value))
}

#[must_use]
pub fn with_theme(jar: CookieJar, theme: Theme) -> CookieJar {
    jar.add(session_cookie(THEME_COOKIE, theme.as_str().to_owned()))
}

/// Queue a notice for the next rendered page.
#[must_use]
pub fn with_notice(jar: CookieJar, notice: Notice) -> CookieJar {
    jar.add(session_cookie(NOTICE_COOKIE, notice.slug().to_owned()))
}

/// Read and clear the pending notice, if any.
#[must_use]
pub fn take_notice(jar: CookieJar) -> (CookieJar, Option<Notice>) {
    let Some(cookie) = jar.get(NOTICE_COOKIE) else {
        return (jar, None);
    };
    let notice = Notice::from_slug(cookie.value());
    let mut expired = session_cookie(NOTICE_COOKIE, String::new());
    expired.set_max_age(Duration::ZERO);
    (jar.add(expired), notice)
}

/// Only same-site absolute paths are followed; anything else goes home.
#[must_use]
pub fn safe_return_path(raw: Option<&str>) -> &str {
    match raw {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => path,
        _ => "/",
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
