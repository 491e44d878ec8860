//! HTML document shell and server-side rendering entry point.

use leptos::prelude::*;

use crate::state::theme::Theme;

/// Render a page body inside the site's HTML shell.
///
/// The body closure runs inside a fresh reactive owner so components may
/// create signals or read context while rendering.
pub fn render_document<F, V>(title: &str, theme: Theme, body: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView + 'static,
{
    let title = title.to_owned();
    let owner = Owner::new();
    let html = owner.with(move || {
        view! {
            <html lang="en" data-theme=theme.as_str()>
                <head>
                    <meta charset="utf-8"/>
                    <meta name="viewport" content="width=device-width, initial-scale=1"/>
                    <title>{title}</title>
                    <link rel="stylesheet" href="/static/app.css"/>
                    <script src="/static/app.js" defer="defer"></script>
                </head>
                <body class="site">{body()}</body>
            </html>
        }
        .to_html()
    });
    format!("<!DOCTYPE html>{html}")
}
