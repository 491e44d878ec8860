//! Site header with section navigation and the theme toggle.
//!
//! The mobile menu is a `<details>` disclosure so it opens and closes
//! without script.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::{NAV_ITEMS, OWNER_NAME};
use crate::state::theme::Theme;

#[component]
pub fn Header(theme: Theme) -> impl IntoView {
    let links = || {
        NAV_ITEMS
            .iter()
            .map(|item| view! { <a class="site-header__link" href=item.href>{item.name}</a> })
            .collect_view()
    };

    view! {
        <header class="site-header">
            <nav class="site-header__bar">
                <a class="site-header__brand" href="#home">{OWNER_NAME}</a>
                <div class="site-header__links">{links()}</div>
                <ThemeToggle theme=theme return_to="/"/>
                <details class="site-header__menu">
                    <summary class="site-header__menu-button" aria-label="Toggle menu">"☰"</summary>
                    <div class="site-header__menu-links">{links()}</div>
                </details>
            </nav>
        </header>
    }
}
