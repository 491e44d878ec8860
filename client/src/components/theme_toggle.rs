//! Theme toggle button.
//!
//! Posts to `/theme` with the current path so the server can flip the
//! session preference and send the visitor back where they were.

use leptos::prelude::*;

use crate::state::theme::Theme;

#[component]
pub fn ThemeToggle(theme: Theme, return_to: &'static str) -> impl IntoView {
    view! {
        <form class="theme-toggle" method="post" action="/theme">
            <input type="hidden" name="return_to" value=return_to/>
            <button class="theme-toggle__button" type="submit" title="Toggle dark mode" aria-label="Toggle dark mode">
                {theme.toggle_icon()}
            </button>
        </form>
    }
}
