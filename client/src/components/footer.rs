//! Site footer.

use leptos::prelude::*;

use crate::content::{FOOTER_LINKS, FOOTER_LINKS_EXTERNAL, OWNER_NAME};

#[component]
pub fn Footer(year: i32) -> impl IntoView {
    let copyright = format!("© {year} {OWNER_NAME}. Made with ♥ in Pakistan");
    view! {
        <footer class="site-footer">
            <div class="site-footer__social">
                {FOOTER_LINKS_EXTERNAL
                    .iter()
                    .map(|link| {
                        view! {
                            <a href=link.href target="_blank" rel="noopener noreferrer" aria-label=link.label>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <nav class="site-footer__links">
                {FOOTER_LINKS.iter().map(|item| view! { <a href=item.href>{item.name}</a> }).collect_view()}
            </nav>
            <p class="site-footer__copyright">{copyright}</p>
        </footer>
    }
}
