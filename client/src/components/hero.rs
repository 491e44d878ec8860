//! Landing hero.

use leptos::prelude::*;

use crate::content::{GITHUB_URL, HERO_PITCH, LINKEDIN_URL, OWNER_NAME, OWNER_ROLE};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="hero">
            <div class="hero__content">
                <h1 class="hero__title">
                    "Hi, I'm "
                    <span class="hero__name">{OWNER_NAME}</span>
                </h1>
                <p class="hero__role">{OWNER_ROLE}</p>
                <p class="hero__pitch">{HERO_PITCH}</p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="#projects">"View My Work →"</a>
                    <a class="btn btn--outline" href="#contact">"Download CV"</a>
                </div>
                <div class="hero__social">
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" aria-label="GitHub">"GitHub"</a>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">"LinkedIn"</a>
                </div>
            </div>
        </section>
    }
}
