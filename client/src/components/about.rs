//! About section: bio paragraphs and skill tiles.

use leptos::prelude::*;

use crate::content::{ABOUT_PARAGRAPHS, SKILLS};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section section--alt">
            <div class="section__heading">
                <h2>"About Me"</h2>
                <p>"Passionate developer with expertise in modern web technologies"</p>
            </div>
            <div class="about">
                <div class="about__bio">
                    {ABOUT_PARAGRAPHS.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
                </div>
                <div class="about__skills">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skill">
                                    <span class="skill__icon" aria-hidden="true">{skill.icon}</span>
                                    <div>
                                        <h3 class="skill__name">{skill.name}</h3>
                                        <p class="skill__description">{skill.description}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
