//! Projects section listing the `projects` snapshot newest first.

use leptos::prelude::*;

use crate::model::Project;
use crate::state::snapshot::Snapshot;

pub const PROJECTS_EMPTY_MESSAGE: &str = "No projects available yet. Check back soon!";

#[component]
pub fn ProjectsSection(snapshot: Snapshot<Project>) -> impl IntoView {
    let body = if snapshot.loading {
        view! { <p class="section__loading">"Loading projects..."</p> }.into_any()
    } else if snapshot.is_empty_state() {
        view! { <p class="section__empty">{PROJECTS_EMPTY_MESSAGE}</p> }.into_any()
    } else {
        view! {
            <div class="cards">
                {snapshot.items.into_iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="projects" class="section section--alt">
            <div class="section__heading">
                <h2>"My Projects"</h2>
                <p>"A showcase of my latest work and creative solutions"</p>
            </div>
            {body}
        </section>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let Project { id, title, description, image_url, github_url, demo_url, technologies, .. } = project;
    let alt = title.clone();
    view! {
        <article class="card project-card" data-id=id>
            <div class="card__media">
                <img src=image_url alt=alt loading="lazy"/>
                <div class="card__links">
                    {github_url.map(|url| {
                        view! { <a href=url target="_blank" rel="noopener noreferrer" aria-label="Source code">"Code"</a> }
                    })}
                    {demo_url.map(|url| {
                        view! { <a href=url target="_blank" rel="noopener noreferrer" aria-label="Live demo">"Demo"</a> }
                    })}
                </div>
            </div>
            <div class="card__body">
                <h3 class="card__title">{title}</h3>
                <p class="card__text">{description}</p>
                <ul class="tags">
                    {technologies.into_iter().map(|tech| view! { <li class="tag">{tech}</li> }).collect_view()}
                </ul>
            </div>
        </article>
    }
}
