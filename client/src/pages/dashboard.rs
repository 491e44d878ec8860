//! Admin dashboard: counts and the most recent entries.

use leptos::prelude::*;

use crate::content::{DASHBOARD_VIEWS, DASHBOARD_VISITORS};
use crate::model::{BlogPost, Project};
use crate::state::snapshot::Snapshot;
use crate::util::format::{excerpt_preview, tech_preview};

/// Rows shown in each recent-activity list.
pub const RECENT_LIMIT: usize = 5;
pub const NO_PROJECTS_MESSAGE: &str = "No projects yet. Create your first project!";
pub const NO_BLOGS_MESSAGE: &str = "No blog posts yet. Write your first post!";

#[component]
pub fn Dashboard(projects: Snapshot<Project>, blogs: Snapshot<BlogPost>) -> impl IntoView {
    let stats = [
        ("Total Projects", projects.items.len().to_string(), "blue"),
        ("Blog Posts", blogs.items.len().to_string(), "purple"),
        ("Views", DASHBOARD_VIEWS.to_owned(), "green"),
        ("Visitors", DASHBOARD_VISITORS.to_owned(), "orange"),
    ];
    let project_rows = (!projects.items.is_empty()).then(|| {
        projects
            .items
            .iter()
            .take(RECENT_LIMIT)
            .map(|p| {
                let image_url = p.image_url.clone();
                let title = p.title.clone();
                let detail = tech_preview(&p.technologies);
                view! { <RecentRow image_url=image_url title=title detail=detail/> }
            })
            .collect_view()
    });
    let blog_rows = (!blogs.items.is_empty()).then(|| {
        blogs
            .items
            .iter()
            .take(RECENT_LIMIT)
            .map(|b| {
                let image_url = b.image_url.clone();
                let title = b.title.clone();
                let detail = excerpt_preview(&b.excerpt);
                view! { <RecentRow image_url=image_url title=title detail=detail/> }
            })
            .collect_view()
    });
    let projects_empty = projects.items.is_empty();
    let blogs_empty = blogs.items.is_empty();

    view! {
        <div class="page-heading">
            <h1>"Dashboard"</h1>
            <p>"Welcome back! Here's an overview of your portfolio."</p>
        </div>
        <div class="stats">
            {stats
                .into_iter()
                .map(|(name, value, accent)| {
                    let class = format!("stat stat--{accent}");
                    view! {
                        <div class=class>
                            <p class="stat__name">{name}</p>
                            <p class="stat__value">{value}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
        <div class="recent">
            <section class="recent__panel recent__panel--projects">
                <h3>"Recent Projects"</h3>
                {project_rows}
                {projects_empty.then(|| view! { <p class="recent__empty">{NO_PROJECTS_MESSAGE}</p> })}
            </section>
            <section class="recent__panel recent__panel--blogs">
                <h3>"Recent Blog Posts"</h3>
                {blog_rows}
                {blogs_empty.then(|| view! { <p class="recent__empty">{NO_BLOGS_MESSAGE}</p> })}
            </section>
        </div>
    }
}

#[component]
fn RecentRow(image_url: String, title: String, detail: String) -> impl IntoView {
    let alt = title.clone();
    view! {
        <div class="recent__row">
            <img class="recent__thumb" src=image_url alt=alt/>
            <div class="recent__text">
                <p class="recent__title">{title}</p>
                <p class="recent__detail">{detail}</p>
            </div>
        </div>
    }
}
