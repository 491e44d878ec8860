//! Blog section listing the newest posts from the `blogs` snapshot.

use leptos::prelude::*;

use crate::model::BlogPost;
use crate::state::snapshot::Snapshot;
use crate::util::format::format_date;

pub const BLOG_EMPTY_MESSAGE: &str = "No blog posts available yet. Check back soon!";
const READ_TIME: &str = "5 min read";
/// The home page shows only the newest posts.
pub const BLOG_SECTION_LIMIT: usize = 6;

#[component]
pub fn BlogSection(snapshot: Snapshot<BlogPost>) -> impl IntoView {
    let body = if snapshot.loading {
        view! { <p class="section__loading">"Loading posts..."</p> }.into_any()
    } else if snapshot.is_empty_state() {
        view! { <p class="section__empty">{BLOG_EMPTY_MESSAGE}</p> }.into_any()
    } else {
        view! {
            <div class="cards">
                {snapshot
                    .items
                    .into_iter()
                    .take(BLOG_SECTION_LIMIT)
                    .map(|post| view! { <BlogCard post=post/> }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section id="blog" class="section">
            <div class="section__heading">
                <h2>"Latest Blog Posts"</h2>
                <p>"Insights, tutorials, and thoughts on web development and technology"</p>
            </div>
            {body}
        </section>
    }
}

#[component]
pub fn BlogCard(post: BlogPost) -> impl IntoView {
    let BlogPost { id, title, excerpt, image_url, created_at, .. } = post;
    let date = format_date(created_at);
    let alt = title.clone();
    view! {
        <article class="card blog-card" data-id=id>
            <div class="card__media">
                <img src=image_url alt=alt loading="lazy"/>
            </div>
            <div class="card__body">
                <div class="card__meta">
                    <span class="card__date">{date}</span>
                    <span class="card__read-time">{READ_TIME}</span>
                </div>
                <h3 class="card__title">{title}</h3>
                <p class="card__text">{excerpt}</p>
                <span class="card__more">"Read More →"</span>
            </div>
        </article>
    }
}
