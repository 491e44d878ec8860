//! Add-blog form.

use leptos::prelude::*;

use crate::components::field::{ImageField, TextAreaField, TextField};
use crate::state::forms::{BlogForm, FormState};

#[component]
pub fn AddBlog(state: FormState<BlogForm>) -> impl IntoView {
    let FormState { form, errors } = state;
    view! {
        <div class="page-heading">
            <h1>"Add New Blog Post"</h1>
            <p>"Create a new blog post to share your insights and knowledge"</p>
        </div>
        <form class="form panel" method="post" action="/admin/add-blog" enctype="multipart/form-data">
            <ImageField label="Featured Image" hint="featured image"/>
            <TextField
                label="Blog Title"
                name="title"
                kind="text"
                value=form.title
                placeholder="Enter blog title"
                error=errors.get("title")
            />
            <TextAreaField
                label="Excerpt"
                name="excerpt"
                rows="3"
                value=form.excerpt
                placeholder="Brief description of the blog post..."
                error=errors.get("excerpt")
            />
            <TextAreaField
                label="Content"
                name="content"
                rows="12"
                value=form.content
                placeholder="Write your blog content here..."
                error=errors.get("content")
            />
            <div class="form__actions">
                <button class="btn btn--primary" type="submit">"+ Publish Blog Post"</button>
            </div>
        </form>
    }
}
