//! Add-project form.
//!
//! Posts `multipart/form-data` to itself. On validation failure the server
//! re-renders this page with the submitted values and inline errors.

use leptos::prelude::*;

use crate::components::field::{ImageField, TextAreaField, TextField};
use crate::state::forms::{FormState, ProjectForm};

#[component]
pub fn AddProject(state: FormState<ProjectForm>) -> impl IntoView {
    let FormState { form, errors } = state;
    view! {
        <div class="page-heading">
            <h1>"Add New Project"</h1>
            <p>"Create a new project to showcase in your portfolio"</p>
        </div>
        <form class="form panel" method="post" action="/admin/add-project" enctype="multipart/form-data">
            <ImageField label="Project Image" hint="project image"/>
            <TextField
                label="Project Title"
                name="title"
                kind="text"
                value=form.title
                placeholder="Enter project title"
                error=errors.get("title")
            />
            <TextAreaField
                label="Description"
                name="description"
                rows="4"
                value=form.description
                placeholder="Describe your project..."
                error=errors.get("description")
            />
            <TextField
                label="Technologies (comma separated)"
                name="technologies"
                kind="text"
                value=form.technologies
                placeholder="React, Node.js, MongoDB, etc."
                error=errors.get("technologies")
            />
            <div class="form__row">
                <TextField
                    label="GitHub URL (optional)"
                    name="githubUrl"
                    kind="url"
                    value=form.github_url
                    placeholder="https://github.com/username/project"
                    error=None
                />
                <TextField
                    label="Demo URL (optional)"
                    name="demoUrl"
                    kind="url"
                    value=form.demo_url
                    placeholder="https://your-project-demo.com"
                    error=None
                />
            </div>
            <div class="form__actions">
                <button class="btn btn--primary" type="submit">"+ Add Project"</button>
            </div>
        </form>
    }
}
