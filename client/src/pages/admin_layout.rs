//! Admin shell: sidebar navigation around the active admin page.

use leptos::prelude::*;

use crate::components::notice::NoticeToast;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::notice::Notice;
use crate::state::theme::Theme;

/// Admin pages, in sidebar order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminNav {
    Dashboard,
    AddProject,
    AddBlog,
}

impl AdminNav {
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::AddProject, Self::AddBlog];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::AddProject => "Add Project",
            Self::AddBlog => "Add Blog",
        }
    }

    #[must_use]
    pub fn href(self) -> &'static str {
        match self {
            Self::Dashboard => "/admin",
            Self::AddProject => "/admin/add-project",
            Self::AddBlog => "/admin/add-blog",
        }
    }
}

#[component]
pub fn AdminLayout(active: AdminNav, theme: Theme, notice: Option<Notice>, children: Children) -> impl IntoView {
    let return_to = active.href();
    view! {
        <div class="admin">
            <aside class="admin__sidebar">
                <p class="admin__brand">"Admin Panel"</p>
                <nav class="admin__nav">
                    {AdminNav::ALL
                        .into_iter()
                        .map(|item| {
                            let is_active = item == active;
                            let href = item.href();
                            view! {
                                <a class="admin__nav-link" class:admin__nav-link--active=is_active href=href>
                                    {item.label()}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <a class="admin__back" href="/">"← Back to site"</a>
            </aside>
            <div class="admin__main">
                <header class="admin__topbar">
                    <ThemeToggle theme=theme return_to=return_to/>
                </header>
                <main class="admin__content">{children()}</main>
            </div>
            <NoticeToast notice=notice/>
        </div>
    }
}
