//! Public single-page portfolio.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::blog::BlogSection;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::notice::NoticeToast;
use crate::components::projects::ProjectsSection;
use crate::components::services::Services;
use crate::model::{BlogPost, Project};
use crate::state::forms::{ContactForm, FormState};
use crate::state::notice::Notice;
use crate::state::snapshot::Snapshot;
use crate::state::theme::Theme;

/// Everything the home page needs from the server for one render.
#[derive(Clone, Debug)]
pub struct HomeProps {
    pub theme: Theme,
    pub projects: Snapshot<Project>,
    pub blogs: Snapshot<BlogPost>,
    pub contact: FormState<ContactForm>,
    pub notice: Option<Notice>,
    pub year: i32,
}

#[component]
pub fn HomePage(props: HomeProps) -> impl IntoView {
    let HomeProps { theme, projects, blogs, contact, notice, year } = props;
    view! {
        <Header theme=theme/>
        <main>
            <Hero/>
            <About/>
            <Services/>
            <ProjectsSection snapshot=projects/>
            <BlogSection snapshot=blogs/>
            <Contact state=contact/>
        </main>
        <Footer year=year/>
        <NoticeToast notice=notice/>
    }
}
