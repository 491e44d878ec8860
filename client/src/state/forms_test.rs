use super::*;

fn filled_project() -> ProjectForm {
    ProjectForm {
        title: "Folio".into(),
        description: "Portfolio site".into(),
        technologies: "Rust, Leptos ,, axum ".into(),
        github_url: String::new(),
        demo_url: " https://demo.test ".into(),
    }
}

#[test]
fn complete_project_form_has_no_errors() {
    assert!(filled_project().validate().is_empty());
}

#[test]
fn empty_project_form_reports_each_required_field() {
    let errors = ProjectForm::default().validate();
    assert_eq!(errors.len(), 3);
    assert_eq!(errors.get("title"), Some("Title is required"));
    assert_eq!(errors.get("description"), Some("Description is required"));
    assert_eq!(errors.get("technologies"), Some("Technologies are required"));
    assert_eq!(errors.get("githubUrl"), None);
}

#[test]
fn whitespace_only_counts_as_missing() {
    let mut form = filled_project();
    form.title = "   ".into();
    let errors = form.validate();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["title"]);
}

#[test]
fn project_draft_splits_technologies_and_drops_blank_links() {
    let draft = filled_project().into_draft("https://img.test/a.png".into());
    assert_eq!(draft.technologies, vec!["Rust", "Leptos", "axum"]);
    assert_eq!(draft.github_url, None);
    assert_eq!(draft.demo_url.as_deref(), Some("https://demo.test"));
    assert_eq!(draft.image_url, "https://img.test/a.png");
}

#[test]
fn project_set_maps_form_names() {
    let mut form = ProjectForm::default();
    form.set("githubUrl", "https://github.com/x".into());
    form.set("demoUrl", "https://demo".into());
    form.set("unknown", "ignored".into());
    assert_eq!(form.github_url, "https://github.com/x");
    assert_eq!(form.demo_url, "https://demo");
}

#[test]
fn blog_form_requires_title_excerpt_content() {
    let mut form = BlogForm::default();
    form.set("excerpt", "short".into());
    let errors = form.validate();
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["title", "content"]);
    assert_eq!(errors.get("content"), Some("Content is required"));
}

#[test]
fn blog_draft_keeps_content_verbatim() {
    let form = BlogForm { title: " Hello ".into(), excerpt: "e".into(), content: "  body\n".into() };
    let draft = form.into_draft("u".into());
    assert_eq!(draft.title, "Hello");
    assert_eq!(draft.content, "  body\n");
}

#[test]
fn contact_form_checks_email_shape() {
    let mut form = ContactForm {
        name: "Ada".into(),
        email: "not-an-email".into(),
        subject: "Hi".into(),
        message: "Hello".into(),
    };
    assert_eq!(form.validate().get("email"), Some("Invalid email address"));
    form.email = "ada@example.com".into();
    assert!(form.validate().is_empty());
}

#[test]
fn contact_form_missing_email_is_required_not_invalid() {
    let errors = ContactForm::default().validate();
    assert_eq!(errors.get("email"), Some("Email is required"));
    assert_eq!(errors.len(), 4);
}

#[test]
fn parse_technologies_handles_empty_input() {
    assert!(parse_technologies("").is_empty());
    assert!(parse_technologies(" , ,").is_empty());
}
