use super::*;

fn message() -> ContactForm {
    ContactForm {
        name: "  Ada <Admin>  ".into(),
        email: "ada@example.com".into(),
        subject: "Hello & welcome".into(),
        message: "line one\nline two".into(),
    }
}

#[test]
fn rendered_email_escapes_user_input() {
    let html = render_contact_email(&message());
    assert!(html.contains("Ada &lt;Admin&gt; &lt;ada@example.com&gt;"));
    assert!(html.contains("Hello &amp; welcome"));
    assert!(!html.contains("<Admin>"));

    let first = html.find("line one").expect("first line");
    let br = html.find("<br").expect("line break");
    let second = html.find("line two").expect("second line");
    assert!(first < br && br < second);
}

#[tokio::test]
async fn log_sink_always_succeeds() {
    assert!(LogSink.deliver(&message()).await.is_ok());
}

#[test]
fn sink_from_config_without_key_does_not_panic() {
    let config = ContactConfig { resend_api_key: None, from: "a@b.c".into(), to: "d@e.f".into() };
    let _sink = sink_from_config(&config);
}
