use super::*;

#[test]
fn missing_theme_cookie_is_light() {
    assert_eq!(theme(&CookieJar::new()), Theme::Light);
}

#[test]
fn theme_round_trips_through_jar() {
    let jar = with_theme(CookieJar::new(), Theme::Dark);
    assert_eq!(theme(&jar), Theme::Dark);
    let cookie = jar.get(THEME_COOKIE).unwrap();
    assert_eq!(cookie.max_age(), None);
    assert_eq!(cookie.path(), Some("/"));
}

#[test]
fn unknown_theme_value_is_light() {
    let jar = CookieJar::new().add(Cookie::new(THEME_COOKIE, "sepia"));
    assert_eq!(theme(&jar), Theme::Light);
}

#[test]
fn take_notice_reads_once_and_expires_cookie() {
    let jar = with_notice(CookieJar::new(), Notice::BlogAdded);
    let (jar, notice) = take_notice(jar);
    assert_eq!(notice, Some(Notice::BlogAdded));
    let cleared = jar.get(NOTICE_COOKIE).unwrap();
    assert_eq!(cleared.value(), "");
    assert_eq!(cleared.max_age(), Some(Duration::ZERO));
}

#[test]
fn take_notice_without_cookie_is_none() {
    let (_, notice) = take_notice(CookieJar::new());
    assert_eq!(notice, None);
}

#[test]
fn safe_return_path_rejects_offsite_targets() {
    assert_eq!(safe_return_path(Some("/admin/add-blog")), "/admin/add-blog");
    assert_eq!(safe_return_path(Some("//evil.example")), "/");
    assert_eq!(safe_return_path(Some("https://evil.example")), "/");
    assert_eq!(safe_return_path(Some("/\\evil.example")), "/");
    assert_eq!(safe_return_path(None), "/");
}
