use super::*;

#[test]
fn cookie_value_finds_named_cookie() {
    let jar = "theme=dark; adminToken=abc.def.ghi; other=1";
    assert_eq!(cookie_value(jar, ADMIN_TOKEN_COOKIE), Some("abc.def.ghi".to_owned()));
}

#[test]
fn cookie_value_ignores_prefix_matches() {
    let jar = "adminTokenOld=stale; adminToken=fresh";
    assert_eq!(cookie_value(jar, "adminToken"), Some("fresh".to_owned()));
}

#[test]
fn cookie_value_keeps_equals_inside_value() {
    assert_eq!(cookie_value("adminToken=a=b==", "adminToken"), Some("a=b==".to_owned()));
}

#[test]
fn cookie_value_missing_returns_none() {
    assert_eq!(cookie_value("", "adminToken"), None);
    assert_eq!(cookie_value("a=1; b", "adminToken"), None);
}

#[test]
fn header_value_prefixes_bearer() {
    assert_eq!(BearerToken::new("t0k").header_value(), "Bearer t0k");
}

#[test]
fn debug_never_prints_secret() {
    let rendered = format!("{:?}", BearerToken::new("secret"));
    assert!(!rendered.contains("secret"));
    assert_eq!(format!("{:?}", BearerToken::default()), "BearerToken(<empty>)");
}

#[test]
fn read_admin_token_is_empty_outside_browser() {
    assert!(read_admin_token().is_empty());
}
