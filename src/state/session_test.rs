use super::*;

#[test]
fn login_sets_token_and_email() {
    let mut session = Session::default();
    session.login("tok123", "a@b.com");
    assert!(session.is_authenticated());
    assert_eq!(session.token(), Some("tok123"));
    assert_eq!(session.email(), Some("a@b.com"));
}

#[test]
fn login_rejects_empty_token() {
    let mut session = Session::default();
    session.login("", "a@b.com");
    assert!(!session.is_authenticated());
    assert_eq!(session, Session::default());

    session.login("   ", "a@b.com");
    assert_eq!(session, Session::default());
}

#[test]
fn authenticated_tracks_token_presence() {
    let mut session = Session::from_parts(Some("tok".to_owned()), None);
    assert_eq!(session.is_authenticated(), session.token().is_some());
    session.logout();
    assert_eq!(session.is_authenticated(), session.token().is_some());
}

#[test]
fn logout_clears_both_fields() {
    let mut session = Session::default();
    session.login("tok123", "a@b.com");
    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
    assert_eq!(session.email(), None);
}

#[test]
fn logout_is_idempotent() {
    let mut once = Session::default();
    once.login("tok123", "a@b.com");
    once.logout();

    let mut twice = Session::default();
    twice.login("tok123", "a@b.com");
    twice.logout();
    twice.logout();

    assert_eq!(once, twice);
}

#[test]
fn from_parts_restores_a_persisted_login() {
    let restored = Session::from_parts(Some("tok123".to_owned()), Some("a@b.com".to_owned()));
    assert!(restored.is_authenticated());
    assert_eq!(restored.token(), Some("tok123"));
    assert_eq!(restored.email(), Some("a@b.com"));
}

#[test]
fn from_parts_without_token_is_anonymous() {
    let restored = Session::from_parts(None, Some("a@b.com".to_owned()));
    assert!(!restored.is_authenticated());
    assert_eq!(restored.email(), None);

    let restored = Session::from_parts(Some(String::new()), Some("a@b.com".to_owned()));
    assert!(!restored.is_authenticated());
}
