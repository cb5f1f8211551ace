use super::*;

fn authenticated() -> Session {
    let mut session = Session::default();
    session.login("tok123", "a@b.com");
    session
}

#[test]
fn dashboard_while_anonymous_redirects_to_login() {
    assert_eq!(
        decide_route(DASHBOARD_PATH, &Session::default()),
        RouteDecision::RedirectToLogin
    );
}

#[test]
fn dashboard_while_authenticated_renders() {
    assert_eq!(decide_route(DASHBOARD_PATH, &authenticated()), RouteDecision::Render);
}

#[test]
fn every_protected_path_renders_when_authenticated() {
    let session = authenticated();
    for path in PROTECTED_PATHS {
        assert_eq!(decide_route(path, &session), RouteDecision::Render, "{path}");
    }
}

#[test]
fn unknown_path_falls_back_by_session() {
    assert_eq!(decide_route("/xyz", &authenticated()), RouteDecision::RedirectToDashboard);
    assert_eq!(decide_route("/xyz", &Session::default()), RouteDecision::RedirectToLogin);
}

#[test]
fn login_path_always_renders() {
    assert_eq!(decide_route(LOGIN_PATH, &Session::default()), RouteDecision::Render);
    assert_eq!(decide_route(LOGIN_PATH, &authenticated()), RouteDecision::Render);
}

#[test]
fn fallback_redirect_targets_dashboard_or_login() {
    assert_eq!(fallback_redirect(&authenticated()), DASHBOARD_PATH);
    assert_eq!(fallback_redirect(&Session::default()), LOGIN_PATH);
}
