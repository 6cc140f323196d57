use super::*;

// =============================================================
// decide — full table
// =============================================================

#[test]
fn bootstrapping_renders_loading_for_every_route() {
    for route in Route::ALL {
        assert_eq!(
            decide(route, SessionStatus::Bootstrapping),
            Decision::Render(Screen::Loading),
            "route {route:?}"
        );
    }
}

#[test]
fn unauthenticated_table() {
    let status = SessionStatus::Unauthenticated;
    assert_eq!(decide(Route::Login, status), Decision::Render(Screen::Login));
    assert_eq!(decide(Route::Register, status), Decision::Render(Screen::Register));
    assert_eq!(decide(Route::Chat, status), Decision::Redirect(Route::Login));
    assert_eq!(decide(Route::Root, status), Decision::Redirect(Route::Login));
}

#[test]
fn authenticated_table() {
    let status = SessionStatus::Authenticated;
    assert_eq!(decide(Route::Login, status), Decision::Redirect(Route::Chat));
    assert_eq!(decide(Route::Register, status), Decision::Redirect(Route::Chat));
    assert_eq!(decide(Route::Chat, status), Decision::Render(Screen::Chat));
    assert_eq!(decide(Route::Root, status), Decision::Redirect(Route::Chat));
}

#[test]
fn root_never_renders() {
    for status in [
        SessionStatus::Unauthenticated,
        SessionStatus::Authenticated,
    ] {
        assert!(matches!(decide(Route::Root, status), Decision::Redirect(_)));
    }
}

#[test]
fn chat_never_rendered_without_session() {
    for status in [SessionStatus::Bootstrapping, SessionStatus::Unauthenticated] {
        assert_ne!(decide(Route::Chat, status), Decision::Render(Screen::Chat));
    }
}

#[test]
fn login_and_register_never_rendered_with_session() {
    let status = SessionStatus::Authenticated;
    assert_ne!(decide(Route::Login, status), Decision::Render(Screen::Login));
    assert_ne!(decide(Route::Register, status), Decision::Render(Screen::Register));
}

#[test]
fn decide_is_idempotent() {
    for route in Route::ALL {
        for status in [
            SessionStatus::Bootstrapping,
            SessionStatus::Unauthenticated,
            SessionStatus::Authenticated,
        ] {
            assert_eq!(decide(route, status), decide(route, status));
        }
    }
}

#[test]
fn redirects_never_target_root() {
    for route in Route::ALL {
        for status in [SessionStatus::Unauthenticated, SessionStatus::Authenticated] {
            if let Decision::Redirect(target) = decide(route, status) {
                assert_ne!(target, Route::Root);
                // A redirect target must itself render under the same status.
                assert!(matches!(decide(target, status), Decision::Render(_)));
            }
        }
    }
}

// =============================================================
// Route parsing
// =============================================================

#[test]
fn from_path_recognizes_canonical_paths() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn from_path_ignores_single_trailing_slash() {
    assert_eq!(Route::from_path("/chat/"), Some(Route::Chat));
    assert_eq!(Route::from_path("/login/"), Some(Route::Login));
}

#[test]
fn from_path_rejects_unknown_paths() {
    assert_eq!(Route::from_path("/settings"), None);
    assert_eq!(Route::from_path("/chat/42"), None);
    assert_eq!(Route::from_path("chat"), None);
    assert_eq!(Route::from_path(""), None);
    assert_eq!(Route::from_path("//"), None);
    assert_eq!(Route::from_path("/chat//"), None);
}

#[test]
fn from_path_root_is_only_a_single_slash() {
    assert_eq!(Route::from_path("/"), Some(Route::Root));
}

#[test]
fn segment_strips_leading_slash() {
    assert_eq!(Route::Root.segment(), "");
    assert_eq!(Route::Chat.segment(), "chat");
}
