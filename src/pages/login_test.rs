use std::sync::{Arc, Mutex};

use leptos::reactive::owner::Owner;

use super::*;

#[test]
fn validate_login_input_trims_email_only() {
    assert_eq!(
        validate_login_input("  a@b.com ", " pw "),
        Ok(CredentialRequest::Login {
            email: "a@b.com".to_owned(),
            password: " pw ".to_owned(),
        })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("", "pw"),
        Err("Email and password are required")
    );
    assert_eq!(
        validate_login_input("a@b.com", "   "),
        Err("Email and password are required")
    );
}

#[test]
fn dispatch_without_handler_reports_unavailable() {
    let request = validate_login_input("a@b.com", "pw").unwrap();
    assert_eq!(dispatch(None, request), SIGN_IN_UNAVAILABLE);
}

#[test]
fn dispatch_forwards_to_handler() {
    let count = Arc::new(Mutex::new(0));
    let sink = count.clone();
    let status = Owner::new().with(|| {
        let handler = CredentialHandler::new(move |_| *sink.lock().unwrap() += 1);
        let request = validate_login_input("a@b.com", "pw").unwrap();
        dispatch(Some(handler), request)
    });
    assert_eq!(status, "Signing in...");
    assert_eq!(*count.lock().unwrap(), 1);
}
