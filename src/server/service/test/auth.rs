use crate::server::{
    error::auth::AuthError,
    service::auth::{verified_email, GoogleUser},
};

fn google_user(email: &str, email_verified: Option<bool>) -> GoogleUser {
    GoogleUser {
        email: email.to_string(),
        email_verified,
        name: Some("Asha".to_string()),
        picture: None,
    }
}

/// Tests signing in with a Google email that Google reports as unverified.
///
/// Users are matched by email, so an unverified address must never resolve to an
/// existing account.
///
/// Expected: Err(AuthError::UnverifiedEmail)
#[test]
fn rejects_unverified_email() {
    let result = verified_email(&google_user("admin@example.com", Some(false)));

    assert!(matches!(result, Err(AuthError::UnverifiedEmail(email)) if email == "admin@example.com"));
}

/// Tests signing in when Google omits the verification claim.
///
/// Expected: Err(AuthError::UnverifiedEmail)
#[test]
fn rejects_missing_verification_claim() {
    let result = verified_email(&google_user("admin@example.com", None));

    assert!(matches!(result, Err(AuthError::UnverifiedEmail(_))));
}

/// Tests signing in with a verified Google email.
///
/// Expected: Ok with the email trimmed and lowercased
#[test]
fn accepts_verified_email() {
    let result = verified_email(&google_user(" Founder@Example.com ", Some(true)));

    assert_eq!(result.ok().as_deref(), Some("founder@example.com"));
}
