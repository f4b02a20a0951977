use super::*;
use crate::net::identity::AuthError;

fn filled(email: &str, password: &str) -> SignInForm {
    let mut form = SignInForm::default();
    form.set_email(email);
    form.set_password(password);
    form
}

fn session() -> Session {
    Session {
        user_id: "uid-1".to_owned(),
        email: Some("ada@example.com".to_owned()),
        id_token: "t".to_owned(),
        refresh_token: None,
        provider: "password".to_owned(),
    }
}

// =============================================================
// Defaults and field updates
// =============================================================

#[test]
fn default_form_is_empty_and_idle() {
    let form = SignInForm::default();
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert!(form.error.is_none());
    assert_eq!(form.phase(), Phase::Idle);
}

#[test]
fn typing_email_updates_only_email() {
    let mut form = filled("", "pw");
    form.set_email("a");
    form.set_email("ad");
    assert_eq!(form.email, "ad");
    assert_eq!(form.password, "pw");
}

#[test]
fn typing_password_updates_only_password() {
    let mut form = filled("ada@example.com", "");
    form.set_password("s3cret");
    assert_eq!(form.password, "s3cret");
    assert_eq!(form.email, "ada@example.com");
}

// =============================================================
// begin
// =============================================================

#[test]
fn begin_credentials_snapshots_email_then_password() {
    let mut form = filled("ada@example.com", "hunter2");
    let attempt = form.begin(SignInMethod::Credentials).expect("accepted");
    assert_eq!(attempt, Attempt::Credentials(Credentials::new("ada@example.com", "hunter2")));
    assert!(form.is_submitting());
}

#[test]
fn begin_does_not_trim_or_validate_format() {
    let mut form = filled("not-an-email", " ");
    let attempt = form.begin(SignInMethod::Credentials).expect("accepted");
    assert_eq!(attempt, Attempt::Credentials(Credentials::new("not-an-email", " ")));
}

#[test]
fn begin_rejects_empty_email() {
    let mut form = filled("", "pw");
    assert_eq!(form.begin(SignInMethod::Credentials), Err(SubmitRejected::MissingEmail));
    assert_eq!(form.phase(), Phase::Idle);
}

#[test]
fn begin_rejects_empty_password() {
    let mut form = filled("ada@example.com", "");
    assert_eq!(form.begin(SignInMethod::Credentials), Err(SubmitRejected::MissingPassword));
    assert_eq!(form.phase(), Phase::Idle);
}

#[test]
fn rejected_attempt_keeps_previous_error() {
    let mut form = filled("", "");
    form.error = Some("Invalid password".to_owned());
    assert!(form.begin(SignInMethod::Credentials).is_err());
    assert_eq!(form.error.as_deref(), Some("Invalid password"));
}

#[test]
fn federated_attempt_ignores_empty_fields() {
    let mut form = SignInForm::default();
    let attempt = form.begin(SignInMethod::Federated(FederatedProvider::Google)).expect("accepted");
    assert_eq!(attempt, Attempt::Federated(FederatedProvider::Google));
    assert!(form.is_submitting());
}

#[test]
fn begin_rejects_reentry_while_submitting() {
    let mut form = filled("ada@example.com", "pw");
    form.begin(SignInMethod::Credentials).expect("first accepted");
    assert_eq!(form.begin(SignInMethod::Credentials), Err(SubmitRejected::InFlight));
    assert_eq!(
        form.begin(SignInMethod::Federated(FederatedProvider::Google)),
        Err(SubmitRejected::InFlight)
    );
}

#[test]
fn accepted_attempt_clears_stale_error() {
    let mut form = filled("ada@example.com", "pw");
    form.error = Some("Invalid password".to_owned());
    form.begin(SignInMethod::Credentials).expect("accepted");
    assert!(form.error.is_none());
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_success_returns_session_and_goes_idle() {
    let mut form = filled("ada@example.com", "pw");
    form.begin(SignInMethod::Credentials).expect("accepted");
    assert_eq!(form.settle(Ok(session())), Some(session()));
    assert_eq!(form.phase(), Phase::Idle);
    assert!(form.error.is_none());
}

#[test]
fn settle_failure_records_message_verbatim() {
    let mut form = filled("ada@example.com", "pw");
    form.begin(SignInMethod::Credentials).expect("accepted");
    assert!(form.settle(Err(AuthError::new("Invalid password"))).is_none());
    assert_eq!(form.error.as_deref(), Some("Invalid password"));
    assert_eq!(form.phase(), Phase::Idle);
    assert_eq!(form.email, "ada@example.com");
    assert_eq!(form.password, "pw");
}

#[test]
fn later_failure_overwrites_earlier_error() {
    let mut form = filled("ada@example.com", "pw");
    form.begin(SignInMethod::Credentials).expect("accepted");
    form.settle(Err(AuthError::new("Invalid password")));
    form.begin(SignInMethod::Federated(FederatedProvider::Google)).expect("accepted");
    form.settle(Err(AuthError::new("auth/popup-closed-by-user")));
    assert_eq!(form.error.as_deref(), Some("auth/popup-closed-by-user"));
}

#[test]
fn form_accepts_new_attempt_after_settling() {
    let mut form = filled("ada@example.com", "pw");
    form.begin(SignInMethod::Credentials).expect("accepted");
    form.settle(Err(AuthError::new("nope")));
    assert!(form.begin(SignInMethod::Credentials).is_ok());
}

#[test]
fn visible_error_shows_failure_message_verbatim() {
    let mut form = filled("ada@example.com", "pw");
    assert_eq!(form.visible_error(), None);
    form.begin(SignInMethod::Credentials).expect("accepted");
    form.settle(Err(AuthError::new("Invalid password")));
    assert_eq!(form.visible_error(), Some("Invalid password"));
}

#[test]
fn empty_failure_message_is_not_visible() {
    let mut form = filled("ada@example.com", "pw");
    form.begin(SignInMethod::Credentials).expect("accepted");
    form.settle(Err(AuthError::new("")));
    assert_eq!(form.error.as_deref(), Some(""));
    assert_eq!(form.visible_error(), None);
}

// =============================================================
// SubmitRejected
// =============================================================

#[test]
fn rejection_messages_are_readable() {
    assert_eq!(SubmitRejected::InFlight.to_string(), "a sign-in attempt is already in progress");
    assert_eq!(SubmitRejected::MissingEmail.to_string(), "email is required");
    assert_eq!(SubmitRejected::MissingPassword.to_string(), "password is required");
}
