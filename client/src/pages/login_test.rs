use super::*;

#[test]
fn invalid_credentials_message_does_not_leak_which_field() {
    let msg = sign_in_message(&AuthError::InvalidCredentials);
    assert_eq!(msg, "Email or password is incorrect.");
}

#[test]
fn network_failure_message_hides_transport_detail() {
    let msg = sign_in_message(&AuthError::NetworkFailure("sign in failed: 502".to_owned()));
    assert_eq!(msg, "Could not reach the server. Try again.");
    assert!(!msg.contains("502"));
}
