//! Unit tests for the account service

use std::sync::Arc;
use std::time::Duration;

use crate::domain::entities::CODE_LENGTH;
use crate::errors::{AccountError, DomainError};
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::account::{AccountService, AccountServiceConfig, RegisterRequest};

use super::mocks::MockMailer;

fn test_service(
    user_repo: Arc<MockUserRepository>,
    mailer: Arc<MockMailer>,
) -> AccountService<MockUserRepository, MockMailer> {
    // Minimum bcrypt cost keeps the tests fast
    let config = AccountServiceConfig::default().with_bcrypt_cost(4);
    AccountService::new(user_repo, mailer, config)
}

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        email: email.to_string(),
        password: "correct-horse".to_string(),
        password_confirm: "correct-horse".to_string(),
        name: "Ada".to_string(),
        last_name: Some("Lovelace".to_string()),
    }
}

/// Let fire-and-forget mail dispatch tasks run to completion
async fn drain_dispatch() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

#[tokio::test]
async fn test_register_creates_inactive_user_with_code() {
    let user_repo = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let service = test_service(Arc::clone(&user_repo), Arc::clone(&mailer));

    let user = service.register(register_request("a@x.com")).await.unwrap();

    assert!(!user.is_active);
    let code = user.activation_code.clone().expect("code must be pending");
    assert_eq!(code.len(), CODE_LENGTH);

    drain_dispatch().await;
    let sent = mailer.sent_messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipient, "a@x.com");
    assert!(sent[0].body.contains(&code));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let user_repo = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let service = test_service(user_repo, mailer);

    service.register(register_request("a@x.com")).await.unwrap();
    let err = service
        .register(register_request("a@x.com"))
        .await
        .expect_err("second registration must conflict");

    assert!(matches!(
        err,
        DomainError::Account(AccountError::DuplicateAccount)
    ));
}

#[tokio::test]
async fn test_register_password_mismatch() {
    let service = test_service(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockMailer::new()),
    );

    let mut request = register_request("a@x.com");
    request.password_confirm = "different-pass".to_string();

    let err = service.register(request).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Account(AccountError::PasswordMismatch)
    ));
}

#[tokio::test]
async fn test_register_rejects_malformed_email() {
    let service = test_service(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockMailer::new()),
    );

    let err = service
        .register(register_request("not-an-email"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_activation_happy_path_then_replay_fails() {
    let user_repo = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let service = test_service(Arc::clone(&user_repo), mailer);

    let user = service.register(register_request("a@x.com")).await.unwrap();
    let code = user.activation_code.unwrap();

    service.activate("a@x.com", &code).await.unwrap();

    let stored = user_repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(stored.is_active);
    assert!(stored.activation_code.is_none());

    // The code was cleared on use; replaying it must fail
    let err = service.activate("a@x.com", &code).await.unwrap_err();
    assert!(matches!(err, DomainError::Account(AccountError::InvalidCode)));
}

#[tokio::test]
async fn test_activation_rejects_wrong_code() {
    let user_repo = Arc::new(MockUserRepository::new());
    let service = test_service(Arc::clone(&user_repo), Arc::new(MockMailer::new()));

    service.register(register_request("a@x.com")).await.unwrap();

    let err = service.activate("a@x.com", "WRONG1").await.unwrap_err();
    assert!(matches!(err, DomainError::Account(AccountError::InvalidCode)));

    let stored = user_repo.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(!stored.is_active);
}

#[tokio::test]
async fn test_login_succeeds_for_active_account() {
    let user_repo = Arc::new(MockUserRepository::new());
    let service = test_service(Arc::clone(&user_repo), Arc::new(MockMailer::new()));

    let user = service.register(register_request("a@x.com")).await.unwrap();
    service
        .activate("a@x.com", &user.activation_code.unwrap())
        .await
        .unwrap();

    let authenticated = service.login("a@x.com", "correct-horse").await.unwrap();
    assert_eq!(authenticated.email, "a@x.com");
    assert_eq!(authenticated.user_id, user.id);
    assert!(!authenticated.is_admin);
}

#[tokio::test]
async fn test_login_rejects_correct_password_on_inactive_account() {
    let service = test_service(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockMailer::new()),
    );

    service.register(register_request("a@x.com")).await.unwrap();

    let err = service.login("a@x.com", "correct-horse").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Account(AccountError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_error_distinguishes_unknown_email_only() {
    let user_repo = Arc::new(MockUserRepository::new());
    let service = test_service(Arc::clone(&user_repo), Arc::new(MockMailer::new()));

    let user = service.register(register_request("a@x.com")).await.unwrap();
    service
        .activate("a@x.com", &user.activation_code.unwrap())
        .await
        .unwrap();

    let err = service.login("b@x.com", "whatever-pass").await.unwrap_err();
    assert!(matches!(err, DomainError::Account(AccountError::UnknownUser)));

    let err = service.login("a@x.com", "wrong-password").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Account(AccountError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_password_reset_overwrites_credential_and_mails_it() {
    let user_repo = Arc::new(MockUserRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let service = test_service(Arc::clone(&user_repo), Arc::clone(&mailer));

    let user = service.register(register_request("a@x.com")).await.unwrap();
    service
        .activate("a@x.com", &user.activation_code.unwrap())
        .await
        .unwrap();

    service.request_password_reset("a@x.com").await.unwrap();
    drain_dispatch().await;

    // Old password is dead the moment the reset is accepted
    let err = service.login("a@x.com", "correct-horse").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Account(AccountError::InvalidCredentials)
    ));

    // The mailed plaintext is the only access path to the new credential
    let sent = mailer.sent_messages();
    let recovery = sent.last().expect("recovery mail expected");
    let new_password = recovery
        .body
        .rsplit(' ')
        .next()
        .expect("body ends with the password");
    service.login("a@x.com", new_password).await.unwrap();
}

#[tokio::test]
async fn test_password_reset_unknown_email() {
    let service = test_service(
        Arc::new(MockUserRepository::new()),
        Arc::new(MockMailer::new()),
    );

    let err = service.request_password_reset("b@x.com").await.unwrap_err();
    assert!(matches!(err, DomainError::Account(AccountError::UnknownUser)));
}

#[tokio::test]
async fn test_mailer_failure_does_not_fail_account_operations() {
    let user_repo = Arc::new(MockUserRepository::new());
    let service = test_service(Arc::clone(&user_repo), Arc::new(MockMailer::failing()));

    let user = service.register(register_request("a@x.com")).await.unwrap();
    assert!(user.is_pending_activation());

    service.request_password_reset("a@x.com").await.unwrap();
    drain_dispatch().await;
}

#[tokio::test]
async fn test_change_password_requires_correct_old_password() {
    let user_repo = Arc::new(MockUserRepository::new());
    let service = test_service(Arc::clone(&user_repo), Arc::new(MockMailer::new()));

    let user = service.register(register_request("a@x.com")).await.unwrap();

    let err = service
        .change_password(user.id, "wrong-old", "new-password", "new-password")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Account(AccountError::WrongOldPassword)
    ));

    let err = service
        .change_password(user.id, "correct-horse", "new-password", "other-password")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Account(AccountError::PasswordMismatch)
    ));
}

#[tokio::test]
async fn test_change_password_happy_path() {
    let user_repo = Arc::new(MockUserRepository::new());
    let service = test_service(Arc::clone(&user_repo), Arc::new(MockMailer::new()));

    let user = service.register(register_request("a@x.com")).await.unwrap();
    service
        .activate("a@x.com", &user.activation_code.unwrap())
        .await
        .unwrap();

    service
        .change_password(user.id, "correct-horse", "new-password", "new-password")
        .await
        .unwrap();

    service.login("a@x.com", "new-password").await.unwrap();
    let err = service.login("a@x.com", "correct-horse").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Account(AccountError::InvalidCredentials)
    ));
}
