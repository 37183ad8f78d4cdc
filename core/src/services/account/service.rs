//! Main account service implementation

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{generate_activation_code, generate_password, User, CODE_LENGTH};
use crate::domain::value_objects::AuthenticatedUser;
use crate::errors::{AccountError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;

use super::config::AccountServiceConfig;
use super::traits::Mailer;

/// Input for [`AccountService::register`]
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub name: String,
    pub last_name: Option<String>,
}

/// Account service orchestrating the user lifecycle
///
/// State machine per user: unregistered -> pending activation -> active.
/// No transition returns to pending; password recovery and change are
/// self-loops on the stored credential.
pub struct AccountService<U, M>
where
    U: UserRepository,
    M: Mailer + 'static,
{
    /// User repository for credential persistence
    user_repository: Arc<U>,
    /// Outbound mail channel (fire-and-forget)
    mailer: Arc<M>,
    /// Service configuration
    config: AccountServiceConfig,
}

impl<U, M> AccountService<U, M>
where
    U: UserRepository,
    M: Mailer + 'static,
{
    /// Create a new account service
    pub fn new(user_repository: Arc<U>, mailer: Arc<M>, config: AccountServiceConfig) -> Self {
        Self {
            user_repository,
            mailer,
            config,
        }
    }

    /// Register a new account
    ///
    /// This method:
    /// 1. Validates email format, password length, and name length
    /// 2. Checks the password confirmation
    /// 3. Rejects already-registered emails
    /// 4. Persists an inactive user carrying a fresh activation code
    /// 5. Dispatches the activation email without awaiting delivery
    ///
    /// The duplicate pre-check is advisory; a racing registration of the
    /// same email loses at the store's unique key and surfaces here as
    /// `DuplicateAccount` all the same.
    pub async fn register(&self, request: RegisterRequest) -> DomainResult<User> {
        if !lh_shared::validation::is_valid_email(&request.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if !lh_shared::validation::is_valid_password(&request.password) {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: lh_shared::validation::MIN_PASSWORD_LENGTH,
                max: usize::MAX,
            }
            .into());
        }
        if !lh_shared::validation::is_valid_name(&request.name) {
            return Err(ValidationError::InvalidLength {
                field: "name".to_string(),
                min: 1,
                max: lh_shared::validation::MAX_NAME_LENGTH,
            }
            .into());
        }
        if let Some(ref last_name) = request.last_name {
            if !lh_shared::validation::is_valid_name(last_name) {
                return Err(ValidationError::InvalidLength {
                    field: "last_name".to_string(),
                    min: 1,
                    max: lh_shared::validation::MAX_NAME_LENGTH,
                }
                .into());
            }
        }

        if request.password != request.password_confirm {
            return Err(AccountError::PasswordMismatch.into());
        }

        if self.user_repository.exists_by_email(&request.email).await? {
            return Err(AccountError::DuplicateAccount.into());
        }

        let password_hash = self.hash_password(&request.password)?;
        let activation_code = generate_activation_code();

        let user = User::new(
            request.email,
            password_hash,
            request.name,
            request.last_name,
            activation_code.clone(),
        );

        let user = match self.user_repository.create(user).await {
            Ok(user) => user,
            Err(DomainError::Conflict { .. }) => {
                return Err(AccountError::DuplicateAccount.into());
            }
            Err(e) => return Err(e),
        };

        tracing::info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            event = "account_registered",
            "New account registered, pending activation"
        );

        self.dispatch_mail(
            user.email.clone(),
            self.config.activation_subject.clone(),
            format!(
                "Welcome to LearnHub, {}!\n\nYour activation code: {}",
                user.name, activation_code
            ),
        );

        Ok(user)
    }

    /// Activate an account with the emailed code
    ///
    /// The lookup matches email and code in one predicate. A wrong code, an
    /// unknown email, and an already-activated account (code cleared) all
    /// fail the same way, so the endpoint cannot be used to probe which
    /// emails are registered.
    pub async fn activate(&self, email: &str, code: &str) -> DomainResult<()> {
        if code.len() != CODE_LENGTH {
            return Err(AccountError::InvalidCode.into());
        }

        let mut user = self
            .user_repository
            .find_by_email_and_code(email, code)
            .await?
            .ok_or(AccountError::InvalidCode)?;

        user.activate();
        self.user_repository.update(user).await?;

        tracing::info!(
            email = %mask_email(email),
            event = "account_activated",
            "Account activated"
        );

        Ok(())
    }

    /// Authenticate with email and password
    ///
    /// Fails `UnknownUser` for an unregistered email. A wrong password and
    /// an inactive account both fail `InvalidCredentials`: a correct
    /// password alone does not imply the account may log in, and the two
    /// cases are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthenticatedUser> {
        let user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::UnknownUser)?;

        if !self.verify_password(password, &user.password_hash)? {
            return Err(AccountError::InvalidCredentials.into());
        }

        if !user.is_active {
            tracing::warn!(
                email = %mask_email(email),
                event = "login_inactive_account",
                "Login rejected for inactive account"
            );
            return Err(AccountError::InvalidCredentials.into());
        }

        Ok(AuthenticatedUser::from(&user))
    }

    /// Reset-now password recovery
    ///
    /// Generates a new random password, overwrites the stored credential
    /// immediately, and emails the plaintext to the account address. The
    /// email is the only access path to the new credential.
    ///
    /// This mirrors the platform's original contract and is a known weak
    /// design: no token, no expiry, no proof of mailbox control beyond
    /// knowing a registered email. See DESIGN.md before changing it.
    pub async fn request_password_reset(&self, email: &str) -> DomainResult<()> {
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::UnknownUser)?;

        let new_password = generate_password();
        user.set_password_hash(self.hash_password(&new_password)?);
        self.user_repository.update(user).await?;

        tracing::info!(
            email = %mask_email(email),
            event = "password_reset",
            "Password reset; new credential dispatched by mail"
        );

        self.dispatch_mail(
            email.to_string(),
            self.config.recovery_subject.clone(),
            format!("Your new password: {}", new_password),
        );

        Ok(())
    }

    /// Change the password of an authenticated account
    pub async fn change_password(
        &self,
        actor_id: Uuid,
        old_password: &str,
        new_password: &str,
        new_password_confirm: &str,
    ) -> DomainResult<()> {
        let mut user = self
            .user_repository
            .find_by_id(actor_id)
            .await?
            .ok_or(AccountError::UnknownUser)?;

        if !self.verify_password(old_password, &user.password_hash)? {
            return Err(AccountError::WrongOldPassword.into());
        }

        if new_password != new_password_confirm {
            return Err(AccountError::PasswordMismatch.into());
        }

        if !lh_shared::validation::is_valid_password(new_password) {
            return Err(ValidationError::InvalidLength {
                field: "password".to_string(),
                min: lh_shared::validation::MIN_PASSWORD_LENGTH,
                max: usize::MAX,
            }
            .into());
        }

        user.set_password_hash(self.hash_password(new_password)?);
        self.user_repository.update(user).await?;

        Ok(())
    }

    fn hash_password(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.config.bcrypt_cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        bcrypt::verify(password, hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }

    /// Hand a message to the mailer without awaiting delivery.
    ///
    /// Dispatch failures are the mailer's concern (at-least-once retry);
    /// the enclosing account operation already succeeded.
    fn dispatch_mail(&self, recipient: String, subject: String, body: String) {
        let mailer = Arc::clone(&self.mailer);
        tokio::spawn(async move {
            if let Err(e) = mailer.send(&recipient, &subject, &body).await {
                tracing::warn!(
                    recipient = %mask_email(&recipient),
                    error = %e,
                    event = "mail_dispatch_failed",
                    "Mail handoff failed"
                );
            }
        });
    }
}

/// Mask an email address for logging: keep the first character and the
/// domain, hide the rest of the local part.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod mask_tests {
    use super::mask_email;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("ada@example.com"), "a***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_email("@example.com"), "***");
    }
}
