//! Auth provider interface.

use async_trait::async_trait;
use mockall::automock;

use crate::auth::{AuthError, User, UserProfile, UserRole};

/// External authentication and session service.
#[automock]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Establish a session for the given credentials.
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError>;

    /// Register a new account. Does not sign the user in.
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: UserProfile,
    ) -> Result<User, AuthError>;

    /// End the current session, if any.
    async fn sign_out(&self);

    /// The signed-in user.
    async fn current_user(&self) -> Option<User>;

    /// Whether the signed-in user is an administrator.
    async fn is_admin(&self) -> bool {
        self.current_user()
            .await
            .is_some_and(|user| user.role == UserRole::Admin)
    }
}
