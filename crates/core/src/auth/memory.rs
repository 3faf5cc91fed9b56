//! In-process auth provider.

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::auth::{AuthError, AuthProvider, User, UserProfile, UserRole, UserUuid};

#[derive(Debug)]
struct Account {
    password: String,
    user: User,
}

#[derive(Debug, Default)]
struct State {
    accounts: FxHashMap<String, Account>,
    current: Option<User>,
}

/// Auth provider that keeps accounts in memory.
///
/// Stands in for the hosted auth service in demos and tests. Passwords are held in plain
/// text, so never point this at real user data.
#[derive(Debug, Default)]
pub struct MemoryAuthProvider {
    state: RwLock<State>,
}

impl MemoryAuthProvider {
    /// Create a provider with no accounts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an administrator account.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::EmailTaken`] if the email is already registered.
    pub async fn register_admin(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.register(email, password, UserProfile::default(), UserRole::Admin)
            .await
    }

    async fn register(
        &self,
        email: &str,
        password: &str,
        profile: UserProfile,
        role: UserRole,
    ) -> Result<User, AuthError> {
        let key = normalise_email(email);
        let mut state = self.state.write().await;

        if state.accounts.contains_key(&key) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            uuid: UserUuid::now_v7(),
            email: key.clone(),
            name: Some(profile.name).filter(|name| !name.is_empty()),
            phone: Some(profile.phone).filter(|phone| !phone.is_empty()),
            role,
        };

        state.accounts.insert(
            key,
            Account {
                password: password.to_string(),
                user: user.clone(),
            },
        );

        info!(user = %user.uuid, ?role, "account registered");

        Ok(user)
    }
}

fn normalise_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl AuthProvider for MemoryAuthProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<User, AuthError> {
        let mut state = self.state.write().await;

        let user = state
            .accounts
            .get(&normalise_email(email))
            .filter(|account| account.password == password)
            .map(|account| account.user.clone())
            .ok_or(AuthError::InvalidCredentials)?;

        debug!(user = %user.uuid, "signed in");

        state.current = Some(user.clone());

        Ok(user)
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: UserProfile,
    ) -> Result<User, AuthError> {
        self.register(email, password, profile, UserRole::Customer)
            .await
    }

    async fn sign_out(&self) {
        if let Some(user) = self.state.write().await.current.take() {
            debug!(user = %user.uuid, "signed out");
        }
    }

    async fn current_user(&self) -> Option<User> {
        self.state.read().await.current.clone()
    }
}
