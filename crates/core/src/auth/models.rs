//! Auth data models.

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    /// Regular shopper
    #[default]
    Customer,

    /// Store administrator
    Admin,
}

/// Signed-in user as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// User UUID
    pub uuid: UserUuid,

    /// Account email, lowercased
    pub email: String,

    /// Display name from the profile
    pub name: Option<String>,

    /// Phone number from the profile
    pub phone: Option<String>,

    /// Account role
    pub role: UserRole,
}

impl User {
    /// Whether the user may open the admin dashboard.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Profile details collected at sign-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// Full name
    pub name: String,

    /// Phone number
    pub phone: String,
}
