//! Auth errors.

use thiserror::Error;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Failure reported by the auth provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password.
    #[error("invalid login credentials")]
    InvalidCredentials,

    /// Sign-up with an email that already has an account.
    #[error("user already registered")]
    EmailTaken,

    /// Provider-specific failure message.
    #[error("{0}")]
    Rejected(String),
}

/// Sign-in form validation or provider failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignInError {
    /// Email or password left blank.
    #[error("please fill in all fields")]
    MissingFields,

    /// Provider rejected the credentials.
    #[error(transparent)]
    Provider(#[from] AuthError),
}

/// Sign-up form validation or provider failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignUpError {
    /// A required field was left blank.
    #[error("please fill in all fields")]
    MissingFields,

    /// Password and confirmation differ.
    #[error("password and confirmation do not match")]
    PasswordMismatch,

    /// Password shorter than [`MIN_PASSWORD_LENGTH`].
    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    /// Terms and conditions were not accepted.
    #[error("please accept the terms and conditions")]
    TermsNotAccepted,

    /// Provider rejected the sign-up.
    #[error(transparent)]
    Provider(#[from] AuthError),
}
