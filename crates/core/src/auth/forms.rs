//! Sign-in and sign-up forms.

use crate::auth::{
    AuthProvider, MIN_PASSWORD_LENGTH, SignInError, SignUpError, User, UserProfile,
};

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Sign-in form input.
#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    /// Account email
    pub email: String,

    /// Account password
    pub password: String,
}

impl SignInForm {
    /// Check the form without contacting the provider.
    ///
    /// # Errors
    ///
    /// Returns [`SignInError::MissingFields`] if email or password is blank.
    pub fn validate(&self) -> Result<(), SignInError> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err(SignInError::MissingFields);
        }

        Ok(())
    }

    /// Validate, then sign in through `provider`. Invalid forms never reach the provider.
    ///
    /// # Errors
    ///
    /// Returns a validation error or the provider's failure.
    pub async fn submit(&self, provider: &dyn AuthProvider) -> Result<User, SignInError> {
        self.validate()?;

        Ok(provider.sign_in(self.email.trim(), &self.password).await?)
    }
}

/// Sign-up form input.
#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    /// Full name
    pub name: String,

    /// Account email
    pub email: String,

    /// Phone number
    pub phone: String,

    /// Chosen password
    pub password: String,

    /// Password typed again
    pub confirm_password: String,

    /// Whether the terms and conditions were accepted
    pub accept_terms: bool,
}

impl SignUpForm {
    /// Check the form without contacting the provider.
    ///
    /// Checks run in order: required fields, confirmation, length, terms.
    ///
    /// # Errors
    ///
    /// Returns the first [`SignUpError`] the form violates.
    pub fn validate(&self) -> Result<(), SignUpError> {
        let required = [&self.name, &self.email, &self.phone];

        if required.into_iter().any(|field| is_blank(field))
            || self.password.is_empty()
            || self.confirm_password.is_empty()
        {
            return Err(SignUpError::MissingFields);
        }

        if self.password != self.confirm_password {
            return Err(SignUpError::PasswordMismatch);
        }

        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(SignUpError::PasswordTooShort);
        }

        if !self.accept_terms {
            return Err(SignUpError::TermsNotAccepted);
        }

        Ok(())
    }

    /// Validate, then register through `provider`. Invalid forms never reach the provider.
    ///
    /// # Errors
    ///
    /// Returns a validation error or the provider's failure.
    pub async fn submit(&self, provider: &dyn AuthProvider) -> Result<User, SignUpError> {
        self.validate()?;

        let profile = UserProfile {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
        };

        Ok(provider
            .sign_up(self.email.trim(), &self.password, profile)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::auth::{AuthError, MockAuthProvider, UserRole, UserUuid};

    use super::*;

    fn valid_sign_up() -> SignUpForm {
        SignUpForm {
            name: "Siti".to_string(),
            email: "siti@example.com".to_string(),
            phone: "08123456789".to_string(),
            password: "rahasia1".to_string(),
            confirm_password: "rahasia1".to_string(),
            accept_terms: true,
        }
    }

    fn user(email: &str) -> User {
        User {
            uuid: UserUuid::now_v7(),
            email: email.to_string(),
            name: None,
            phone: None,
            role: UserRole::Customer,
        }
    }

    #[test]
    fn sign_in_requires_both_fields() {
        let form = SignInForm {
            email: "  ".to_string(),
            password: "secret".to_string(),
        };

        assert_eq!(form.validate(), Err(SignInError::MissingFields));
    }

    #[test]
    fn sign_up_accepts_valid_form() {
        assert_eq!(valid_sign_up().validate(), Ok(()));
    }

    #[test]
    fn sign_up_rejects_blank_name() {
        let form = SignUpForm {
            name: String::new(),
            ..valid_sign_up()
        };

        assert_eq!(form.validate(), Err(SignUpError::MissingFields));
    }

    #[test]
    fn sign_up_rejects_mismatched_confirmation() {
        let form = SignUpForm {
            confirm_password: "rahasia2".to_string(),
            ..valid_sign_up()
        };

        assert_eq!(form.validate(), Err(SignUpError::PasswordMismatch));
    }

    #[test]
    fn sign_up_rejects_short_password() {
        let form = SignUpForm {
            password: "abc".to_string(),
            confirm_password: "abc".to_string(),
            ..valid_sign_up()
        };

        assert_eq!(form.validate(), Err(SignUpError::PasswordTooShort));
    }

    #[test]
    fn sign_up_requires_terms() {
        let form = SignUpForm {
            accept_terms: false,
            ..valid_sign_up()
        };

        assert_eq!(form.validate(), Err(SignUpError::TermsNotAccepted));
    }

    #[tokio::test]
    async fn invalid_sign_in_never_reaches_provider() {
        let mut provider = MockAuthProvider::new();
        provider.expect_sign_in().never();

        let result = SignInForm::default().submit(&provider).await;

        assert_eq!(result, Err(SignInError::MissingFields));
    }

    #[tokio::test]
    async fn provider_errors_are_passed_through() {
        let mut provider = MockAuthProvider::new();
        provider
            .expect_sign_in()
            .returning(|_, _| Err(AuthError::InvalidCredentials));

        let form = SignInForm {
            email: "siti@example.com".to_string(),
            password: "wrong".to_string(),
        };

        assert_eq!(
            form.submit(&provider).await,
            Err(SignInError::Provider(AuthError::InvalidCredentials))
        );
    }

    #[tokio::test]
    async fn sign_up_sends_trimmed_profile() -> TestResult {
        let mut provider = MockAuthProvider::new();
        provider
            .expect_sign_up()
            .withf(|email, _, profile| email == "siti@example.com" && profile.name == "Siti")
            .times(1)
            .returning(|email, _, _| Ok(user(email)));

        let form = SignUpForm {
            name: " Siti ".to_string(),
            email: "siti@example.com ".to_string(),
            ..valid_sign_up()
        };

        let created = form.submit(&provider).await?;

        assert_eq!(created.email, "siti@example.com");

        Ok(())
    }
}
