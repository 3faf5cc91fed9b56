//! `account` commands
//!
//! Accounts live in an in-process provider for the lifetime of one invocation, so these
//! commands check the forms and the sign-up/sign-in round trip rather than persist anything.

use std::io::Write;

use clap::{Args, Subcommand};

use storefront::auth::{AuthProvider, MemoryAuthProvider, SignInForm, SignUpForm};

use crate::errors::AppError;

/// Account commands.
#[derive(Debug, Subcommand)]
pub(crate) enum AccountCommand {
    /// Register an account, then sign in with it
    SignUp(SignUpArgs),
}

/// Sign-up form input.
#[derive(Debug, Args)]
pub(crate) struct SignUpArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Phone number
    #[arg(long)]
    pub phone: String,

    /// Password
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    pub password: String,

    /// Password confirmation
    #[arg(long, env = "STOREFRONT_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm_password: String,

    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,
}

impl From<SignUpArgs> for SignUpForm {
    fn from(args: SignUpArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            phone: args.phone,
            password: args.password,
            confirm_password: args.confirm_password,
            accept_terms: args.accept_terms,
        }
    }
}

pub(super) async fn run<W: Write>(command: AccountCommand, out: &mut W) -> Result<(), AppError> {
    match command {
        AccountCommand::SignUp(args) => sign_up(&MemoryAuthProvider::new(), args.into(), out).await,
    }
}

async fn sign_up<W: Write>(
    provider: &dyn AuthProvider,
    form: SignUpForm,
    out: &mut W,
) -> Result<(), AppError> {
    let registered = form.submit(provider).await?;

    let sign_in = SignInForm {
        email: form.email,
        password: form.password,
    };
    let user = sign_in.submit(provider).await?;

    writeln!(out, "signed up {} ({})", registered.email, registered.uuid)?;
    writeln!(
        out,
        "signed in as {}{}",
        user.name.as_deref().unwrap_or(&user.email),
        if provider.is_admin().await { " [admin]" } else { "" }
    )?;

    provider.sign_out().await;

    Ok(())
}
