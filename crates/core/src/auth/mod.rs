//! Authentication
//!
//! The storefront does not authenticate anyone itself. It talks to an [`AuthProvider`] and
//! validates sign-in and sign-up forms before doing so.

mod errors;
mod forms;
mod memory;
mod models;
mod service;

pub use errors::*;
pub use forms::*;
pub use memory::MemoryAuthProvider;
pub use models::*;
pub use service::*;
