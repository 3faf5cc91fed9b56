//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    auth::{
        AuthError, AuthProvider, MemoryAuthProvider, SignInForm, SignUpForm, User, UserProfile,
        UserRole, UserUuid,
    },
    cart::{Cart, CartChange, CartLine, CartStore, ListenerKey},
    catalog::{CatalogError, ProductCatalog, StaticCatalog},
    checkout::{
        CheckoutError, CheckoutField, CheckoutForm, FieldType, OrderQuote, PaymentMethod,
    },
    money::MoneyError,
    products::{Category, CategoryId, Product, ProductId},
    storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError},
};
