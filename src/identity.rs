//! Identity Gate - resolves the caller's identity for every operation
//!
//! Every lifecycle operation starts here. The identity is threaded
//! explicitly into the service as a parameter; there is no ambient
//! "current user" anywhere in the crate.
//!
//! # Example
//!
//! ```rust
//! use veredicto::identity::{IdentityProvider, RequestContext, TokenIdentityProvider, UserId};
//!
//! let provider = TokenIdentityProvider::new();
//! provider.register("token-abc", UserId::new("user-1"));
//!
//! let ctx = RequestContext::with_token("token-abc");
//! let caller = provider.authenticate(&ctx).unwrap();
//! assert_eq!(caller.as_str(), "user-1");
//! ```

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Opaque identifier of an authenticated user.
///
/// Owners are compared for equality only; the crate never inspects the
/// contents of the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a user ID from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Inbound request context carrying the caller's credential, if any.
///
/// Transport-agnostic: whatever layer receives the request extracts the
/// bearer token and builds one of these.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    token: Option<String>,
}

impl RequestContext {
    /// Context with no credential (anonymous caller).
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { token: None }
    }

    /// Context carrying a bearer token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// The bearer token, if present.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Resolves a request context to an authenticated user.
///
/// Failure short-circuits the operation with `Error::Unauthenticated`
/// before any side effect is performed.
pub trait IdentityProvider: Send + Sync {
    /// Authenticate the caller.
    ///
    /// # Errors
    ///
    /// Returns `Error::Unauthenticated` when the context carries no
    /// credential or the credential does not resolve to a user.
    fn authenticate(&self, ctx: &RequestContext) -> Result<UserId>;
}

/// In-memory token-to-user provider for tests and embedding.
///
/// Real session issuance, credential storage, and token refresh live in
/// an external authentication provider; this implementation only maps
/// already-issued tokens to user IDs.
#[derive(Debug, Default)]
pub struct TokenIdentityProvider {
    tokens: DashMap<String, UserId>,
}

impl TokenIdentityProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token for a user. Overwrites any existing mapping.
    pub fn register(&self, token: impl Into<String>, user: UserId) {
        self.tokens.insert(token.into(), user);
    }

    /// Revoke a token. No-op if the token is unknown.
    pub fn revoke(&self, token: &str) {
        self.tokens.remove(token);
    }
}

impl IdentityProvider for TokenIdentityProvider {
    fn authenticate(&self, ctx: &RequestContext) -> Result<UserId> {
        let token = ctx.token().ok_or(Error::Unauthenticated)?;
        self.tokens
            .get(token)
            .map(|entry| entry.value().clone())
            .ok_or(Error::Unauthenticated)
    }
}
