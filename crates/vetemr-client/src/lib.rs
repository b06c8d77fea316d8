//! Typed client for the VetEMR records service.
//!
//! This crate owns everything between the view layer and the wire: the
//! in-memory session slot, the REST gateway, and the error taxonomy views
//! map their states from.
//!
//! # Overview
//!
//! - [`SessionStore`] holds the authenticated session for the process
//!   lifetime. Watchers subscribe to the slot and wake exactly on sign-in,
//!   sign-out, and expiry.
//! - [`HttpGateway`] implements both service contracts ([`AuthApi`] and
//!   [`RecordsApi`]) over `reqwest`, attaching the bearer token while one is
//!   held and mapping HTTP outcomes onto [`GatewayError`].
//! - The contracts are traits so the view layer can be exercised entirely
//!   against in-memory fakes.
//!
//! # Guarantees
//!
//! - No retries, no caching: one operator action is at most one request per
//!   operation.
//! - Tokens never leave this crate and are never persisted.
//! - A 401 on an authenticated call clears the session before the error
//!   surfaces, so every watcher already sees the signed-out state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod error;
pub mod gateway;
pub mod session;

pub use api::{AuthApi, AuthGrant, Credentials, RecordsApi};
pub use error::{AuthError, GatewayError, Result};
pub use gateway::{DEFAULT_BASE_URL, HttpGateway};
pub use session::{Session, SessionStore};
