//! In-memory session state shared across the process.
//!
//! One slot holds the authenticated session for the process lifetime.
//! Nothing is ever written to disk: closing the program signs the operator
//! out, and there is no token refresh. All writes go through this store so
//! watchers wake exactly on present/absent transitions.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use vetemr_model::Identity;

use crate::api::{AuthApi, Credentials};
use crate::error::AuthError;

/// An authenticated session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The signed-in staff member.
    pub identity: Identity,
    /// Bearer token granted at sign-in. Private to this crate; the gateway
    /// is the only reader.
    pub(crate) token: Option<String>,
}

/// Shared handle to the process-wide session slot. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SessionStore {
    slot: Arc<watch::Sender<Option<Session>>>,
}

impl SessionStore {
    /// Creates an empty (signed-out) store.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            slot: Arc::new(sender),
        }
    }

    /// Signs in against `auth` and stores the granted session.
    ///
    /// On success the stored identity is returned; watchers wake unless the
    /// grant is byte-identical to the session already held. On failure the
    /// slot is left untouched, so a bad re-login does not sign the current
    /// operator out.
    pub async fn login<A: AuthApi>(
        &self,
        auth: &A,
        credentials: &Credentials,
    ) -> std::result::Result<Identity, AuthError> {
        let grant = auth.authenticate(credentials).await?;
        let identity = grant.identity.clone();
        let session = Session {
            identity: grant.identity,
            token: grant.token,
        };
        self.slot.send_if_modified(|slot| {
            if slot.as_ref() == Some(&session) {
                return false;
            }
            *slot = Some(session);
            true
        });
        info!(user = %identity.name, role = %identity.role, "signed in");
        Ok(identity)
    }

    /// Drops the session. Idempotent: a second call is a no-op and watchers
    /// are only notified on the actual present-to-absent transition.
    pub fn logout(&self) {
        if self.slot.send_if_modified(|slot| slot.take().is_some()) {
            info!("signed out");
        }
    }

    /// Clears the slot after the service reported the session invalid.
    /// Same transition as [`logout`](Self::logout), different log line.
    pub(crate) fn expire(&self) {
        if self.slot.send_if_modified(|slot| slot.take().is_some()) {
            warn!("session expired, signed out");
        }
    }

    /// The signed-in identity, if any.
    #[must_use]
    pub fn current_identity(&self) -> Option<Identity> {
        self.slot
            .borrow()
            .as_ref()
            .map(|session| session.identity.clone())
    }

    /// Whether a session is currently held.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Bearer token for outgoing requests, if the grant included one.
    pub(crate) fn token(&self) -> Option<String> {
        self.slot
            .borrow()
            .as_ref()
            .and_then(|session| session.token.clone())
    }

    /// Watches the session slot. The receiver wakes on sign-in, sign-out,
    /// and expiry; identical re-stores are suppressed.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.slot.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::AuthGrant;
    use vetemr_model::Role;

    struct FakeAuth {
        outcome: std::result::Result<AuthGrant, AuthError>,
    }

    impl AuthApi for FakeAuth {
        async fn authenticate(
            &self,
            _credentials: &Credentials,
        ) -> std::result::Result<AuthGrant, AuthError> {
            self.outcome.clone()
        }
    }

    fn grant() -> AuthGrant {
        AuthGrant {
            identity: Identity {
                id: "u1".to_string(),
                name: "Dana Reyes".to_string(),
                role: Role::Vet,
            },
            token: Some("tok-123".to_string()),
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            email: "dana@clinic.test".to_string(),
            password: "hunter2".to_string(),
        }
    }

    #[tokio::test]
    async fn login_stores_identity_and_token() {
        let store = SessionStore::new();
        let auth = FakeAuth {
            outcome: Ok(grant()),
        };

        let identity = store.login(&auth, &credentials()).await.unwrap();
        assert_eq!(identity.name, "Dana Reyes");
        assert_eq!(store.current_identity().unwrap().id, "u1");
        assert!(store.is_signed_in());
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[tokio::test]
    async fn failed_login_leaves_existing_session_alone() {
        let store = SessionStore::new();
        let good = FakeAuth {
            outcome: Ok(grant()),
        };
        store.login(&good, &credentials()).await.unwrap();

        let bad = FakeAuth {
            outcome: Err(AuthError::InvalidCredentials),
        };
        let err = store.login(&bad, &credentials()).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCredentials);
        assert!(store.is_signed_in());
    }

    #[tokio::test]
    async fn logout_is_idempotent_and_watchers_wake_once() {
        let store = SessionStore::new();
        let auth = FakeAuth {
            outcome: Ok(grant()),
        };
        let mut watcher = store.subscribe();
        watcher.borrow_and_update();

        store.logout();
        assert!(!watcher.has_changed().unwrap(), "logout while signed out");

        store.login(&auth, &credentials()).await.unwrap();
        assert!(watcher.has_changed().unwrap());
        watcher.borrow_and_update();

        // Identical grant: slot content does not change, watchers stay idle.
        store.login(&auth, &credentials()).await.unwrap();
        assert!(!watcher.has_changed().unwrap());

        store.logout();
        assert!(watcher.has_changed().unwrap());
        watcher.borrow_and_update();
        assert!(store.current_identity().is_none());

        store.logout();
        assert!(!watcher.has_changed().unwrap());
    }

    #[tokio::test]
    async fn expire_matches_logout_semantics() {
        let store = SessionStore::new();
        let auth = FakeAuth {
            outcome: Ok(grant()),
        };
        store.login(&auth, &credentials()).await.unwrap();
        let mut watcher = store.subscribe();
        watcher.borrow_and_update();

        store.expire();
        assert!(!store.is_signed_in());
        assert_eq!(store.token(), None);
        assert!(watcher.has_changed().unwrap(), "watchers wake on expiry");
        assert!(watcher.borrow_and_update().is_none());

        store.expire();
        assert!(!watcher.has_changed().unwrap(), "second expiry stays quiet");
    }
}
