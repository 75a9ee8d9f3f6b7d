use std::sync::Arc;

use tracing::info;

use atku_common::user::{ProfilePatch, Session, User};

use crate::credentials::CredentialVerifier;
use crate::error::StoreError;
use crate::port::{self, StatePort, TOKEN_KEY, USER_KEY};

/// The session container. A session is restored at open only when both
/// the `user` and `token` documents are present; login/registration
/// establish one, logout tears it down everywhere.
pub struct AuthStore {
    session: Option<Session>,
    verifier: Box<dyn CredentialVerifier>,
    port: Arc<dyn StatePort>,
}

impl AuthStore {
    pub(crate) fn open(port: Arc<dyn StatePort>, verifier: Box<dyn CredentialVerifier>) -> Self {
        let user: Option<User> = port::load(port.as_ref(), USER_KEY);
        let token: Option<String> = port::load(port.as_ref(), TOKEN_KEY);
        let session = match (user, token) {
            (Some(user), Some(token)) => Some(Session { user, token }),
            _ => None,
        };
        Self {
            session,
            verifier,
            port,
        }
    }

    /// Verify the credentials and establish a session. On mismatch the
    /// container stays exactly as it was.
    pub fn login(&mut self, email: &str, password: &str) -> Result<&Session, StoreError> {
        let user = self
            .verifier
            .verify(email, password)
            .ok_or(StoreError::InvalidCredentials)?;
        self.establish(user)
    }

    /// Register an account and establish a session exactly like login.
    pub fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<&Session, StoreError> {
        let user = self.verifier.register(name, email, password);
        self.establish(user)
    }

    fn establish(&mut self, user: User) -> Result<&Session, StoreError> {
        let session = Session::establish(user);
        port::save(self.port.as_ref(), USER_KEY, &session.user)?;
        port::save(self.port.as_ref(), TOKEN_KEY, &session.token)?;
        info!(email = %session.user.email, "session established");
        Ok(self.session.insert(session))
    }

    /// Clear the in-memory session and both persisted documents,
    /// unconditionally.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.session = None;
        self.port.delete(USER_KEY)?;
        self.port.delete(TOKEN_KEY)?;
        info!("session cleared");
        Ok(())
    }

    /// Shallow-merge the patch into the active user and persist it.
    pub fn update_profile(&mut self, patch: ProfilePatch) -> Result<&User, StoreError> {
        let session = self.session.as_mut().ok_or(StoreError::NotAuthenticated)?;
        session.user.apply(patch);
        port::save(self.port.as_ref(), USER_KEY, &session.user)?;
        Ok(&session.user)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(User::is_admin)
    }
}
