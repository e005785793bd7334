//! Session
//!
//! The signed-in user's profile, read once from storage and shared by every
//! consumer through [`SessionContext`]. Only the known profile fields are
//! kept; credentials and any other unknown fields in a stored profile are
//! dropped on load and never written back.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::storage::{Storage, StorageError};

/// Storage key the signed-in user's profile is persisted under.
pub const SESSION_KEY: &str = "loggedInUser";

/// Errors raised by session changes.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No user is signed in.
    #[error("no user is signed in")]
    NotSignedIn,

    /// The update was for a different user than the one signed in.
    #[error("profile {0} does not belong to the signed-in user")]
    WrongUser(u64),

    /// The storage backend rejected the write.
    #[error("failed to persist session")]
    Storage(#[from] StorageError),

    /// The profile could not be encoded.
    #[error("failed to encode session")]
    Encode(#[from] serde_json::Error),
}

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// User id
    #[serde(rename = "user_id")]
    pub id: u64,

    /// Display name
    #[serde(rename = "user_name")]
    pub name: String,

    /// Contact email
    #[serde(rename = "user_email")]
    pub email: String,

    /// Contact phone number
    #[serde(rename = "user_numberphone", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Date of birth as entered at sign-up
    #[serde(rename = "user_birthday", default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,

    /// Profile picture
    #[serde(rename = "user_imgurl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Id of the uploaded profile picture
    #[serde(rename = "user_img_id", default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
}

/// Process-wide access to the signed-in user.
#[derive(Debug)]
pub struct SessionContext<S: Storage> {
    storage: S,
    user: Option<SessionUser>,
}

impl<S: Storage> SessionContext<S> {
    /// Read the session from `storage`.
    ///
    /// A missing, unreadable or malformed profile means nobody is signed in.
    pub fn load(storage: S) -> Self {
        let user = match storage.get(SESSION_KEY) {
            Ok(Some(raw)) => serde_json::from_str::<SessionUser>(&raw)
                .inspect_err(|err| warn!(error = %err, "discarding malformed session"))
                .ok(),
            Ok(None) => None,
            Err(err) => {
                warn!(error = %err, "could not read session");
                None
            }
        };

        debug!(signed_in = user.is_some(), "session loaded");

        Self { storage, user }
    }

    /// The signed-in user, if any.
    pub fn current(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    /// Check if a user is signed in.
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Sign `user` in, replacing any previous session.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the profile could not be persisted.
    pub fn sign_in(&mut self, user: SessionUser) -> Result<(), SessionError> {
        self.persist(&user)?;

        debug!(user = user.id, "signed in");

        self.user = Some(user);

        Ok(())
    }

    /// Replace the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// - [`SessionError::NotSignedIn`]: nobody is signed in.
    /// - [`SessionError::WrongUser`]: `user` is not the signed-in user.
    /// - [`SessionError::Storage`]: the profile could not be persisted.
    pub fn update_profile(&mut self, user: SessionUser) -> Result<(), SessionError> {
        let current = self.user.as_ref().ok_or(SessionError::NotSignedIn)?;

        if current.id != user.id {
            return Err(SessionError::WrongUser(user.id));
        }

        self.persist(&user)?;
        self.user = Some(user);

        Ok(())
    }

    /// Sign out and delete the persisted profile.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionError`] if the persisted profile could not be deleted.
    pub fn sign_out(&mut self) -> Result<(), SessionError> {
        self.storage.remove(SESSION_KEY)?;

        if let Some(user) = self.user.take() {
            debug!(user = user.id, "signed out");
        }

        Ok(())
    }

    /// Consume the context, returning the backing storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self, user: &SessionUser) -> Result<(), SessionError> {
        let encoded = serde_json::to_string(user)?;

        self.storage.set(SESSION_KEY, &encoded)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::storage::MemoryStorage;

    use super::*;

    fn alice() -> SessionUser {
        SessionUser {
            id: 42,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: None,
            birthday: None,
            image_url: None,
            image_id: None,
        }
    }

    #[test]
    fn empty_storage_is_signed_out() {
        let session = SessionContext::load(MemoryStorage::new());

        assert!(!session.is_signed_in());
        assert_eq!(session.current(), None);
    }

    #[test]
    fn malformed_profile_is_signed_out() -> TestResult {
        let mut storage = MemoryStorage::new();
        storage.set(SESSION_KEY, "{\"user_id\":")?;

        assert!(!SessionContext::load(storage).is_signed_in());

        Ok(())
    }

    #[test]
    fn sign_in_survives_reload() -> TestResult {
        let mut session = SessionContext::load(MemoryStorage::new());

        session.sign_in(alice())?;

        let reloaded = SessionContext::load(session.into_storage());

        assert_eq!(reloaded.current(), Some(&alice()));

        Ok(())
    }

    #[test]
    fn stored_credentials_are_not_written_back() -> TestResult {
        let mut storage = MemoryStorage::new();
        storage.set(
            SESSION_KEY,
            r#"{"user_id":42,"user_name":"Alice","user_email":"alice@example.com","user_pass":"hunter2"}"#,
        )?;

        let mut session = SessionContext::load(storage);
        let mut user = session.current().cloned().ok_or("expected a user")?;
        user.phone = Some("0812345678".to_string());
        session.update_profile(user)?;

        let raw = session.into_storage().get(SESSION_KEY)?.unwrap_or_default();

        assert!(!raw.contains("user_pass"));
        assert!(raw.contains("0812345678"));

        Ok(())
    }

    #[test]
    fn stored_profile_fields_survive_update() -> TestResult {
        let mut storage = MemoryStorage::new();
        storage.set(
            SESSION_KEY,
            r#"{"user_id":42,"user_name":"A","user_email":"a@x","user_numberphone":"0812345678","user_birthday":"1990-01-01T00:00:00.000Z","user_imgurl":"i.jpg","user_img_id":"abc"}"#,
        )?;

        let mut session = SessionContext::load(storage);
        let mut user = session.current().cloned().ok_or("expected a user")?;

        assert_eq!(user.phone.as_deref(), Some("0812345678"));
        assert_eq!(user.birthday.as_deref(), Some("1990-01-01T00:00:00.000Z"));

        user.name = "Alice".to_string();
        session.update_profile(user)?;

        let raw = session.into_storage().get(SESSION_KEY)?.unwrap_or_default();
        let written: serde_json::Value = serde_json::from_str(&raw)?;

        assert_eq!(written["user_name"], "Alice");
        assert_eq!(written["user_numberphone"], "0812345678");
        assert_eq!(written["user_birthday"], "1990-01-01T00:00:00.000Z");
        assert_eq!(written["user_imgurl"], "i.jpg");
        assert_eq!(written["user_img_id"], "abc");

        Ok(())
    }

    #[test]
    fn update_profile_requires_the_signed_in_user() -> TestResult {
        let mut session = SessionContext::load(MemoryStorage::new());

        assert!(matches!(
            session.update_profile(alice()),
            Err(SessionError::NotSignedIn)
        ));

        session.sign_in(alice())?;

        let other = SessionUser {
            id: 7,
            ..alice()
        };

        assert!(matches!(
            session.update_profile(other),
            Err(SessionError::WrongUser(7))
        ));

        Ok(())
    }

    #[test]
    fn sign_out_removes_the_key() -> TestResult {
        let mut session = SessionContext::load(MemoryStorage::new());
        session.sign_in(alice())?;

        session.sign_out()?;

        assert!(!session.is_signed_in());
        assert!(!session.into_storage().contains_key(SESSION_KEY));

        Ok(())
    }
}
