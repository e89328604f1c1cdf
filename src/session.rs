//! Defines the user session passed to the screen controllers.
//!
//! There is no global auth context: a [Session] is created at sign-in,
//! handed explicitly to whatever needs it, and destroyed at sign-out. The
//! rest of the crate only ever reads the user's id, which namespaces the
//! per-user storage key.

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Unique user id, used to namespace the storage key.
    pub id: String,
    /// The user's display name.
    pub name: String,
    /// The user's email address. Informational only, never verified.
    pub email: String,
    /// URL of the user's avatar, if they have one.
    pub photo: Option<String>,
}

/// A live sign-in.
///
/// The session is the only holder of the user object. Dropping it (or
/// calling [Session::sign_out]) ends the sign-in; nothing else retains a
/// long-lived copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    /// Start a session for `user`.
    pub fn sign_in(user: User) -> Self {
        Self { user }
    }

    /// The signed-in user.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The storage key holding this user's transaction list.
    pub fn storage_key(&self) -> String {
        format!("@carteira:transactions_user:{}", self.user.id)
    }

    /// End the session, consuming it.
    pub fn sign_out(self) {}
}

#[cfg(test)]
mod tests {
    use crate::session::{Session, User};

    fn test_session() -> Session {
        Session::sign_in(User {
            id: "user-1".to_owned(),
            name: "Felipe".to_owned(),
            email: "felipe@example.com".to_owned(),
            photo: None,
        })
    }

    #[test]
    fn storage_key_is_namespaced_by_user_id() {
        let session = test_session();

        assert_eq!(session.storage_key(), "@carteira:transactions_user:user-1");
    }
}
