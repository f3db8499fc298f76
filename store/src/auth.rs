//! Single-account auth stub.
//!
//! One credentials record lives under [`USER_KEY`]; whoever registered it
//! counts as logged in while the record exists. Registering overwrites any
//! previous account, and logging out removes it. Passwords are stored in
//! the clear; there is no real authentication here.

use raddit_shared::{Credentials, User};
use tracing::info;

use crate::error::{Result, StoreError};
use crate::{Forum, USER_KEY};

impl Forum {
    /// Register an account and log it in. Both fields are required.
    pub fn register(&self, username: &str, password: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(StoreError::EmptyField { field: "username" });
        }
        if password.is_empty() {
            return Err(StoreError::EmptyField { field: "password" });
        }

        let credentials = Credentials {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.backend()
            .set(USER_KEY, &serde_json::to_string(&credentials)?)?;
        info!(username, "user registered");
        Ok(User::new(username))
    }

    /// Validate the given credentials against the registered account.
    pub fn login(&self, username: &str, password: &str) -> Result<User> {
        let stored = self
            .stored_credentials()?
            .ok_or(StoreError::NoRegisteredUser)?;
        if stored.username != username || stored.password != password {
            return Err(StoreError::InvalidCredentials);
        }
        info!(username, "login successful");
        Ok(User::new(username))
    }

    /// The logged-in user, if any.
    pub fn current_user(&self) -> Result<Option<User>> {
        Ok(self
            .stored_credentials()?
            .map(|c| User::new(c.username)))
    }

    /// Remove the account record, logging the user out.
    pub fn logout(&self) -> Result<()> {
        self.backend().remove(USER_KEY)?;
        info!("logged out");
        Ok(())
    }

    fn stored_credentials(&self) -> Result<Option<Credentials>> {
        match self.backend().get(USER_KEY)? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}
