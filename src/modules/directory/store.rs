use log::debug;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::error::DirectoryError;
use super::password::{validate_password_length, HashScheme};
use super::record::UserRecord;
use crate::modules::config::DirectoryConfig;
use crate::modules::utils::logging::{log_auth_event, log_data_operation};
use crate::MIN_PASSWORD_LENGTH;

/// In-memory store of user records keyed by current username
#[derive(Debug)]
pub struct Directory {
    users: HashMap<String, UserRecord>,
    min_password_length: usize,
    hash_scheme: HashScheme,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new()
    }
}

impl Directory {
    /// Create an empty directory with the default password policy
    pub fn new() -> Self {
        Self::with_policy(MIN_PASSWORD_LENGTH, HashScheme::default())
    }

    pub fn with_policy(min_password_length: usize, hash_scheme: HashScheme) -> Self {
        Self {
            users: HashMap::new(),
            min_password_length,
            hash_scheme,
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::with_policy(config.min_password_length, config.hash_scheme)
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    /// Register a new user under a username nobody holds yet
    pub fn register(
        &mut self,
        username: &str,
        password: &str,
        phone_number: Option<String>,
    ) -> Result<&UserRecord, DirectoryError> {
        let min = self.min_password_length;
        let scheme = self.hash_scheme;

        match self.users.entry(username.to_string()) {
            Entry::Occupied(_) => {
                log_data_operation("register", username, false, Some("duplicate username"));
                Err(DirectoryError::DuplicateUsername)
            }
            Entry::Vacant(slot) => {
                // Validate before anything is hashed or built
                if let Err(e) = validate_password_length(password, min) {
                    log_data_operation("register", username, false, Some("weak password"));
                    return Err(e);
                }

                let record = UserRecord::new(username.to_string(), scheme.hash(password), phone_number);
                log_data_operation("register", username, true, None);
                Ok(slot.insert(record))
            }
        }
    }

    /// Verify a username/password pair and return the matching record
    pub fn authenticate(&self, username: &str, password: &str) -> Result<&UserRecord, DirectoryError> {
        self.verify_credentials("login", username, password)
    }

    /// Re-check the current password of a logged-in user, e.g. before rotation
    pub fn confirm_password(&self, username: &str, password: &str) -> Result<(), DirectoryError> {
        self.verify_credentials("password_confirmation", username, password)
            .map(|_| ())
    }

    fn verify_credentials(
        &self,
        event_type: &str,
        username: &str,
        password: &str,
    ) -> Result<&UserRecord, DirectoryError> {
        let Some(user) = self.users.get(username) else {
            log_auth_event(event_type, username, false, Some("user not found"));
            return Err(DirectoryError::UserNotFound);
        };

        if !user.verify_password(password) {
            log_auth_event(event_type, username, false, Some("invalid credentials"));
            return Err(DirectoryError::InvalidCredentials);
        }

        log_auth_event(event_type, username, true, None);
        Ok(user)
    }

    /// Replace the stored digest with one derived from a new password
    pub fn rotate_password(&mut self, username: &str, new_password: &str) -> Result<(), DirectoryError> {
        if let Err(e) = validate_password_length(new_password, self.min_password_length) {
            log_auth_event("password_rotation", username, false, Some("weak password"));
            return Err(e);
        }

        let scheme = self.hash_scheme;
        let Some(user) = self.users.get_mut(username) else {
            log_auth_event("password_rotation", username, false, Some("user not found"));
            return Err(DirectoryError::UserNotFound);
        };

        user.credentials = scheme.hash(new_password);
        log_auth_event("password_rotation", username, true, None);
        Ok(())
    }

    /// Change username and phone number of an existing record
    pub fn edit_profile(
        &mut self,
        username: &str,
        new_username: &str,
        new_phone_number: Option<String>,
    ) -> Result<(), DirectoryError> {
        if new_username != username && self.users.contains_key(new_username) {
            log_data_operation("edit_profile", username, false, Some("duplicate username"));
            return Err(DirectoryError::DuplicateUsername);
        }

        if new_username == username {
            let Some(user) = self.users.get_mut(username) else {
                log_data_operation("edit_profile", username, false, Some("user not found"));
                return Err(DirectoryError::UserNotFound);
            };
            user.phone_number = new_phone_number;
        } else {
            // Move the entry to its new key in one step
            let Some(mut user) = self.users.remove(username) else {
                log_data_operation("edit_profile", username, false, Some("user not found"));
                return Err(DirectoryError::UserNotFound);
            };
            user.username = new_username.to_string();
            user.phone_number = new_phone_number;
            self.users.insert(new_username.to_string(), user);
            debug!("Record re-keyed after rename");
        }

        log_data_operation("edit_profile", new_username, true, None);
        Ok(())
    }

    /// Pure lookup by current username
    pub fn get_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.users.get(username)
    }

    /// Remove a record and hand it back to the caller
    pub fn delete_user(&mut self, username: &str) -> Result<UserRecord, DirectoryError> {
        match self.users.remove(username) {
            Some(user) => {
                log_data_operation("delete_user", username, true, None);
                Ok(user)
            }
            None => {
                log_data_operation("delete_user", username, false, Some("user not found"));
                Err(DirectoryError::UserNotFound)
            }
        }
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// All live usernames, sorted
    pub fn usernames(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.users.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
