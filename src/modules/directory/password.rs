use constant_time_eq::constant_time_eq;
use pbkdf2::pbkdf2;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::error::DirectoryError;
use crate::{HmacSha256, DERIVED_KEY_LENGTH, PBKDF2_ITERATIONS, SALT_LENGTH};

/// How password digests are derived
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum HashScheme {
    /// Plain SHA-256 over the UTF-8 bytes, no salt
    #[default]
    Sha256,
    /// PBKDF2-HMAC-SHA256 with a fresh random salt per record
    SaltedPbkdf2Sha256,
}

/// Stored credential material for one record
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    pub hash: String,         // Lowercase hex digest
    pub salt: Option<String>, // Hex salt, only for the salted scheme
}

/// Function to check the minimum password length, counted in characters
pub fn validate_password_length(password: &str, min: usize) -> Result<(), DirectoryError> {
    if password.chars().count() < min {
        return Err(DirectoryError::WeakPassword { min });
    }
    Ok(())
}

/// Hashes the password with SHA-256 and renders it as lowercase hex
pub fn digest_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Function to derive a salted key from the password using PBKDF2
pub fn derive_key(password: &str, salt: &[u8]) -> Vec<u8> {
    let mut key = vec![0u8; DERIVED_KEY_LENGTH];
    pbkdf2::<HmacSha256>(password.as_bytes(), salt, PBKDF2_ITERATIONS, &mut key);
    key
}

impl HashScheme {
    /// Derive the stored digest for a raw password
    pub fn hash(&self, password: &str) -> PasswordDigest {
        match self {
            HashScheme::Sha256 => PasswordDigest {
                hash: digest_password(password),
                salt: None,
            },
            HashScheme::SaltedPbkdf2Sha256 => {
                let mut salt = [0u8; SALT_LENGTH];
                rand::thread_rng().fill_bytes(&mut salt);
                PasswordDigest {
                    hash: hex::encode(derive_key(password, &salt)),
                    salt: Some(hex::encode(salt)),
                }
            }
        }
    }
}

impl PasswordDigest {
    /// Check a candidate password against this digest
    pub fn verify(&self, password: &str) -> bool {
        match &self.salt {
            None => constant_time_eq(digest_password(password).as_bytes(), self.hash.as_bytes()),
            Some(salt_hex) => {
                let (Ok(salt), Ok(expected)) = (hex::decode(salt_hex), hex::decode(&self.hash))
                else {
                    return false;
                };
                constant_time_eq(&derive_key(password, &salt), &expected)
            }
        }
    }

    /// Scheme this digest was produced with
    pub fn scheme(&self) -> HashScheme {
        if self.salt.is_some() {
            HashScheme::SaltedPbkdf2Sha256
        } else {
            HashScheme::Sha256
        }
    }
}
