use std::fmt;
use uuid::Uuid;

use super::password::{HashScheme, PasswordDigest};

/// Represents a single registered identity
#[derive(Clone)]
pub struct UserRecord {
    id: Uuid,
    pub(super) username: String,
    pub(super) credentials: PasswordDigest,
    pub(super) phone_number: Option<String>,
}

impl UserRecord {
    /// Build a record from an already hashed password
    pub(super) fn new(username: String, credentials: PasswordDigest, phone_number: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            credentials,
            phone_number,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    /// Stored lowercase hex digest of the password
    pub fn password_hash(&self) -> &str {
        &self.credentials.hash
    }

    pub fn hash_scheme(&self) -> HashScheme {
        self.credentials.scheme()
    }

    /// Check a raw password against the stored digest
    pub fn verify_password(&self, password: &str) -> bool {
        self.credentials.verify(password)
    }
}

// Display form shown to users; credential material stays out of it
impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User(id={}, username={}, phone_number={})",
            self.id,
            self.username,
            self.phone_number.as_deref().unwrap_or("None")
        )
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("phone_number", &self.phone_number)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_omits_credentials() {
        let digest = HashScheme::Sha256.hash("secret1");
        let hash = digest.hash.clone();
        let record = UserRecord::new("alice".to_string(), digest, Some("555-0001".to_string()));

        let shown = record.to_string();
        assert_eq!(
            shown,
            format!("User(id={}, username=alice, phone_number=555-0001)", record.id())
        );
        assert!(!shown.contains("secret1"));
        assert!(!shown.contains(&hash));

        let debugged = format!("{:?}", record);
        assert!(!debugged.contains("secret1"));
        assert!(!debugged.contains(&hash));
    }

    #[test]
    fn test_display_without_phone() {
        let record = UserRecord::new("bob".to_string(), HashScheme::Sha256.hash("pass"), None);
        assert!(record.to_string().ends_with("phone_number=None)"));
        assert_eq!(record.phone_number(), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = UserRecord::new("a".to_string(), HashScheme::Sha256.hash("pass"), None);
        let b = UserRecord::new("a".to_string(), HashScheme::Sha256.hash("pass"), None);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.password_hash(), b.password_hash());
    }
}
