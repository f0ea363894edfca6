use thiserror::Error;

/// Recoverable failures raised by directory operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Username already exists. Please choose a different one.")]
    DuplicateUsername,

    #[error("Password must be at least {min} characters long")]
    WeakPassword { min: usize },

    #[error("User not found")]
    UserNotFound,

    #[error("Password is incorrect")]
    InvalidCredentials,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DirectoryError::DuplicateUsername.to_string(),
            "Username already exists. Please choose a different one."
        );
        assert_eq!(
            DirectoryError::WeakPassword { min: 4 }.to_string(),
            "Password must be at least 4 characters long"
        );
        assert_eq!(DirectoryError::UserNotFound.to_string(), "User not found");
        assert_eq!(
            DirectoryError::InvalidCredentials.to_string(),
            "Password is incorrect"
        );
    }
}
