use bcrypt::{DEFAULT_COST, hash, verify};

use crate::error::WebError;

pub fn hash_password(password: &str) -> Result<String, WebError> {
    hash(password, DEFAULT_COST)
        .map_err(|e| WebError::InternalServerError(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, WebError> {
    verify(password, password_hash)
        .map_err(|e| WebError::InternalServerError(format!("Failed to verify password: {}", e)))
}

pub fn validate_password_strength(password: &str) -> Result<(), WebError> {
    if password.len() < 8 {
        return Err(WebError::BadRequest(
            "Password must be at least 8 characters long".to_string(),
        ));
    }

    let has_letter = password.chars().any(|c| c.is_alphabetic());
    let has_digit = password.chars().any(|c| c.is_numeric());

    if !has_letter || !has_digit {
        return Err(WebError::BadRequest(
            "Password must contain at least one letter and one number".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hashed = hash_password("pitlane42").expect("hash");
        assert!(verify_password("pitlane42", &hashed).expect("verify"));
        assert!(!verify_password("pitlane43", &hashed).expect("verify"));
    }

    #[test]
    fn test_password_strength() {
        assert!(validate_password_strength("pitlane42").is_ok());
        assert!(validate_password_strength("short1").is_err());
        assert!(validate_password_strength("onlyletters").is_err());
        assert!(validate_password_strength("12345678").is_err());
    }
}
