use super::ApiError;

const MAX_USERNAME_LEN: usize = 50;

/// Usernames are compared exactly as submitted; surrounding whitespace only
/// counts against blankness.
pub fn validate_username(username: &str) -> Result<&str, ApiError> {
    if username.trim().is_empty() {
        return Err(ApiError::validation("Username is required"));
    }

    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ApiError::validation(format!(
            "Username must be {MAX_USERNAME_LEN} characters or less"
        )));
    }

    Ok(username)
}

pub fn validate_password(password: &str) -> Result<&str, ApiError> {
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(password)
}

/// Event ids are positive; anything else can never match a stored event.
pub fn validate_event_id(id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::not_found("Event", id));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert_eq!(validate_username("alice").unwrap(), "alice");
        assert_eq!(validate_username("  bob ").unwrap(), "  bob ");
        assert!(validate_username("").is_err());
        assert!(validate_username("   ").is_err());
        assert!(validate_username(&"a".repeat(51)).is_err());
        assert!(validate_username(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("x").is_ok());
        assert!(validate_password(" spaces count ").is_ok());
        assert!(validate_password("").is_err());
    }

    #[test]
    fn test_validate_event_id() {
        assert!(validate_event_id(1).is_ok());
        assert!(matches!(validate_event_id(0), Err(ApiError::NotFound(_))));
        assert!(matches!(validate_event_id(-4), Err(ApiError::NotFound(_))));
    }
}
