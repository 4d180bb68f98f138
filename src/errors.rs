//! A custom failure kind layered on a plain validation check.

use thiserror::Error;

/// Minimum accepted name length, in characters.
pub const MIN_NAME_LEN: usize = 10;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("name is {actual} characters; at least 10 required")]
pub struct NameTooShortError {
    pub actual: usize,
}

/// Fails when `name` is shorter than [`MIN_NAME_LEN`] characters.
///
/// There is deliberately no recovery here; callers surface the error with
/// `?` or handle it themselves.
pub fn validate_name(name: &str) -> Result<(), NameTooShortError> {
    let actual = name.chars().count();
    if actual < MIN_NAME_LEN {
        return Err(NameTooShortError { actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_rejected() {
        assert_eq!(validate_name("love"), Err(NameTooShortError { actual: 4 }));
        assert_eq!(validate_name(""), Err(NameTooShortError { actual: 0 }));
    }

    #[test]
    fn boundary_length_is_accepted() {
        assert_eq!(validate_name("exactly10!"), Ok(()));
        assert_eq!(validate_name("more than ten chars"), Ok(()));
        assert!(validate_name("nine char").is_err());
    }

    #[test]
    fn length_is_counted_in_chars_not_bytes() {
        // Ten characters, more than ten bytes.
        assert_eq!(validate_name("grüße-welt"), Ok(()));
    }

    #[test]
    fn error_message_names_the_threshold() {
        let err = validate_name("hi").unwrap_err();
        assert_eq!(
            err.to_string(),
            "name is 2 characters; at least 10 required"
        );
    }
}
