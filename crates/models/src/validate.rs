//! Field rules shared by the entity constructors.

use crate::errors::ModelError;

/// Non-blank after trimming.
pub fn required(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

/// At most `max` characters (not bytes).
pub fn max_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

pub fn required_max(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    required(field, value)?;
    max_len(field, value, max)
}

/// Loose address check: one `@`, non-empty local part, dotted domain without spaces.
pub fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else { return false };
    if local.is_empty() || domain.contains('@') || value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut labels = domain.split('.');
    let first_ok = labels.next().is_some_and(|l| !l.is_empty());
    let rest: Vec<&str> = labels.collect();
    first_ok && !rest.is_empty() && rest.iter().all(|l| !l.is_empty())
}

pub fn email(field: &str, value: &str) -> Result<(), ModelError> {
    if !is_email(value) {
        return Err(ModelError::Validation(format!("{field} is not a valid email address")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_email("jane@example.com"));
        assert!(is_email("a.b+c@mail.example.co"));
        assert!(!is_email("jane"));
        assert!(!is_email("jane@"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("jane@example"));
        assert!(!is_email("jane@@example.com"));
        assert!(!is_email("jane doe@example.com"));
        assert!(!is_email("jane@example..com"));
    }

    #[test]
    fn max_len_counts_chars() {
        assert!(max_len("name", "ééé", 3).is_ok());
        assert!(max_len("name", "éééé", 3).is_err());
    }

    #[test]
    fn required_rejects_whitespace() {
        assert!(required("message", "   ").is_err());
        assert!(required("message", " hi ").is_ok());
    }
}
