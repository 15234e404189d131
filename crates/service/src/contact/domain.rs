use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use models::{contact::NewContact, validate};

pub const REQUIRED: &str = "This field is required.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";
pub const SUCCESS_MESSAGE: &str = "Thank you for your message. We will get back to you soon!";

pub const FULL_NAME_MAX: usize = 100;
pub const EMAIL_MAX: usize = 254;
pub const PHONE_MAX: usize = 20;

/// Field name → messages, in field-name order.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Raw form body; absent fields deserialize as empty.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactInput {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub message: String,
}

fn too_long(max: usize, len: usize) -> String {
    format!("Ensure this value has at most {max} characters (it has {len}).")
}

fn check(errors: &mut FieldErrors, field: &str, value: &str, max: Option<usize>) {
    if value.is_empty() {
        errors.entry(field.to_string()).or_default().push(REQUIRED.to_string());
        return;
    }
    if let Some(max) = max {
        if validate::max_len(field, value, max).is_err() {
            errors.entry(field.to_string()).or_default().push(too_long(max, value.chars().count()));
        }
    }
}

/// Trim and validate; all field errors are collected, not just the first.
pub fn validate(input: &ContactInput) -> Result<NewContact, FieldErrors> {
    let full_name = input.full_name.trim();
    let email = input.email.trim();
    let phone_number = input.phone_number.trim();
    let message = input.message.trim();

    let mut errors = FieldErrors::new();
    check(&mut errors, "full_name", full_name, Some(FULL_NAME_MAX));
    check(&mut errors, "email", email, Some(EMAIL_MAX));
    if !email.is_empty() && !validate::is_email(email) {
        errors.entry("email".to_string()).or_default().push(INVALID_EMAIL.to_string());
    }
    check(&mut errors, "phone_number", phone_number, Some(PHONE_MAX));
    check(&mut errors, "message", message, None);

    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewContact {
        full_name: full_name.to_string(),
        email: email.to_string(),
        phone_number: phone_number.to_string(),
        message: message.to_string(),
    })
}

/// Initial message for the contact form: an explicit `message` wins, else `item` (or
/// `subject`) is templated in. Empty when neither is given.
pub fn prefill_message(message: Option<&str>, item: Option<&str>, subject: Option<&str>) -> String {
    if let Some(m) = message.filter(|m| !m.is_empty()) {
        return m.to_string();
    }
    match item.filter(|i| !i.is_empty()).or(subject.filter(|s| !s.is_empty())) {
        Some(item) => format!("I'm interested in {item}. Please share more details."),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactInput {
        ContactInput {
            full_name: "  Jane Doe ".into(),
            email: "jane@example.com".into(),
            phone_number: "+1 555 0100".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn trims_accepted_values() {
        let c = validate(&valid()).unwrap();
        assert_eq!(c.full_name, "Jane Doe");
    }

    #[test]
    fn each_missing_field_is_named() {
        for field in ["full_name", "email", "phone_number", "message"] {
            let mut input = valid();
            match field {
                "full_name" => input.full_name = "   ".into(),
                "email" => input.email.clear(),
                "phone_number" => input.phone_number.clear(),
                _ => input.message.clear(),
            }
            let errors = validate(&input).unwrap_err();
            assert_eq!(errors.len(), 1, "{field}");
            assert_eq!(errors[field], vec![REQUIRED.to_string()]);
        }
    }

    #[test]
    fn collects_all_errors() {
        let errors = validate(&ContactInput::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn bad_email_and_long_phone() {
        let input = ContactInput { email: "nope".into(), phone_number: "1".repeat(21), ..valid() };
        let errors = validate(&input).unwrap_err();
        assert_eq!(errors["email"], vec![INVALID_EMAIL.to_string()]);
        assert_eq!(errors["phone_number"], vec!["Ensure this value has at most 20 characters (it has 21).".to_string()]);
    }

    #[test]
    fn prefill_rules() {
        assert_eq!(prefill_message(Some("Hi"), Some("Cloud"), None), "Hi");
        assert_eq!(
            prefill_message(None, Some("Cloud"), Some("Other")),
            "I'm interested in Cloud. Please share more details."
        );
        assert_eq!(
            prefill_message(Some(""), Some(""), Some("Rust")),
            "I'm interested in Rust. Please share more details."
        );
        assert_eq!(prefill_message(None, None, None), "");
    }
}
