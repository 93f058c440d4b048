//! Contact Form State
//!
//! Field values, validation and the submit lifecycle. Submission is
//! simulated: nothing leaves the browser.

use std::fmt;

use thiserror::Error;

/// How long the simulated submission takes
pub const SUBMIT_DELAY_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(ContactField),

    #[error("enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    /// Last submission went through; cleared on the next edit
    Sent,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Every problem with the current values, in field order
    pub fn validate(&self) -> Result<(), Vec<FormError>> {
        let mut errors: Vec<FormError> = ContactField::ALL
            .iter()
            .filter(|field| self.get(**field).trim().is_empty())
            .map(|field| FormError::Missing(*field))
            .collect();

        if !self.email.trim().is_empty() && !looks_like_email(&self.email) {
            errors.push(FormError::InvalidEmail);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// `local@domain.tld` with no whitespace
fn looks_like_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    #[test]
    fn test_complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_missing_fields_are_listed() {
        let mut form = filled();
        form.set(ContactField::Name, "  ".to_string());
        form.set(ContactField::Message, String::new());

        assert_eq!(
            form.validate(),
            Err(vec![
                FormError::Missing(ContactField::Name),
                FormError::Missing(ContactField::Message),
            ])
        );
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "ada@", "@example.com", "ada@example", "a b@example.com", "a@b@c.com"] {
            let mut form = filled();
            form.set(ContactField::Email, bad.to_string());
            assert_eq!(form.validate(), Err(vec![FormError::InvalidEmail]), "{}", bad);
        }
    }

    #[test]
    fn test_reset_clears_every_field() {
        let mut form = filled();
        form.reset();
        assert!(ContactField::ALL.iter().all(|f| form.get(*f).is_empty()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::Missing(ContactField::Email).to_string(), "Email is required");
        assert_eq!(FormError::InvalidEmail.to_string(), "enter a valid email address");
    }
}
