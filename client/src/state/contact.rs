//! Contact form draft state.
//!
//! Submission never leaves the page: a complete draft is acknowledged
//! locally and cleared.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Message shown after a successful submission.
pub const ACKNOWLEDGEMENT: &str = "Thanks for your message! I'll get back to you soon.";

/// Input fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(ContactField),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub acknowledgement: Option<&'static str>,
}

impl ContactForm {
    /// Update one field. Editing hides a previous acknowledgement.
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
        self.acknowledgement = None;
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Acknowledge a complete draft and clear every field.
    ///
    /// Only emptiness is checked, matching the browser's `required`
    /// constraint: whitespace counts as content. On error the draft is left
    /// untouched.
    pub fn submit(&mut self) -> Result<&'static str, ContactError> {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.get(field).is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.acknowledgement = Some(ACKNOWLEDGEMENT);
        Ok(ACKNOWLEDGEMENT)
    }
}
