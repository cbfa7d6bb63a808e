//! Contact form state
//!
//! Controlled-input state for the contact page. Submitting only logs the
//! payload; nothing is sent anywhere and nothing is validated.

use serde::Serialize;
use serde_json::{json, Value};

/// Inputs on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn name(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

/// Current form values; a fresh, empty form on every mount
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Log the form contents and return the logged payload
    pub fn submit(&self) -> Value {
        let payload = json!({
            "name": self.name,
            "email": self.email,
            "message": self.message,
        });
        tracing::info!(payload = %payload, "Contact form submitted");
        payload
    }
}
