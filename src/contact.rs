use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const ACKNOWLEDGEMENT: &str = "Message sent successfully!";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("{0} is required")]
    MissingField(ContactField),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// The `name` attribute of the matching form input.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ContactError::UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
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

    /// Input change handler: `name` is the input's `name` attribute.
    pub fn update(&mut self, name: &str, value: String) -> Result<(), ContactError> {
        let field = name.parse()?;
        self.set(field, value);
        Ok(())
    }

    pub fn missing_field(&self) -> Option<ContactField> {
        ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).is_empty())
    }

    /// Takes the submitted values and leaves every field empty.
    ///
    /// Mirrors the inputs' `required` attribute: an empty field leaves the
    /// form untouched, whitespace counts as filled.
    pub fn submit(&mut self) -> Result<ContactForm, ContactError> {
        if let Some(field) = self.missing_field() {
            return Err(ContactError::MissingField(field));
        }
        Ok(std::mem::take(self))
    }

    /// A `mailto:` draft carrying the submitted message.
    pub fn mailto_draft(&self, to: &str) -> String {
        let body = format!(
            "Name: {}\nEmail: {}\n\n{}",
            self.name, self.email, self.message
        );
        format!(
            "mailto:{to}?subject={}&body={}",
            urlencoding::encode(&self.subject),
            urlencoding::encode(&body)
        )
    }
}

pub fn mailto_link(address: &str) -> String {
    format!("mailto:{address}")
}

/// `wa.me` deep link with a pre-filled message.
pub fn whatsapp_link(number: &str, text: &str) -> String {
    let digits = number.chars().filter(char::is_ascii_digit).collect::<String>();
    format!("https://wa.me/{digits}?text={}", urlencoding::encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            subject: "Logo & brand".to_string(),
            message: "Can you help?".to_string(),
        }
    }

    #[test]
    fn test_update_by_input_name() {
        let mut form = ContactForm::default();
        form.update("name", "Ada".to_string()).unwrap();
        form.update("email", "ada@example.com".to_string()).unwrap();
        form.update("subject", "Hi".to_string()).unwrap();
        form.update("message", "Hello there".to_string()).unwrap();
        assert_eq!(form.name, "Ada");
        assert_eq!(form.email, "ada@example.com");
        assert_eq!(form.subject, "Hi");
        assert_eq!(form.message, "Hello there");

        // later input replaces earlier value
        form.update("name", "Ada L.".to_string()).unwrap();
        assert_eq!(form.get(ContactField::Name), "Ada L.");
    }

    #[test]
    fn test_update_unknown_field() {
        let mut form = ContactForm::default();
        assert_eq!(
            form.update("phone", "123".to_string()),
            Err(ContactError::UnknownField("phone".to_string()))
        );
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_submit_resets_all_fields() {
        let mut form = filled();
        let sent = form.submit().unwrap();
        assert_eq!(sent, filled());
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.subject, "");
        assert_eq!(form.message, "");
    }

    #[test]
    fn test_submit_requires_every_field() {
        let mut form = filled();
        form.subject = String::new();
        assert_eq!(
            form.submit(),
            Err(ContactError::MissingField(ContactField::Subject))
        );
        // nothing was cleared
        assert_eq!(form.name, "John Doe");

        let mut empty = ContactForm::default();
        assert_eq!(
            empty.submit(),
            Err(ContactError::MissingField(ContactField::Name))
        );
    }

    #[test]
    fn test_whitespace_field_still_submits() {
        let mut form = filled();
        form.subject = "   ".to_string();
        let sent = form.submit().unwrap();
        assert_eq!(sent.subject, "   ");
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_no_email_format_check() {
        let mut form = filled();
        form.email = "not-an-email".to_string();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_whatsapp_link() {
        assert_eq!(
            whatsapp_link("2348100351157", "Hello Isamah, I'm interested in your services"),
            "https://wa.me/2348100351157?text=Hello%20Isamah%2C%20I%27m%20interested%20in%20your%20services"
        );
        assert_eq!(
            whatsapp_link("+234 810 035 1157", "hi"),
            "https://wa.me/2348100351157?text=hi"
        );
    }

    #[test]
    fn test_mailto_links() {
        assert_eq!(
            mailto_link("isamahwilliams9@gmail.com"),
            "mailto:isamahwilliams9@gmail.com"
        );
        assert_eq!(
            filled().mailto_draft("me@example.com"),
            "mailto:me@example.com?subject=Logo%20%26%20brand&body=Name%3A%20John%20Doe%0AEmail%3A%20john%40example.com%0A%0ACan%20you%20help%3F"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(ContactField::Email).to_string(),
            "email is required"
        );
    }
}
