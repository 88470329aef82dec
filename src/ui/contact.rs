use iced::{
    widget::{button, column, text, text_input},
    Element, Length,
};
use thiserror::Error;

use super::sections::{MUTED, NAVY};
use crate::utils::{encode_mailto_component, is_valid_email};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in your {0}")]
    MissingField(&'static str),

    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    NameChanged(String),
    EmailChanged(String),
    MessageChanged(String),
    Submit,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: Option<String>,
}

impl ContactForm {
    /// Apply an edit. On `Submit`, returns the mailto link to open.
    pub fn update(&mut self, message: ContactMessage, recipient: &str) -> Option<String> {
        match message {
            ContactMessage::NameChanged(name) => self.name = name,
            ContactMessage::EmailChanged(email) => self.email = email,
            ContactMessage::MessageChanged(body) => self.message = body,
            ContactMessage::Submit => {
                return match self.mailto(recipient) {
                    Ok(link) => {
                        self.status = Some("Opening your mail client...".to_string());
                        Some(link)
                    }
                    Err(e) => {
                        self.status = Some(e.to_string());
                        None
                    }
                };
            }
        }
        self.status = None;
        None
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        Ok(())
    }

    pub fn mailto(&self, recipient: &str) -> Result<String, ContactError> {
        self.validate()?;

        let subject = format!("Portfolio contact from {}", self.name.trim());
        let body = format!(
            "{}\n\n{} <{}>",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );

        Ok(format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_mailto_component(&subject),
            encode_mailto_component(&body)
        ))
    }

    pub fn view(&self) -> Element<'_, ContactMessage> {
        let mut form = column![
            text("Name").size(14).color(NAVY),
            text_input("Your Name", &self.name)
                .on_input(ContactMessage::NameChanged)
                .padding(10),
            text("Email").size(14).color(NAVY),
            text_input("your.email@example.com", &self.email)
                .on_input(ContactMessage::EmailChanged)
                .padding(10),
            text("Message").size(14).color(NAVY),
            text_input("Your message...", &self.message)
                .on_input(ContactMessage::MessageChanged)
                .on_submit(ContactMessage::Submit)
                .padding(10),
            button(text("Send Message"))
                .on_press(ContactMessage::Submit)
                .width(Length::Fill)
                .padding([10, 20]),
        ]
        .spacing(8);

        if let Some(status) = &self.status {
            form = form.push(text(status).size(14).color(MUTED));
        }

        form.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's talk".to_string(),
            status: None,
        }
    }

    #[test]
    fn test_mailto_is_encoded() {
        let link = filled().mailto("vathsavayisai@gmail.com").unwrap();
        assert_eq!(
            link,
            "mailto:vathsavayisai@gmail.com\
             ?subject=Portfolio%20contact%20from%20Ada%20Lovelace\
             &body=Let%27s%20talk%0A%0AAda%20Lovelace%20%3Cada%40example.com%3E"
        );
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled();
        form.name = "  ".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField("name")));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingField("message")));
    }

    #[test]
    fn test_invalid_email() {
        let mut form = filled();
        form.email = "ada-at-example".to_string();
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn test_submit_sets_status() {
        let mut form = ContactForm::default();
        assert_eq!(form.update(ContactMessage::Submit, "me@example.com"), None);
        assert_eq!(form.status.as_deref(), Some("Please fill in your name"));

        form.update(ContactMessage::NameChanged("Ada".to_string()), "me@example.com");
        assert_eq!(form.status, None);
    }
}
