use crate::constants::CONTACT_ACK_MESSAGE;
use std::fmt;

/// Values read from the contact form. Nothing is sent anywhere; the page
/// logs the submission and thanks the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn acknowledgement(&self) -> &'static str {
        CONTACT_ACK_MESSAGE
    }
}

impl fmt::Display for ContactSubmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} <{}>: {:?}",
            self.first_name.trim(),
            self.last_name.trim(),
            self.email.trim(),
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_a_single_log_line() {
        let s = ContactSubmission::new("Ada ", "Lovelace", " ada@example.org", "hi\nthere");
        assert_eq!(s.to_string(), "Ada Lovelace <ada@example.org>: \"hi\\nthere\"");
        assert_eq!(
            s.acknowledgement(),
            "Thank you for your message. We will get back to you soon!"
        );
    }
}
