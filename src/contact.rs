use thiserror::Error;

/// Subject used when the visitor leaves the field blank.
pub const DEFAULT_SUBJECT: &str = "Contact from Portfolio";
pub const MISSING_INFORMATION_HINT: &str = "Please fill in your name, email, and message.";

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing Information")]
    MissingInformation,
}

/// Hands URLs to whatever the platform uses for `mailto:`, `tel:` and web
/// links. Fire-and-forget: nothing comes back.
pub trait LinkLauncher {
    fn open(&self, url: &str);
}

/// A message ready for the visitor's mail client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailDraft {
    pub subject: String,
    pub body: String,
}

impl MailDraft {
    pub fn mailto_url(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_component(&self.subject),
            encode_component(&self.body)
        )
    }
}

/// Validate the contact form and compose the message.
pub fn submit(name: &str, email: &str, subject: &str, message: &str) -> Result<MailDraft, FormError> {
    if name.trim().is_empty() || email.trim().is_empty() || message.trim().is_empty() {
        return Err(FormError::MissingInformation);
    }
    let subject = match subject.trim() {
        "" => DEFAULT_SUBJECT,
        s => s,
    };
    Ok(MailDraft {
        subject: subject.to_string(),
        body: format!("Name: {name}\nEmail: {email}\n\nMessage:\n{message}"),
    })
}

/// Validate, compose and open the mail client addressed to `recipient`.
pub fn send(
    launcher: &impl LinkLauncher,
    recipient: &str,
    name: &str,
    email: &str,
    subject: &str,
    message: &str,
) -> Result<MailDraft, FormError> {
    let draft = submit(name, email, subject, message)?;
    log::info!("opening mail client for {:?}", draft.subject);
    launcher.open(&draft.mailto_url(recipient));
    Ok(draft)
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}

pub fn tel(phone: &str) -> String {
    let digits = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect::<String>();
    format!("tel:{digits}")
}

/// Percent-encode everything outside the URI component safe set. Keeps
/// `!*'()` unescaped so links match what `encodeURIComponent` produces.
fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingLauncher {
        opened: RefCell<Vec<String>>,
    }

    impl LinkLauncher for RecordingLauncher {
        fn open(&self, url: &str) {
            self.opened.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_missing_name() {
        assert_eq!(
            submit("", "a@b.com", "", "hi"),
            Err(FormError::MissingInformation)
        );
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        assert_eq!(
            submit("A", "   ", "Job", "hi"),
            Err(FormError::MissingInformation)
        );
        assert_eq!(
            submit("A", "a@b.com", "Job", "\n\t "),
            Err(FormError::MissingInformation)
        );
        assert_eq!(FormError::MissingInformation.to_string(), "Missing Information");
    }

    #[test]
    fn test_blank_subject_defaults() {
        let draft = submit("A", "a@b.com", "", "hi").unwrap();
        assert_eq!(draft.subject, DEFAULT_SUBJECT);
        let draft = submit("A", "a@b.com", "   ", "hi").unwrap();
        assert_eq!(draft.subject, "Contact from Portfolio");
    }

    #[test]
    fn test_body_format() {
        let draft = submit("A", "b@c.com", "Job", "Hello").unwrap();
        assert_eq!(draft.subject, "Job");
        assert!(draft.body.contains("Name: A"));
        assert!(draft.body.contains("Email: b@c.com"));
        assert!(draft.body.contains("Hello"));
        assert_eq!(draft.body, "Name: A\nEmail: b@c.com\n\nMessage:\nHello");
    }

    #[test]
    fn test_mailto_encoding() {
        let draft = submit("Zoë", "z@x.io", "Hi & bye?", "50% done").unwrap();
        assert_eq!(
            draft.mailto_url("me@site.dev"),
            "mailto:me@site.dev?subject=Hi%20%26%20bye%3F&body=Name%3A%20Zo%C3%AB%0AEmail%3A%20z%40x.io%0A%0AMessage%3A%0A50%25%20done"
        );
    }

    #[test]
    fn test_send_opens_launcher_only_when_valid() {
        let launcher = RecordingLauncher::default();
        assert!(send(&launcher, "me@site.dev", "", "a@b.com", "", "hi").is_err());
        assert!(launcher.opened.borrow().is_empty());

        send(&launcher, "me@site.dev", "A", "a@b.com", "", "hi").unwrap();
        let opened = launcher.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert!(opened[0].starts_with("mailto:me@site.dev?subject=Contact%20from%20Portfolio&body="));
    }

    #[test]
    fn test_component_safe_set() {
        assert_eq!(encode_component("it's (fine)!*~"), "it's%20(fine)!*~");
        assert_eq!(encode_component("a+b=c/d#e"), "a%2Bb%3Dc%2Fd%23e");
    }

    #[test]
    fn test_link_helpers() {
        assert_eq!(mailto("a@b.com"), "mailto:a@b.com");
        assert_eq!(tel("+977-9843548792"), "tel:+9779843548792");
    }
}
