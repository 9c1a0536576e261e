//! Search bar, newsletter and contact form handlers.

use serde::{Deserialize, Serialize};

use gaming_odyssey_core::Email;

use super::ValidationError;

/// Result of a search submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub query: String,
    pub notice: String,
    /// The search input should be emptied.
    pub clear_input: bool,
}

/// Validate a search query.
///
/// # Errors
///
/// Returns [`ValidationError::EmptySearch`] for a blank query.
pub fn search(raw: &str) -> Result<SearchOutcome, ValidationError> {
    let query = raw.trim();
    tracing::info!(query, "Search performed");

    if query.is_empty() {
        return Err(ValidationError::EmptySearch);
    }

    Ok(SearchOutcome {
        query: query.to_owned(),
        notice: format!("Searching for \"{query}\"... Results will appear on the Products page!"),
        clear_input: true,
    })
}

/// Result of a newsletter signup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsletterOutcome {
    pub email: Email,
    pub notice: String,
    /// The email input should be emptied.
    pub clear_input: bool,
}

/// Validate a newsletter signup email.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyEmail`] for a blank address and
/// [`ValidationError::InvalidEmail`] when the address is malformed.
pub fn newsletter_signup(raw: &str) -> Result<NewsletterOutcome, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }

    let email = Email::parse(trimmed).map_err(|_| ValidationError::InvalidEmail)?;
    tracing::info!(email = email.as_str(), "Newsletter signup");

    Ok(NewsletterOutcome {
        notice: format!(
            "Thank you for subscribing! We've sent a confirmation email to {email}"
        ),
        email,
        clear_input: true,
    })
}

/// Contact form fields as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A contact form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Email,
    pub message: String,
}

/// Validate a contact form.
///
/// All three fields must be non-blank. The email is checked as submitted,
/// so surrounding whitespace makes it invalid.
///
/// # Errors
///
/// Returns [`ValidationError::MissingContactFields`] if any field is blank
/// and [`ValidationError::InvalidEmail`] if the email is malformed.
pub fn validate_contact_form(form: &ContactForm) -> Result<ContactSubmission, ValidationError> {
    let name = form.name.trim();
    let message = form.message.trim();

    if name.is_empty() || form.email.trim().is_empty() || message.is_empty() {
        return Err(ValidationError::MissingContactFields);
    }

    let email = Email::parse(&form.email).map_err(|_| ValidationError::InvalidEmail)?;
    tracing::info!(name, email = email.as_str(), "Contact form validated");

    Ok(ContactSubmission {
        name: name.to_owned(),
        email,
        message: message.to_owned(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_search_trims_query() {
        let outcome = search("  zelda  ").unwrap();
        assert_eq!(outcome.query, "zelda");
        assert_eq!(
            outcome.notice,
            "Searching for \"zelda\"... Results will appear on the Products page!"
        );
        assert!(outcome.clear_input);
    }

    #[test]
    fn test_search_rejects_blank() {
        assert_eq!(search(""), Err(ValidationError::EmptySearch));
        assert_eq!(search("   "), Err(ValidationError::EmptySearch));
        assert_eq!(
            ValidationError::EmptySearch.to_string(),
            "Please enter a search term!"
        );
    }

    #[test]
    fn test_newsletter_valid() {
        let outcome = newsletter_signup(" player1@example.com ").unwrap();
        assert_eq!(outcome.email.as_str(), "player1@example.com");
        assert!(outcome.notice.ends_with("player1@example.com"));
    }

    #[test]
    fn test_newsletter_accepts_long_address() {
        let long = format!("{}@example.com", "a".repeat(250));
        let outcome = newsletter_signup(&long).unwrap();
        assert_eq!(outcome.email.as_str(), long);
    }

    #[test]
    fn test_newsletter_empty() {
        assert_eq!(newsletter_signup(""), Err(ValidationError::EmptyEmail));
        assert_eq!(newsletter_signup("  "), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn test_newsletter_invalid() {
        for bad in ["player", "player@", "player@host", "pla yer@example.com"] {
            assert_eq!(
                newsletter_signup(bad),
                Err(ValidationError::InvalidEmail),
                "{bad}"
            );
        }
    }

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_contact_valid() {
        let submission =
            validate_contact_form(&form(" Sam ", "sam@example.com", " Where is my order? "))
                .unwrap();
        assert_eq!(submission.name, "Sam");
        assert_eq!(submission.message, "Where is my order?");
    }

    #[test]
    fn test_contact_missing_fields() {
        assert_eq!(
            validate_contact_form(&form("", "sam@example.com", "hi")),
            Err(ValidationError::MissingContactFields)
        );
        assert_eq!(
            validate_contact_form(&form("Sam", "  ", "hi")),
            Err(ValidationError::MissingContactFields)
        );
        assert_eq!(
            validate_contact_form(&form("Sam", "sam@example.com", "\n")),
            Err(ValidationError::MissingContactFields)
        );
    }

    #[test]
    fn test_contact_invalid_email() {
        assert_eq!(
            validate_contact_form(&form("Sam", "sam@example", "hi")),
            Err(ValidationError::InvalidEmail)
        );
        assert_eq!(
            validate_contact_form(&form("Sam", " sam@example.com", "hi")),
            Err(ValidationError::InvalidEmail)
        );
    }
}
