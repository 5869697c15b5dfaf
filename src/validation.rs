use validator::ValidateEmail;

use crate::alias::AliasSet;
use crate::error::AppError;
use crate::ui::Ui;

/// Maximum length for an alias name
const MAX_ALIAS_LENGTH: usize = 30;
/// Maximum length for a Git username
const MAX_USERNAME_LENGTH: usize = 30;
/// Maximum length for a Git email address
const MAX_EMAIL_LENGTH: usize = 100;

/// Prompts until the input passes validation, re-asking on rejection.
///
/// Returns `Ok(None)` when the user dismisses the prompt.
pub fn prompt_until_valid<F>(
    ui: &mut dyn Ui,
    prompt: &str,
    input_validation: F,
) -> Result<Option<String>, AppError>
where
    F: Fn(&str) -> Result<(), AppError>,
{
    loop {
        let Some(input) = ui.prompt_text(prompt, None)? else {
            return Ok(None);
        };
        match input_validation(&input) {
            Ok(()) => break Ok(Some(input)),
            Err(AppError::Validation(message)) => ui.notify_error(&message),
            Err(err) => return Err(err),
        }
    }
}

// Constraints every recorded alias must satisfy; the store re-checks these
// before touching the file.

/// Validates an alias name against the store's constraints
pub fn validate_alias_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        Err(AppError::Validation("alias name cannot be empty".to_string()))
    } else if name.chars().any(char::is_whitespace) {
        Err(AppError::Validation(
            "alias name cannot contain whitespace".to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Validates a Git username against the store's constraints
pub fn validate_user_name(name: &str) -> Result<(), AppError> {
    if name.is_empty() {
        Err(AppError::Validation("username cannot be empty".to_string()))
    } else {
        Ok(())
    }
}

/// Validates a Git email against the store's constraints
pub fn validate_user_email(email: &str) -> Result<(), AppError> {
    if !email.contains('@') {
        Err(AppError::Validation(
            "email must contain an '@'".to_string(),
        ))
    } else {
        Ok(())
    }
}

// Stricter gates applied at the interactive and CLI boundaries.

/// Validates alias name input, additionally rejecting overlong and
/// already-taken names
pub fn validate_alias_name_input(name: &str, existing: &AliasSet) -> Result<(), AppError> {
    validate_alias_name(name)?;
    if name.len() > MAX_ALIAS_LENGTH {
        Err(AppError::Validation(format!(
            "alias name too long, max {MAX_ALIAS_LENGTH} characters"
        )))
    } else if existing.contains_key(name) {
        Err(AppError::Validation("alias already exists".to_string()))
    } else {
        Ok(())
    }
}

/// Validates username input
pub fn validate_user_name_input(name: &str) -> Result<(), AppError> {
    validate_user_name(name)?;
    if name.len() > MAX_USERNAME_LENGTH {
        Err(AppError::Validation(format!(
            "username too long, max {MAX_USERNAME_LENGTH} characters"
        )))
    } else {
        Ok(())
    }
}

/// Validates email input, with a full format check on top of the store rule
pub fn validate_user_email_input(email: &str) -> Result<(), AppError> {
    validate_user_email(email)?;
    if email.len() > MAX_EMAIL_LENGTH {
        Err(AppError::Validation(format!(
            "email too long, max {MAX_EMAIL_LENGTH} characters"
        )))
    } else if !email.validate_email() {
        Err(AppError::Validation("invalid email format".to_string()))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_name_rejects_empty_and_whitespace() {
        assert!(validate_alias_name("").is_err());
        assert!(validate_alias_name("has space").is_err());
        assert!(validate_alias_name("has\ttab").is_err());
        assert!(validate_alias_name("proj1").is_ok());
    }

    #[test]
    fn user_name_rejects_only_empty() {
        assert!(validate_user_name("").is_err());
        assert!(validate_user_name("Alice Smith").is_ok());
    }

    #[test]
    fn user_email_requires_an_at_sign() {
        assert!(validate_user_email("not-an-email").is_err());
        assert!(validate_user_email("a@x.com").is_ok());
    }

    #[test]
    fn alias_input_rejects_duplicates() {
        let mut existing = AliasSet::new();
        existing.insert("proj1".to_string(), "!git status".to_string());

        assert!(validate_alias_name_input("proj1", &existing).is_err());
        assert!(validate_alias_name_input("proj2", &existing).is_ok());
    }

    #[test]
    fn alias_input_rejects_overlong_names() {
        let existing = AliasSet::new();
        let long_name = "a".repeat(MAX_ALIAS_LENGTH + 1);

        assert!(validate_alias_name_input(&long_name, &existing).is_err());
    }

    #[test]
    fn email_input_requires_a_full_address() {
        assert!(validate_user_email_input("broken@").is_err());
        assert!(validate_user_email_input("a@x.com").is_ok());
    }
}
