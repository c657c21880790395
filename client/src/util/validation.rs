//! Sign-in / sign-up form validation and the password strength meter.
//!
//! Validation runs before any provider call; a form with errors is never
//! submitted. The strength score is a display hint only.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 8;
pub const SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

// Leading-dot and `..` checks are done separately; the regex crate has no lookaround.
static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$").ok()
});

/// One condition of the sign-up password policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Digit,
    Special,
}

impl PasswordRule {
    pub const ALL: [Self; 5] = [Self::MinLength, Self::Uppercase, Self::Lowercase, Self::Digit, Self::Special];

    pub fn is_met(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LEN,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::Special => password.chars().any(|c| SPECIAL_CHARS.contains(&c)),
        }
    }

    pub fn describe(self) -> &'static str {
        match self {
            Self::MinLength => "at least 8 characters",
            Self::Uppercase => "an uppercase letter",
            Self::Lowercase => "a lowercase letter",
            Self::Digit => "a number",
            Self::Special => "a special character (@$!%*?&)",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid email")]
    InvalidEmail,
    #[error("required")]
    Required,
    #[error("password needs {}", describe_rules(.0))]
    WeakPassword(Vec<PasswordRule>),
    #[error("must accept terms")]
    TermsNotAccepted,
}

fn describe_rules(rules: &[PasswordRule]) -> String {
    rules.iter().map(|r| r.describe()).collect::<Vec<_>>().join(", ")
}

/// Per-field validation results for a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub email: Option<ValidationError>,
    pub password: Option<ValidationError>,
    pub terms: Option<ValidationError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none() && self.terms.is_none()
    }
}

/// Validated email + password, ready to hand to the session store.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("email", &self.email).finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Default)]
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

impl SignInInput {
    /// # Errors
    ///
    /// Returns every field error found.
    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let email = validate_email(&self.email);
        let password = validate_sign_in_password(&self.password);
        match (email, password) {
            (Ok(email), Ok(())) => Ok(Credentials { email, password: self.password.clone() }),
            (email, password) => Err(FormErrors { email: email.err(), password: password.err(), terms: None }),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct SignUpInput {
    pub email: String,
    pub password: String,
    pub terms: bool,
}

impl SignUpInput {
    /// # Errors
    ///
    /// Returns every field error found.
    pub fn validate(&self) -> Result<Credentials, FormErrors> {
        let email = validate_email(&self.email);
        let password = validate_sign_up_password(&self.password);
        let terms = validate_terms(self.terms);
        match (email, password, terms) {
            (Ok(email), Ok(()), Ok(())) => Ok(Credentials { email, password: self.password.clone() }),
            (email, password, terms) => {
                Err(FormErrors { email: email.err(), password: password.err(), terms: terms.err() })
            }
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.')
        && !email.contains("..")
        && EMAIL_PATTERN.as_ref().is_some_and(|re| re.is_match(email))
}

/// Returns the trimmed address.
///
/// # Errors
///
/// `ValidationError::InvalidEmail` when the address is malformed.
pub fn validate_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim();
    if is_valid_email(email) { Ok(email.to_owned()) } else { Err(ValidationError::InvalidEmail) }
}

/// # Errors
///
/// `ValidationError::Required` for an empty password.
pub fn validate_sign_in_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() { Err(ValidationError::Required) } else { Ok(()) }
}

/// # Errors
///
/// `WeakPassword` listing every unmet rule; an empty password misses all five.
pub fn validate_sign_up_password(password: &str) -> Result<(), ValidationError> {
    let unmet = unmet_rules(password);
    if unmet.is_empty() { Ok(()) } else { Err(ValidationError::WeakPassword(unmet)) }
}

/// # Errors
///
/// `ValidationError::TermsNotAccepted` unless `accepted`.
pub fn validate_terms(accepted: bool) -> Result<(), ValidationError> {
    if accepted { Ok(()) } else { Err(ValidationError::TermsNotAccepted) }
}

pub fn unmet_rules(password: &str) -> Vec<PasswordRule> {
    PasswordRule::ALL.into_iter().filter(|rule| !rule.is_met(password)).collect()
}

/// Number of satisfied password rules, `0..=5`.
pub fn password_strength(password: &str) -> u8 {
    PasswordRule::ALL
        .into_iter()
        .filter(|rule| rule.is_met(password))
        .fold(0, |score, _| score + 1)
}
