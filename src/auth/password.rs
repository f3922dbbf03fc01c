/**
 * Password Hashing and Credential Validation
 *
 * This module handles bcrypt password hashing plus the field-level
 * validation applied during registration: password policy and basic email
 * syntax checks.
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at `DEFAULT_COST`; the salt is
 *   embedded in the resulting hash string
 * - Hashing and verification are CPU-bound; handlers run them on a
 *   blocking worker thread
 * - Validation failures are reported per field so clients can show exact
 *   problems
 */

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::FieldError;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum plausible email length ("a@b.c")
const MIN_EMAIL_LEN: usize = 5;

/// Hash a password using bcrypt
///
/// Each call generates a fresh salt, so hashing the same password twice
/// produces different strings.
///
/// # Arguments
/// * `password` - The plaintext password to hash
///
/// # Returns
/// The bcrypt hash string, or an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, DEFAULT_COST)
}

/// Verify a password against a stored bcrypt hash
///
/// # Arguments
/// * `password` - The plaintext password to verify
/// * `password_hash` - The stored bcrypt hash
///
/// # Returns
/// `Ok(true)` if the password matches, `Ok(false)` if it does not,
/// or an error if the hash string is malformed
pub fn verify_password(password: &str, password_hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, password_hash)
}

/// Validate and normalize an email address
///
/// Normalization is trim plus ASCII lowercasing; the normalized form is
/// what gets stored and looked up, so the same address always hits the
/// same row.
///
/// Checks applied:
/// - minimum plausible length
/// - exactly one `@` with a non-empty local part
/// - domain containing a dot
///
/// # Returns
/// The normalized email, or a `FieldError` describing the problem
pub fn validate_email(email: &str) -> Result<String, FieldError> {
    let email = email.trim().to_lowercase();

    if email.len() < MIN_EMAIL_LEN {
        return Err(FieldError::new("email", "Email is too short"));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(FieldError::new("email", "Invalid email format"));
    }

    let (local, domain) = (parts[0], parts[1]);

    if local.is_empty() {
        return Err(FieldError::new("email", "Email local part cannot be empty"));
    }

    if !domain.contains('.') {
        return Err(FieldError::new("email", "Email domain must contain a dot"));
    }

    Ok(email)
}

/// Validate a registration password against the policy
///
/// Requirements:
/// - At least 6 characters
/// - At least one ASCII uppercase letter
/// - At least one ASCII digit
/// - Must equal the repeated password
///
/// # Returns
/// All policy violations found; an empty list means the password is
/// acceptable
pub fn validate_password(password: &str, re_password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            "Password must be at least 6 characters long",
        ));
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push(FieldError::new(
            "password",
            "Password must contain at least one uppercase letter",
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(FieldError::new(
            "password",
            "Password must contain at least one number",
        ));
    }

    if password != re_password {
        errors.push(FieldError::new("re_password", "Passwords do not match"));
    }

    errors
}
