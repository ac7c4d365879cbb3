//! Short code generation and custom alias validation.

use crate::error::AppError;
use rand::Rng;
use serde_json::json;

/// Alphabet for generated short codes: digits, uppercase, lowercase.
const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Length of auto-generated short codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Maximum length of a user-supplied custom alias.
pub const MAX_ALIAS_LENGTH: usize = 50;

/// Top-level path segments reserved for application routes.
///
/// These never resolve as short codes, even if a record with the same code
/// somehow exists.
pub const RESERVED_CODES: &[&str] = &[
    "api", "pricing", "contact", "help", "status", "privacy", "terms", "security",
];

/// Generates a random candidate short code of the given length.
///
/// Each position is an independent uniform draw from the 62-character
/// alphabet. Candidates are not guaranteed unique; the registry enforces
/// uniqueness at insert time.
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Returns `true` if `code` collides with a reserved application route.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Validates a user-provided custom alias.
///
/// # Rules
///
/// - Length: 1-50 characters
/// - Allowed characters: digits, uppercase and lowercase ASCII letters
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_ALIAS_LENGTH {
        return Err(AppError::bad_request(
            "Custom alias must be 1-50 characters",
            json!({ "provided_length": alias.len() }),
        ));
    }

    if !alias.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::bad_request(
            "Custom alias can only contain letters and digits",
            json!({ "alias": alias }),
        ));
    }

    if is_reserved(alias) {
        return Err(AppError::bad_request(
            "This alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
