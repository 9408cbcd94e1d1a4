//! Length validation for user-submitted message content.

/// Outcome of a validation check. `message` is empty when valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: String::new(),
        }
    }

    fn invalid(message: String) -> Self {
        Self {
            is_valid: false,
            message,
        }
    }
}

/// Check the trimmed character count of `content` against the bounds.
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn validate(content: &str, max_length: usize, min_length: usize) -> ValidationResult {
    let length = content.trim().chars().count();

    if length < min_length {
        return ValidationResult::invalid(format!(
            "Content must be at least {min_length} characters"
        ));
    }

    if length > max_length {
        return ValidationResult::invalid(format!(
            "Content must not exceed {max_length} characters"
        ));
    }

    ValidationResult::valid()
}
