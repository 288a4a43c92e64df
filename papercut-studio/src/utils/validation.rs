//! Input validation helpers.

use crate::errors::ValidationError;

/// Normalizes a raw prompt: trims surrounding whitespace and rejects the
/// result if nothing remains.
///
/// # Errors
///
/// Returns [`ValidationError`] for an empty (after trimming) prompt. No
/// network call may be made on that path.
pub fn normalize_prompt(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty_prompt());
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(normalize_prompt("  red dragon  ").unwrap(), "red dragon");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(normalize_prompt("").is_err());
        assert!(normalize_prompt("   \t\n").is_err());
    }

    #[test]
    fn test_keeps_inner_whitespace() {
        assert_eq!(
            normalize_prompt("red  dragon kite").unwrap(),
            "red  dragon kite"
        );
    }
}
