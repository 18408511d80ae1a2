//! Custom validation functions for configuration.

use validator::ValidationError;

/// Validate that every entry in a namespace list is a usable identifier:
/// non-empty, printable, no surrounding or embedded whitespace.
pub fn validate_namespace_list(namespaces: &[String]) -> Result<(), ValidationError> {
    let re = regex::Regex::new(r"^\S+$").map_err(|_| ValidationError::new("invalid_regex"))?;

    if namespaces.iter().all(|ns| re.is_match(ns)) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_namespace"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_and_dotted_names() {
        let names = vec!["engine".to_string(), "engine.io".to_string()];
        assert!(validate_namespace_list(&names).is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace_names() {
        assert!(validate_namespace_list(&[String::new()]).is_err());
        assert!(validate_namespace_list(&["two words".to_string()]).is_err());
    }
}
