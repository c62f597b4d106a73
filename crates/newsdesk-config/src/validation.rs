//! Custom validators used by the configuration schema

use validator::ValidationError;

/// Validate a sort order name
pub fn validate_sort_order(order: &str) -> Result<(), ValidationError> {
    match order {
        "asc" | "desc" => Ok(()),
        _ => Err(ValidationError::new("invalid_sort_order")),
    }
}

/// Validate a tracing level name
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ValidationError::new("invalid_log_level")),
    }
}

/// Validate file path (basic check for valid path characters)
pub fn validate_file_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::new("empty_file_path"));
    }

    // Colon stays allowed for Windows drive letters
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(ValidationError::new("invalid_file_path_characters"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sort_order() {
        assert!(validate_sort_order("asc").is_ok());
        assert!(validate_sort_order("desc").is_ok());
        assert!(validate_sort_order("DESC").is_err());
        assert!(validate_sort_order("").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        for level in ["trace", "debug", "info", "warn", "error"] {
            assert!(validate_log_level(level).is_ok());
        }
        assert!(validate_log_level("verbose").is_err());
    }

    #[test]
    fn test_validate_file_path() {
        assert!(validate_file_path("/etc/newsdesk/vocabularies.yaml").is_ok());
        assert!(validate_file_path("./vocabularies.json").is_ok());
        assert!(validate_file_path("C:\\newsdesk\\vocabularies.yaml").is_ok());

        assert!(validate_file_path("").is_err());
        assert!(validate_file_path("file<name.yaml").is_err());
        assert!(validate_file_path("file?name.yaml").is_err());
    }
}
