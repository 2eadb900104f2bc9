use crate::errors::AppError;

/// Splits a comma-separated requirements string into trimmed, lower-cased terms.
///
/// Order and duplicates are kept, and so are empty entries between commas:
/// `N` comma-separated entries always produce `N` terms.
pub fn normalize_requirements(raw: &str) -> Result<Vec<String>, AppError> {
    if raw.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Requirements must not be empty".to_string(),
        ));
    }

    Ok(raw.split(',').map(|req| req.trim().to_lowercase()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases_in_order() {
        let reqs = normalize_requirements("  React, JavaScript ,CSS,  API Integration ").unwrap();
        assert_eq!(reqs, vec!["react", "javascript", "css", "api integration"]);
    }

    #[test]
    fn test_entry_count_is_preserved() {
        for raw in ["python", "python,sql", "a,b,c,d,e", "rust, rust, rust", "x,,y"] {
            let expected = raw.split(',').count();
            assert_eq!(normalize_requirements(raw).unwrap().len(), expected, "input {raw:?}");
        }
    }

    #[test]
    fn test_duplicates_and_blank_entries_are_kept() {
        let reqs = normalize_requirements("SQL, sql,, Docker").unwrap();
        assert_eq!(reqs, vec!["sql", "sql", "", "docker"]);
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(
            normalize_requirements("   "),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            normalize_requirements(""),
            Err(AppError::InvalidInput(_))
        ));
    }
}
