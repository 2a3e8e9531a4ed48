//! Input validation for rosters.
//!
//! Checks the records handed over by whatever collected them before they
//! are scheduled. Detects:
//! - Empty names
//! - Duplicate names (case-insensitive)
//! - Weekly caps above the standard maximum

use crate::config::MAX_DAYS_PER_WEEK;
use crate::models::Person;
use std::collections::HashMap;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Registration index of the offending person.
    pub index: usize,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Name is empty or whitespace.
    EmptyName,
    /// Name collides with an earlier person, ignoring case.
    DuplicateName,
    /// Weekly cap exceeds the standard maximum.
    CapOutOfRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Validates people before they are placed on a roster.
///
/// Checks:
/// 1. Every name is non-empty after trimming
/// 2. No two names are equal ignoring case (the later one is reported)
/// 3. Every weekly cap is at most [`MAX_DAYS_PER_WEEK`]
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_persons(persons: &[Person]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for (index, person) in persons.iter().enumerate() {
        let name = person.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyName,
                index,
                format!("Person at position {index} has an empty name"),
            ));
        } else if let Some(&first) = seen.get(&name.to_lowercase()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                index,
                format!("Duplicate name '{name}' (first used at position {first})"),
            ));
        } else {
            seen.insert(name.to_lowercase(), index);
        }

        if person.max_days() > MAX_DAYS_PER_WEEK {
            errors.push(ValidationError::new(
                ValidationErrorKind::CapOutOfRange,
                index,
                format!(
                    "Person '{name}' has a weekly cap of {} days (maximum {MAX_DAYS_PER_WEEK})",
                    person.max_days()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ShiftKind, Weekday};

    fn sample_persons() -> Vec<Person> {
        vec![
            Person::new("Ada").with_preference(Weekday::Monday, ShiftKind::Morning),
            Person::new("Bob").with_max_days(3),
            Person::new("Cy"),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_persons(&sample_persons()).is_ok());
        assert!(validate_persons(&[]).is_ok());
    }

    #[test]
    fn test_empty_name() {
        let persons = vec![Person::new("Ada"), Person::new("  ")];
        let errors = validate_persons(&persons).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyName);
        assert_eq!(errors[0].index, 1);
    }

    #[test]
    fn test_duplicate_name_case_insensitive() {
        let mut persons = sample_persons();
        persons.push(Person::new("ADA"));

        let errors = validate_persons(&persons).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateName);
        assert_eq!(errors[0].index, 3);
        assert!(errors[0].message.contains("position 0"));
    }

    #[test]
    fn test_cap_out_of_range() {
        let person: Person = serde_json::from_str(r#"{"name": "Ada", "max_days": 6}"#).unwrap();
        let errors = validate_persons(&[person]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::CapOutOfRange));
    }

    #[test]
    fn test_multiple_errors() {
        let persons = vec![Person::new(""), Person::new("Bob"), Person::new("bob")];
        let errors = validate_persons(&persons).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
