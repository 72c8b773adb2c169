use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::models::{
    MrzValidationResult, PersonIdentity, ValidationIssue, ValidationIssueType, FILLER,
};
use crate::processing::fields;
use crate::validation::checksum;

lazy_static! {
    static ref DECIMAL_DIGIT: Regex = Regex::new(r"[0-9]").unwrap();
}

/// Validator for the TD3 MRZ check digits according to ICAO Doc 9303.
pub struct MrzValidator;

impl MrzValidator {
    /// Run all six acceptability checks over the second MRZ line and
    /// the parsed identity.
    ///
    /// Every check is computed; none short-circuits. The verdict is
    /// their conjunction, the per-check flags and issue list carry the
    /// failure detail.
    pub(crate) fn validate(second_line: &str, person: &PersonIdentity) -> MrzValidationResult {
        let mut issues = Vec::new();

        // Check digit over the document number
        let document_number_check_valid = checksum::is_valid_chunk(&fields::extract_range(
            second_line,
            fields::DOCUMENT_NUMBER_CHUNK,
        ));
        if !document_number_check_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Checksum,
                message: "Document number check digit does not match".to_string(),
            });
        }

        // Check digit over the date of birth
        let date_of_birth_check_valid = checksum::is_valid_chunk(&fields::extract_range(
            second_line,
            fields::DATE_OF_BIRTH_CHUNK,
        ));
        if !date_of_birth_check_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Checksum,
                message: "Date of birth check digit does not match".to_string(),
            });
        }

        // Check digit over the expiration date
        let date_of_expiry_check_valid = checksum::is_valid_chunk(&fields::extract_range(
            second_line,
            fields::EXPIRATION_DATE_CHUNK,
        ));
        if !date_of_expiry_check_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Checksum,
                message: "Expiration date check digit does not match".to_string(),
            });
        }

        // Check digit over the personal number. The field is optional:
        // a chunk that is all filler carries no data and validates
        // vacuously.
        let personal_number_chunk =
            fields::extract_range(second_line, fields::PERSONAL_NUMBER_CHUNK);
        let personal_number_blank = personal_number_chunk
            .chars()
            .all(|c| c == FILLER)
            || personal_number_chunk.chars().count() < 2;
        let personal_number_check_valid =
            personal_number_blank || checksum::is_valid_chunk(&personal_number_chunk);
        if !personal_number_check_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Checksum,
                message: "Personal number check digit does not match".to_string(),
            });
        }

        // Composite check digit over the concatenation of all
        // check-digit-bearing fields.
        let composite_chunk = [
            fields::extract_range(second_line, fields::DOCUMENT_NUMBER_CHUNK),
            fields::extract_range(second_line, fields::DATE_OF_BIRTH_CHUNK),
            fields::extract_range(second_line, fields::COMPOSITE_DATA),
            fields::extract_range(second_line, fields::COMPOSITE_CHECK_DIGIT),
        ]
        .concat();
        let composite_check_valid = checksum::is_valid_chunk(&composite_chunk);
        if !composite_check_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Checksum,
                message: "Composite check digit does not match".to_string(),
            });
        }

        // Names carry no check digit; the only sanity check is that no
        // decimal digit leaked into them.
        let joined_names: String = person
            .last_names
            .iter()
            .chain(person.first_names.iter())
            .map(String::as_str)
            .collect();
        let names_check_valid = !DECIMAL_DIGIT.is_match(&joined_names);
        if !names_check_valid {
            issues.push(ValidationIssue {
                issue_type: ValidationIssueType::Content,
                message: "Names contain decimal digits".to_string(),
            });
        }

        let is_valid = document_number_check_valid
            && date_of_birth_check_valid
            && date_of_expiry_check_valid
            && personal_number_check_valid
            && composite_check_valid
            && names_check_valid;

        if !is_valid {
            debug!("MRZ validation failed with {} issue(s)", issues.len());
        }

        MrzValidationResult {
            is_valid,
            document_number_check_valid,
            date_of_birth_check_valid,
            date_of_expiry_check_valid,
            personal_number_check_valid,
            composite_check_valid,
            names_check_valid,
            issues,
        }
    }
}
