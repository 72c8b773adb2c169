use serde::Serialize;

// TD3 is the two-line 44-character passport format. All offsets in
// this crate assume these dimensions.
pub const TD3_LINE_COUNT: usize = 2;
pub const TD3_LINE_LENGTH: usize = 44;

/// Filler character used as padding in MRZ fields.
pub const FILLER: char = '<';

/// Identity fields collected while parsing the two MRZ lines.
///
/// This is a parse-local builder: it is populated field by field by the
/// line parser and then frozen into the public `MrzInfo`. It is never
/// handed out in mutable form.
#[derive(Debug, Clone, Default)]
pub(crate) struct PersonIdentity {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub document_number: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub sex: String,
    pub expiration_date: String,
    pub personal_number: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationIssue {
    pub issue_type: ValidationIssueType,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ValidationIssueType {
    Structure,
    Checksum,
    Content,
}

/// Outcome of the MRZ check digit and content validation.
///
/// `is_valid` is the conjunction of the six individual checks; the
/// per-check flags and `issues` only add reporting granularity.
#[derive(Debug, Clone, Serialize)]
pub struct MrzValidationResult {
    pub is_valid: bool,
    pub document_number_check_valid: bool,
    pub date_of_birth_check_valid: bool,
    pub date_of_expiry_check_valid: bool,
    pub personal_number_check_valid: bool,
    pub composite_check_valid: bool,
    pub names_check_valid: bool,
    pub issues: Vec<ValidationIssue>,
}

impl MrzValidationResult {
    /// Result for input that could not be split into two 44-character
    /// lines. No check ran, so every flag is false.
    pub fn structural_failure(message: String) -> Self {
        MrzValidationResult {
            is_valid: false,
            document_number_check_valid: false,
            date_of_birth_check_valid: false,
            date_of_expiry_check_valid: false,
            personal_number_check_valid: false,
            composite_check_valid: false,
            names_check_valid: false,
            issues: vec![ValidationIssue {
                issue_type: ValidationIssueType::Structure,
                message,
            }],
        }
    }
}
