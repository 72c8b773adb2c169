use thiserror::Error;

/// Structural failures raised while tokenizing MRZ text into its two
/// 44-character lines. Checksum and content problems are not errors:
/// they surface as an unacceptable validation verdict instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MrzError {
    #[error("input does not contain a line break between the two MRZ lines")]
    MissingLineBreak,

    #[error("expected two MRZ lines, found {0}")]
    MissingSecondLine(usize),

    #[error("MRZ line {index} is {length} characters long, expected {expected}")]
    InvalidLineLength {
        index: usize,
        length: usize,
        expected: usize,
    },

    #[error("name field does not contain the '<<' surname separator")]
    MissingNameSeparator,
}
