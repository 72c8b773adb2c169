use log::debug;

use crate::models::{PersonIdentity, FILLER, TD3_LINE_COUNT, TD3_LINE_LENGTH};
use crate::processing::fields;
use crate::utils::MrzError;

/// Splits raw MRZ text into its two lines and pulls the named TD3
/// fields out of them.
pub struct LineParser;

impl LineParser {
    /// Tokenize raw input into the two 44-character MRZ lines.
    ///
    /// Blank lines are ignored; with more than two lines of text the
    /// first and last are taken. Each selected line must be exactly 44
    /// characters.
    pub fn split_lines(input: &str) -> Result<(String, String), MrzError> {
        if !input.contains('\n') {
            return Err(MrzError::MissingLineBreak);
        }

        let lines: Vec<&str> = input.split('\n').filter(|line| !line.is_empty()).collect();
        if lines.len() < TD3_LINE_COUNT {
            return Err(MrzError::MissingSecondLine(lines.len()));
        }

        let first_line = lines[0];
        let second_line = lines[lines.len() - 1];
        for (index, line) in [(1, first_line), (2, second_line)] {
            let length = line.chars().count();
            if length != TD3_LINE_LENGTH {
                return Err(MrzError::InvalidLineLength {
                    index,
                    length,
                    expected: TD3_LINE_LENGTH,
                });
            }
        }

        Ok((first_line.to_string(), second_line.to_string()))
    }

    /// Parse both pre-validated lines into a `PersonIdentity`.
    pub(crate) fn parse(
        first_line: &str,
        second_line: &str,
    ) -> Result<PersonIdentity, MrzError> {
        let mut person = PersonIdentity::default();

        let (first_names, last_names) = Self::parse_names(first_line)?;
        person.first_names = first_names;
        person.last_names = last_names;

        person.document_number = Self::document_number(second_line);
        person.nationality = fields::extract_range(second_line, fields::NATIONALITY);
        person.date_of_birth = fields::extract_range(second_line, fields::DATE_OF_BIRTH);
        person.sex = fields::extract_range(second_line, fields::SEX);
        person.expiration_date = fields::extract_range(second_line, fields::EXPIRATION_DATE);
        person.personal_number = fields::extract_range(second_line, fields::PERSONAL_NUMBER);

        debug!(
            "parsed MRZ fields: document number '{}', nationality '{}'",
            person.document_number, person.nationality
        );
        Ok(person)
    }

    /// Split the name field into given-name and surname components.
    ///
    /// The surname block comes before the `<<` separator, the
    /// given-name block after it. Within a block, components are
    /// separated by single fillers; empty components are dropped.
    pub(crate) fn parse_names(
        first_line: &str,
    ) -> Result<(Vec<String>, Vec<String>), MrzError> {
        let name_field = fields::extract_range(first_line, fields::NAMES);
        let blocks: Vec<&str> = name_field.split("<<").collect();
        if blocks.len() < 2 {
            return Err(MrzError::MissingNameSeparator);
        }

        let last_names = Self::name_components(blocks[0]);
        let first_names = Self::name_components(blocks[1]);
        Ok((first_names, last_names))
    }

    fn document_number(second_line: &str) -> String {
        fields::extract_range(second_line, fields::DOCUMENT_NUMBER)
            .chars()
            .filter(|&c| c != FILLER)
            .collect()
    }

    fn name_components(block: &str) -> Vec<String> {
        block
            .split(FILLER)
            .filter(|component| !component.is_empty())
            .map(String::from)
            .collect()
    }
}
