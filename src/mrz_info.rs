use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use crate::models::MrzValidationResult;
use crate::processing::LineParser;
use crate::utils::MrzError;
use crate::validation::MrzValidator;

/// Identity information parsed from the MRZ of a TD3 travel document.
///
/// Check `acceptable` to see whether the text passed the check digit
/// and content sanity checks. Name fields carry no check digits, so
/// they are best-effort even on acceptable documents; the document
/// number is guaranteed non-empty when `acceptable` is true.
///
/// The value is fully computed at construction and immutable
/// afterwards, so it can be shared freely across threads.
#[derive(Debug, Clone, Serialize)]
pub struct MrzInfo {
    /// Document number with filler characters removed.
    pub document_number: String,
    /// Three-character nationality code, filler preserved.
    pub nationality: String,
    /// Date of birth as printed, YYMMDD.
    pub date_of_birth: String,
    /// Sex marker, a single character.
    pub sex: String,
    /// Expiration date as printed, YYMMDD.
    pub expiration_date: String,
    /// Personal number as printed, filler preserved.
    pub personal_number: String,
    /// True when all check digit and content checks passed.
    pub acceptable: bool,
    /// Per-check detail behind `acceptable`.
    pub validation: MrzValidationResult,
    first_names: Vec<String>,
    last_names: Vec<String>,
}

impl MrzInfo {
    /// Parse an MRZ text string scanned from a travel document.
    ///
    /// Input that cannot be tokenized into two 44-character lines
    /// yields a value with every field empty and `acceptable` false;
    /// this constructor never fails.
    pub fn new(input: &str) -> Self {
        match Self::parse(input) {
            Ok(info) => info,
            Err(err) => {
                debug!("MRZ rejected: {}", err);
                Self::malformed(err)
            }
        }
    }

    /// All name components, surnames first, in order of appearance.
    pub fn names(&self) -> Vec<String> {
        let mut names = self.last_names.clone();
        names.extend(self.first_names.iter().cloned());
        names
    }

    /// Given names joined by single spaces.
    pub fn first_name(&self) -> String {
        self.first_names.join(" ")
    }

    /// Surname components joined by single spaces.
    pub fn last_name(&self) -> String {
        self.last_names.join(" ")
    }

    /// Date of birth as a calendar date, when the field holds a
    /// well-formed YYMMDD value. Purely a convenience: it has no
    /// bearing on `acceptable`.
    pub fn date_of_birth_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date_of_birth, "%y%m%d").ok()
    }

    /// Expiration date as a calendar date, when well-formed.
    pub fn expiration_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.expiration_date, "%y%m%d").ok()
    }

    fn parse(input: &str) -> Result<Self, MrzError> {
        let (first_line, second_line) = LineParser::split_lines(input)?;
        let person = LineParser::parse(&first_line, &second_line)?;
        let validation = MrzValidator::validate(&second_line, &person);

        Ok(MrzInfo {
            document_number: person.document_number,
            nationality: person.nationality,
            date_of_birth: person.date_of_birth,
            sex: person.sex,
            expiration_date: person.expiration_date,
            personal_number: person.personal_number,
            acceptable: validation.is_valid,
            validation,
            first_names: person.first_names,
            last_names: person.last_names,
        })
    }

    fn malformed(err: MrzError) -> Self {
        MrzInfo {
            document_number: String::new(),
            nationality: String::new(),
            date_of_birth: String::new(),
            sex: String::new(),
            expiration_date: String::new(),
            personal_number: String::new(),
            acceptable: false,
            validation: MrzValidationResult::structural_failure(err.to_string()),
            first_names: Vec::new(),
            last_names: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Specimen MRZ pairs for genuine TD3 documents with consistent
    // check digits.
    const TD3_SPECIMENS: [&str; 11] = [
        "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
         L898902C<3UTO6908061F9406236ZE184226B<<<<<14",
        "P<NLDMEULENDIJK<<LOES<ALBERTINE<<<<<<<<<<<<<\n\
         XX00000000NLD7110195F1108280123456782<<<<<02",
        "P<NLDMEULENDIJK<<LOES<ALBERTINE<<<<<<<<<<<<<\n\
         XX00000000NLD7110195F1108280123456782<<<<<02",
        "P<NLDVAN<NIEUWENHUIZEN<<GERARD<ROBBERT<MARTI\n\
         XN01BC0150NLD7112247M1108268123456782<<<<<02",
        "P<D<<MUSTERMANN<<ERIKA<<<<<<<<<<<<<<<<<<<<<<\n\
         C11T002JM4D<<9608122F1310317<<<<<<<<<<<<<<<6",
        "P<D<<MUSTERMAN<<CHRISTIAN<<<<<<<<<<<<<<<<<<<\n\
         0000000000D<<8601067M1111156<<<<<<<<<<<<<<<6",
        "P<CZESPECIMEN<<VZOR<<<<<<<<<<<<<<<<<<<<<<<<<\n\
         99009054<4CZE6906229F16072996956220612<<<<74",
        "P<USATRAVELER<<HAPPY<<<<<<<<<<<<<<<<<<<<<<<<\n\
         1500000035USA5609165M0811150<<<<<<<<<<<<<<08",
        "P<USAAMOSS<<FRANK<<<<<<<<<<<<<<<<<<<<<<<<<<<\n\
         0000780043USA5001013M1511169100000000<381564",
        "P<ARGFERNANDEZ<<LORENA<<<<<<<<<<<<<<<<<<<<<<\n\
         00000000A0ARG7903122F081210212300004<<<<<<86",
        "P<CHNCHUNG<<KWOK<SUM<<<<<<<<<<<<<<<<<<<<<<<<\n\
         K123455994CHN8008080F1702057HK8888888<<<<<36",
    ];

    const ANNA_ERIKSSON: &str = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                                 L898902C<3UTO6908061F9406236ZE184226B<<<<<14";

    #[test]
    fn accepts_every_specimen_document() {
        for input in TD3_SPECIMENS {
            let info = MrzInfo::new(input);
            assert!(info.acceptable, "MRZ was not acceptable: {}", input);
        }
    }

    #[test]
    fn parses_all_fields_of_a_valid_document() {
        let info = MrzInfo::new(ANNA_ERIKSSON);
        assert!(info.acceptable);
        assert_eq!(info.last_name(), "ERIKSSON");
        assert_eq!(info.first_name(), "ANNA MARIA");
        assert_eq!(info.names(), vec!["ERIKSSON", "ANNA", "MARIA"]);
        assert_eq!(info.document_number, "L898902C");
        assert_eq!(info.nationality, "UTO");
        assert_eq!(info.date_of_birth, "690806");
        assert_eq!(info.sex, "F");
        assert_eq!(info.expiration_date, "940623");
        assert_eq!(info.personal_number, "ZE184226B<<<<<");
    }

    #[test]
    fn rejects_digits_in_nationality_and_surname() {
        let input = "P<UT0ERIKS5ON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                     L898902C<3UTO6908061F9406236ZE184226B<<<<<14";
        let info = MrzInfo::new(input);
        assert!(!info.acceptable);
        assert!(!info.validation.names_check_valid);
    }

    #[test]
    fn rejects_truncated_first_line_with_empty_fields() {
        let input = "P<UTOERIKSSON<<ANNA<MARIA<\n\
                     L898902C<3UTO6908061F9406236ZE184226B<<<<<14";
        let info = MrzInfo::new(input);
        assert!(!info.acceptable);
        assert_eq!(info.document_number, "");
        assert_eq!(info.nationality, "");
        assert_eq!(info.date_of_birth, "");
        assert!(info.names().is_empty());
    }

    #[test]
    fn rejects_mutated_document_check_digit_but_keeps_fields() {
        // Document check digit changed from 3 to 1.
        let input = "P<UTOERIKSSON<<ANNA<MARIA<<<<<<<<<<<<<<<<<<<\n\
                     L898902C<1UTO6908061F9406236ZE184226B<<<<<14";
        let info = MrzInfo::new(input);
        assert!(!info.acceptable);
        // Best-effort fields survive a checksum failure.
        assert_eq!(info.document_number, "L898902C");
        assert_eq!(info.last_name(), "ERIKSSON");
    }

    #[test]
    fn rejects_input_without_a_line_break() {
        let info = MrzInfo::new("L898902C<3UTO6908061F9406236ZE184226B<<<<<14");
        assert!(!info.acceptable);
        assert_eq!(info.document_number, "");
    }

    #[test]
    fn rejects_name_field_without_surname_separator() {
        let input = "P<UTOERIKSSON<ANNA<MARIA<X<X<X<X<X<X<X<X<X<X\n\
                     L898902C<3UTO6908061F9406236ZE184226B<<<<<14";
        let info = MrzInfo::new(input);
        assert!(!info.acceptable);
        assert!(info.names().is_empty());
        assert_eq!(info.document_number, "");
    }

    #[test]
    fn exposes_dates_as_calendar_dates() {
        let info = MrzInfo::new(ANNA_ERIKSSON);
        assert_eq!(
            info.date_of_birth_parsed(),
            NaiveDate::from_ymd_opt(1969, 8, 6)
        );
        assert_eq!(
            info.expiration_date_parsed(),
            NaiveDate::from_ymd_opt(1994, 6, 23)
        );

        let malformed = MrzInfo::new("no mrz here");
        assert_eq!(malformed.date_of_birth_parsed(), None);
    }

    #[test]
    fn serializes_the_validation_report() {
        let info = MrzInfo::new(ANNA_ERIKSSON);
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["acceptable"], true);
        assert_eq!(json["document_number"], "L898902C");
        assert_eq!(json["validation"]["composite_check_valid"], true);
    }
}
