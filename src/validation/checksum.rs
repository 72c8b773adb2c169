use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    // ICAO Doc 9303 character weights: digits map to their value, the
    // filler to zero, letters A-Z to 10-35.
    static ref CHARACTER_WEIGHTS: HashMap<char, u32> = {
        let mut weights = HashMap::new();
        for digit in '0'..='9' {
            weights.insert(digit, digit as u32 - '0' as u32);
        }
        weights.insert('<', 0);
        for letter in 'A'..='Z' {
            weights.insert(letter, letter as u32 - 'A' as u32 + 10);
        }
        weights
    };
}

// Positional weights, applied cyclically.
const WEIGHT_CYCLE: [u32; 3] = [7, 3, 1];

/// Weight of a single MRZ character, or `None` for characters outside
/// the MRZ repertoire.
pub fn char_weight(c: char) -> Option<u32> {
    CHARACTER_WEIGHTS.get(&c).copied()
}

/// Compute the ICAO check digit over `text`.
///
/// Characters without a weight are skipped entirely, shifting the
/// cycle position of everything after them. Well-formed MRZ input
/// only contains weighted characters, so the skip never fires for it.
pub fn check_digit(text: &str) -> char {
    let sum: u32 = text
        .chars()
        .filter_map(char_weight)
        .enumerate()
        .map(|(position, weight)| weight * WEIGHT_CYCLE[position % WEIGHT_CYCLE.len()])
        .sum();

    char::from_digit(sum % 10, 10).unwrap_or('0')
}

/// Validate a chunk of field data followed by its trailing check
/// digit. Chunks shorter than two characters cannot carry both data
/// and a check digit and are always invalid.
pub fn is_valid_chunk(chunk: &str) -> bool {
    let Some((last_index, given_check_digit)) = chunk.char_indices().last() else {
        return false;
    };
    if chunk.chars().count() < 2 {
        return false;
    }

    check_digit(&chunk[..last_index]) == given_check_digit
}
