use crate::checksum::{IsbnVersion, Validator};
use crate::normalization::strip_isbn;

/// ISBN-10 weighted checksum: position `i` (0-indexed) carries weight `i + 1`,
/// the trailing `X` check symbol counts as 10, and the total must be a
/// multiple of 11.
pub struct Isbn10Checksum;

impl Validator for Isbn10Checksum {
    fn is_valid(&self, input: &str) -> bool {
        let normalized = strip_isbn(input, IsbnVersion::Ten);
        if normalized.len() != 10 {
            return false;
        }

        let mut sum: u32 = 0;
        for (i, c) in normalized.chars().enumerate() {
            let weight = i as u32 + 1;
            if i == 9 && c == 'X' {
                sum += weight * 10;
                continue;
            }
            match c.to_digit(10) {
                Some(digit) => sum += weight * digit,
                None => return false,
            }
        }

        sum % 11 == 0
    }
}
