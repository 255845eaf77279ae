use crate::checksum::{IsbnVersion, Validator};
use crate::normalization::strip_isbn;

/// ISBN-13 checksum: weights alternate 1 and 3 across the first 12 digits,
/// and the 13th digit must equal `(10 - (sum % 10)) % 10`.
pub struct Isbn13Checksum;

impl Validator for Isbn13Checksum {
    fn is_valid(&self, input: &str) -> bool {
        let normalized = strip_isbn(input, IsbnVersion::Thirteen);
        if normalized.len() != 13 {
            return false;
        }

        let mut sum: u32 = 0;
        let mut check_digit = 0;
        for (i, c) in normalized.chars().enumerate() {
            let digit = match c.to_digit(10) {
                Some(digit) => digit,
                None => return false,
            };
            if i == 12 {
                check_digit = digit;
            } else if i % 2 == 0 {
                sum += digit;
            } else {
                sum += digit * 3;
            }
        }

        check_digit == (10 - sum % 10) % 10
    }
}

#[cfg(test)]
mod test {
    use crate::checksum::*;

    #[test]
    fn validate_isbn13_numbers() {
        let valid_isbns = vec![
            "9783836221191",
            "978-3-8362-2119-1",
            "9780321125217",
            "978 0 321 12521 7",
        ];
        for isbn in valid_isbns {
            assert!(Isbn13Checksum.is_valid(isbn), "{isbn}");
        }
    }

    #[test]
    fn reject_invalid_isbn13_numbers() {
        let invalid_isbns = vec![
            // wrong check digit
            "9783836221190",
            "9783836221192",
            // wrong length
            "978383622119",
            "97838362211910",
            "",
            "foo",
        ];
        for isbn in invalid_isbns {
            assert!(!Isbn13Checksum.is_valid(isbn), "{isbn}");
        }
    }
}
